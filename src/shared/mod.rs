pub mod connectivity;

pub mod header {
    /// Geometry kind recorded in the bitstream header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum EncodedGeometryType {
        PointCloud,
        TriangularMesh,
    }

    impl EncodedGeometryType {
        #[inline]
        pub fn get_id(self) -> u8 {
            match self {
                EncodedGeometryType::PointCloud => 0,
                EncodedGeometryType::TriangularMesh => 1,
            }
        }

        #[inline]
        pub fn from_id(id: u8) -> Option<Self> {
            match id {
                0 => Some(EncodedGeometryType::PointCloud),
                1 => Some(EncodedGeometryType::TriangularMesh),
                _ => None,
            }
        }
    }

    /// Connectivity encoding recorded in the bitstream header. Only the
    /// sequential method is decodable; edgebreaker payloads are recognized
    /// and rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum EncoderMethod {
        Sequential,
        Edgebreaker,
    }

    impl EncoderMethod {
        #[inline]
        pub fn get_id(self) -> u8 {
            match self {
                EncoderMethod::Sequential => 0,
                EncoderMethod::Edgebreaker => 1,
            }
        }

        #[inline]
        pub fn from_id(id: u8) -> Option<Self> {
            match id {
                0 => Some(EncoderMethod::Sequential),
                1 => Some(EncoderMethod::Edgebreaker),
                _ => None,
            }
        }
    }
}
