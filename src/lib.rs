// lib.rs

/// Defines the mesh decoder and the flat [decode::DecodedMesh] result.
pub mod decode;

/// Contains the bitstream definitions shared by the decoding stages.
pub(crate) mod shared;

/// Contains the shared definitions, native objects, and the buffer.
pub mod core;

pub use crate::core::mesh::Mesh;
pub use crate::decode::{decode, probe_geometry_type, DecodedMesh};

/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::attribute::{Attribute, AttributeType, ComponentDataType};
    pub use crate::core::bit_coder::{ByteReader, ByteWriter};
    pub use crate::core::buffer::DecoderBuffer;
    pub use crate::core::mesh::Mesh;
    pub use crate::core::shared::ConfigType;
    pub use crate::decode::{self, decode, DecodedMesh};
    pub use crate::shared::header::{EncodedGeometryType, EncoderMethod};
}
