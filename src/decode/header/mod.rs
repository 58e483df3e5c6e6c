use crate::core::bit_coder::ReaderErr;
use crate::prelude::ByteReader;
use crate::shared::header::{EncodedGeometryType, EncoderMethod};

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Invalid encoding method id: {0}")]
    InvalidEncodingMethod(u8),
    #[error("Invalid geometry type id: {0}")]
    InvalidGeometryType(u8),
    #[error("Not a Draco file")]
    NotADracoFile,
    #[error("Not enough data: {0}")]
    NotEnoughData(#[from] ReaderErr),
    #[error("Unsupported bitstream version: {0}.{1}")]
    UnsupportedVersion(u8, u8),
}

pub(crate) struct Header {
    pub version_major: u8,
    pub version_minor: u8,
    pub geometry_type: EncodedGeometryType,
    pub encoding_method: EncoderMethod,
    pub contains_metadata: bool,
}

pub(crate) const MAGIC: &[u8; 5] = b"DRACO";
pub(crate) const SUPPORTED_VERSION_MAJOR: u8 = 2;

const METADATA_FLAG_MASK: u16 = 32768;

pub(crate) fn decode_header<R>(reader: &mut R) -> Result<Header, Err>
where
    R: ByteReader,
{
    // Read the draco string
    let mut magic = [0; 5];
    reader.read_bytes(&mut magic)?;
    if &magic != MAGIC {
        return Err(Err::NotADracoFile);
    }

    // Read the version
    let version_major = reader.read_u8()?;
    let version_minor = reader.read_u8()?;
    if version_major != SUPPORTED_VERSION_MAJOR {
        return Err(Err::UnsupportedVersion(version_major, version_minor));
    }

    // Read the geometry type
    let id = reader.read_u8()?;
    let geometry_type =
        EncodedGeometryType::from_id(id).ok_or(Err::InvalidGeometryType(id))?;

    // Read the encoding method
    let id = reader.read_u8()?;
    let encoding_method = EncoderMethod::from_id(id).ok_or(Err::InvalidEncodingMethod(id))?;

    let flags = reader.read_u16()?;
    let contains_metadata = flags & METADATA_FLAG_MASK != 0;

    Ok(Header {
        version_major,
        version_minor,
        geometry_type,
        encoding_method,
        contains_metadata,
    })
}
