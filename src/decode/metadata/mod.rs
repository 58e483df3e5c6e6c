use crate::core::bit_coder::ReaderErr;
use crate::prelude::ByteReader;

#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Not enough data: {0}")]
    NotEnoughData(#[from] ReaderErr),
}

/// Metadata entries carry application key-value pairs with no bearing on the
/// geometry. The block is length-prefixed so it can be skipped without
/// parsing the entries.
pub(crate) fn decode_metadata<R>(reader: &mut R) -> Result<(), Err>
where
    R: ByteReader,
{
    let byte_count = reader.read_u32()? as usize;
    reader.skip(byte_count)?;
    Ok(())
}
