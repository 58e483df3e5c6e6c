mod sequential;

use crate::core::bit_coder::ReaderErr;
use crate::core::shared::{FaceIdx, PointIdx};
use crate::prelude::ByteReader;
use crate::shared::header::EncoderMethod;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Face {face} references point {index}, but the mesh has {num_points} points")]
    IndexOutOfBounds {
        face: FaceIdx,
        index: PointIdx,
        num_points: u32,
    },
    #[error("Not enough data: {0}")]
    NotEnoughData(#[from] ReaderErr),
    #[error("Mesh declares more points than the sequential encoding can index")]
    TooManyPoints,
    #[error("The {0:?} connectivity encoding is not supported by this decoder")]
    UnsupportedMethod(EncoderMethod),
}

/// Point count plus the decoded triangle faces, in the order and winding they
/// were encoded.
pub(crate) struct Connectivity {
    pub num_points: u32,
    pub faces: Vec<[PointIdx; 3]>,
}

pub(crate) fn decode_connectivity<R>(
    reader: &mut R,
    method: EncoderMethod,
) -> Result<Connectivity, Err>
where
    R: ByteReader,
{
    match method {
        EncoderMethod::Sequential => sequential::decode_connectivity(reader),
        EncoderMethod::Edgebreaker => Err(Err::UnsupportedMethod(method)),
    }
}
