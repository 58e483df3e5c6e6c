/// Index of a point in the decoded mesh. Faces are triples of these.
pub type PointIdx = u32;

/// Index of a face in the decoded mesh.
pub type FaceIdx = usize;

pub trait ConfigType {
    fn default() -> Self;
}
