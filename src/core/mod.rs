pub mod attribute;
pub mod bit_coder;
pub mod buffer;
pub mod mesh;
pub mod shared;
