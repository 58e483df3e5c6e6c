use super::{Connectivity, Err};
use crate::core::bit_coder::ReaderErr;
use crate::core::shared::PointIdx;
use crate::prelude::ByteReader;
use crate::shared::connectivity::sequential::index_width_from_point_count;

pub(super) fn decode_connectivity<R>(reader: &mut R) -> Result<Connectivity, Err>
where
    R: ByteReader,
{
    let num_points = reader.read_u32()?;
    let num_faces = reader.read_u32()?;

    let index_width =
        index_width_from_point_count(num_points as usize).map_err(|_| Err::TooManyPoints)?;

    let mut faces = Vec::new();
    for face in 0..num_faces as usize {
        let mut corners = [0; 3];
        for corner in corners.iter_mut() {
            *corner = read_index(reader, index_width)?;
        }
        // indices must address a decoded point
        for &index in corners.iter() {
            if index >= num_points {
                return Err(Err::IndexOutOfBounds {
                    face,
                    index,
                    num_points,
                });
            }
        }
        faces.push(corners);
    }

    Ok(Connectivity { num_points, faces })
}

fn read_index<R>(reader: &mut R, width: usize) -> Result<PointIdx, ReaderErr>
where
    R: ByteReader,
{
    match width {
        1 => Ok(reader.read_u8()? as PointIdx),
        2 => Ok(reader.read_u16()? as PointIdx),
        _ => reader.read_u32(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::DecoderBuffer;
    use crate::prelude::ByteWriter;

    fn write_connectivity(num_points: u32, faces: &[[u32; 3]]) -> Vec<u8> {
        let mut buffer = Vec::new();
        buffer.write_u32(num_points);
        buffer.write_u32(faces.len() as u32);
        for face in faces {
            for &index in face {
                match index_width_from_point_count(num_points as usize).unwrap() {
                    1 => buffer.write_u8(index as u8),
                    2 => buffer.write_u16(index as u16),
                    _ => buffer.write_u32(index),
                }
            }
        }
        buffer
    }

    #[test]
    fn small_meshes_use_byte_indices() {
        let faces = vec![[0, 1, 2], [0, 2, 3]];
        let buffer = write_connectivity(4, &faces);
        // header (8 bytes) + 6 single-byte indices
        assert_eq!(buffer.len(), 14);
        let connectivity = decode_connectivity(&mut DecoderBuffer::new(&buffer)).unwrap();
        assert_eq!(connectivity.num_points, 4);
        assert_eq!(connectivity.faces, faces);
    }

    #[test]
    fn wide_meshes_use_wider_indices() {
        let faces = vec![[0, 150, 299]];
        let buffer = write_connectivity(300, &faces);
        assert_eq!(buffer.len(), 14);
        let connectivity = decode_connectivity(&mut DecoderBuffer::new(&buffer)).unwrap();
        assert_eq!(connectivity.faces, faces);

        let faces = vec![[0, 0x10000, 0x12345]];
        let buffer = write_connectivity(0x20000, &faces);
        let connectivity = decode_connectivity(&mut DecoderBuffer::new(&buffer)).unwrap();
        assert_eq!(connectivity.faces, faces);
    }

    #[test]
    fn face_order_and_winding_are_preserved() {
        let faces = vec![[2, 1, 0], [3, 2, 0]];
        let buffer = write_connectivity(4, &faces);
        let connectivity = decode_connectivity(&mut DecoderBuffer::new(&buffer)).unwrap();
        assert_eq!(connectivity.faces, faces);
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let buffer = write_connectivity(3, &[[0, 1, 3]]);
        let result = decode_connectivity(&mut DecoderBuffer::new(&buffer));
        assert!(matches!(
            result,
            Err(Err::IndexOutOfBounds {
                face: 0,
                index: 3,
                num_points: 3
            })
        ));
    }

    #[test]
    fn truncated_face_data_fails() {
        let mut buffer = write_connectivity(4, &[[0, 1, 2]]);
        buffer.truncate(buffer.len() - 1);
        let result = decode_connectivity(&mut DecoderBuffer::new(&buffer));
        assert!(matches!(result, Err(Err::NotEnoughData(_))));
    }
}
