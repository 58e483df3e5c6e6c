use serde::Serialize;
use tracing::trace;

use super::{Err, MeshErr};
use crate::core::attribute::AttributeType;
use crate::core::mesh::Mesh;

const POSITION_ATTRIBUTE_NAME: &str = "POSITION";

/// Flat decode result, ready for vertex-buffer upload. This is the only data
/// that outlives the decode call; every decoder-side intermediate is dropped
/// before the call returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedMesh {
    /// x,y,z per vertex, in point index order. `len == num_points * 3`.
    pub positions: Vec<f32>,
    /// Triangle point-index triples, in face order with the encoded winding.
    /// `len == num_faces * 3`; every value indexes `positions`.
    pub indices: Vec<u32>,
    /// R,G,B,A per vertex, parallel-indexed with `positions`, when the source
    /// carries a usable color attribute.
    pub colors: Option<Vec<u8>>,
}

impl DecodedMesh {
    #[inline]
    pub fn num_points(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Color channels as 0.0-1.0 floats. The decoded mesh always stores
    /// colors as 0-255 integers; this is the presentation form for callers
    /// feeding normalized vertex colors to a shader.
    pub fn normalized_colors(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().map(|&c| c as f32 / 255.0).collect())
    }
}

/// Materializes the mandatory position attribute as `num_points * 3` floats.
pub(super) fn extract_positions(mesh: &Mesh) -> Result<Vec<f32>, Err> {
    let att = mesh
        .get_attribute_by_type(AttributeType::Position)
        .ok_or(Err::MissingAttribute(POSITION_ATTRIBUTE_NAME))?;

    let positions = match att.values_as_f32() {
        Some(values) if att.get_num_components() == 3 => values,
        _ => {
            return Err(Err::DecodeFailure(MeshErr::PositionLayout {
                num_components: att.get_num_components(),
                component_type: att.get_component_type(),
            }))
        }
    };
    debug_assert_eq!(positions.len(), mesh.num_points() * 3);
    Ok(positions)
}

/// Flattens the decoded faces into `num_faces * 3` point indices, preserving
/// face order and winding.
pub(super) fn extract_indices(mesh: &Mesh) -> Vec<u32> {
    let mut indices = Vec::with_capacity(mesh.num_faces() * 3);
    for face in mesh.get_faces() {
        indices.extend_from_slice(face);
    }
    indices
}

/// Expands the color attribute to `num_points * 4` RGBA bytes. Color is
/// best-effort: a missing attribute or an unsupported layout yields `None`,
/// never an error.
pub(super) fn extract_colors(mesh: &Mesh) -> Option<Vec<u8>> {
    let att = mesh.get_attribute_by_type(AttributeType::Color)?;

    let num_components = att.get_num_components();
    let alpha_in_source = match num_components {
        3 => false,
        4 => true,
        _ => {
            trace!(num_components, "dropping color attribute with unsupported component count");
            return None;
        }
    };

    // non-byte color storage is an unsupported layout as well
    let Some(values) = att.values_as_u8() else {
        trace!(component_type = ?att.get_component_type(), "dropping non-byte color attribute");
        return None;
    };
    debug_assert_eq!(values.len(), mesh.num_points() * num_components);

    let mut colors = vec![0; mesh.num_points() * 4];
    for (rgba, source) in colors
        .chunks_exact_mut(4)
        .zip(values.chunks_exact(num_components))
    {
        rgba[..3].copy_from_slice(&source[..3]);
        rgba[3] = if alpha_in_source { source[3] } else { 255 };
    }
    Some(colors)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribute::{Attribute, ComponentDataType};

    fn mesh_with_attribute(att: Attribute) -> Mesh {
        let mut mesh = Mesh::new(att.len() as u32, vec![[0, 0, 0]]);
        mesh.add_attribute(att);
        mesh
    }

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn positions_come_back_in_point_order() {
        let values = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
        let mesh = mesh_with_attribute(Attribute::new(
            AttributeType::Position,
            ComponentDataType::F32,
            3,
            2,
            f32_bytes(&values),
        ));
        assert_eq!(extract_positions(&mesh).unwrap(), values);
    }

    #[test]
    fn missing_position_is_an_error() {
        let mesh = Mesh::new(1, vec![[0, 0, 0]]);
        let result = extract_positions(&mesh);
        assert!(matches!(result, Err(Err::MissingAttribute("POSITION"))));
    }

    #[test]
    fn two_component_position_is_a_decode_failure() {
        let mesh = mesh_with_attribute(Attribute::new(
            AttributeType::Position,
            ComponentDataType::F32,
            2,
            1,
            f32_bytes(&[1.0, 2.0]),
        ));
        assert!(matches!(
            extract_positions(&mesh),
            Err(Err::DecodeFailure(MeshErr::PositionLayout { .. }))
        ));
    }

    #[test]
    fn rgb_colors_gain_an_opaque_alpha() {
        let mesh = mesh_with_attribute(Attribute::new(
            AttributeType::Color,
            ComponentDataType::U8,
            3,
            2,
            vec![10, 20, 30, 40, 50, 60],
        ));
        assert_eq!(
            extract_colors(&mesh).unwrap(),
            vec![10, 20, 30, 255, 40, 50, 60, 255]
        );
    }

    #[test]
    fn rgba_alpha_passes_through() {
        let mesh = mesh_with_attribute(Attribute::new(
            AttributeType::Color,
            ComponentDataType::U8,
            4,
            1,
            vec![10, 20, 30, 128],
        ));
        assert_eq!(extract_colors(&mesh).unwrap(), vec![10, 20, 30, 128]);
    }

    #[test]
    fn unsupported_color_layouts_yield_none() {
        for num_components in [1, 2, 5] {
            let mesh = mesh_with_attribute(Attribute::new(
                AttributeType::Color,
                ComponentDataType::U8,
                num_components,
                1,
                vec![0; num_components],
            ));
            assert!(extract_colors(&mesh).is_none());
        }

        // float-typed colors are dropped too
        let mesh = mesh_with_attribute(Attribute::new(
            AttributeType::Color,
            ComponentDataType::F32,
            3,
            1,
            f32_bytes(&[0.1, 0.2, 0.3]),
        ));
        assert!(extract_colors(&mesh).is_none());
    }

    #[test]
    fn normalized_colors_map_to_unit_range() {
        let decoded = DecodedMesh {
            positions: vec![0.0; 3],
            indices: vec![0, 0, 0],
            colors: Some(vec![0, 51, 102, 255]),
        };
        let normalized = decoded.normalized_colors().unwrap();
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 51.0 / 255.0);
        assert_eq!(normalized[3], 1.0);
        assert_eq!(decoded.num_points(), 1);
        assert_eq!(decoded.num_faces(), 1);
    }
}
