use tracing::debug;

use crate::core::attribute::ComponentDataType;
use crate::core::bit_coder::ByteReader;
use crate::core::buffer::DecoderBuffer;
use crate::core::mesh::Mesh;
use crate::core::shared::ConfigType;
use crate::shared::header::EncodedGeometryType;

pub mod attribute;
pub mod connectivity;
mod extract;
pub mod header;
pub mod metadata;

pub use extract::DecodedMesh;

/// Decodes a Draco-compressed triangular mesh into flat arrays ready for
/// vertex-buffer upload.
///
/// The buffer is read in four stages, each consuming the validated output of
/// the previous one: the bytes are wrapped in a [DecoderBuffer], the header is
/// checked for the triangular-mesh geometry type, connectivity and attributes
/// are reconstructed into a [Mesh], and finally positions, indices, and
/// (optionally) colors are extracted into the returned [DecodedMesh]. Any
/// failure aborts the remaining stages; every intermediate is dropped before
/// the function returns, on success and on error alike.
pub fn decode(buffer: &[u8], cfg: Config) -> Result<DecodedMesh, Err> {
    let mut reader = DecoderBuffer::new(buffer);

    let header = header::decode_header(&mut reader).map_err(MeshErr::HeaderError)?;
    if header.geometry_type != EncodedGeometryType::TriangularMesh {
        return Err(Err::UnsupportedGeometry(header.geometry_type));
    }
    debug!(
        version_major = header.version_major,
        version_minor = header.version_minor,
        "header decoded"
    );

    let mesh = decode_mesh(&mut reader, &header)?;
    if mesh.num_points() == 0 || mesh.num_faces() == 0 {
        return Err(Err::EmptyMesh);
    }
    debug!(
        num_points = mesh.num_points(),
        num_faces = mesh.num_faces(),
        "mesh reconstructed"
    );

    let positions = extract::extract_positions(&mesh)?;
    let indices = extract::extract_indices(&mesh);
    let colors = if cfg.decode_colors {
        extract::extract_colors(&mesh)
    } else {
        None
    };

    Ok(DecodedMesh {
        positions,
        indices,
        colors,
    })
}

/// Reads only the header and reports the encoded geometry kind. This is the
/// cheap type-probe for callers that dispatch on payload kind before
/// committing to a full decode.
pub fn probe_geometry_type(buffer: &[u8]) -> Result<EncodedGeometryType, Err> {
    let mut reader = DecoderBuffer::new(buffer);
    let header = header::decode_header(&mut reader).map_err(MeshErr::HeaderError)?;
    Ok(header.geometry_type)
}

fn decode_mesh<R>(reader: &mut R, header: &header::Header) -> Result<Mesh, MeshErr>
where
    R: ByteReader,
{
    // Decode metadata
    if header.contains_metadata {
        metadata::decode_metadata(reader).map_err(MeshErr::MetadataError)?;
    }

    // Decode connectivity
    let connectivity = connectivity::decode_connectivity(reader, header.encoding_method)
        .map_err(MeshErr::ConnectivityError)?;

    // Decode attributes
    let attributes = attribute::decode_attributes(reader, connectivity.num_points)
        .map_err(MeshErr::AttributeError)?;

    // Create mesh
    let mut mesh = Mesh::new(connectivity.num_points, connectivity.faces);
    for att in attributes {
        mesh.add_attribute(att);
    }

    Ok(mesh)
}


#[derive(Debug, Clone)]
pub struct Config {
    /// Extract the color attribute when the mesh carries one. Geometry-only
    /// callers can turn this off to skip the RGBA expansion pass.
    pub decode_colors: bool,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            decode_colors: true,
        }
    }
}


/// Failures of the reconstruction stages, wrapped per stage.
#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum MeshErr {
    #[error("Attribute decoding error: {0}")]
    AttributeError(#[from] attribute::Err),
    #[error("Connectivity decoding error: {0}")]
    ConnectivityError(#[from] connectivity::Err),
    #[error("Header decoding error: {0}")]
    HeaderError(#[from] header::Err),
    #[error("Metadata decoding error: {0}")]
    MetadataError(#[from] metadata::Err),
    #[error(
        "Position attribute must carry three float components per point, \
         found {num_components} components of type {component_type:?}"
    )]
    PositionLayout {
        num_components: usize,
        component_type: ComponentDataType,
    },
}

/// Decode failures as seen by callers. Every variant is fatal to the current
/// call and leaves no decoder state behind; color problems are not errors
/// (a mesh without usable color still decodes).
#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Mesh decoding failed: {0}")]
    DecodeFailure(#[from] MeshErr),
    #[error("Decoded mesh has zero points or zero faces")]
    EmptyMesh,
    #[error("Mandatory attribute {0} is missing from the decoded mesh")]
    MissingAttribute(&'static str),
    #[error("Unsupported encoded geometry type: {0:?}")]
    UnsupportedGeometry(EncodedGeometryType),
}
