use crate::core::attribute::{Attribute, AttributeType, ComponentDataType};
use crate::core::bit_coder::ReaderErr;
use crate::prelude::ByteReader;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Invalid attribute type id: {0}")]
    InvalidAttributeTypeId(u8),
    #[error("Invalid component data type id: {0}")]
    InvalidDataTypeId(u8),
    #[error("Attribute declares zero components per value")]
    NoComponents,
    #[error("Not enough data: {0}")]
    NotEnoughData(#[from] ReaderErr),
}

pub(crate) fn decode_attributes<R>(reader: &mut R, num_points: u32) -> Result<Vec<Attribute>, Err>
where
    R: ByteReader,
{
    let num_attributes = reader.read_u8()? as usize;
    let mut attributes = Vec::with_capacity(num_attributes);
    for _ in 0..num_attributes {
        attributes.push(decode_attribute(reader, num_points)?);
    }
    Ok(attributes)
}

fn decode_attribute<R>(reader: &mut R, num_points: u32) -> Result<Attribute, Err>
where
    R: ByteReader,
{
    let id = reader.read_u8()?;
    let att_type = AttributeType::from_id(id).ok_or(Err::InvalidAttributeTypeId(id))?;

    let id = reader.read_u8()?;
    let component_type = ComponentDataType::from_id(id).ok_or(Err::InvalidDataTypeId(id))?;

    let num_components = reader.read_u8()? as usize;
    if num_components == 0 {
        return Err(Err::NoComponents);
    }

    // one value per point, components stored contiguously in point order
    let byte_len = num_points as usize * num_components * component_type.size();
    let mut buffer = vec![0; byte_len];
    reader.read_bytes(&mut buffer)?;

    Ok(Attribute::new(
        att_type,
        component_type,
        num_components,
        num_points as usize,
        buffer,
    ))
}
