use serde::Serialize;

/// Semantic kind of a per-point data channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeType {
    Position,
    Normal,
    Color,
    TextureCoordinate,
    Generic,
}

impl AttributeType {
    /// Returns the id of the attribute type.
    #[inline]
    pub fn get_id(self) -> u8 {
        match self {
            AttributeType::Position => 0,
            AttributeType::Normal => 1,
            AttributeType::Color => 2,
            AttributeType::TextureCoordinate => 3,
            AttributeType::Generic => 4,
        }
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(AttributeType::Position),
            1 => Some(AttributeType::Normal),
            2 => Some(AttributeType::Color),
            3 => Some(AttributeType::TextureCoordinate),
            4 => Some(AttributeType::Generic),
            _ => None,
        }
    }
}

/// Scalar type of one attribute component as stored in the bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentDataType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ComponentDataType {
    /// returns the size of the data type in bytes e.g. 4 for F32
    #[inline]
    pub fn size(self) -> usize {
        match self {
            ComponentDataType::I8 => 1,
            ComponentDataType::U8 => 1,
            ComponentDataType::I16 => 2,
            ComponentDataType::U16 => 2,
            ComponentDataType::I32 => 4,
            ComponentDataType::U32 => 4,
            ComponentDataType::I64 => 8,
            ComponentDataType::U64 => 8,
            ComponentDataType::F32 => 4,
            ComponentDataType::F64 => 8,
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, ComponentDataType::F32 | ComponentDataType::F64)
    }

    /// returns unique id for the data type.
    #[inline]
    pub fn get_id(self) -> u8 {
        match self {
            ComponentDataType::I8 => 0,
            ComponentDataType::U8 => 1,
            ComponentDataType::I16 => 2,
            ComponentDataType::U16 => 3,
            ComponentDataType::I32 => 4,
            ComponentDataType::U32 => 5,
            ComponentDataType::I64 => 6,
            ComponentDataType::U64 => 7,
            ComponentDataType::F32 => 8,
            ComponentDataType::F64 => 9,
        }
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(ComponentDataType::I8),
            1 => Some(ComponentDataType::U8),
            2 => Some(ComponentDataType::I16),
            3 => Some(ComponentDataType::U16),
            4 => Some(ComponentDataType::I32),
            5 => Some(ComponentDataType::U32),
            6 => Some(ComponentDataType::I64),
            7 => Some(ComponentDataType::U64),
            8 => Some(ComponentDataType::F32),
            9 => Some(ComponentDataType::F64),
            _ => None,
        }
    }
}

/// Represents an attribute of a decoded mesh: one value per point, each value
/// made of `num_components` scalars of a single [ComponentDataType]. The
/// struct carries no static type information; values live in a raw
/// little-endian buffer and are materialized through the typed accessors.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    att_type: AttributeType,
    component_type: ComponentDataType,
    num_components: usize,
    num_values: usize,
    buffer: Vec<u8>,
}

impl Attribute {
    pub(crate) fn new(
        att_type: AttributeType,
        component_type: ComponentDataType,
        num_components: usize,
        num_values: usize,
        buffer: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            buffer.len(),
            num_values * num_components * component_type.size(),
        );
        Self {
            att_type,
            component_type,
            num_components,
            num_values,
            buffer,
        }
    }

    #[inline]
    pub fn get_attribute_type(&self) -> AttributeType {
        self.att_type
    }

    #[inline]
    pub fn get_component_type(&self) -> ComponentDataType {
        self.component_type
    }

    #[inline]
    pub fn get_num_components(&self) -> usize {
        self.num_components
    }

    /// The number of values of the attribute, one per point.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_values
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_values == 0
    }

    /// Materializes every component of every value as `f32`, in value order.
    /// Returns `None` unless the stored component type is a float type; `F64`
    /// components are narrowed to `f32`.
    pub fn values_as_f32(&self) -> Option<Vec<f32>> {
        match self.component_type {
            ComponentDataType::F32 => Some(
                self.buffer
                    .chunks_exact(4)
                    .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
            ComponentDataType::F64 => Some(
                self.buffer
                    .chunks_exact(8)
                    .map(|b| {
                        f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f32
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Materializes every component of every value as `u8`, in value order.
    /// Returns `None` unless the components are stored as `U8`.
    pub fn values_as_u8(&self) -> Option<Vec<u8>> {
        match self.component_type {
            ComponentDataType::U8 => Some(self.buffer.clone()),
            _ => None,
        }
    }
}
