#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("mesh declares more points than the sequential encoding can index")]
    TooManyPoints,
}

/// Byte width of one stored point index for the given point count. Sequential
/// streams store indices at the narrowest unsigned width that can address
/// every point.
#[inline]
pub(crate) fn index_width_from_point_count(point_count: usize) -> Result<usize, Err> {
    match point_count {
        0..0x100 => Ok(1),
        0x100..0x10000 => Ok(2),
        0x10000..0x1000000 => Ok(4),
        _ => Err(Err::TooManyPoints),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_point_count() {
        assert_eq!(index_width_from_point_count(0).unwrap(), 1);
        assert_eq!(index_width_from_point_count(0xFF).unwrap(), 1);
        assert_eq!(index_width_from_point_count(0x100).unwrap(), 2);
        assert_eq!(index_width_from_point_count(0xFFFF).unwrap(), 2);
        assert_eq!(index_width_from_point_count(0x10000).unwrap(), 4);
        assert!(index_width_from_point_count(0x1000000).is_err());
    }
}
