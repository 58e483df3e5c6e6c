use crate::core::bit_coder::{ByteReader, ReaderErr};

/// Decoder-side view over a caller-owned compressed buffer. The bytes are
/// borrowed rather than copied; the buffer records its total length and the
/// current read position, and every read is bounds-checked against the end of
/// the input.
#[derive(Debug)]
pub struct DecoderBuffer<'data> {
    data: &'data [u8],
    pos: usize,
}

impl<'data> DecoderBuffer<'data> {
    pub fn new(data: &'data [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the ingested buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteReader for DecoderBuffer<'_> {
    fn read_u8(&mut self) -> Result<u8, ReaderErr> {
        let out = self
            .data
            .get(self.pos)
            .copied()
            .ok_or(ReaderErr::NotEnoughData)?;
        self.pos += 1;
        Ok(out)
    }

    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), ReaderErr> {
        let end = self
            .pos
            .checked_add(out.len())
            .ok_or(ReaderErr::NotEnoughData)?;
        let src = self.data.get(self.pos..end).ok_or(ReaderErr::NotEnoughData)?;
        out.copy_from_slice(src);
        self.pos = end;
        Ok(())
    }

    fn skip(&mut self, num_bytes: usize) -> Result<(), ReaderErr> {
        let end = self
            .pos
            .checked_add(num_bytes)
            .ok_or(ReaderErr::NotEnoughData)?;
        if end > self.data.len() {
            return Err(ReaderErr::NotEnoughData);
        }
        self.pos = end;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_the_position() {
        let mut buffer = DecoderBuffer::new(&[1, 2, 3]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.read_u8().unwrap(), 1);
        assert_eq!(buffer.remaining(), 2);
        assert_eq!(buffer.read_u16().unwrap(), 0x0302);
        assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn reading_past_the_end_fails() {
        let mut buffer = DecoderBuffer::new(&[1]);
        let mut out = [0; 2];
        assert_eq!(buffer.read_bytes(&mut out), Err(ReaderErr::NotEnoughData));
        // a failed bulk read consumes nothing
        assert_eq!(buffer.read_u8().unwrap(), 1);
    }

    #[test]
    fn skip_is_bounds_checked() {
        let mut buffer = DecoderBuffer::new(&[1, 2, 3, 4]);
        buffer.skip(3).unwrap();
        assert_eq!(buffer.read_u8().unwrap(), 4);
        assert_eq!(buffer.skip(1), Err(ReaderErr::NotEnoughData));
    }
}
