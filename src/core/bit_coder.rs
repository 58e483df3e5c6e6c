#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErr {
    #[error("Not enough data to read")]
    NotEnoughData,
}

/// Byte-oriented reader over an encoded stream. Multi-byte reads are
/// little-endian, matching the bitstream layout.
pub trait ByteReader {
    fn read_u8(&mut self) -> Result<u8, ReaderErr>;
    fn read_u16(&mut self) -> Result<u16, ReaderErr> {
        let out = [
            self.read_u8()?,
            self.read_u8()?
        ];
        Ok(u16::from_le_bytes(out))
    }
    fn read_u32(&mut self) -> Result<u32, ReaderErr> {
        let out = [
            self.read_u8()?,
            self.read_u8()?,
            self.read_u8()?,
            self.read_u8()?
        ];
        Ok(u32::from_le_bytes(out))
    }
    fn read_u64(&mut self) -> Result<u64, ReaderErr> {
        let mut out = [0; 8];
        for byte in out.iter_mut() {
            *byte = self.read_u8()?;
        }
        Ok(u64::from_le_bytes(out))
    }
    fn read_f32(&mut self) -> Result<f32, ReaderErr> {
        Ok(f32::from_bits(self.read_u32()?))
    }
    fn read_f64(&mut self) -> Result<f64, ReaderErr> {
        Ok(f64::from_bits(self.read_u64()?))
    }
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), ReaderErr> {
        for byte in out.iter_mut() {
            *byte = self.read_u8()?;
        }
        Ok(())
    }
    fn skip(&mut self, num_bytes: usize) -> Result<(), ReaderErr> {
        for _ in 0..num_bytes {
            self.read_u8()?;
        }
        Ok(())
    }
}

/// Byte-oriented writer, the mirror of [ByteReader]. The decoder itself never
/// writes; the trait is kept so that tests and tools can author streams the
/// decoder reads back.
pub trait ByteWriter: Sized {
    fn write_u8(&mut self, value: u8);
    fn write_u16(&mut self, value: u16) {
        self.write_u8(value as u8);
        self.write_u8((value >> 8) as u8);
    }
    fn write_u32(&mut self, value: u32) {
        self.write_u16(value as u16);
        self.write_u16((value >> 16) as u16);
    }
    fn write_u64(&mut self, value: u64) {
        self.write_u32(value as u32);
        self.write_u32((value >> 32) as u32);
    }
    fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }
    fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }
}

impl ByteWriter for Vec<u8> {
    fn write_u8(&mut self, value: u8) {
        self.push(value);
    }

    fn write_u16(&mut self, value: u16) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn write_u32(&mut self, value: u32) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn write_u64(&mut self, value: u64) {
        self.extend_from_slice(&value.to_le_bytes());
    }
}
