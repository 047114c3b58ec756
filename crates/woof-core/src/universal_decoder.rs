use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Read, Result};

/// unveils exactly one bit of information from a carrier item
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        (self & 1) == 1
    }
}

/// generic stegano decoder, one bit per carrier item, packed most significant bit first
pub struct Decoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    carrier: I,
}

impl<I> Decoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    pub fn new(carrier: I) -> Self {
        Decoder { carrier }
    }
}

impl<I> Read for Decoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Vec::with_capacity(buf.len()), BigEndian);

        let mut bits_read = 0;
        for item in self.carrier.by_ref().take(items_to_take) {
            bit_buffer.write_bit(item.unveil_bit())?;
            bits_read += 1;
        }

        // an incomplete trailing byte is dropped here
        let bytes_read = bits_read >> 3;
        let packed = bit_buffer.into_writer();
        buf[..bytes_read].copy_from_slice(&packed[..bytes_read]);

        Ok(bytes_read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pack_bits_msb_first() {
        let carrier = vec![1u8, 0, 0, 0, 0, 0, 1, 1];
        let mut buf = [0; 1];
        Decoder::new(carrier.into_iter())
            .read_exact(&mut buf)
            .expect("Cannot read 1 byte");

        assert_eq!(buf, [0b1000_0011]);
    }

    #[test]
    fn should_discard_incomplete_trailing_bits() {
        let carrier = vec![0xFFu8; 20];
        let mut buf = Vec::new();
        Decoder::new(carrier.into_iter())
            .read_to_end(&mut buf)
            .expect("Cannot read to the end");

        assert_eq!(buf, vec![0xFF, 0xFF]);
    }

    #[test]
    fn should_read_nothing_from_an_empty_carrier() {
        let mut buf = [0; 4];
        let n = Decoder::new(Vec::<u8>::new().into_iter())
            .read(&mut buf)
            .expect("Cannot read");

        assert_eq!(n, 0);
    }
}
