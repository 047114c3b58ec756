use std::io::{Result, Write};

use crate::BitIterator;

/// hides exactly one bit of information in a carrier item
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// generic stegano encoder, one bit per carrier item, most significant bit of each byte first
pub struct Encoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    carrier: I,
}

impl<I> Encoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    pub fn new(carrier: I) -> Self {
        Encoder { carrier }
    }
}

impl<I> Write for Encoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bits_written = 0;
        // bits first, so an exhausted buffer never consumes a carrier item
        for (bit, item) in BitIterator::new(buf).zip(self.carrier.by_ref()) {
            item.hide_bit(bit);
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
