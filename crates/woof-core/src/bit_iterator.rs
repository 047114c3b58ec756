use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of a byte source, most significant bit first.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> BitIterator<I>
where
    I: Read,
{
    fn read_byte(&mut self) -> Option<u8> {
        let mut b = 0;
        loop {
            return match self.iter.read(slice::from_mut(&mut b)) {
                Ok(0) => None,
                Ok(..) => Some(b),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => None,
            };
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.i % 8;
        if bit == 0 {
            self.byte = self.read_byte();
        }
        let b = self.byte?;
        self.i += 1;

        Some((b >> (7 - bit)) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_yield_bits_msb_first() {
        let bits: Vec<bool> = BitIterator::new(&[0b1000_0001u8][..]).collect();
        assert_eq!(
            bits,
            vec![true, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn should_yield_nothing_for_an_empty_source() {
        assert_eq!(BitIterator::new(&[][..]).next(), None);
    }

    #[test]
    fn should_yield_8_bits_per_byte() {
        assert_eq!(BitIterator::new(&b"WOOF"[..]).count(), 32);
    }
}
