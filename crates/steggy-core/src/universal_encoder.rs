use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Cursor, Result, Write};

use crate::media::{ColorChannelMut, HideBit};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm<T> {
    /// encodes one bit onto a carrier T
    fn encode(&self, carrier: T, information: bool);
}

/// default 1 bit hiding strategy
#[derive(Debug, Default)]
pub struct OneBitHide;

impl<'a> HideAlgorithm<ColorChannelMut<'a>> for OneBitHide {
    #[inline(always)]
    fn encode(&self, carrier: ColorChannelMut<'a>, information: bool) {
        carrier.hide_bit(information);
    }
}

/// generic stegano encoder, writes every bit of a byte stream into one carrier item.
/// Bits are taken most significant bit first.
///
/// Carrier items beyond the written bits are never touched.
pub struct UniversalEncoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<'a, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = ColorChannelMut<'a>>,
    A: HideAlgorithm<ColorChannelMut<'a>>,
{
    pub fn new(input: I, algorithm: A) -> Self {
        UniversalEncoder { input, algorithm }
    }
}

impl<'a, I, A> Write for UniversalEncoder<I, A>
where
    I: Iterator<Item = ColorChannelMut<'a>>,
    A: HideAlgorithm<ColorChannelMut<'a>>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let bits_to_write = buf.len() << 3;
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);

        let mut bits_written = 0;
        while bits_written < bits_to_write {
            let Some(carrier) = self.input.next() else {
                break;
            };
            self.algorithm.encode(carrier, bit_iter.read_bit()?);
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
