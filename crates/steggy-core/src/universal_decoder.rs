use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Read, Result};

use crate::media::{ColorChannel, UnveilBit};

/// generic unveil algorithm
pub trait UnveilAlgorithm<T> {
    fn decode(&self, carrier: T) -> bool;
}

/// default 1 bit unveil strategy
#[derive(Debug, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm<ColorChannel> for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: ColorChannel) -> bool {
        carrier.unveil_bit()
    }
}

/// generic stegano decoder, assembles bytes most significant bit first out of carrier items.
///
/// Only complete bytes are ever returned, trailing bits that do not fill a byte are dropped.
pub struct UniversalDecoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = ColorChannel>,
    A: UnveilAlgorithm<ColorChannel>,
{
    pub fn new(input: I, algorithm: A) -> Self {
        UniversalDecoder { input, algorithm }
    }
}

impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = ColorChannel>,
    A: UnveilAlgorithm<ColorChannel>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per carrier item
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(&mut buf[..], BigEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(self.algorithm.decode(carrier))?;
            bits_read += 1;
        }

        Ok(bits_read >> 3)
    }
}
