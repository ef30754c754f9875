use super::decoder::FrameRedChannel;
use super::encoder::FrameRedChannelMut;
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};

use image::RgbImage;
use std::io::{Read, Write};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB frame decoder that implements Read
    pub fn decoder<'i>(input: &'i RgbImage) -> Box<dyn Read + 'i> {
        Box::new(UniversalDecoder::new(
            FrameRedChannel::new(input),
            OneBitUnveil,
        ))
    }

    /// builds a LSB frame encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut RgbImage) -> Box<dyn Write + 'i> {
        Box::new(UniversalEncoder::new(
            FrameRedChannelMut::new(carrier),
            OneBitHide,
        ))
    }

    /// number of bits a frame can carry, one per pixel
    pub fn capacity(frame: &RgbImage) -> usize {
        frame.width() as usize * frame.height() as usize
    }
}
