use image::buffer::Pixels;
use image::{Rgb, RgbImage};

use crate::media::ColorChannel;

/// stegano source for one frame, based on `RgbImage` by `image` crate.
///
/// Yields the red channel of every pixel in raster order, left to right and top to bottom.
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use image::RgbImage;
/// use steggy_core::media::image::decoder::FrameRedChannel;
/// use steggy_core::universal_decoder::{OneBitUnveil, UniversalDecoder};
///
/// // red LSBs spell out 0b1000_0001
/// let frame = RgbImage::from_fn(8, 1, |x, _| {
///     image::Rgb([if x == 0 || x == 7 { 11 } else { 10 }, 0, 0])
/// });
/// let mut byte = [0; 1];
///
/// UniversalDecoder::new(FrameRedChannel::new(&frame), OneBitUnveil)
///     .read_exact(&mut byte)
///     .expect("Cannot read 1 byte from decoder");
///
/// assert_eq!(byte[0], 0b1000_0001);
/// ```
pub struct FrameRedChannel<'i> {
    pixels: Pixels<'i, Rgb<u8>>,
}

impl<'i> FrameRedChannel<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            pixels: input.pixels(),
        }
    }
}

/// iterates over the frame and returns the red channel of each pixel wrapped into a `ColorChannel`
impl<'i> Iterator for FrameRedChannel<'i> {
    type Item = ColorChannel;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixels.next().map(|p| ColorChannel(p.0[0]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}
