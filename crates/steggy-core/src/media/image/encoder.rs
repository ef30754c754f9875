use image::buffer::PixelsMut;
use image::{Rgb, RgbImage};

use crate::media::ColorChannelMut;

/// stegano target for one frame, based on `RgbImage` by `image` crate.
///
/// Hands out mutable red channels in raster order, green and blue are never exposed.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use image::RgbImage;
/// use steggy_core::media::image::encoder::FrameRedChannelMut;
/// use steggy_core::universal_encoder::{OneBitHide, UniversalEncoder};
///
/// let mut frame = RgbImage::from_pixel(8, 2, image::Rgb([100, 50, 25]));
/// {
///     let mut encoder = UniversalEncoder::new(FrameRedChannelMut::new(&mut frame), OneBitHide);
///     encoder.write_all(&[0xFF]).expect("Cannot write secret byte");
/// }
/// assert_eq!(frame.get_pixel(0, 0), &image::Rgb([101, 50, 25]));
/// assert_eq!(frame.get_pixel(0, 1), &image::Rgb([100, 50, 25]));
/// ```
pub struct FrameRedChannelMut<'a> {
    pixels: PixelsMut<'a, Rgb<u8>>,
}

impl<'a> FrameRedChannelMut<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'a mut RgbImage) -> Self {
        Self {
            pixels: input.pixels_mut(),
        }
    }
}

impl<'a> Iterator for FrameRedChannelMut<'a> {
    type Item = ColorChannelMut<'a>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixels
            .next()
            .map(|p| ColorChannelMut(&mut p.0[0]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}
