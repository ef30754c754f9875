use std::fs;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, DynamicImage, ImageFormat, RgbImage};
use log::{debug, error, info};

use crate::error::SteggyError;
use crate::media::image::LsbCodec;
use crate::media::payload::HEADER_LEN;
use crate::media::selector::FrameSelector;
use crate::result::Result;
use crate::scanner::{FrameScan, LsbJsonFrameDecoder, Unveiled};

use super::Persist;

/// frame delay used when a carrier does not tell one
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// container format a carrier is read from and written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierFormat {
    /// animated GIF, any number of frames
    Gif,
    /// single frame PNG, written losslessly
    Png,
}

impl CarrierFormat {
    pub fn from_path(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or(SteggyError::UnsupportedMedia)?;

        match ext.as_str() {
            "gif" => Ok(Self::Gif),
            "png" => Ok(Self::Png),
            _ => Err(SteggyError::UnsupportedMedia),
        }
    }
}

/// an animated carrier image for steganography.
///
/// Frames are plain RGB grids, `loop_count` and `frame_duration_ms` are only carried along
/// so that a saved carrier plays like the one that was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pub frames: Vec<RgbImage>,
    /// GIF loop count, `0` means loop forever
    pub loop_count: u16,
    pub frame_duration_ms: u32,
    pub format: CarrierFormat,
}

impl Carrier {
    /// GIF carrier of the given frames
    pub fn from_frames(frames: Vec<RgbImage>, loop_count: u16, frame_duration_ms: u32) -> Self {
        Self {
            frames,
            loop_count,
            frame_duration_ms,
            format: CarrierFormat::Gif,
        }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let format = CarrierFormat::from_path(f)?;
        let data = fs::read(f).map_err(|e| {
            error!("Error reading carrier {f:?}: {e}");
            SteggyError::InvalidCarrier
        })?;

        Self::from_bytes(&data, format)
    }

    pub fn from_bytes(data: &[u8], format: CarrierFormat) -> Result<Self> {
        match format {
            CarrierFormat::Gif => Self::from_gif(data),
            CarrierFormat::Png => {
                let frame = image::load_from_memory_with_format(data, ImageFormat::Png)
                    .map_err(|e| {
                        error!("Error decoding png carrier: {e}");
                        SteggyError::InvalidCarrier
                    })?
                    .to_rgb8();

                Ok(Self {
                    frames: vec![frame],
                    loop_count: 0,
                    frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
                    format,
                })
            }
        }
    }

    fn from_gif(data: &[u8]) -> Result<Self> {
        let decoder = GifDecoder::new(Cursor::new(data)).map_err(|e| {
            error!("Error decoding gif carrier: {e}");
            SteggyError::InvalidCarrier
        })?;
        let frames = decoder.into_frames().collect_frames().map_err(|e| {
            error!("Error decoding gif frames: {e}");
            SteggyError::InvalidCarrier
        })?;

        let frame_duration_ms = frames
            .first()
            .map(|f| {
                let (numer, denom) = f.delay().numer_denom_ms();
                numer / denom.max(1)
            })
            .unwrap_or(DEFAULT_FRAME_DURATION_MS);
        let frames: Vec<RgbImage> = frames
            .into_iter()
            .map(|f| DynamicImage::ImageRgba8(f.into_buffer()).to_rgb8())
            .collect();

        Ok(Self {
            frames,
            loop_count: read_gif_loop_count(data)?,
            frame_duration_ms,
            format: CarrierFormat::Gif,
        })
    }

    /// number of bits the smallest frame can carry
    fn min_capacity(&self) -> usize {
        self.frames.iter().map(LsbCodec::capacity).min().unwrap_or(0)
    }

    /// Hides the already framed `msg_data` in one frame picked by `selector`.
    ///
    /// Returns the index of that frame. Nothing is modified when the data does not fit.
    pub fn hide_data(&mut self, msg_data: &[u8], selector: &mut dyn FrameSelector) -> Result<usize> {
        let frame_count = self.frames.len();
        if frame_count == 0 {
            return Err(SteggyError::EmptyCarrier);
        }

        let frame_index = selector.select(frame_count);
        let frame = self
            .frames
            .get_mut(frame_index)
            .ok_or(SteggyError::InvalidFrameIndex {
                index: frame_index,
                frame_count,
            })?;

        let required_bits = msg_data.len() * 8;
        let available_bits = LsbCodec::capacity(frame);
        if required_bits > available_bits {
            error!("Frame {frame_index} offers {available_bits} bits, {required_bits} bits required");
            return Err(SteggyError::CapacityExceeded {
                frame_index,
                required_bits,
                available_bits,
            });
        }

        LsbCodec::encoder(frame).write_all(msg_data).map_err(|e| {
            error!("Error encoding frame {frame_index}: {e}, kind {}", e.kind());
            SteggyError::ImageEncodingError
        })?;
        info!("Hid {} bytes in frame {frame_index} of {frame_count}", msg_data.len());

        Ok(frame_index)
    }

    /// Scans frames in order and returns the first payload that decodes to JSON.
    pub fn unveil(&self) -> Option<Unveiled> {
        FrameScan::new(&self.frames, LsbJsonFrameDecoder).first_payload()
    }

    /// largest payload, in percent-encoded bytes, the smallest frame can take
    pub fn max_payload_len(&self) -> usize {
        (self.min_capacity() / 8).saturating_sub(HEADER_LEN)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self.format {
            CarrierFormat::Gif => self.write_gif(&mut writer),
            CarrierFormat::Png => match self.frames.as_slice() {
                [frame] => frame.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
                    error!("Error saving png: {e}");
                    SteggyError::ImageEncodingError
                }),
                [] => Err(SteggyError::EmptyCarrier),
                _ => {
                    error!("A png cannot hold {} frames", self.frames.len());
                    Err(SteggyError::UnsupportedMedia)
                }
            },
        }
    }

    fn write_gif<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = GifEncoder::new(writer);
        let repeat = match self.loop_count {
            0 => Repeat::Infinite,
            n => Repeat::Finite(n),
        };
        encoder.set_repeat(repeat).map_err(|e| {
            error!("Error writing gif loop count: {e}");
            SteggyError::ImageEncodingError
        })?;

        let delay = Delay::from_numer_denom_ms(self.frame_duration_ms, 1);
        let frames = self.frames.iter().map(|f| {
            let rgba = DynamicImage::ImageRgb8(f.clone()).to_rgba8();
            image::Frame::from_parts(rgba, 0, 0, delay)
        });
        encoder.encode_frames(frames).map_err(|e| {
            error!("Error saving gif: {e}");
            SteggyError::ImageEncodingError
        })
    }

    /// Saves like [`Persist::save_as`], but only when `msg_data` reads back unchanged from
    /// frame `frame_index` of the encoded image.
    ///
    /// GIF quantizes frames with more than 256 colours, that would lose the hidden bits.
    pub fn save_verified_as(
        &mut self,
        file: &Path,
        frame_index: usize,
        msg_data: &[u8],
    ) -> Result<()> {
        self.format = CarrierFormat::from_path(file)?;
        let encoded = self.encode()?;

        let reread = Self::from_bytes(&encoded, self.format)?;
        let frame = reread
            .frames
            .get(frame_index)
            .ok_or(SteggyError::InvalidFrameIndex {
                index: frame_index,
                frame_count: reread.frames.len(),
            })?;
        let mut hidden = vec![0; msg_data.len()];
        let preserved =
            LsbCodec::decoder(frame).read_exact(&mut hidden).is_ok() && hidden == msg_data;
        if !preserved {
            error!("Hidden data of frame {frame_index} did not survive encoding {file:?}");
            return Err(SteggyError::PayloadNotPreserved { frame_index });
        }
        debug!("Hidden data of frame {frame_index} verified");

        write_file(file, encoded)
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.save_to_writer(&mut buf)?;

        Ok(buf.into_inner())
    }
}

impl Persist for Carrier {
    /// The format follows the extension of `file`.
    /// Encoding completes before the file is created, errors leave no file behind.
    fn save_as(&mut self, file: &Path) -> Result<()> {
        self.format = CarrierFormat::from_path(file)?;
        let encoded = self.encode()?;

        write_file(file, encoded)
    }
}

fn write_file(file: &Path, data: Vec<u8>) -> Result<()> {
    fs::write(file, data).map_err(|e| {
        error!("Error writing file {file:?}: {e}");
        SteggyError::WriteError { source: e }
    })
}

/// loop count of the NETSCAPE application extension, `0` when there is none
fn read_gif_loop_count(data: &[u8]) -> Result<u16> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(Cursor::new(data)).map_err(|e| {
        error!("Error reading gif header: {e}");
        SteggyError::InvalidCarrier
    })?;
    // the extension sits in front of the first image descriptor
    decoder.next_frame_info().map_err(|e| {
        error!("Error reading gif frame: {e}");
        SteggyError::InvalidCarrier
    })?;

    let loop_count = match decoder.repeat() {
        gif::Repeat::Infinite => 0,
        gif::Repeat::Finite(n) => n,
    };
    debug!("gif loop count {loop_count}");

    Ok(loop_count)
}
