//! Frame by frame search for a hidden payload.
//!
//! [`FrameScan`] is a lazy sequence of decode attempts, one per frame and in frame order.
//! What an attempt does is up to the [`FrameDecoder`], the scan only walks the frames.

use std::iter::Enumerate;
use std::slice::Iter;

use image::RgbImage;
use log::{debug, info};
use serde_json::Value;

use crate::media::image::LsbCodec;
use crate::media::payload::MarkerLengthCodec;
use crate::result::Result;
use crate::Message;

/// one strategy to get a payload out of a single frame
pub trait FrameDecoder {
    fn decode_frame(&self, frame: &RgbImage) -> Result<Value>;
}

/// red channel LSBs, marker and length header, percent-encoded JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LsbJsonFrameDecoder;

impl FrameDecoder for LsbJsonFrameDecoder {
    fn decode_frame(&self, frame: &RgbImage) -> Result<Value> {
        let mut decoder = LsbCodec::decoder(frame);
        let msg = Message::from_raw_data(&mut decoder, &MarkerLengthCodec)?;

        msg.to_json()
    }
}

/// the outcome of decoding one frame
#[derive(Debug)]
pub struct FrameAttempt {
    pub frame_index: usize,
    pub result: Result<Value>,
}

/// a payload and the frame it was found in
#[derive(Debug, Clone, PartialEq)]
pub struct Unveiled {
    pub frame_index: usize,
    pub json: Value,
}

pub struct FrameScan<'c, D> {
    frames: Enumerate<Iter<'c, RgbImage>>,
    decoder: D,
}

impl<'c, D: FrameDecoder> FrameScan<'c, D> {
    pub fn new(frames: &'c [RgbImage], decoder: D) -> Self {
        Self {
            frames: frames.iter().enumerate(),
            decoder,
        }
    }

    /// runs the scan until the first frame decodes, later frames are never looked at
    pub fn first_payload(self) -> Option<Unveiled> {
        self.filter_map(|attempt| match attempt.result {
            Ok(json) => {
                info!("Payload found in frame {}", attempt.frame_index);
                Some(Unveiled {
                    frame_index: attempt.frame_index,
                    json,
                })
            }
            Err(e) => {
                debug!("Skipping frame {}: {e}", attempt.frame_index);
                None
            }
        })
        .next()
    }
}

impl<D: FrameDecoder> Iterator for FrameScan<'_, D> {
    type Item = FrameAttempt;

    fn next(&mut self) -> Option<Self::Item> {
        self.frames.next().map(|(frame_index, frame)| FrameAttempt {
            frame_index,
            result: self.decoder.decode_frame(frame),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}
