//! # Steggy Core API
//!
//! Hides a text payload, usually JSON, in the least significant bits of the red channel
//! of one randomly chosen frame of an animated GIF, and finds it again by scanning all frames.
//!
//! The bitstream inside the chosen frame is `0xFF`, a 32 bit big endian length and the
//! percent-encoded payload, one bit per pixel in raster order, most significant bit first.
//!
//! # Usage Examples
//!
//! ## Hide data inside an animation
//!
//! ```rust
//! use steggy_core::media::{Carrier, Persist};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.gif");
//! let frames = vec![image::RgbImage::from_pixel(32, 32, image::Rgb([200, 100, 50])); 3];
//! Carrier::from_frames(frames, 0, 100)
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier");
//!
//! let frame_index = steggy_core::api::hide::prepare()
//!     .with_payload(br#"{"hello": "world"}"#.to_vec())
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("cat-crypt.gif"))
//!     .execute()
//!     .expect("Failed to hide payload in image");
//! assert!(frame_index < 3);
//! ```
//!
//! ## Unveil data from an animation
//!
//! ```rust,no_run
//! let json = steggy_core::api::unveil::prepare()
//!     .from_secret_file("cat-crypt.gif")
//!     .into_output_file("extracted_data.json")
//!     .execute()
//!     .expect("Failed to unveil payload from image");
//! println!("{json}");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod message;
pub mod result;
pub mod scanner;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::SteggyError;
pub use crate::media::{Carrier, CarrierFormat, CodecOptions, FrameSelector, Persist};
pub use crate::message::Message;
pub use crate::result::Result;
pub use crate::scanner::Unveiled;
