pub mod codec_options;
pub mod image;
pub mod payload;
mod primitives;
pub mod selector;
mod types;

use std::path::Path;

pub use codec_options::CodecOptions;
pub use primitives::*;
pub use selector::{FrameSelector, RandomFrameSelector};
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
