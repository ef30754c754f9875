mod codec;
pub mod text;

pub use codec::*;
pub use text::{percent_decode_payload, percent_encode_payload};
