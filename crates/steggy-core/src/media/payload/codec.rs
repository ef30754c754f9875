use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read};

use crate::result::Result;
use crate::SteggyError;

/// sentinel byte that announces a payload, eight `1` bits
pub const MARKER: u8 = 0xFF;

/// marker byte plus the 32 bit length field
pub const HEADER_LEN: usize = 1 + 4;

pub trait PayloadEncoder {
    fn encode(&self, content: &mut dyn Read) -> Result<Vec<u8>>;

    /// number of bytes `encode` produces for `content_len` bytes of content
    fn encoded_size(&self, content_len: usize) -> usize;
}

pub trait PayloadDecoder {
    fn decode(&self, content: &mut dyn Read) -> Result<Vec<u8>>;
}

pub trait PayloadCodec: PayloadEncoder + PayloadDecoder {}

/// Frames content as `[0xFF] ++ u32_be(len) ++ content`.
///
/// This layout is what existing secret images carry, it must not change.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLengthCodec;

impl PayloadEncoder for MarkerLengthCodec {
    fn encode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let mut src = Vec::new();
        content.read_to_end(&mut src)?;
        let len = u32::try_from(src.len()).map_err(|_| SteggyError::PayloadTooLarge(src.len()))?;

        let mut buffer = Vec::with_capacity(self.encoded_size(src.len()));
        buffer.write_u8(MARKER)?;
        buffer.write_u32::<BigEndian>(len)?;
        buffer.extend_from_slice(&src[..]);

        Ok(buffer)
    }

    fn encoded_size(&self, content_len: usize) -> usize {
        HEADER_LEN + content_len
    }
}

impl PayloadDecoder for MarkerLengthCodec {
    fn decode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let marker = content.read_u8().map_err(insufficient(1))?;
        if marker != MARKER {
            return Err(SteggyError::MarkerMismatch(marker));
        }
        let len = content
            .read_u32::<BigEndian>()
            .map_err(insufficient(4))? as usize;

        // never trust `len` for allocation, the carrier bounds what can be read
        let mut buffer = Vec::new();
        content.take(len as u64).read_to_end(&mut buffer)?;
        if buffer.len() < len {
            return Err(SteggyError::InsufficientData {
                declared: len,
                available: buffer.len(),
            });
        }

        Ok(buffer)
    }
}

impl PayloadCodec for MarkerLengthCodec {}

fn insufficient(declared: usize) -> impl Fn(std::io::Error) -> SteggyError {
    move |e| match e.kind() {
        ErrorKind::UnexpectedEof => SteggyError::InsufficientData {
            declared,
            available: 0,
        },
        _ => SteggyError::IoError(e),
    }
}
