use crate::media::payload::{percent_decode_payload, percent_encode_payload, PayloadCodec};
use crate::result::Result;

use serde_json::Value;
use std::io::{Cursor, Read};

/// A secret text message, usually a JSON document.
///
/// On its way into a carrier the text is percent-encoded and framed by a [`PayloadCodec`],
/// on its way out the frame is parsed and the text percent-decoded again.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Message {
    pub text: String,
}

impl Message {
    /// Creates a message from raw payload bytes, invalid UTF-8 sequences are dropped.
    pub fn from_payload(raw: &[u8]) -> Self {
        Self {
            text: crate::media::payload::text::utf8_dropping_invalid(raw),
        }
    }

    /// Creates a new message with the content based on the message serialization format.
    pub fn from_raw_data(dec: &mut dyn Read, codec: &dyn PayloadCodec) -> Result<Self> {
        let encoded = codec.decode(dec)?;

        Ok(Self {
            text: percent_decode_payload(&encoded),
        })
    }

    /// percent-encoded form of the text, this is what gets framed
    pub fn encoded_text(&self) -> String {
        percent_encode_payload(self.text.as_bytes())
    }

    /// the complete bitstream for this message, header included
    pub fn to_raw_data(&self, codec: &dyn PayloadCodec) -> Result<Vec<u8>> {
        let mut encoded = Cursor::new(self.encoded_text().into_bytes());
        codec.encode(&mut encoded)
    }

    /// parses the text as JSON, any JSON value is accepted, also an empty object
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.text)?)
    }
}
