use std::fs;
use std::path::{Path, PathBuf};

use log::error;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::media::Carrier;
use crate::SteggyError;

/// where the unveiled JSON goes when no output file is given
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_data.json";

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the unveiled JSON will be saved to, defaults to [`DEFAULT_OUTPUT_FILE`]
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished.
    ///
    /// When no frame carries a payload `NoPayloadFound` is returned and no file is written.
    pub fn execute(self) -> Result<Value, SteggyError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteggyError::CarrierNotSet);
        };
        let output_file = self
            .output_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let carrier = Carrier::from_file(&secret_media)?;
        let unveiled = carrier.unveil().ok_or(SteggyError::NoPayloadFound)?;

        fs::write(&output_file, to_pretty_json(&unveiled.json)?).map_err(|source| {
            error!("Error writing {output_file:?}: {source}");
            SteggyError::WriteError { source }
        })?;

        Ok(unveiled.json)
    }
}

/// four spaces of indent, non ASCII characters are kept as they are
fn to_pretty_json(json: &Value) -> Result<Vec<u8>, SteggyError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    json.serialize(&mut serializer)
        .map_err(|e| SteggyError::WriteError { source: e.into() })?;

    Ok(buf)
}
