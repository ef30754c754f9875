use std::path::Path;

use serde_json::Value;

use crate::SteggyError;

pub fn unveil(secret_media: &Path, output_file: &Path) -> Result<Value, SteggyError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_file(output_file)
        .execute()
}
