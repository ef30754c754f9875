use std::path::Path;

use crate::{CodecOptions, SteggyError};

/// hides the content of `payload_file` in one frame of `media`, returns the index of that frame
pub fn hide(
    media: &Path,
    write_to_file: &Path,
    payload_file: &Path,
    options: CodecOptions,
) -> Result<usize, SteggyError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_payload_file(payload_file)
        .execute()
}
