use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::media::payload::MarkerLengthCodec;
use crate::media::{Carrier, FrameSelector};
use crate::{CodecOptions, Message, SteggyError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default)]
pub struct HideApi {
    payload: Option<Vec<u8>>,
    payload_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
    selector: Option<Box<dyn FrameSelector>>,
}

impl std::fmt::Debug for HideApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HideApi")
            .field("payload", &self.payload.as_ref().map(Vec::len))
            .field("payload_file", &self.payload_file)
            .field("image", &self.image)
            .field("output", &self.output)
            .field("options", &self.options)
            .field("selector", &self.selector.is_some())
            .finish()
    }
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// raw payload bytes, read as UTF-8 text
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// file whose content is the payload, takes precedence over `with_payload`
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Overrides the frame selection of the options, for example with a fixed frame.
    pub fn using_selector<S: FrameSelector + 'static>(mut self, selector: S) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Hides the payload and writes the output image, returns the index of the carrying frame.
    ///
    /// Nothing is written when any step fails.
    pub fn execute(self) -> Result<usize, SteggyError> {
        let payload = self.read_payload()?;
        let Some(image) = self.image else {
            return Err(SteggyError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteggyError::TargetNotSet);
        };

        let mut carrier = Carrier::from_file(&image)?;
        debug!(
            "Carrier {image:?} takes up to {} percent-encoded bytes",
            carrier.max_payload_len()
        );
        let data = Message::from_payload(&payload).to_raw_data(&MarkerLengthCodec)?;

        let mut selector: Box<dyn FrameSelector> = match self.selector {
            Some(selector) => selector,
            None => Box::new(self.options.frame_selector()),
        };
        let frame_index = carrier.hide_data(&data, selector.as_mut())?;
        carrier.save_verified_as(&output, frame_index, &data)?;

        Ok(frame_index)
    }

    fn read_payload(&self) -> Result<Vec<u8>, SteggyError> {
        match (&self.payload_file, &self.payload) {
            (Some(file), _) => fs::read(file).map_err(|source| {
                error!("Error reading payload {file:?}: {source}");
                SteggyError::PayloadReadError { source }
            }),
            (None, Some(payload)) => Ok(payload.clone()),
            (None, None) => Err(SteggyError::MissingPayload),
        }
    }
}
