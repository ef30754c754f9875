use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteggyError {
    /// Represents an unsupported carrier media. For example, a WAV file or a JPEG image
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a carrier image that cannot be opened or parsed. For example, a broken GIF file
    #[error("Carrier image is invalid")]
    InvalidCarrier,

    /// Represents a carrier image without a single frame
    #[error("Carrier image does not contain any frame")]
    EmptyCarrier,

    /// Represents a failure to read the payload that should be hidden.
    #[error("Payload could not be read")]
    PayloadReadError { source: std::io::Error },

    /// Represents a payload that does not fit into the frame that was chosen to carry it.
    #[error("Capacity Error: frame {frame_index} offers {available_bits} bits, but {required_bits} bits are required")]
    CapacityExceeded {
        frame_index: usize,
        required_bits: usize,
        available_bits: usize,
    },

    /// Represents a payload whose length cannot be expressed by the 32 bit length header
    #[error("Payload of {0} bytes is too large for the length header")]
    PayloadTooLarge(usize),

    /// Represents a frame selection that points outside of the carrier
    #[error("Frame index {index} is out of range for a carrier with {frame_count} frames")]
    InvalidFrameIndex { index: usize, frame_count: usize },

    /// Represents hidden data that does not read back from the encoded image.
    /// For example a GIF frame that got more than 256 colours and was quantized
    #[error("Payload in frame {frame_index} does not survive encoding, the frame has too many colours for a GIF palette")]
    PayloadNotPreserved { frame_index: usize },

    /// Represents an unveil of no secret data. For example when no frame carried a marker
    #[error("No valid payload found in any frame")]
    NoPayloadFound,

    /// Represents a frame whose first byte is not the payload marker
    #[error("Payload marker not found, got {0:#04x}")]
    MarkerMismatch(u8),

    /// Represents a frame that carries a marker but too few bits for the announced payload
    #[error("Insufficient data: {declared} bytes announced, {available} bytes available")]
    InsufficientData { declared: usize, available: usize },

    /// Represents payload data that could not be parsed as JSON
    #[error("Payload is not valid JSON")]
    MalformedPayload(#[from] serde_json::Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload")]
    MissingPayload,
}
