use thiserror::Error;

#[derive(Error, Debug)]
pub enum WoofError {
    /// Represents a carrier whose format cannot be recognised from its content. For example, a text file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a frame that does not fit into the carrier image, counted in bits
    #[error(
        "Capacity Error: the frame requires {required} bits but the image provides only {available} bits"
    )]
    CapacityExceeded { required: u64, available: u64 },

    /// Represents a document that could not be turned into or read from its text form
    #[error("Metadata document could not be serialized")]
    DocumentSerialization(#[from] serde_json::Error),

    /// Represents a document whose text exceeds the size any reader accepts
    #[error("Metadata document of {len} bytes exceeds the limit of {limit} bytes")]
    DocumentTooLarge { len: u64, limit: u64 },

    /// Represents an extraction where the caller insisted on a document, but none was found
    #[error("No WOOF metadata found")]
    NoWoofData,

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

    #[error("API Error: Missing metadata document")]
    MissingDocument,
}
