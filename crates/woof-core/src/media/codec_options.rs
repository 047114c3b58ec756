/// Default zlib level for the frame payload, the maximum the format asks for
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Options for building WOOF frames
///
/// Extraction does not depend on any of these, every frame is readable
/// regardless of the options it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// zlib compression level of the payload, `0..=9`. Larger values are clamped to 9.
    pub compression_level: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl CodecOptions {
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn get_compression_level(&self) -> u32 {
        self.compression_level.min(DEFAULT_COMPRESSION_LEVEL)
    }
}
