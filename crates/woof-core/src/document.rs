use std::fmt::{self, Display, Formatter};

/// Schema-free metadata tree carried by a WOOF frame.
///
/// Objects are key-sorted, so the compact text form of a document is canonical.
pub type MetadataDocument = serde_json::Value;

/// Outcome of scanning an image for a WOOF frame
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Present(MetadataDocument),
    Absent,
}

impl Extraction {
    pub fn is_present(&self) -> bool {
        matches!(self, Extraction::Present(_))
    }

    pub fn document(&self) -> Option<&MetadataDocument> {
        match self {
            Extraction::Present(document) => Some(document),
            Extraction::Absent => None,
        }
    }

    pub fn into_document(self) -> Option<MetadataDocument> {
        self.into()
    }
}

impl From<Extraction> for Option<MetadataDocument> {
    fn from(value: Extraction) -> Self {
        match value {
            Extraction::Present(document) => Some(document),
            Extraction::Absent => None,
        }
    }
}

impl From<Option<MetadataDocument>> for Extraction {
    fn from(value: Option<MetadataDocument>) -> Self {
        value.map_or(Extraction::Absent, Extraction::Present)
    }
}

/// Why a scanned image did not yield a document. Diagnostic only,
/// every reason collapses into [`Extraction::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// not even enough bytes for the magic marker
    TooSmallForMagic,
    MagicMismatch,
    /// magic found, but the image ends inside the length field
    MissingLength,
    /// the declared payload runs past the end of the image
    Truncated { declared: usize, available: usize },
    Decompression,
    Parse,
}

impl Display for Absence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Absence::TooSmallForMagic => write!(f, "image is too small to hold a magic marker"),
            Absence::MagicMismatch => write!(f, "magic marker not found"),
            Absence::MissingLength => write!(f, "image ends inside the length field"),
            Absence::Truncated {
                declared,
                available,
            } => write!(
                f,
                "payload truncated, {declared} bytes declared but only {available} available"
            ),
            Absence::Decompression => write!(f, "payload is not a valid zlib stream"),
            Absence::Parse => write!(f, "payload is not a well-formed document"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_convert_between_extraction_and_option() {
        let doc = json!({"version": 2});
        let present: Extraction = Some(doc.clone()).into();
        assert!(present.is_present());
        assert_eq!(present.document(), Some(&doc));
        assert_eq!(present.into_document(), Some(doc));

        let absent: Extraction = None.into();
        assert!(!absent.is_present());
        assert_eq!(absent.into_document(), None);
    }

    #[test]
    fn should_describe_a_truncation() {
        let reason = Absence::Truncated {
            declared: 100,
            available: 7,
        };
        assert_eq!(
            reason.to_string(),
            "payload truncated, 100 bytes declared but only 7 available"
        );
    }
}
