//! Raw image payloads submitted for analysis.

/// MIME type every artifact is submitted under.
pub const ARTIFACT_MIME_TYPE: &str = "image/jpeg";

/// A single photo or screenshot handed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
}

impl Artifact {
    /// Wrap image bytes. Returns `None` for an empty buffer: nothing was selected.
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Self { bytes })
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        ARTIFACT_MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_not_a_payload() {
        assert!(Artifact::new(Vec::new()).is_none());
    }

    #[test]
    fn bytes_are_kept_verbatim() {
        let artifact = Artifact::new(vec![0xFF, 0xD8, 0xFF]).unwrap();
        assert_eq!(artifact.bytes(), &[0xFF, 0xD8, 0xFF]);
        assert_eq!(artifact.len(), 3);
        assert_eq!(artifact.mime_type(), "image/jpeg");
    }
}
