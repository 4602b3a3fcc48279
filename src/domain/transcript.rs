#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Accepts any text that is non-empty after trimming. The text itself is
    /// kept verbatim, surrounding whitespace included.
    pub fn parse(text: impl Into<String>) -> Result<Self, TranscriptError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TranscriptError::Empty);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("transcript text is empty")]
    Empty,
}
