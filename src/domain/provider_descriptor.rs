use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderDescriptor {
    pub identifier: String,
    pub supports_structured_output: bool,
}

impl ProviderDescriptor {
    pub fn new(identifier: impl Into<String>, supports_structured_output: bool) -> Self {
        Self {
            identifier: identifier.into(),
            supports_structured_output,
        }
    }

    /// A provider that only returns free-form text.
    pub fn plain_text(identifier: impl Into<String>) -> Self {
        Self::new(identifier, false)
    }

    pub fn structured(identifier: impl Into<String>) -> Self {
        Self::new(identifier, true)
    }
}

impl fmt::Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
