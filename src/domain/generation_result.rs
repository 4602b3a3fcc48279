/// Unparsed completion text together with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub provider: String,
    pub raw_text: String,
}

impl GenerationResult {
    pub fn new(provider: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            raw_text: raw_text.into(),
        }
    }
}
