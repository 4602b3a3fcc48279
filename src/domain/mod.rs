mod error_payload;
mod generation_result;
mod parsed_payload;
mod provider_descriptor;
mod transcript;

pub use error_payload::ErrorPayload;
pub use generation_result::GenerationResult;
pub use parsed_payload::{EXPECTED_PAYLOAD_KEYS, ParsedPayload};
pub use provider_descriptor::ProviderDescriptor;
pub use transcript::{Transcript, TranscriptError};
