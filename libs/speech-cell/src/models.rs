use serde::Deserialize;

/// JSON body of POST /tts.
#[derive(Debug, Clone, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
}
