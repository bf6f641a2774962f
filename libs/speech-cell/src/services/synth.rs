use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::error::SpeechError;

/// All kiosk speech is Telugu.
pub const TTS_LANG: &str = "te";

/// The provider rejects long inputs, so text is spoken in chunks of at most
/// this many characters and the MPEG frames are concatenated.
const MAX_CHUNK_CHARS: usize = 100;

/// Client for the unofficial Google Translate TTS endpoint.
pub struct TranslateTtsClient {
    client: Client,
    base_url: String,
}

impl TranslateTtsClient {
    pub fn new(config: &AppConfig) -> Result<Self, SpeechError> {
        if !config.is_speech_configured() {
            return Err(SpeechError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.tts_base_url.clone(),
        })
    }

    /// Fetch spoken audio for `text` as a single MPEG byte stream.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::Synthesis("no speakable text".to_string()));
        }

        info!("Synthesizing speech in {} chunk(s)", chunks.len());

        let url = format!("{}/translate_tts", self.base_url);
        let total = chunks.len().to_string();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let idx_param = idx.to_string();
            let textlen = chunk.chars().count().to_string();

            debug!("Requesting chunk {}/{} from {}", idx + 1, chunks.len(), url);

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("q", chunk.as_str()),
                    ("tl", TTS_LANG),
                    ("client", "tw-ob"),
                    ("total", total.as_str()),
                    ("idx", idx_param.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let detail = response.text().await.unwrap_or_default();
                error!("Speech provider error: {} - {}", status, detail);
                return Err(SpeechError::Synthesis(format!("HTTP {}: {}", status, detail)));
            }

            audio.extend_from_slice(&response.bytes().await?);
        }

        debug!("Synthesized {} byte(s) of audio", audio.len());
        Ok(audio)
    }
}

/// Split on whitespace into chunks of at most `max_chars` characters,
/// counting characters rather than bytes; Telugu text is multi-byte
/// throughout. A single oversized token is cut at character boundaries.
pub(crate) fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if word_chars > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            let mut piece = String::new();
            let mut piece_chars = 0usize;
            for ch in word.chars() {
                if piece_chars == max_chars {
                    chunks.push(std::mem::take(&mut piece));
                    piece_chars = 0;
                }
                piece.push(ch);
                piece_chars += 1;
            }
            if !piece.is_empty() {
                chunks.push(piece);
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_chars
        } else {
            word_chars + 1
        };
        if current_chars + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    use shared_config::AppConfig;

    fn create_test_config() -> AppConfig {
        AppConfig {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "test-service-role-key".to_string(),
            tts_base_url: "http://localhost:59999".to_string(),
            tts_enabled: true,
            port: 5000,
        }
    }

    #[test]
    fn client_creation_requires_the_capability_flag() {
        let config = create_test_config();
        assert!(TranslateTtsClient::new(&config).is_ok());

        let mut disabled = create_test_config();
        disabled.tts_enabled = false;
        assert!(matches!(
            TranslateTtsClient::new(&disabled),
            Err(SpeechError::NotConfigured)
        ));
    }

    #[test]
    fn short_text_stays_in_one_chunk() {
        assert_eq!(split_text("hello there", 100), vec!["hello there"]);
    }

    #[test]
    fn whitespace_only_text_yields_no_chunks() {
        assert!(split_text("   \n\t ", 100).is_empty());
        assert!(split_text("", 100).is_empty());
    }

    #[test]
    fn long_text_splits_on_word_boundaries() {
        let text = "alpha beta gamma delta";
        let chunks = split_text(text, 11);

        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 11);
        }
    }

    #[test]
    fn chunk_limit_counts_characters_not_bytes() {
        // Each Telugu word here is far more bytes than characters.
        let text = "నమస్కారం నమస్కారం నమస్కారం";
        let chunks = split_text(text, 17);

        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 17);
        }
    }

    #[test]
    fn oversized_single_token_is_cut_at_character_boundaries() {
        let token = "x".repeat(25);
        let chunks = split_text(&token, 10);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 10);
        assert_eq!(chunks[1].chars().count(), 10);
        assert_eq!(chunks[2].chars().count(), 5);
    }

    #[test]
    fn rejoining_chunks_preserves_every_word() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_text(text, 12);

        assert_eq!(chunks.join(" "), text);
    }
}
