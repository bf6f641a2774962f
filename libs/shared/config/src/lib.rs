use std::env;
use tracing::warn;

/// Default speech provider endpoint. Overridable so tests and offline
/// deployments can point the kiosk at a local stand-in.
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub tts_base_url: String,
    pub tts_enabled: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_service_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_SERVICE_ROLE_KEY not set, using empty value");
                    String::new()
                }),
            tts_base_url: env::var("TTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TTS_BASE_URL.to_string()),
            tts_enabled: env::var("TTS_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        if !config.is_speech_configured() {
            warn!("Speech synthesis not configured - voice endpoints will degrade");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_service_key.is_empty()
    }

    /// Capability flag for the Telugu voice endpoints. Resolved once at
    /// startup; handlers consult this instead of probing the provider.
    pub fn is_speech_configured(&self) -> bool {
        self.tts_enabled && !self.tts_base_url.is_empty()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing_accepts_common_spellings() {
        for on in ["1", "true", "yes", "on", "TRUE", " anything-else "] {
            assert!(parse_flag(on), "{on:?} should enable");
        }
        for off in ["0", "false", "no", "off", " OFF "] {
            assert!(!parse_flag(off), "{off:?} should disable");
        }
    }

    #[test]
    fn speech_capability_requires_flag_and_base_url() {
        let config = AppConfig {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "key".to_string(),
            tts_base_url: DEFAULT_TTS_BASE_URL.to_string(),
            tts_enabled: true,
            port: 5000,
        };
        assert!(config.is_speech_configured());

        let disabled = AppConfig {
            tts_enabled: false,
            ..config.clone()
        };
        assert!(!disabled.is_speech_configured());

        let no_url = AppConfig {
            tts_base_url: String::new(),
            ..config
        };
        assert!(!no_url.is_speech_configured());
    }
}
