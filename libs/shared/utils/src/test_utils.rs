use std::sync::Arc;
use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub tts_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "test-service-role-key".to_string(),
            tts_base_url: "http://localhost:59999".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_service_key: self.supabase_service_key.clone(),
            tts_base_url: self.tts_base_url.clone(),
            tts_enabled: true,
            port: 5000,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned PostgREST rows for wiremock-backed tests. Shapes mirror the
/// `patients` and `appointments` tables.
pub struct MockKioskRows;

impl MockKioskRows {
    pub fn patient_row(cr_number: &str, last_visit: Option<&str>) -> serde_json::Value {
        json!({
            "cr_number": cr_number,
            "name": "Kavya Devi",
            "age": 42,
            "gender": "F",
            "doctor": "Dr. Rao",
            "department": "General Medicine",
            "last_visit": last_visit,
        })
    }

    pub fn appointment_row(id: i64, cr_number: &str, appointment_time: &str) -> serde_json::Value {
        json!({
            "id": id,
            "cr_number": cr_number,
            "doctor": "Dr. Rao",
            "appointment_time": appointment_time,
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "error": {
                "message": message,
                "code": code
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.supabase_url, "http://localhost:54321");
        assert_eq!(app_config.supabase_service_key, "test-service-role-key");
        assert!(app_config.is_configured());
        assert!(app_config.is_speech_configured());
    }

    #[test]
    fn patient_row_carries_requested_visit_date() {
        let row = MockKioskRows::patient_row("CR12345", Some("2026-02-01"));
        assert_eq!(row["cr_number"], "CR12345");
        assert_eq!(row["last_visit"], "2026-02-01");

        let unseen = MockKioskRows::patient_row("CR12345", None);
        assert!(unseen["last_visit"].is_null());
    }
}
