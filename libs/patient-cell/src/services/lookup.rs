use std::sync::Arc;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Patient, PatientError};

pub struct PatientLookupService {
    supabase: Arc<SupabaseClient>,
}

impl PatientLookupService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: Arc::new(SupabaseClient::new(config)),
        }
    }

    /// Share a storage client with a sibling service instead of opening a
    /// second connection pool.
    pub fn with_client(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    pub async fn find_by_cr_number(&self, cr_number: &str) -> Result<Patient, PatientError> {
        debug!("Looking up patient for CR number: {}", cr_number);

        let path = format!(
            "/rest/v1/patients?cr_number=eq.{}&limit=1",
            urlencoding::encode(cr_number)
        );

        let patient: Option<Patient> = self
            .supabase
            .fetch_optional(&path)
            .await
            .map_err(|e| PatientError::Database(e.to_string()))?;

        patient.ok_or(PatientError::NotFound)
    }
}
