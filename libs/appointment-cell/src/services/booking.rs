use std::sync::Arc;

use chrono::{Duration, Local};
use serde_json::json;
use tracing::{debug, info};

use patient_cell::models::PatientError;
use patient_cell::services::PatientLookupService;
use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{
    Appointment, AppointmentError, BookingConfirmation, NewAppointment,
    APPOINTMENT_LEAD_MINUTES,
};
use crate::services::eligibility::check_revisit_eligibility;

pub struct AppointmentBookingService {
    supabase: Arc<SupabaseClient>,
    lookup: PatientLookupService,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        let supabase = Arc::new(SupabaseClient::new(config));
        let lookup = PatientLookupService::with_client(Arc::clone(&supabase));

        Self { supabase, lookup }
    }

    /// Book a revisit for a returning patient: look the CR number up, apply
    /// the revisit window, then store an appointment a few minutes out with
    /// the patient's registered doctor.
    pub async fn book(&self, cr_number: &str) -> Result<BookingConfirmation, AppointmentError> {
        info!("Booking revisit for CR number: {}", cr_number);

        let patient = self
            .lookup
            .find_by_cr_number(cr_number)
            .await
            .map_err(|e| match e {
                PatientError::NotFound => AppointmentError::PatientNotFound,
                PatientError::Database(msg) => AppointmentError::Database(msg),
            })?;

        let today = Local::now().date_naive();
        let days_since = check_revisit_eligibility(patient.last_visit, today)?;
        debug!(
            "CR number {} last visited {} day(s) ago, within the window",
            cr_number, days_since
        );

        let appointment_time =
            Local::now().naive_local() + Duration::minutes(APPOINTMENT_LEAD_MINUTES);
        let new_appointment = NewAppointment {
            cr_number: patient.cr_number.clone(),
            doctor: patient.doctor.clone(),
            appointment_time,
        };

        let appointment: Appointment = self
            .supabase
            .insert_returning("/rest/v1/appointments", json!(new_appointment))
            .await
            .map_err(|e| AppointmentError::Database(e.to_string()))?;

        info!(
            "Appointment {} stored for CR number {} at {}",
            appointment.id, appointment.cr_number, appointment.appointment_time
        );

        Ok(BookingConfirmation::new(&patient, &appointment))
    }
}
