use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use patient_cell::models::Patient;
use shared_utils::time::format_slip_time;

/// Revisits are free for this many days after the last recorded visit.
/// Hospital policy, not derived from anything else in the system.
pub const REVISIT_WINDOW_DAYS: i64 = 14;

/// A walk-in booking is stamped this far into the future so the patient has
/// time to reach the consultation room.
pub const APPOINTMENT_LEAD_MINUTES: i64 = 15;

/// How long a printed slip stays valid. Deliberately independent of
/// [`REVISIT_WINDOW_DAYS`]; the two move for different reasons.
pub const SLIP_VALIDITY_HOURS: i64 = 5;

/// Hospital name printed on every slip.
pub const HOSPITAL_NAME: &str = "NIMS ";

/// Stored appointment row. `id` is generated by the database sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub cr_number: String,
    pub doctor: String,
    pub appointment_time: NaiveDateTime,
}

/// Insert payload for the `appointments` table.
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub cr_number: String,
    pub doctor: String,
    pub appointment_time: NaiveDateTime,
}

/// JSON body returned to the kiosk on a successful booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub status: String,
    pub appointment_id: i64,
    pub name: String,
    pub cr_number: String,
    pub age: i32,
    pub gender: String,
    pub doctor: String,
    pub department: String,
    pub appointment_time: String,
}

impl BookingConfirmation {
    pub fn new(patient: &Patient, appointment: &Appointment) -> Self {
        Self {
            status: "success".to_string(),
            appointment_id: appointment.id,
            name: patient.name.clone(),
            cr_number: patient.cr_number.clone(),
            age: patient.age,
            gender: patient.gender.clone(),
            doctor: patient.doctor.clone(),
            department: patient.department.clone(),
            appointment_time: format_slip_time(appointment.appointment_time),
        }
    }
}

/// Everything the printable slip shows, with times already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct Slip {
    pub appointment_id: i64,
    pub name: String,
    pub cr_number: String,
    pub age: i32,
    pub gender: String,
    pub doctor: String,
    pub department: String,
    pub appointment_time: String,
    pub valid_upto: String,
}

impl Slip {
    pub fn compose(appointment: &Appointment, patient: &Patient) -> Self {
        let valid_upto = appointment.appointment_time + Duration::hours(SLIP_VALIDITY_HOURS);
        Self {
            appointment_id: appointment.id,
            name: patient.name.clone(),
            cr_number: patient.cr_number.clone(),
            age: patient.age,
            gender: patient.gender.clone(),
            doctor: patient.doctor.clone(),
            department: patient.department.clone(),
            appointment_time: format_slip_time(appointment.appointment_time),
            valid_upto: format_slip_time(valid_upto),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Patient not found")]
    PatientNotFound,

    #[error("Revisit window exceeded")]
    RevisitExpired,

    #[error("Appointment not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_patient() -> Patient {
        serde_json::from_value(serde_json::json!({
            "cr_number": "CR777",
            "name": "Kavya Devi",
            "age": 42,
            "gender": "F",
            "doctor": "Dr. Rao",
            "department": "General Medicine",
            "last_visit": "2026-02-01",
        }))
        .unwrap()
    }

    #[test]
    fn slip_validity_runs_five_hours_past_the_appointment() {
        let appointment = Appointment {
            id: 12,
            cr_number: "CR777".to_string(),
            doctor: "Dr. Rao".to_string(),
            appointment_time: NaiveDate::from_ymd_opt(2026, 3, 5)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        };

        let slip = Slip::compose(&appointment, &sample_patient());

        assert_eq!(slip.appointment_time, "10:30 AM, 05-Mar-2026");
        assert_eq!(slip.valid_upto, "03:30 PM, 05-Mar-2026");
    }

    #[test]
    fn confirmation_reports_the_stored_appointment() {
        let appointment = Appointment {
            id: 71,
            cr_number: "CR777".to_string(),
            doctor: "Dr. Rao".to_string(),
            appointment_time: NaiveDate::from_ymd_opt(2026, 3, 5)
                .unwrap()
                .and_hms_opt(23, 45, 0)
                .unwrap(),
        };

        let confirmation = BookingConfirmation::new(&sample_patient(), &appointment);

        assert_eq!(confirmation.status, "success");
        assert_eq!(confirmation.appointment_id, 71);
        assert_eq!(confirmation.appointment_time, "11:45 PM, 05-Mar-2026");
    }
}
