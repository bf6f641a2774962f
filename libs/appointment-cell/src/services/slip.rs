use std::sync::Arc;

use tracing::{debug, warn};

use patient_cell::models::PatientError;
use patient_cell::services::PatientLookupService;
use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Appointment, AppointmentError, Slip, HOSPITAL_NAME};

pub struct SlipService {
    supabase: Arc<SupabaseClient>,
    lookup: PatientLookupService,
}

impl SlipService {
    pub fn new(config: &AppConfig) -> Self {
        let supabase = Arc::new(SupabaseClient::new(config));
        let lookup = PatientLookupService::with_client(Arc::clone(&supabase));

        Self { supabase, lookup }
    }

    /// Assemble the slip for a stored appointment. `None` means the slip
    /// cannot be rendered (unknown id, or the patient row has vanished);
    /// the handler sends the kiosk back to the home screen in that case.
    pub async fn fetch_slip(&self, appointment_id: i64) -> Result<Option<Slip>, AppointmentError> {
        debug!("Rendering slip for appointment: {}", appointment_id);

        let path = format!("/rest/v1/appointments?id=eq.{}&limit=1", appointment_id);
        let appointment: Option<Appointment> = self
            .supabase
            .fetch_optional(&path)
            .await
            .map_err(|e| AppointmentError::Database(e.to_string()))?;

        let Some(appointment) = appointment else {
            warn!("Slip requested for unknown appointment: {}", appointment_id);
            return Ok(None);
        };

        let patient = match self.lookup.find_by_cr_number(&appointment.cr_number).await {
            Ok(patient) => patient,
            Err(PatientError::NotFound) => {
                warn!(
                    "Appointment {} references missing patient {}",
                    appointment_id, appointment.cr_number
                );
                return Ok(None);
            }
            Err(PatientError::Database(msg)) => return Err(AppointmentError::Database(msg)),
        };

        Ok(Some(Slip::compose(&appointment, &patient)))
    }
}

const SLIP_STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex;justify-content:center;background:#fff;color:#111}\
.slip{width:320px;padding:16px;border:1px dashed #333;margin-top:24px}\
h1{font-size:22px;text-align:center;margin:0}\
.sub{text-align:center;font-size:12px;margin:2px 0 12px;color:#444}\
table{width:100%;border-collapse:collapse;font-size:14px}\
td{padding:3px 0;vertical-align:top}\
td:first-child{color:#555;width:42%}\
.times{margin-top:12px;border-top:1px solid #333;padding-top:8px;font-size:14px}\
.home{display:block;text-align:center;margin-top:16px;font-size:13px}\
@media print{.home{display:none}}";

/// Printable slip page. Auto-prints on load; the link back to the home
/// screen is hidden from the printout.
pub fn render_slip_page(slip: &Slip) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Appointment Slip</title>\n<style>{style}</style>\n</head>\n<body onload=\"window.print()\">\n<div class=\"slip\">\n<h1>{hospital}</h1>\n<p class=\"sub\">Revisit Appointment Slip</p>\n<table>\n<tr><td>Name</td><td>{name}</td></tr>\n<tr><td>CR Number</td><td>{cr_number}</td></tr>\n<tr><td>Age</td><td>{age}</td></tr>\n<tr><td>Gender</td><td>{gender}</td></tr>\n<tr><td>Doctor</td><td>{doctor}</td></tr>\n<tr><td>Department</td><td>{department}</td></tr>\n</table>\n<div class=\"times\">\n<div>Appointment: {appointment_time}</div>\n<div>Valid upto: {valid_upto}</div>\n</div>\n<a class=\"home\" href=\"/\">Back to kiosk</a>\n</div>\n</body>\n</html>\n",
        style = SLIP_STYLE,
        hospital = html_escape(HOSPITAL_NAME.trim_end()),
        name = html_escape(&slip.name),
        cr_number = html_escape(&slip.cr_number),
        age = slip.age,
        gender = html_escape(&slip.gender),
        doctor = html_escape(&slip.doctor),
        department = html_escape(&slip.department),
        appointment_time = html_escape(&slip.appointment_time),
        valid_upto = html_escape(&slip.valid_upto),
    )
}

/// Minimal HTML entity escaping for values that come from patient records.
fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_neutralizes_markup_in_names() {
        assert_eq!(html_escape("O'Brien <b>"), "O&#39;Brien &lt;b&gt;");
        assert_eq!(html_escape("A & B"), "A &amp; B");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn slip_page_shows_both_times_and_the_hospital_name() {
        let slip = Slip {
            appointment_id: 12,
            name: "Kavya <Devi>".to_string(),
            cr_number: "CR777".to_string(),
            age: 42,
            gender: "F".to_string(),
            doctor: "Dr. Rao".to_string(),
            department: "General Medicine".to_string(),
            appointment_time: "10:30 AM, 05-Mar-2026".to_string(),
            valid_upto: "03:30 PM, 05-Mar-2026".to_string(),
        };

        let page = render_slip_page(&slip);

        assert!(page.contains("NIMS"));
        assert!(page.contains("10:30 AM, 05-Mar-2026"));
        assert!(page.contains("03:30 PM, 05-Mar-2026"));
        assert!(page.contains("Kavya &lt;Devi&gt;"));
        assert!(!page.contains("Kavya <Devi>"));
        assert!(page.contains("window.print()"));
    }
}
