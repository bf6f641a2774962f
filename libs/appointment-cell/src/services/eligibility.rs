use chrono::NaiveDate;

use crate::models::{AppointmentError, REVISIT_WINDOW_DAYS};

/// Revisit policy: the last visit must be readable and at most
/// [`REVISIT_WINDOW_DAYS`] days before `today`. A missing date fails closed
/// because an unverifiable claim gets no free revisit. Returns the elapsed
/// days for logging.
pub fn check_revisit_eligibility(
    last_visit: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<i64, AppointmentError> {
    let last_visit = last_visit.ok_or(AppointmentError::RevisitExpired)?;
    let days_since = (today - last_visit).num_days();
    if days_since > REVISIT_WINDOW_DAYS {
        return Err(AppointmentError::RevisitExpired);
    }
    Ok(days_since)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn visit_on_the_same_day_is_eligible() {
        assert_matches!(check_revisit_eligibility(Some(today()), today()), Ok(0));
    }

    #[test]
    fn visit_exactly_fourteen_days_ago_is_eligible() {
        let last_visit = today() - Duration::days(14);
        assert_matches!(check_revisit_eligibility(Some(last_visit), today()), Ok(14));
    }

    #[test]
    fn visit_fifteen_days_ago_is_expired() {
        let last_visit = today() - Duration::days(15);
        assert_matches!(
            check_revisit_eligibility(Some(last_visit), today()),
            Err(AppointmentError::RevisitExpired)
        );
    }

    #[test]
    fn missing_visit_date_fails_closed() {
        assert_matches!(
            check_revisit_eligibility(None, today()),
            Err(AppointmentError::RevisitExpired)
        );
    }

    #[test]
    fn future_visit_date_is_tolerated() {
        // Clock skew between the registration desk and this host should not
        // lock a patient out.
        let last_visit = today() + Duration::days(1);
        assert_matches!(check_revisit_eligibility(Some(last_visit), today()), Ok(-1));
    }
}
