use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patient_cell::models::PatientError;
use patient_cell::services::PatientLookupService;
use shared_utils::test_utils::{MockKioskRows, TestConfig};

async fn lookup_against(mock_server: &MockServer) -> PatientLookupService {
    let mut config = TestConfig::default().to_app_config();
    config.supabase_url = mock_server.uri();
    PatientLookupService::new(&config)
}

#[tokio::test]
async fn finds_patient_by_cr_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .and(query_param("cr_number", "eq.CR12345"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([MockKioskRows::patient_row("CR12345", Some("2026-02-01"))])),
        )
        .mount(&mock_server)
        .await;

    let service = lookup_against(&mock_server).await;
    let patient = service.find_by_cr_number("CR12345").await.unwrap();

    assert_eq!(patient.cr_number, "CR12345");
    assert_eq!(patient.name, "Kavya Devi");
    assert_eq!(
        patient.last_visit,
        Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    );
}

#[tokio::test]
async fn missing_row_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let service = lookup_against(&mock_server).await;
    let result = service.find_by_cr_number("CR99999").await;

    assert_matches!(result, Err(PatientError::NotFound));
}

#[tokio::test]
async fn cr_numbers_are_url_encoded_in_the_query() {
    let mock_server = MockServer::start().await;

    // The matcher sees the decoded value; a raw space in the path would
    // never have produced a valid request in the first place.
    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .and(query_param("cr_number", "eq.CR 42&x"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([MockKioskRows::patient_row("CR 42&x", None)])),
        )
        .mount(&mock_server)
        .await;

    let service = lookup_against(&mock_server).await;
    let patient = service.find_by_cr_number("CR 42&x").await.unwrap();

    assert_eq!(patient.cr_number, "CR 42&x");
    assert_eq!(patient.last_visit, None);
}

#[tokio::test]
async fn storage_failure_surfaces_as_database_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(MockKioskRows::error_response("connection lost", "XX000")),
        )
        .mount(&mock_server)
        .await;

    let service = lookup_against(&mock_server).await;
    let result = service.find_by_cr_number("CR12345").await;

    assert_matches!(result, Err(PatientError::Database(_)));
}
