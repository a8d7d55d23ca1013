#![cfg(not(coverage))]

use super::*;
use crate::state::session::{Session, SessionStore};
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> (ApiClient, SessionStore) {
    let session = SessionStore::in_memory();
    let client = ApiClient::new_with_base_url(server.base_url()).with_session(session.clone());
    (client, session)
}

fn signed_in(session: &SessionStore, role: Role) {
    session
        .persist(&Session {
            token: "tok-1".into(),
            role,
        })
        .unwrap();
}

#[tokio::test]
async fn login_persists_token_and_role() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "email": "desk@salon.test", "password": "secret" }));
        then.status(200)
            .json_body(json!({ "token": "tok-1", "role": "receptionist", "message": "ok" }));
    });
    let (client, session) = client_for(&server);

    let result = client
        .login(LoginRequest {
            email: "desk@salon.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.role, Role::Receptionist);
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.current_role(), Some(Role::Receptionist));
}

#[tokio::test]
async fn login_rejects_roles_outside_the_dashboard() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200)
            .json_body(json!({ "token": "tok-1", "role": "employee" }));
    });
    let (client, session) = client_for(&server);

    let err = client
        .login(LoginRequest {
            email: "staff@salon.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(session.current().is_none());
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(400)
            .json_body(json!({ "message": "Invalid credentials" }));
    });
    let (client, _session) = client_for(&server);

    let err = client
        .login(LoginRequest {
            email: "desk@salon.test".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Invalid credentials");
}

#[tokio::test]
async fn requests_carry_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/employees")
            .header("authorization", "Bearer tok-1");
        then.status(200).json_body(json!({
            "employees": [
                { "_id": "e1", "name": "Asha", "email": "asha@salon.test", "role": "employee", "status": true }
            ]
        }));
    });
    let (client, session) = client_for(&server);
    signed_in(&session, Role::Admin);

    let employees = client.get_employees().await.unwrap();

    mock.assert();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Asha");
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/appointments");
        then.status(401).json_body(json!({ "message": "Token expired" }));
    });
    let (client, session) = client_for(&server);
    signed_in(&session, Role::Receptionist);

    let err = client.get_appointments().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Token expired");
    assert!(session.current().is_none());
}

#[tokio::test]
async fn server_error_without_body_uses_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/services");
        then.status(500);
    });
    let (client, _session) = client_for(&server);

    let err = client.get_services().await.unwrap_err();

    assert_eq!(err.error, "Failed to load services");
    assert_eq!(err.code, "HTTP_500");
}

#[tokio::test]
async fn logout_clears_session_even_on_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/logout");
        then.status(500);
    });
    let (client, session) = client_for(&server);
    signed_in(&session, Role::Admin);

    assert!(client.logout().await.is_err());
    assert!(session.current().is_none());
}

#[tokio::test]
async fn get_service_accepts_wrapped_and_bare_bodies() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/services/s1");
        then.status(200).json_body(json!({
            "service": {
                "_id": "s1",
                "name": "Hair",
                "sub_services": [{ "_id": "ss1", "name": "Cut", "price": 500, "duration": "30 min" }]
            }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/services/s2");
        then.status(200).json_body(json!({ "_id": "s2", "name": "Spa", "sub_services": [] }));
    });
    let (client, _session) = client_for(&server);

    let hair = client.get_service("s1").await.unwrap();
    assert_eq!(hair.sub_services[0].price, 500);
    assert_eq!(hair.sub_services[0].duration.as_deref(), Some("30 min"));
    let spa = client.get_service("s2").await.unwrap();
    assert_eq!(spa.name, "Spa");
}

#[tokio::test]
async fn unconfirmed_appointments_use_notification_query() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/appointments")
            .query_param("for_notification", "true");
        then.status(200).json_body(json!([
            { "_id": "a1", "confirmation_status": false, "source": "online" }
        ]));
    });
    let (client, _session) = client_for(&server);

    let items = client.get_unconfirmed_appointments().await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 1);
    assert!(!items[0].confirmation_status);
}

#[tokio::test]
async fn approve_sends_confirmation_and_seen() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/appointments/a1")
            .json_body(json!({ "confirmation_status": true, "seen": true }));
        then.status(200).json_body(json!({ "message": "Appointment updated" }));
    });
    let (client, _session) = client_for(&server);

    let message = client.approve_appointment("a1").await.unwrap();

    mock.assert();
    assert_eq!(message.message.as_deref(), Some("Appointment updated"));
}

#[tokio::test]
async fn status_toggle_sends_only_status() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/auth/e1")
            .json_body(json!({ "status": false }));
        then.status(200);
    });
    let (client, _session) = client_for(&server);

    client.set_employee_status("e1", false).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn employee_attendance_parses_timestamps() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/attendance/employee/e1");
        then.status(200).json_body(json!([
            { "_id": "r1", "employee_id": "e1", "date": "2025-01-10T00:00:00.000Z", "leave": true },
            { "_id": "r2", "employee_id": { "_id": "e1", "name": "Asha" }, "date": "2025-01-11", "leave": false }
        ]));
    });
    let (client, _session) = client_for(&server);

    let records = client.get_employee_attendance("e1").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    assert!(records[0].leave);
    assert!(!records[1].leave);
}

#[tokio::test]
async fn payment_endpoints_format_dates() {
    let server = MockServer::start_async().await;
    let day = server.mock(|when, then| {
        when.method(GET).path("/payments/date/2025-03-04");
        then.status(200).json_body(json!({
            "payments": [{ "_id": "p1", "amount": 700 }, { "_id": "p2", "amount": "300" }]
        }));
    });
    let staff = server.mock(|when, then| {
        when.method(GET).path("/payments/employee/e1/2025-03-04");
        then.status(200).json_body(json!({ "totalAmount": 450, "count": 2 }));
    });
    let (client, _session) = client_for(&server);
    let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

    let payments = client.get_payments_for_date(date).await.unwrap();
    let summary = client.get_employee_day_summary("e1", date).await.unwrap();

    day.assert();
    staff.assert();
    assert_eq!(payments.iter().map(|p| p.amount).sum::<i64>(), 1000);
    assert_eq!(summary.total_amount, 450);
    assert_eq!(summary.count, 2);
}
