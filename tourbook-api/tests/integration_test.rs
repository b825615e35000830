use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tourbook_api::{app, AppState};
use tourbook_core::{BookingNotifier, NotifyError};
use tourbook_shared::models::BookingConfirmedEvent;
use tourbook_store::InMemoryTourRepository;
use tower::ServiceExt;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<BookingConfirmedEvent>>,
}

#[async_trait]
impl BookingNotifier for RecordingNotifier {
    async fn send_confirmation(&self, event: &BookingConfirmedEvent) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn test_app() -> (Router, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = AppState::new(Arc::new(InMemoryTourRepository::new()), notifier.clone());
    (app(state), notifier)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_list_tours() {
    let (app, _) = test_app();

    let (status, body) = send(&app, Method::GET, "/tours", None).await;
    assert_eq!(status, StatusCode::OK);

    let tours: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        tours,
        serde_json::json!([
            {"id": 1, "name": "Paris Adventure", "description": "Explore the City of Light", "price": 1000.0, "transport": "Plane"},
            {"id": 2, "name": "Rome Getaway", "description": "Discover ancient history", "price": 1200.0, "transport": "Train"}
        ])
    );
}

#[tokio::test]
async fn test_book_then_list_bookings() {
    let (app, notifier) = test_app();

    let (status, body) = send(&app, Method::POST, "/book", Some(r#"{"tour_id": 1, "email": "a@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "Tour booked successfully");
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/bookings", None).await;
    assert_eq!(status, StatusCode::OK);

    let views: Value = serde_json::from_str(&body).unwrap();
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["id"], 1);
    assert_eq!(views[0]["tour"]["name"], "Paris Adventure");
    assert_eq!(views[0]["tour"]["transport"], "Plane");
    assert_eq!(views[0]["email"], "a@x.com");
    assert_eq!(views[0]["status"], "Completed");

    let date = views[0]["date"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
}

#[tokio::test]
async fn test_unknown_tour_gets_zero_value_tour() {
    let (app, _) = test_app();

    send(&app, Method::POST, "/book", Some(r#"{"tour_id": 2, "email": "r@x.com"}"#)).await;
    let (status, _) = send(&app, Method::POST, "/book", Some(r#"{"tour_id": 999, "email": "z@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/bookings", None).await;
    let views: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(views[0]["id"], 1);
    assert_eq!(views[0]["tour"]["name"], "Rome Getaway");
    assert_eq!(views[1]["id"], 2);
    assert_eq!(
        views[1]["tour"],
        serde_json::json!({"id": 0, "name": "", "description": "", "price": 0.0, "transport": ""})
    );
}

#[tokio::test]
async fn test_malformed_booking_is_bad_request() {
    let (app, notifier) = test_app();

    for body in [r#"{"tour_id": "#, r#"{"tour_id": "one", "email": "a@x.com"}"#, ""] {
        let (status, text) = send(&app, Method::POST, "/book", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);

        let error: Value = serde_json::from_str(&text).unwrap();
        assert!(!error["error"].as_str().unwrap().is_empty());
    }

    assert!(notifier.sent.lock().unwrap().is_empty());
    let (_, body) = send(&app, Method::GET, "/bookings", None).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_booking_usage_hint() {
    let (app, _) = test_app();

    let (status, body) = send(&app, Method::GET, "/book", None).await;
    assert_eq!(status, StatusCode::OK);

    let hint: Value = serde_json::from_str(&body).unwrap();
    assert!(hint["message"].as_str().unwrap().contains("POST"));
    let example: Value = serde_json::from_str(hint["example"].as_str().unwrap()).unwrap();
    assert_eq!(example["tour_id"], 1);
}

#[tokio::test]
async fn test_unmatched_routes_are_not_found() {
    let (app, _) = test_app();

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "404 page not found");

    let (status, _) = send(&app, Method::DELETE, "/tours", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/bookings", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sequential_ids_across_requests() {
    let (app, notifier) = test_app();

    for i in 0..4 {
        let payload = format!(r#"{{"tour_id": 1, "email": "user{}@x.com"}}"#, i);
        let (status, _) = send(&app, Method::POST, "/book", Some(payload.as_str())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/bookings", None).await;
    let views: Value = serde_json::from_str(&body).unwrap();
    let ids: Vec<i64> = views.as_array().unwrap().iter().map(|v| v["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let emails: Vec<String> = notifier.sent.lock().unwrap().iter().map(|e| e.recipient().to_string()).collect();
    assert_eq!(emails, vec!["user0@x.com", "user1@x.com", "user2@x.com", "user3@x.com"]);
}
