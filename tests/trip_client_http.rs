use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tripPlanner::clients::trip_client::{TripApiError, TripClient};
use tripPlanner::models::trip::{CreateTrip, TripOwner};
use warp::Filter;
use warp::http::StatusCode;

fn owner() -> TripOwner {
    TripOwner {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
    }
}

fn spawn_server(received: Arc<Mutex<Option<Value>>>) -> SocketAddr {
    let garbled_trip = warp::path!("trips" / "garbled")
        .and(warp::get())
        .map(|| "<html>maintenance</html>");

    let get_trip = warp::path!("trips" / String)
        .and(warp::get())
        .map(|id: String| {
            if id == "missing" {
                return warp::reply::with_status(
                    warp::reply::json(&json!({ "message": "Trip not found." })),
                    StatusCode::NOT_FOUND,
                );
            }
            warp::reply::with_status(
                warp::reply::json(&json!({
                    "trip": {
                        "id": id,
                        "destination": "Lisbon",
                        "starts_at": "2024-03-05T00:00:00Z",
                        "ends_at": "2024-03-08T00:00:00Z",
                        "is_confirmed": true
                    }
                })),
                StatusCode::OK,
            )
        });

    let create_trip = warp::path!("trips")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: Value| {
            *received.lock().unwrap() = Some(body);
            warp::reply::with_status(
                warp::reply::json(&json!({ "tripId": "trip-123" })),
                StatusCode::CREATED,
            )
        });

    let (addr, server) =
        warp::serve(garbled_trip.or(get_trip).or(create_trip)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn create_posts_trip_with_owner() {
    let received = Arc::new(Mutex::new(None));
    let addr = spawn_server(received.clone());
    let client = TripClient::new(format!("http://{}", addr), owner());

    let trip = CreateTrip {
        destination: "Lisbon".to_string(),
        starts_at: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap(),
        emails_to_invite: vec!["bruno@example.com".to_string()],
    };
    let created = client.create(&trip).await.expect("create should succeed");
    assert_eq!(created.trip_id, "trip-123");

    let body = received.lock().unwrap().clone().expect("server saw a body");
    assert_eq!(body["destination"], "Lisbon");
    assert_eq!(body["emails_to_invite"], json!(["bruno@example.com"]));
    assert_eq!(body["owner_name"], "Ana Souza");
    assert_eq!(body["owner_email"], "ana@example.com");
    assert!(body["starts_at"].as_str().unwrap().starts_with("2024-03-05T00:00:00"));
}

#[tokio::test]
async fn get_by_id_unwraps_trip_envelope() {
    let addr = spawn_server(Arc::new(Mutex::new(None)));
    let client = TripClient::new(format!("http://{}/", addr), owner());

    let trip = client.get_by_id("trip-123").await.expect("get should succeed");
    assert_eq!(trip.id, "trip-123");
    assert_eq!(trip.destination, "Lisbon");
    assert!(trip.is_confirmed);
    assert_eq!(trip.ends_at, Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap());
}

#[tokio::test]
async fn non_success_status_maps_to_server_error() {
    let addr = spawn_server(Arc::new(Mutex::new(None)));
    let client = TripClient::new(format!("http://{}", addr), owner());

    let err = client.get_by_id("missing").await.unwrap_err();
    match err {
        TripApiError::Server { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Trip not found.");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = TripClient::new("http://127.0.0.1:9", owner());
    let err = client.get_by_id("trip-123").await.unwrap_err();
    assert!(matches!(err, TripApiError::Network(_)));
}

#[tokio::test]
async fn non_json_success_body_is_a_json_error() {
    let addr = spawn_server(Arc::new(Mutex::new(None)));
    let client = TripClient::new(format!("http://{}", addr), owner());

    let err = client.get_by_id("garbled").await.unwrap_err();
    assert!(matches!(err, TripApiError::Json(_)));
}
