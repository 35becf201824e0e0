// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use roomslot::{BookingValidator, CalendarDate};
use roomslot_api::{ActionRequest, ActionResponse, ApiError, run_action};
use roomslot_domain::DomainError;
use roomslot_persistence::{BookingRecord, Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Roomslot Server - custom action server for the hotel booking assistant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5055)]
    port: u16,

    /// IANA timezone used to decide what "today" is
    #[arg(short, long, default_value = "UTC", value_parser = parse_timezone)]
    timezone: Tz,
}

fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>()
        .map_err(|e| format!("Unknown timezone '{name}': {e}"))
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Booking storage. One connection, serialized by the mutex.
    persistence: Arc<Mutex<Persistence>>,
    validator: BookingValidator,
    /// The deployment timezone.
    timezone: Tz,
    /// Wall clock; replaced in tests.
    clock: fn() -> DateTime<Utc>,
}

impl AppState {
    fn new(persistence: Persistence, timezone: Tz) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            validator: BookingValidator::default(),
            timezone,
            clock: Utc::now,
        }
    }

    /// Today's date in the deployment timezone.
    fn today(&self) -> Result<CalendarDate, DomainError> {
        CalendarDate::today_in(self.timezone, (self.clock)())
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::UnknownAction { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        if let PersistenceError::BookingNotFound(_) = err {
            return Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            };
        }

        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        error!(error = %err, "Could not determine today's date");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/webhook`.
///
/// Runs the requested custom action against today's date in the
/// configured timezone.
async fn handle_webhook(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, HttpError> {
    info!(action = %request.next_action, "Handling webhook request");

    let today: CalendarDate = app_state.today()?;

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<ActionResponse, ApiError> =
        run_action(&app_state.validator, &request, today, &mut *persistence);
    drop(persistence);

    match result {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            warn!(error = %err, "Action failed");
            Err(err.into())
        }
    }
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/bookings/{booking_id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingRecord>, HttpError> {
    info!(booking_id, "Handling get_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let record: BookingRecord = persistence.get_booking(booking_id)?;
    drop(persistence);

    Ok(Json(record))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(handle_health))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(timezone = %args.timezone, "Initializing Roomslot Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app: Router = build_router(AppState::new(persistence, args.timezone));

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use chrono::TimeZone;
    use roomslot_api::Event;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// 23:30 UTC on 13 January 2026; already the 14th east of UTC.
    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 13, 23, 30, 0).unwrap()
    }

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state(timezone: Tz) -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            clock: fixed_clock,
            ..AppState::new(persistence, timezone)
        }
    }

    fn webhook_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn booking_payload(checkin: &str) -> Value {
        json!({
            "next_action": "action_validate_inputs",
            "sender_id": "guest-1",
            "tracker": {
                "sender_id": "guest-1",
                "slots": {
                    "name": "bob smith",
                    "checkin_date": checkin,
                    "checkout_date": "27 January 2026",
                    "number_of_guests": "3",
                }
            }
        })
    }

    async fn body_json(response: Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app: Router = build_router(create_test_app_state(Tz::UTC));

        let response: Response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_webhook_stores_booking_and_serves_it() {
        let app_state: AppState = create_test_app_state(Tz::UTC);
        let app: Router = build_router(app_state.clone());

        let response: Response = app
            .clone()
            .oneshot(webhook_request(&booking_payload("25 January 2026")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let action_response: ActionResponse =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(
            action_response.responses[0].text,
            "Your booking for Bob Smith from 25-01-2026 to 27-01-2026 for 3 guest(s) is confirmed! Your booking ID is 1."
        );
        assert_eq!(
            action_response.events.last(),
            Some(&Event::set_slot("booking_id", "1"))
        );
        assert_eq!(app_state.persistence.lock().await.count_bookings().unwrap(), 1);

        let booking: Response = app
            .oneshot(
                Request::builder()
                    .uri("/bookings/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(booking.status(), StatusCode::OK);

        let record: BookingRecord = serde_json::from_value(body_json(booking).await).unwrap();
        assert_eq!(record.name, "Bob Smith");
        assert_eq!(record.guests, 3);
    }

    #[tokio::test]
    async fn test_today_follows_configured_timezone() {
        // 13 January is still today in UTC but already past in Auckland.
        let utc_app: Router = build_router(create_test_app_state(Tz::UTC));
        let auckland_app: Router = build_router(create_test_app_state(Tz::Pacific__Auckland));

        let utc_response: ActionResponse = serde_json::from_value(
            body_json(
                utc_app
                    .oneshot(webhook_request(&booking_payload("13 January 2026")))
                    .await
                    .unwrap(),
            )
            .await,
        )
        .unwrap();
        let auckland_response: ActionResponse = serde_json::from_value(
            body_json(
                auckland_app
                    .oneshot(webhook_request(&booking_payload("13 January 2026")))
                    .await
                    .unwrap(),
            )
            .await,
        )
        .unwrap();

        assert_eq!(utc_response.events.len(), 5);
        assert_eq!(
            auckland_response.events,
            vec![
                Event::Slot {
                    name: String::from("checkin_date"),
                    value: None,
                },
                Event::followup_booking_form(),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_action_is_bad_request() {
        let app: Router = build_router(create_test_app_state(Tz::UTC));

        let response: Response = app
            .oneshot(webhook_request(&json!({ "next_action": "action_book_spa" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error_response.error, "Unknown action: action_book_spa");
    }

    #[tokio::test]
    async fn test_reset_action_over_http() {
        let app: Router = build_router(create_test_app_state(Tz::UTC));

        let response: Response = app
            .oneshot(webhook_request(&json!({ "next_action": "action_reset_slots" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "events": [{ "event": "reset_slots" }],
                "responses": [{ "text": "Resetting all your data. Let's start fresh!" }],
            })
        );
    }

    #[tokio::test]
    async fn test_missing_booking_is_not_found() {
        let app: Router = build_router(create_test_app_state(Tz::UTC));

        let response: Response = app
            .oneshot(
                Request::builder()
                    .uri("/bookings/404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error_response: ErrorResponse =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error_response.error, "Booking not found: 404");
    }

    #[test]
    fn test_timezone_argument_parsing() {
        let args: Args =
            Args::try_parse_from(["roomslot-server", "--timezone", "Europe/Berlin"]).unwrap();

        assert_eq!(args.timezone, Tz::Europe__Berlin);
        assert_eq!(args.port, 5055);
        assert!(args.database.is_none());
        assert!(Args::try_parse_from(["roomslot-server", "--timezone", "Mars/Olympus"]).is_err());
    }
}
