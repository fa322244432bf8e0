use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use copilot_core::{SessionState, SessionView, TurnOutcome};
use tracing::info;
use uuid::Uuid;

use crate::{
    services::ServiceError,
    state::AppState,
    types::{HealthResponse, SendMessageRequest, SessionCreated},
};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        sessions: state.sessions.len().await,
    })
}

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let session_id = state.sessions.create().await;
    let view = SessionView::render(&SessionState::new());

    (StatusCode::CREATED, Json(SessionCreated { session_id, view }))
}

pub async fn get_session(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SessionView>, ServiceError> {
    let Path(id) = path?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ServiceError::SessionNotFound(id))?;
    let session = session.lock().await;

    Ok(Json(SessionView::render(&session)))
}

pub async fn send_message(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SessionView>, ServiceError> {
    let Path(id) = path?;
    let Json(request) = body?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ServiceError::SessionNotFound(id))?;
    let mut session = session.lock().await;

    if let TurnOutcome::Completed { turn } = session.submit(state.agent.as_ref(), &request.message).await? {
        info!(session_id = %id, turn, "Turn completed");
    }

    Ok(Json(SessionView::render(&session)))
}

pub async fn end_session(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ServiceError> {
    let Path(id) = path?;
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::SessionNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_router, config::Config};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use copilot_core::{Agent, AgentError, AgentResult, DashboardView, RowStyle};
    use serde_json::{json, Value};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::ServiceExt;

    /// Classifies anything mentioning "refund" as an escalated billing ticket
    struct FakeAgent {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Agent for FakeAgent {
        fn name(&self) -> &str {
            "fake"
        }

        async fn handle_message(&self, text: &str, _return_log: bool) -> Result<AgentResult, AgentError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            match text {
                "fail" => Err(AgentError::Transport("agent unavailable".into())),
                "bare" => Ok(AgentResult::Response("OK".into())),
                text if text.contains("refund") => Ok(AgentResult::ResponseWithLog(
                    "Escalating your refund request.".into(),
                    json!({
                        "Ticket ID": format!("T{n}"),
                        "Classification": {"topic": "billing", "sentiment": "negative", "priority": "high"},
                        "Should Escalate": true,
                    })
                    .as_object()
                    .cloned(),
                )),
                _ => Ok(AgentResult::ResponseWithLog(
                    "Hi there".into(),
                    json!({
                        "Ticket ID": format!("T{n}"),
                        "Classification": {"topic": "billing", "sentiment": "neutral", "priority": "low"},
                        "Should Escalate": false,
                    })
                    .as_object()
                    .cloned(),
                )),
            }
        }
    }

    fn app() -> Router {
        let config = Config::from_lookup(|_| None);
        let agent = Arc::new(FakeAgent {
            calls: AtomicUsize::new(0),
        });
        build_router(AppState::new(config, agent))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = call(app, Method::POST, "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["view"]["dashboard"]["kind"], "empty");
        body["session_id"].as_str().unwrap().to_string()
    }

    async fn send(app: &Router, id: &str, message: &str) -> (StatusCode, Value) {
        call(
            app,
            Method::POST,
            &format!("/api/sessions/{id}/messages"),
            Some(json!({ "message": message })),
        )
        .await
    }

    fn view(value: Value) -> SessionView {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        new_session(&app).await;

        let (status, body) = call(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "sessions": 1}));
    }

    #[tokio::test]
    async fn test_hello_turn() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(&app, &id, "Hello").await;
        assert_eq!(status, StatusCode::OK);

        let view = view(body);
        let contents: Vec<&str> = view.transcript.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["Hello", "Hi there"]);

        let DashboardView::Table { columns, rows } = view.dashboard else {
            panic!("expected a table");
        };
        assert!(!columns.iter().any(|c| c == "Should Escalate"));
        assert_eq!(rows[0].cells(), ["T1", "billing", "neutral", "low", "Hi there"]);
        assert_eq!(rows[0].style, RowStyle::Routine);

        assert_eq!(view.raw_logs.len(), 1);
        assert_eq!(view.raw_logs[0].entry.assistant_response(), Some(&json!("Hi there")));
    }

    #[tokio::test]
    async fn test_escalated_and_bare_turns() {
        let app = app();
        let id = new_session(&app).await;

        send(&app, &id, "I want a refund").await;
        let (_, body) = send(&app, &id, "bare").await;

        let view = view(body);
        let DashboardView::Table { rows, .. } = view.dashboard else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].style, RowStyle::Escalated);
        assert_eq!(rows[1].style, RowStyle::Routine);
        assert_eq!(rows[1].cells(), ["-", "-", "-", "-", "OK"]);
        assert_eq!(view.raw_logs[1].entry.classification(), Some(&json!("N/A")));
        assert_eq!(view.raw_logs[1].entry.ticket_id(), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_blank_message_changes_nothing() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(&app, &id, "   ").await;
        assert_eq!(status, StatusCode::OK);

        let view = view(body);
        assert!(view.transcript.is_empty());
        assert!(matches!(view.dashboard, DashboardView::Empty { .. }));
    }

    #[tokio::test]
    async fn test_agent_failure_is_reported() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(&app, &id, "fail").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Agent request failed: agent unavailable");

        let (status, body) = call(&app, Method::GET, &format!("/api/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let view = view(body);
        assert_eq!(view.transcript.len(), 1);
        assert!(view.raw_logs.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_and_can_end() {
        let app = app();
        let first = new_session(&app).await;
        let second = new_session(&app).await;

        send(&app, &first, "Hello").await;
        let (_, body) = call(&app, Method::GET, &format!("/api/sessions/{second}"), None).await;
        assert!(view(body).transcript.is_empty());

        let (status, _) = call(&app, Method::DELETE, &format!("/api/sessions/{first}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, &first, "Hello again").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains(&first));
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids() {
        let app = app();
        let missing = Uuid::new_v4();

        let (status, _) = call(&app, Method::GET, &format!("/api/sessions/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(&app, Method::DELETE, &format!("/api/sessions/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, Method::GET, "/api/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("UUID"));

        let (status, body) = send(&app, "not-a-uuid", "Hello").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_message_body() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = call(
            &app,
            Method::POST,
            &format!("/api/sessions/{id}/messages"),
            Some(json!({ "text": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("message"));

        let (_, body) = call(&app, Method::GET, &format!("/api/sessions/{id}"), None).await;
        assert!(view(body).transcript.is_empty());
    }
}
