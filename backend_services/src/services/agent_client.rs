use async_trait::async_trait;
use copilot_core::{Agent, AgentError, AgentReply, AgentResult};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Agent reached over HTTP.
///
/// Each message is a single `POST` to the configured endpoint. There is no
/// timeout and no retry: a slow agent holds the turn until it answers.
pub struct HttpAgent {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
    return_log: bool,
}

impl HttpAgent {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Agent for HttpAgent {
    fn name(&self) -> &str {
        "http"
    }

    async fn handle_message(&self, text: &str, return_log: bool) -> Result<AgentResult, AgentError> {
        debug!(endpoint = %self.endpoint, "Calling agent");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AgentRequest {
                message: text,
                return_log,
            })
            .send()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))?;
        let reply: AgentReply =
            serde_json::from_slice(&body).map_err(|e| AgentError::InvalidReply(e.to_string()))?;

        Ok(reply.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return its base url
    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_pair_reply_and_request_body() {
        let router = Router::new().route(
            "/handle_message",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"message": "Hello", "return_log": true}));
                Json(json!(["Hi there", {"Ticket ID": "T1"}]))
            }),
        );
        let base = spawn_stub(router).await;
        let agent = HttpAgent::new(format!("{base}/handle_message")).unwrap();

        let (response, log) = agent.handle_message("Hello", true).await.unwrap().into_parts();
        assert_eq!(response, "Hi there");
        assert_eq!(log.unwrap().get("Ticket ID"), Some(&json!("T1")));
    }

    #[tokio::test]
    async fn test_bare_reply() {
        let router = Router::new().route("/", post(|| async { Json(json!("OK")) }));
        let agent = HttpAgent::new(spawn_stub(router).await).unwrap();

        let result = agent.handle_message("ping", true).await.unwrap();
        assert_eq!(result, AgentResult::Response("OK".into()));
    }

    #[tokio::test]
    async fn test_error_status() {
        let router = Router::new().route(
            "/",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model offline") }),
        );
        let agent = HttpAgent::new(spawn_stub(router).await).unwrap();

        let err = agent.handle_message("ping", true).await.unwrap_err();
        assert_eq!(
            err,
            AgentError::Status {
                status: 500,
                body: "model offline".into()
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_reply() {
        let router = Router::new().route("/", post(|| async { Json(json!({"unexpected": 1})) }));
        let agent = HttpAgent::new(spawn_stub(router).await).unwrap();

        let err = agent.handle_message("ping", true).await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidReply(_)));
    }

    #[tokio::test]
    async fn test_unreachable_agent() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let agent = HttpAgent::new(format!("http://{addr}/")).unwrap();
        let err = agent.handle_message("ping", true).await.unwrap_err();
        assert!(matches!(err, AgentError::Transport(_)));
    }
}
