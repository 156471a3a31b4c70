//! HTTP implementation of the backend trait over reqwest

use crate::client::Backend;
use crate::config::HitlConfig;
use crate::error::{HitlError, Result};
use async_trait::async_trait;
use hitl_types::{
    Approval, ApprovalId, Decision, ErrorBody, Payload, Workflow, WorkflowDraft, WorkflowId,
    WorkflowStatus,
};
use reqwest::{Client as HttpClient, Response};
use serde_json::json;

/// Thin reqwest wrapper over the remote workflow store
///
/// One fixed base URL, JSON bodies, no auth headers, no retries. Failures
/// carry the backend's `message` field when the body provides one.
pub struct HttpBackend {
    base_url: String,
    http_client: HttpClient,
}

impl HttpBackend {
    pub fn new(config: &HitlConfig) -> Self {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.api_root(),
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an error, preferring the backend's
    /// own message over the raw body
    async fn api_error(response: Response) -> HitlError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body);

        HitlError::Api { status, message }
    }

    async fn expect_success(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::api_error(response).await)
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        let response = self.http_client.get(self.url("/workflows")).send().await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Vec<Workflow>> = response.json().await?;
        Ok(payload.data)
    }

    async fn get_workflow(&self, id: &WorkflowId) -> Result<Workflow> {
        let response = self
            .http_client
            .get(self.url(&format!("/workflows/{}", id)))
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Workflow> = response.json().await?;
        Ok(payload.data)
    }

    async fn create_workflow(&self, draft: &WorkflowDraft) -> Result<Workflow> {
        let response = self
            .http_client
            .post(self.url("/workflows"))
            .json(draft)
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Workflow> = response.json().await?;
        Ok(payload.data)
    }

    async fn update_workflow_status(&self, id: &WorkflowId, status: WorkflowStatus) -> Result<()> {
        let response = self
            .http_client
            .patch(self.url(&format!("/workflows/{}/status", id)))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn delete_workflow(&self, id: &WorkflowId) -> Result<()> {
        let response = self
            .http_client
            .delete(self.url(&format!("/workflows/{}", id)))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn list_pending_approvals(&self) -> Result<Vec<Approval>> {
        let response = self
            .http_client
            .get(self.url("/approvals/pending"))
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Vec<Approval>> = response.json().await?;
        Ok(payload.data)
    }

    async fn list_approvals(&self) -> Result<Vec<Approval>> {
        let response = self.http_client.get(self.url("/approvals")).send().await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Vec<Approval>> = response.json().await?;
        Ok(payload.data)
    }

    async fn get_approval(&self, id: &ApprovalId) -> Result<Approval> {
        let response = self
            .http_client
            .get(self.url(&format!("/approvals/{}", id)))
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        let payload: Payload<Approval> = response.json().await?;
        Ok(payload.data)
    }

    async fn approve(&self, id: &ApprovalId, decision: &Decision) -> Result<()> {
        let response = self
            .http_client
            .post(self.url(&format!("/approvals/{}/approve", id)))
            .json(decision)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn reject(&self, id: &ApprovalId, decision: &Decision) -> Result<()> {
        let response = self
            .http_client
            .post(self.url(&format!("/approvals/{}/reject", id)))
            .json(decision)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HitlConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> HttpBackend {
        let config = HitlConfig::from_json_str(&format!(
            r#"{{"api": {{"base_url": "{}"}}}}"#,
            server.uri()
        ))
        .unwrap();
        HttpBackend::new(&config)
    }

    fn workflow_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": "Deploy to Production",
            "description": "Ship release 2.4",
            "type": "deployment",
            "riskLevel": "high",
            "status": status,
            "createdAt": "2026-01-05T14:30:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_workflows_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/workflows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [workflow_json("w1", "approved"), workflow_json("w2", "pending_approval")]
            })))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let workflows = backend.list_workflows().await.unwrap();
        assert_eq!(workflows.len(), 2);
        assert_eq!(workflows[0].id.as_str(), "w1");
    }

    #[tokio::test]
    async fn test_approve_posts_decision_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/approvals/a1/approve"))
            .and(body_json(serde_json::json!({
                "feedback": "Approved",
                "respondedBy": "Human Reviewer"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let decision = Decision {
            feedback: "Approved".to_string(),
            responded_by: "Human Reviewer".to_string(),
        };
        backend
            .approve(&ApprovalId::new("a1"), &decision)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_status_patches_wire_value() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/workflows/w1/status"))
            .and(body_json(serde_json::json!({"status": "completed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        backend
            .update_workflow_status(&WorkflowId::new("w1"), WorkflowStatus::Completed)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_workflow() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/workflows/w1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        backend
            .delete_workflow(&WorkflowId::new("w1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_uses_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workflows"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "name is required"})),
            )
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let draft = WorkflowDraft::new("", "");
        let err = backend.create_workflow(&draft).await.unwrap_err();
        match err {
            HitlError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "name is required");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_falls_back_to_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/workflows"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend.list_workflows().await.unwrap_err();
        match err {
            HitlError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
