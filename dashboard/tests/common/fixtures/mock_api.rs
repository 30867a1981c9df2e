//! Mock admin API server for testing
//!
//! Serves the `/api/...` endpoints the dashboard calls without a real backend.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crawler_dashboard::{AdminApiClient, DashboardConfig};

pub struct MockAdminApi {
    pub server: MockServer,
    pub api_url: String,
}

impl MockAdminApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let api_url = format!("{}/api", server.uri());
        Self { server, api_url }
    }

    pub fn config(&self) -> DashboardConfig {
        DashboardConfig {
            api_url: self.api_url.clone(),
            request_timeout_seconds: 5,
            recent_jobs_limit: 5,
            default_cron_expression: "0 0 * * *".to_string(),
        }
    }

    pub fn client(&self) -> AdminApiClient {
        AdminApiClient::new(&self.config()).expect("Failed to build client")
    }

    pub async fn mock_get(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Expect exactly one request with `body`, answering with `response`
    pub async fn expect_json(&self, verb: &str, endpoint: &str, body: Value, response: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete(&self, endpoint: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_error(&self, verb: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if anything reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
