// File: dashboard/src/api/client.rs
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::DashboardConfig;
use crate::errors::{ApiError, DashboardError};
use crate::forms::ScheduledJobForm;
use crate::jobs::{Artist, CrawlJob, Group, JobParams, JobStats};
use crate::scheduled::{ScheduledJob, ScheduledJobStatus};

/// `GET /jobs` answers `{"jobs": [...]}`; a bare array is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum JobList {
    Wrapped { jobs: Vec<CrawlJob> },
    Bare(Vec<CrawlJob>),
}

impl From<JobList> for Vec<CrawlJob> {
    fn from(list: JobList) -> Self {
        match list {
            JobList::Wrapped { jobs } | JobList::Bare(jobs) => jobs,
        }
    }
}

#[derive(Clone)]
pub struct AdminApiClient {
    base_url: String,
    client: Client,
}

impl AdminApiClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ApiError::RequestFailed {
                url: config.api_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.get("/artists").await
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.get("/groups").await
    }

    pub async fn list_jobs(&self) -> Result<Vec<CrawlJob>, ApiError> {
        let list: JobList = self.get("/jobs").await?;
        Ok(list.into())
    }

    pub async fn get_job(&self, job_id: &str) -> Result<CrawlJob, ApiError> {
        self.get(&format!("/jobs/{}", job_id)).await
    }

    /// Start a crawl; the backend answers with the new pending job.
    #[instrument(skip(self, params))]
    pub async fn create_job(&self, params: &JobParams) -> Result<CrawlJob, ApiError> {
        let job: CrawlJob = self.send(Method::POST, "/jobs", Some(params)).await?;
        info!("Crawl job {} started: {}", job.id, params.search_condition());
        Ok(job)
    }

    #[instrument(skip(self))]
    pub async fn delete_job(&self, job_id: &str) -> Result<(), ApiError> {
        self.send_discarding(Method::DELETE, &format!("/jobs/{}", job_id), None::<&()>)
            .await?;
        info!("Crawl job {} deleted", job_id);
        Ok(())
    }

    pub async fn get_stats(&self) -> Result<JobStats, ApiError> {
        self.get("/stats").await
    }

    pub async fn list_scheduled_jobs(&self) -> Result<Vec<ScheduledJob>, ApiError> {
        self.get("/scheduled-jobs").await
    }

    pub async fn get_scheduled_job(&self, job_id: &str) -> Result<ScheduledJob, ApiError> {
        self.get(&format!("/scheduled-jobs/{}", job_id)).await
    }

    /// Create (no id) or update (with id) a scheduled job.
    ///
    /// The cron expression is validated first; an invalid one never reaches the backend.
    #[instrument(skip(self, form), fields(name = %form.name, cron = %form.cron_expression))]
    pub async fn save_scheduled_job(
        &self,
        form: ScheduledJobForm,
    ) -> Result<ScheduledJob, DashboardError> {
        let request = form.into_request()?;

        let saved: ScheduledJob = match request.id.as_deref() {
            None => {
                self.send(Method::POST, "/scheduled-jobs", Some(&request))
                    .await?
            }
            Some(id) => {
                self.send(Method::PUT, &format!("/scheduled-jobs/{}", id), Some(&request))
                    .await?
            }
        };

        info!(
            "Scheduled job '{}' {} ({})",
            saved.name,
            if request.is_new() { "created" } else { "updated" },
            saved.cron_expression
        );
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn set_scheduled_job_active(
        &self,
        job_id: &str,
        is_active: bool,
    ) -> Result<(), ApiError> {
        let body = ScheduledJobStatus { is_active };
        self.send_discarding(
            Method::PATCH,
            &format!("/scheduled-jobs/{}/status", job_id),
            Some(&body),
        )
        .await?;
        info!(
            "Scheduled job {} {}",
            job_id,
            if is_active { "activated" } else { "deactivated" }
        );
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_scheduled_job(&self, job_id: &str) -> Result<(), ApiError> {
        self.send_discarding(
            Method::DELETE,
            &format!("/scheduled-jobs/{}", job_id),
            None::<&()>,
        )
        .await?;
        info!("Scheduled job {} deleted", job_id);
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.execute(method, &url, body).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse {
                url,
                reason: e.to_string(),
            })
    }

    async fn send_discarding<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        self.execute(method, &url, body).await?;
        Ok(())
    }

    async fn execute<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::RequestFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = error_detail(&error_text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            warn!("{} {} failed with status {}: {}", method, url, status, detail);
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}

/// Extract the backend's `detail` (or `message`) text, or the raw body when it is not JSON.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail").or_else(|| map.get("message")) {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => Some(body.to_string()),
        },
        _ => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "Job x not found"}"#).as_deref(),
            Some("Job x not found")
        );
        assert_eq!(
            error_detail(r#"{"detail": [{"msg": "field required"}]}"#).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }

    #[test]
    fn test_error_detail_falls_back_to_raw_text() {
        assert_eq!(
            error_detail("Internal Server Error").as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(error_detail(r#"{"error": "x"}"#).as_deref(), Some(r#"{"error": "x"}"#));
        assert_eq!(
            error_detail(r#"{"message": "작업 목록 조회 오류"}"#).as_deref(),
            Some("작업 목록 조회 오류")
        );
        assert_eq!(error_detail("   "), None);
    }
}
