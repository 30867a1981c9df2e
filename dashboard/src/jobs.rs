//! Crawl job models and list view models
//!
//! The admin API returns jobs as loosely typed JSON. Everything here is typed
//! and turned into display rows without touching any UI toolkit:
//!
//! ```ignore
//! let jobs = client.list_jobs().await?;
//! let recent = JobListView::build(&jobs, Some(config.recent_jobs_limit));
//! for row in &recent.rows {
//!     println!("{} {} {}", row.id, row.status_label, row.search_condition);
//! }
//! ```

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{defaults, placeholders};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Other(String),
}

impl JobStatus {
    pub fn label(&self) -> &str {
        match self {
            JobStatus::Pending => "대기 중",
            JobStatus::Running => "실행 중",
            JobStatus::Completed => "완료",
            JobStatus::Failed => "실패",
            JobStatus::Other(raw) => raw,
        }
    }

    /// Bootstrap badge colour for the status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            JobStatus::Running => "bg-primary",
            JobStatus::Completed => "bg-success",
            JobStatus::Failed => "bg-danger",
            JobStatus::Pending | JobStatus::Other(_) => "bg-secondary",
        }
    }

    /// Jobs still owned by the crawler cannot be deleted.
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Running)
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => JobStatus::Pending,
            "running" => JobStatus::Running,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Other(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => "pending".to_string(),
            JobStatus::Running => "running".to_string(),
            JobStatus::Completed => "completed".to_string(),
            JobStatus::Failed => "failed".to_string(),
            JobStatus::Other(raw) => raw,
        }
    }
}

/// Parameters of a single crawl run, as accepted by `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParams {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: u32,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_true")]
    pub save_to_db: bool,
    #[serde(default)]
    pub download_thumbnails: bool,
    #[serde(default)]
    pub skip_existing: bool,
}

fn default_limit() -> u32 {
    defaults::CRAWL_LIMIT
}

fn default_format() -> String {
    defaults::OUTPUT_FORMAT.to_string()
}

fn default_output() -> String {
    defaults::OUTPUT_DIR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            artist: None,
            group: None,
            event: None,
            start_date: None,
            end_date: None,
            limit: default_limit(),
            format: default_format(),
            output: default_output(),
            save_to_db: true,
            download_thumbnails: false,
            skip_existing: false,
        }
    }
}

impl JobParams {
    pub fn search_condition(&self) -> String {
        SearchCondition {
            artist: self.artist.as_deref(),
            group: self.group.as_deref(),
            event: self.event.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
        }
        .text()
    }
}

/// Borrowed view of the filters a job searches with.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchCondition<'a> {
    pub artist: Option<&'a str>,
    pub group: Option<&'a str>,
    pub event: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
}

impl SearchCondition<'_> {
    /// One-line summary such as `아티스트: IU, 날짜: 2024-01-01 ~ `.
    pub fn text(&self) -> String {
        let mut conditions = Vec::new();

        if let Some(artist) = non_empty(self.artist) {
            conditions.push(format!("아티스트: {}", artist));
        }
        if let Some(group) = non_empty(self.group) {
            conditions.push(format!("그룹: {}", group));
        }
        if let Some(event) = non_empty(self.event) {
            conditions.push(format!("이벤트: {}", event));
        }

        let start = non_empty(self.start_date);
        let end = non_empty(self.end_date);
        if start.is_some() || end.is_some() {
            conditions.push(format!(
                "날짜: {} ~ {}",
                start.unwrap_or_default(),
                end.unwrap_or_default()
            ));
        }

        if conditions.is_empty() {
            placeholders::ALL_SEARCH.to_string()
        } else {
            conditions.join(", ")
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Stored limits are free-form JSON: numbers, numeric strings, floats,
/// negatives or `null`. Anything that is not a positive integer becomes the
/// default limit.
pub(crate) fn limit_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let limit = match value {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 1.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => Some(crate::forms::parse_limit(Some(&s))),
        _ => None,
    };
    Ok(limit.filter(|l| *l > 0).unwrap_or_else(default_limit))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub message: Option<String>,
    pub output_dir: Option<String>,
    pub files: Option<Vec<String>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlJob {
    pub id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub params: JobParams,
    #[serde(default, with = "timestamp")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub result: Option<JobResult>,
}

/// Lenient timestamp handling for backend payloads.
///
/// The backend writes naive ISO-8601 timestamps, sometimes with an offset.
/// Unparseable values are treated as absent.
pub mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.naive_local());
        }
        NaiveDateTime::parse_from_str(raw, WIRE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// `YYYY-MM-DD HH:MM:SS`, or `-` when there is no value.
    pub fn display(value: Option<&NaiveDateTime>) -> String {
        match value {
            Some(value) => value.format(DISPLAY_FORMAT).to_string(),
            None => placeholders::NO_TIMESTAMP.to_string(),
        }
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.format(WIRE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRow {
    pub id: String,
    pub status_label: String,
    pub badge_class: &'static str,
    pub search_condition: String,
    pub started: String,
    pub finished: String,
    pub deletable: bool,
}

impl JobRow {
    fn from_job(job: &CrawlJob) -> Self {
        Self {
            id: job.id.clone(),
            status_label: job.status.label().to_string(),
            badge_class: job.status.badge_class(),
            search_condition: job.params.search_condition(),
            started: timestamp::display(job.start_time.as_ref()),
            finished: timestamp::display(job.end_time.as_ref()),
            deletable: !job.status.is_active(),
        }
    }
}

/// Rows for a job table, newest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobListView {
    pub rows: Vec<JobRow>,
}

impl JobListView {
    /// `limit` of `None` or `Some(0)` shows every job.
    pub fn build(jobs: &[CrawlJob], limit: Option<usize>) -> Self {
        let mut sorted: Vec<&CrawlJob> = jobs.iter().collect();
        // Option orders None first, so reversing puts jobs without a start time last
        sorted.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        let shown = match limit {
            Some(limit) if limit > 0 => limit,
            _ => sorted.len(),
        };

        Self {
            rows: sorted.into_iter().take(shown).map(JobRow::from_job).collect(),
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(placeholders::NO_JOBS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub total_jobs: usize,
    pub running_jobs: usize,
    pub completed_jobs: usize,
    pub failed_jobs: usize,
}

impl JobStats {
    /// Same counting the backend's `/stats` endpoint performs.
    pub fn from_jobs(jobs: &[CrawlJob]) -> Self {
        let count = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count();
        Self {
            total_jobs: jobs.len(),
            running_jobs: count(JobStatus::Running),
            completed_jobs: count(JobStatus::Completed),
            failed_jobs: count(JobStatus::Failed),
        }
    }
}

/// Detail panel of a single job, grouped into labelled sections.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    pub basic: Vec<(&'static str, String)>,
    pub result: Option<Vec<(&'static str, String)>>,
    pub files: Vec<String>,
    pub error: Option<String>,
}

impl JobDetail {
    pub fn from_job(job: &CrawlJob) -> Self {
        let params = &job.params;
        let dash = |value: &Option<String>| non_empty(value.as_deref()).unwrap_or("-").to_string();

        let basic = vec![
            ("작업 ID", job.id.clone()),
            ("상태", job.status.label().to_string()),
            ("시작 시간", timestamp::display(job.start_time.as_ref())),
            ("완료 시간", timestamp::display(job.end_time.as_ref())),
            ("아티스트", dash(&params.artist)),
            ("그룹", dash(&params.group)),
            ("이벤트", dash(&params.event)),
            ("검색 결과 수", params.limit.to_string()),
            (
                "기간",
                format!(
                    "{} ~ {}",
                    params.start_date.as_deref().unwrap_or_default(),
                    params.end_date.as_deref().unwrap_or_default()
                ),
            ),
        ];

        let completed = job.status == JobStatus::Completed;
        let result = job.result.as_ref().filter(|_| completed).map(|r| {
            vec![
                ("메시지", r.message.clone().unwrap_or_default()),
                ("출력 디렉토리", r.output_dir.clone().unwrap_or_default()),
            ]
        });
        let files = job
            .result
            .as_ref()
            .filter(|_| completed)
            .and_then(|r| r.files.clone())
            .unwrap_or_default();

        let error = job
            .result
            .as_ref()
            .filter(|_| job.status == JobStatus::Failed)
            .and_then(|r| r.error.clone());

        Self {
            basic,
            result,
            files,
            error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(rename = "groupName", default)]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// `(value, label)` pairs for a select box, led by the empty "optional" choice.
pub fn select_options<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    std::iter::once((String::new(), "선택 (옵션)".to_string()))
        .chain(names.into_iter().map(|n| (n.to_string(), n.to_string())))
        .collect()
}
