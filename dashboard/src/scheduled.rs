//! Scheduled (cron) crawl jobs
//!
//! The backend owns scheduling; this module only models what it stores and
//! prepares rows for the scheduled job table.

use chrono::NaiveDateTime;
use std::cmp::Reverse;
use serde::{Deserialize, Serialize};

use crate::constants::{defaults, placeholders};
use crate::cron::CronExpressionAnalyzer;
use crate::jobs::{limit_or_default, timestamp, SearchCondition};

/// Parameters stored with a scheduled job. The backend keeps them as a free
/// form map, so every field tolerates absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJobParams {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub event: String,
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: u32,
    #[serde(default = "default_true")]
    pub save_to_db: bool,
}

fn default_limit() -> u32 {
    defaults::CRAWL_LIMIT
}

fn default_true() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for ScheduledJobParams {
    fn default() -> Self {
        Self {
            artist: String::new(),
            group: String::new(),
            event: String::new(),
            limit: default_limit(),
            save_to_db: true,
        }
    }
}

impl ScheduledJobParams {
    pub fn search_condition(&self) -> String {
        SearchCondition {
            artist: Some(self.artist.as_str()),
            group: Some(self.group.as_str()),
            event: Some(self.event.as_str()),
            ..SearchCondition::default()
        }
        .text()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub id: String,
    pub name: String,
    pub cron_expression: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "params_or_default")]
    pub params: ScheduledJobParams,
    #[serde(default, with = "timestamp")]
    pub last_run: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp")]
    pub next_run: Option<NaiveDateTime>,
}

fn params_or_default<'de, D>(deserializer: D) -> Result<ScheduledJobParams, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ScheduledJobParams>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /scheduled-jobs` and `PUT /scheduled-jobs/{id}`.
///
/// A missing `id` lets the backend generate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub cron_expression: String,
    pub is_active: bool,
    pub params: ScheduledJobParams,
}

impl ScheduledJobRequest {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Body of `PATCH /scheduled-jobs/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJobStatus {
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledJobRow {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub search_condition: String,
    pub status_label: &'static str,
    pub toggle_label: &'static str,
    /// State the toggle button switches the job to
    pub toggle_target: bool,
    pub last_run: String,
    pub next_run: String,
}

impl ScheduledJobRow {
    fn from_job(job: &ScheduledJob) -> Self {
        let (status_label, toggle_label) = if job.is_active {
            ("활성", "중지")
        } else {
            ("비활성", "시작")
        };

        Self {
            id: job.id.clone(),
            name: job.name.clone(),
            schedule: CronExpressionAnalyzer::describe(&job.cron_expression),
            search_condition: job.params.search_condition(),
            status_label,
            toggle_label,
            toggle_target: !job.is_active,
            last_run: timestamp::display(job.last_run.as_ref()),
            next_run: timestamp::display(job.next_run.as_ref()),
        }
    }
}

/// Rows for the scheduled job table, ordered by name ignoring case.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduledJobListView {
    pub rows: Vec<ScheduledJobRow>,
}

impl ScheduledJobListView {
    pub fn build(jobs: &[ScheduledJob]) -> Self {
        let mut sorted: Vec<&ScheduledJob> = jobs.iter().collect();
        // Lowercase first among names differing only in case
        sorted.sort_by_cached_key(|job| (job.name.to_lowercase(), Reverse(job.name.clone())));

        Self {
            rows: sorted.into_iter().map(ScheduledJobRow::from_job).collect(),
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(placeholders::NO_SCHEDULED_JOBS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scheduled(name: &str, cron: &str, active: bool) -> ScheduledJob {
        ScheduledJob {
            id: format!("id-{}", name),
            name: name.to_string(),
            cron_expression: cron.to_string(),
            is_active: active,
            params: ScheduledJobParams::default(),
            last_run: None,
            next_run: None,
        }
    }

    #[test]
    fn test_list_view_sorted_by_name_with_descriptions() {
        let jobs = vec![
            scheduled("weekly", "0 0 * * 0", true),
            scheduled("daily", "0 9 * * *", false),
        ];
        let view = ScheduledJobListView::build(&jobs);

        assert_eq!(view.rows[0].name, "daily");
        assert_eq!(view.rows[0].schedule, "매일 9:00 (0 9 * * *)");
        assert_eq!(view.rows[0].status_label, "비활성");
        assert_eq!(view.rows[0].toggle_label, "시작");
        assert!(view.rows[0].toggle_target);

        assert_eq!(view.rows[1].schedule, "매주 일요일 00:00 (0 0 * * 0)");
        assert_eq!(view.rows[1].toggle_label, "중지");
        assert!(!view.rows[1].toggle_target);
        assert_eq!(view.rows[1].search_condition, "전체 검색");
    }

    #[test]
    fn test_list_view_name_order_ignores_case() {
        let jobs = vec![
            scheduled("beta", "0 0 * * *", true),
            scheduled("Beta", "0 0 * * *", true),
            scheduled("alpha", "0 0 * * *", true),
            scheduled("Gamma", "0 0 * * *", true),
        ];
        let names: Vec<String> = ScheduledJobListView::build(&jobs)
            .rows
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "Beta", "Gamma"]);
    }

    #[test]
    fn test_six_field_schedule_is_shown_verbatim() {
        let view = ScheduledJobListView::build(&[scheduled("yearly", "0 0 1 1 * 2030", true)]);
        assert_eq!(view.rows[0].schedule, "0 0 1 1 * 2030");
    }

    #[test]
    fn test_empty_list_has_placeholder() {
        assert_eq!(
            ScheduledJobListView::build(&[]).placeholder(),
            Some("예약된 작업이 없습니다.")
        );
    }

    #[test]
    fn test_deserialize_tolerates_loose_params() {
        let job: ScheduledJob = serde_json::from_value(json!({
            "id": "1",
            "name": "nightly",
            "cron_expression": "0 0 * * *",
            "params": { "artist": null, "group": "aespa", "limit": 0 },
            "last_run": "2024-05-01T00:00:00",
            "next_run": null
        }))
        .unwrap();

        assert!(job.is_active);
        assert_eq!(job.params.artist, "");
        assert_eq!(job.params.limit, 50);
        assert!(job.params.save_to_db);
        assert_eq!(job.params.search_condition(), "그룹: aespa");

        let job: ScheduledJob = serde_json::from_value(json!({
            "id": "2",
            "name": "no params",
            "cron_expression": "0 0 * * *",
            "is_active": false,
            "params": null
        }))
        .unwrap();
        assert_eq!(job.params, ScheduledJobParams::default());
    }

    #[test]
    fn test_one_odd_limit_does_not_break_the_list() {
        let jobs: Vec<ScheduledJob> = serde_json::from_value(json!([
            { "id": "1", "name": "negative", "cron_expression": "0 0 * * *", "params": { "limit": -5 } },
            { "id": "2", "name": "string", "cron_expression": "0 0 * * *", "params": { "limit": "50" } },
            { "id": "3", "name": "float", "cron_expression": "0 0 * * *", "params": { "limit": 25.0 } }
        ]))
        .unwrap();

        let limits: Vec<u32> = jobs.iter().map(|j| j.params.limit).collect();
        assert_eq!(limits, vec![50, 50, 25]);
    }

    #[test]
    fn test_request_omits_missing_id() {
        let request = ScheduledJobRequest {
            id: None,
            name: "nightly".to_string(),
            cron_expression: "0 0 * * *".to_string(),
            is_active: true,
            params: ScheduledJobParams::default(),
        };
        assert!(request.is_new());
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["params"]["limit"], 50);
    }
}
