//! Typed form input for crawl requests and scheduled jobs
//!
//! Browsers submit forms as ordered `name=value` pairs. Instead of copying
//! whatever arrives into a loose map, each form has a struct listing the
//! fields it recognises and how missing or malformed values default.
//!
//! - Checkboxes are set only when their value is `on`
//! - `limit` falls back to 50 when absent, not a number, or zero
//! - Blank text fields count as not provided

use tracing::debug;

use crate::constants::{defaults, CHECKBOX_ON};
use crate::cron::CronExpressionAnalyzer;
use crate::errors::FormError;
use crate::jobs::{non_empty, JobParams};
use crate::scheduled::{ScheduledJob, ScheduledJobParams, ScheduledJobRequest};

/// Submitted form entries. `get` returns the first value for a repeated name;
/// [`FormData::last_wins`] collapses repeats to the last value instead.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// One entry per name, keeping the last submitted value.
    pub fn last_wins(&self) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            match entries.iter_mut().find(|(k, _)| k == name) {
                Some(entry) => entry.1 = value.clone(),
                None => entries.push((name.clone(), value.clone())),
            }
        }
        Self { entries }
    }

    fn text(&self, name: &str) -> Option<String> {
        non_empty(self.get(name).map(str::trim)).map(str::to_string)
    }

    fn checked(&self, name: &str) -> bool {
        self.get(name) == Some(CHECKBOX_ON)
    }

    fn limit(&self) -> u32 {
        parse_limit(self.get("limit"))
    }
}

/// Leading-integer parse in the manner of a browser's `parseInt`:
/// `"20 items"` yields 20, while blanks, garbage, zero and negatives yield the default.
pub fn parse_limit(raw: Option<&str>) -> u32 {
    let raw = raw.unwrap_or_default().trim_start();
    let digits: &str = {
        let end = raw
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '+')))
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        raw[..end].trim_start_matches('+')
    };

    digits
        .parse::<u32>()
        .ok()
        .filter(|limit| *limit > 0)
        .unwrap_or(defaults::CRAWL_LIMIT)
}

/// The "new crawl job" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequestForm {
    pub artist: Option<String>,
    pub group: Option<String>,
    pub event: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: u32,
    pub save_to_db: bool,
    pub download_thumbnails: bool,
    pub skip_existing: bool,
}

impl CrawlRequestForm {
    /// Repeated fields resolve to their last value.
    pub fn from_form(form: &FormData) -> Self {
        let form = form.last_wins();
        Self {
            artist: form.text("artist"),
            group: form.text("group"),
            event: form.text("event"),
            start_date: form.text("start_date"),
            end_date: form.text("end_date"),
            limit: form.limit(),
            save_to_db: form.checked("save_to_db"),
            download_thumbnails: form.checked("download_thumbnails"),
            skip_existing: form.checked("skip_existing"),
        }
    }

    /// Body for `POST /jobs`.
    pub fn into_params(self) -> JobParams {
        JobParams {
            artist: self.artist,
            group: self.group,
            event: self.event,
            start_date: self.start_date,
            end_date: self.end_date,
            limit: self.limit,
            save_to_db: self.save_to_db,
            download_thumbnails: self.download_thumbnails,
            skip_existing: self.skip_existing,
            ..JobParams::default()
        }
    }
}

/// The add/edit scheduled job form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledJobForm {
    pub id: Option<String>,
    pub name: String,
    pub cron_expression: String,
    pub is_active: bool,
    pub artist: String,
    pub group: String,
    pub event: String,
    pub limit: u32,
    pub save_to_db: bool,
}

impl ScheduledJobForm {
    /// Blank form for a new job, pre-filled with `default_cron`.
    pub fn new_job(default_cron: &str) -> Self {
        Self {
            id: None,
            name: String::new(),
            cron_expression: default_cron.to_string(),
            is_active: true,
            artist: String::new(),
            group: String::new(),
            event: String::new(),
            limit: defaults::CRAWL_LIMIT,
            save_to_db: true,
        }
    }

    /// Form pre-filled from a stored job for editing.
    pub fn from_job(job: &ScheduledJob) -> Self {
        Self {
            id: Some(job.id.clone()),
            name: job.name.clone(),
            cron_expression: job.cron_expression.clone(),
            is_active: job.is_active,
            artist: job.params.artist.clone(),
            group: job.params.group.clone(),
            event: job.params.event.clone(),
            limit: job.params.limit,
            save_to_db: job.params.save_to_db,
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        Self {
            id: form
                .get("id")
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string),
            name: form.get("name").unwrap_or_default().to_string(),
            cron_expression: form.get("cron_expression").unwrap_or_default().to_string(),
            is_active: form.checked("is_active"),
            artist: form.get("artist").unwrap_or_default().to_string(),
            group: form.get("group").unwrap_or_default().to_string(),
            event: form.get("event").unwrap_or_default().to_string(),
            limit: form.limit(),
            save_to_db: form.checked("save_to_db"),
        }
    }

    /// Validate the cron expression and build the request body.
    ///
    /// Nothing is sent when the expression is rejected.
    pub fn into_request(self) -> Result<ScheduledJobRequest, FormError> {
        if let Err(e) = CronExpressionAnalyzer::check(&self.cron_expression) {
            debug!(
                "Rejected cron expression '{}' for scheduled job '{}': {}",
                self.cron_expression, self.name, e
            );
            return Err(FormError::InvalidCron(e));
        }

        Ok(ScheduledJobRequest {
            id: self.id,
            name: self.name,
            cron_expression: self.cron_expression,
            is_active: self.is_active,
            params: ScheduledJobParams {
                artist: self.artist,
                group: self.group,
                event: self.event,
                limit: self.limit,
                save_to_db: self.save_to_db,
            },
        })
    }
}
