//! Common test data and constants

use serde_json::{json, Value};

/// Cron expressions the dashboard accepts
pub mod valid_crons {
    pub const DAILY: &str = "0 0 * * *";
    pub const WEEKLY: &str = "0 0 * * 0";
    pub const MONTHLY: &str = "0 0 1 * *";
    pub const YEARLY: &str = "0 0 1 1 *";
    pub const EVERY_QUARTER_HOUR: &str = "*/15 * * * *";
    pub const WEEKDAYS: &str = "0 0 * * 1-5";
    pub const WITH_YEAR: &str = "30 4 1 * * 2030";
}

/// Backend payload for a crawl job
pub fn job_json(id: &str, status: &str, start_time: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "params": {
            "artist": "IU",
            "group": null,
            "event": null,
            "limit": 50,
            "start_date": null,
            "end_date": null,
            "format": "json",
            "output": "output",
            "save_to_db": true,
            "download_thumbnails": false,
            "skip_existing": false
        },
        "start_time": start_time,
        "end_time": null,
        "result": null
    })
}

/// Backend payload for a scheduled job
pub fn scheduled_job_json(id: &str, name: &str, cron: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "cron_expression": cron,
        "is_active": is_active,
        "params": { "artist": "", "group": "aespa", "event": "", "limit": 30, "save_to_db": true },
        "last_run": null,
        "next_run": "2024-05-02T00:00:00"
    })
}
