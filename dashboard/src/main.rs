// File: dashboard/src/main.rs
use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use crawler_dashboard::constants::defaults;
use crawler_dashboard::{
    AdminApiClient, ConfigManager, CronExpressionAnalyzer, JobListView, ScheduledJobForm,
    ScheduledJobListView,
};

const USAGE: &str = "\
Usage:
  crawler-dashboard validate <cron expression>
  crawler-dashboard describe <cron expression>
  crawler-dashboard jobs [--recent] [--config PATH]
  crawler-dashboard scheduled [--config PATH]
  crawler-dashboard stats [--config PATH]
  crawler-dashboard schedule <name> [cron expression] [--config PATH]
  crawler-dashboard toggle <scheduled job id> <on|off> [--config PATH]";

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("crawler_dashboard=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    debug!("Running command '{}' with {} arguments", command, rest.len());

    match command.as_str() {
        "validate" => {
            let expression = positional(rest).join(" ");
            let result = CronExpressionAnalyzer::validate(&expression);
            match result.message {
                None => println!("valid: {}", CronExpressionAnalyzer::describe(expression.trim())),
                Some(message) => {
                    println!("invalid: {}", message);
                    std::process::exit(1);
                }
            }
        }
        "describe" => {
            println!("{}", CronExpressionAnalyzer::describe(&positional(rest).join(" ")));
        }
        "jobs" => {
            let recent = rest.iter().any(|a| a == "--recent");
            let (config, client) = connect(rest).await?;
            let jobs = client.list_jobs().await?;
            let limit = recent.then_some(config.recent_jobs_limit);
            let view = JobListView::build(&jobs, limit);

            if let Some(placeholder) = view.placeholder() {
                println!("{}", placeholder);
            }
            for row in &view.rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    row.id, row.status_label, row.search_condition, row.started, row.finished
                );
            }
        }
        "scheduled" => {
            let (_, client) = connect(rest).await?;
            let jobs = client.list_scheduled_jobs().await?;
            let view = ScheduledJobListView::build(&jobs);

            if let Some(placeholder) = view.placeholder() {
                println!("{}", placeholder);
            }
            for row in &view.rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    row.name,
                    row.schedule,
                    row.search_condition,
                    row.status_label,
                    row.last_run,
                    row.next_run
                );
            }
        }
        "stats" => {
            let (_, client) = connect(rest).await?;
            let stats = client.get_stats().await?;
            println!("total\t{}", stats.total_jobs);
            println!("completed\t{}", stats.completed_jobs);
            println!("running\t{}", stats.running_jobs);
            println!("failed\t{}", stats.failed_jobs);
        }
        "schedule" => {
            let words = positional(rest);
            let (name, cron) = words
                .split_first()
                .ok_or_else(|| anyhow!("schedule requires a job name\n{}", USAGE))?;
            let (config, client) = connect(rest).await?;

            let mut form = ScheduledJobForm::new_job(&config.default_cron_expression);
            form.name = name.to_string();
            if !cron.is_empty() {
                form.cron_expression = cron.join(" ");
            }

            let saved = client.save_scheduled_job(form).await?;
            println!(
                "{}\t{}\t{}",
                saved.id,
                saved.name,
                CronExpressionAnalyzer::describe(&saved.cron_expression)
            );
        }
        "toggle" => {
            let words = positional(rest);
            let (id, is_active) = match words.as_slice() {
                [id, state] if *state == "on" || *state == "off" => (*id, *state == "on"),
                _ => return Err(anyhow!("toggle requires <id> <on|off>\n{}", USAGE)),
            };
            let (_, client) = connect(rest).await?;
            client.set_scheduled_job_active(id, is_active).await?;
            println!("{}\t{}", id, if is_active { "활성" } else { "비활성" });
        }
        other => {
            return Err(anyhow!("Unknown command '{}'\n{}", other, USAGE));
        }
    }

    Ok(())
}

async fn connect(
    args: &[String],
) -> Result<(std::sync::Arc<crawler_dashboard::DashboardConfig>, AdminApiClient)> {
    let config_path = config_path(args)?;
    let config_manager = ConfigManager::new(config_path).await?;
    let config = config_manager.get_current_config();
    let client = AdminApiClient::new(&config)?;
    info!("Connected to admin API at {}", client.base_url());
    Ok((config, client))
}

fn config_path(args: &[String]) -> Result<&str> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => args
            .get(i + 1)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("--config requires a path")),
        None => Ok(defaults::CONFIG_PATH),
    }
}

/// Arguments other than `--recent` and `--config PATH`.
fn positional(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                iter.next();
            }
            "--recent" => {}
            other => positional.push(other),
        }
    }
    positional
}
