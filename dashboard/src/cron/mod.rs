//! Cron expression validation and display text for scheduled crawl jobs
//!
//! Scheduled jobs are stored by the backend with a standard cron expression.
//! This module checks what a user typed before it is sent, and turns stored
//! expressions into short Korean descriptions for job lists.
//!
//! # Format
//!
//! - **5 fields**: `minute hour day month weekday`
//! - **6 fields**: same, plus a trailing year that is accepted as-is
//! - Each field is `*`, a value, a range `a-b`, any of those with `/step`,
//!   or a comma list of them
//!
//! # Usage
//!
//! ```ignore
//! let result = CronExpressionAnalyzer::validate("0 9 * * 1-5");
//! assert!(result.valid);
//!
//! assert_eq!(
//!     CronExpressionAnalyzer::describe("0 9 * * *"),
//!     "매일 9:00 (0 9 * * *)"
//! );
//! ```

mod field;
pub use field::CronField;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    /// Input is empty or whitespace only
    EmptyExpression,

    /// Field count is not 5 or 6
    FieldCountError { count: usize },

    /// A field does not match its grammar or range
    FieldGrammarError { field: CronField, raw: String },
}

impl fmt::Display for CronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronError::EmptyExpression => write!(f, "크론 표현식을 입력해주세요."),
            CronError::FieldCountError { .. } => write!(
                f,
                "크론 표현식은 5개 또는 6개의 필드로 구성되어야 합니다. (분 시 일 월 요일 [년])"
            ),
            CronError::FieldGrammarError { field, raw } => write!(
                f,
                "{} 필드({})가 올바르지 않습니다. 올바른 형식을 사용해주세요.",
                field.localized_name(),
                raw
            ),
        }
    }
}

impl std::error::Error for CronError {}

/// Outcome of [`CronExpressionAnalyzer::validate`].
///
/// `message` is set exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<Result<(), CronError>> for ValidationResult {
    fn from(result: Result<(), CronError>) -> Self {
        match result {
            Ok(()) => ValidationResult::valid(),
            Err(e) => ValidationResult::invalid(e.to_string()),
        }
    }
}

/// Stateless cron checker and describer. All functions are pure.
pub struct CronExpressionAnalyzer;

impl CronExpressionAnalyzer {
    /// Typed validation: the first failing rule wins.
    pub fn check(expression: &str) -> Result<(), CronError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(CronError::EmptyExpression);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 5 || parts.len() > 6 {
            return Err(CronError::FieldCountError { count: parts.len() });
        }

        // Year (6th field) is intentionally left unchecked
        for (field, raw) in CronField::ALL.iter().zip(parts.iter()) {
            if !field.matches(raw) {
                return Err(CronError::FieldGrammarError {
                    field: *field,
                    raw: (*raw).to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn validate(expression: &str) -> ValidationResult {
        Self::check(expression).into()
    }

    /// Human-readable text for list views, always suffixed with `(expression)`
    /// unless the expression does not have exactly five space-separated fields,
    /// in which case it is returned untouched.
    pub fn describe(expression: &str) -> String {
        let parts: Vec<&str> = expression.split(' ').collect();
        if parts.len() != 5 {
            return expression.to_string();
        }

        let description = match expression {
            "0 0 * * *" => "매일 00:00".to_string(),
            "0 0 * * 0" => "매주 일요일 00:00".to_string(),
            "0 0 1 * *" => "매월 1일 00:00".to_string(),
            "0 0 1 1 *" => "매년 1월 1일 00:00".to_string(),
            _ if parts[0] == "0" && parts[1] == "0" => "매일 00:00".to_string(),
            _ if parts[0] == "0" && parts[2] == "*" && parts[3] == "*" => {
                format!("매일 {}:00", parts[1])
            }
            _ => expression.to_string(),
        };

        format!("{} ({})", description, expression)
    }
}
