use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::domain::{FindingType, Priority, RemediationSuggestion, Severity};

const SECONDS_PER_DAY: i64 = 86_400;
const URGENT_WINDOW_DAYS: i64 = 7;
const HIGH_PRIORITY_WINDOW_DAYS: i64 = 14;

/// Suggest a priority and target completion date for a finding.
///
/// The result only pre-fills the corrective-action form; nothing here enforces it.
pub fn suggest_remediation(
    finding_type: FindingType,
    severity: Severity,
    now: NaiveDate,
) -> RemediationSuggestion {
    let target_date = now
        .checked_add_days(Days::new(remediation_window_days(finding_type)))
        .unwrap_or(NaiveDate::MAX);

    RemediationSuggestion {
        priority: priority_for(severity),
        target_date,
    }
}

pub const fn priority_for(severity: Severity) -> Priority {
    match severity {
        Severity::Critical => Priority::Critical,
        Severity::High => Priority::High,
        Severity::Medium => Priority::Medium,
        Severity::Low => Priority::Low,
        Severity::Unrecognized => Priority::Medium,
    }
}

/// Days granted to close a finding of the given type.
pub const fn remediation_window_days(finding_type: FindingType) -> u64 {
    match finding_type {
        FindingType::MajorNc => 14,
        FindingType::MinorNc => 30,
        FindingType::Observation => 60,
        FindingType::Opportunity => 90,
        FindingType::Unrecognized => 30,
    }
}

/// Whole days left until the start of `target_date`, rounded up.
pub fn days_remaining(target_date: NaiveDate, now: NaiveDateTime) -> i64 {
    let seconds = (target_date.and_time(NaiveTime::MIN) - now).num_seconds();
    let whole_days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        whole_days + 1
    } else {
        whole_days
    }
}

/// Advisory urgency derived from the chosen target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyBand {
    Urgent,
    HighPriority,
    Normal,
}

impl UrgencyBand {
    pub const fn from_days_remaining(days: i64) -> Self {
        if days <= URGENT_WINDOW_DAYS {
            Self::Urgent
        } else if days <= HIGH_PRIORITY_WINDOW_DAYS {
            Self::HighPriority
        } else {
            Self::Normal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::HighPriority => "high priority",
            Self::Normal => "normal",
        }
    }
}

pub fn urgency_band(target_date: NaiveDate, now: NaiveDateTime) -> UrgencyBand {
    UrgencyBand::from_days_remaining(days_remaining(target_date, now))
}
