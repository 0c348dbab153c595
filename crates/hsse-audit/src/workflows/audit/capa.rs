use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Finding, Priority, RemediationSuggestion};
use super::remediation::{days_remaining, suggest_remediation, UrgencyBand};
use super::risk::risk_level;

/// Editable corrective-action form state for one finding.
///
/// Priority and target date start from the deriver's suggestion and may be overridden by
/// the operator before the record is committed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapaDraft {
    pub finding: Finding,
    pub priority: Priority,
    pub target_date: NaiveDate,
    pub risk_level: u8,
    pub suggested: RemediationSuggestion,
}

impl CapaDraft {
    pub fn from_finding(finding: Finding, today: NaiveDate) -> Self {
        let suggested = suggest_remediation(finding.finding_type, finding.severity, today);
        debug!(
            finding_type = ?finding.finding_type,
            severity = ?finding.severity,
            priority = ?suggested.priority,
            target_date = %suggested.target_date,
            "derived remediation suggestion"
        );

        Self {
            finding,
            priority: suggested.priority,
            target_date: suggested.target_date,
            risk_level: risk_level(finding.severity),
            suggested,
        }
    }

    /// Re-derive after the finding type or severity changed. Overrides are discarded.
    pub fn update_finding(&mut self, finding: Finding, today: NaiveDate) {
        *self = Self::from_finding(finding, today);
    }

    pub fn override_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn override_target_date(&mut self, target_date: NaiveDate) {
        self.target_date = target_date;
    }

    pub fn is_overridden(&self) -> bool {
        self.priority != self.suggested.priority || self.target_date != self.suggested.target_date
    }

    pub fn days_remaining(&self, now: NaiveDateTime) -> i64 {
        days_remaining(self.target_date, now)
    }

    pub fn urgency(&self, now: NaiveDateTime) -> UrgencyBand {
        UrgencyBand::from_days_remaining(self.days_remaining(now))
    }
}
