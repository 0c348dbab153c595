use super::domain::Severity;

/// Numeric risk level stored with a finding for sorting and filtering.
pub const fn risk_level(severity: Severity) -> u8 {
    match severity {
        Severity::Critical => 9,
        Severity::High => 7,
        Severity::Medium => 5,
        Severity::Low => 3,
        Severity::Unrecognized => 3,
    }
}
