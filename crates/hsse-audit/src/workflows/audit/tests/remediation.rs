use super::common::*;
use crate::workflows::audit::domain::{FindingType, Priority, Severity};
use crate::workflows::audit::remediation::{
    days_remaining, suggest_remediation, urgency_band, UrgencyBand,
};
use crate::workflows::audit::risk::risk_level;
use chrono::NaiveTime;

#[test]
fn major_non_conformity_gets_two_weeks() {
    let today = date(2025, 6, 2);

    let suggestion = suggest_remediation(FindingType::MajorNc, Severity::High, today);

    assert_eq!(suggestion.priority, Priority::High);
    assert_eq!(suggestion.target_date, date(2025, 6, 16));
}

#[test]
fn observation_on_new_year_lands_on_first_of_march() {
    let suggestion = suggest_remediation(FindingType::Observation, Severity::Low, date(2024, 1, 1));

    assert_eq!(suggestion.priority, Priority::Low);
    assert_eq!(suggestion.target_date, date(2024, 3, 1));
}

#[test]
fn offsets_follow_finding_type() {
    let today = date(2025, 1, 10);
    let cases = [
        (FindingType::MajorNc, date(2025, 1, 24)),
        (FindingType::MinorNc, date(2025, 2, 9)),
        (FindingType::Observation, date(2025, 3, 11)),
        (FindingType::Opportunity, date(2025, 4, 10)),
        (FindingType::Unrecognized, date(2025, 2, 9)),
    ];

    for (finding_type, expected) in cases {
        let suggestion = suggest_remediation(finding_type, Severity::Medium, today);
        assert_eq!(suggestion.target_date, expected, "{finding_type:?}");
    }
}

#[test]
fn priority_mirrors_severity_and_defaults_to_medium() {
    let today = date(2025, 1, 10);
    let cases = [
        (Severity::Critical, Priority::Critical),
        (Severity::High, Priority::High),
        (Severity::Medium, Priority::Medium),
        (Severity::Low, Priority::Low),
        (Severity::Unrecognized, Priority::Medium),
    ];

    for (severity, expected) in cases {
        let suggestion = suggest_remediation(FindingType::MinorNc, severity, today);
        assert_eq!(suggestion.priority, expected, "{severity:?}");
    }
}

#[test]
fn unknown_wire_values_resolve_to_defaults() {
    let finding_type: FindingType = serde_json::from_str("\"CONCERN\"").expect("deserializes");
    let severity: Severity = serde_json::from_str("\"SEVERE\"").expect("deserializes");

    assert_eq!(finding_type, FindingType::Unrecognized);
    assert_eq!(severity, Severity::Unrecognized);

    let suggestion = suggest_remediation(finding_type, severity, date(2025, 1, 1));
    assert_eq!(suggestion.priority, Priority::Medium);
    assert_eq!(suggestion.target_date, date(2025, 1, 31));
    assert_eq!(risk_level(severity), 3);
}

#[test]
fn labels_parse_leniently() {
    assert_eq!(FindingType::from_label("major-nc"), FindingType::MajorNc);
    assert_eq!(FindingType::from_label(" Minor NC "), FindingType::MinorNc);
    assert_eq!(Severity::from_label("critical"), Severity::Critical);
}

#[test]
fn risk_levels_follow_severity() {
    assert_eq!(risk_level(Severity::Critical), 9);
    assert_eq!(risk_level(Severity::High), 7);
    assert_eq!(risk_level(Severity::Medium), 5);
    assert_eq!(risk_level(Severity::Low), 3);
}

#[test]
fn days_remaining_rounds_partial_days_up() {
    let target = date(2025, 6, 10);
    let midnight = date(2025, 6, 3).and_time(NaiveTime::MIN);
    let afternoon = date(2025, 6, 2)
        .and_hms_opt(15, 30, 0)
        .expect("valid time");
    let overdue = date(2025, 6, 11)
        .and_hms_opt(12, 0, 0)
        .expect("valid time");

    assert_eq!(days_remaining(target, midnight), 7);
    assert_eq!(days_remaining(target, afternoon), 8);
    assert_eq!(days_remaining(target, overdue), -1);
}

#[test]
fn urgency_bands_split_at_one_and_two_weeks() {
    let now = date(2025, 6, 1).and_time(NaiveTime::MIN);

    assert_eq!(urgency_band(date(2025, 6, 8), now), UrgencyBand::Urgent);
    assert_eq!(urgency_band(date(2025, 6, 9), now), UrgencyBand::HighPriority);
    assert_eq!(urgency_band(date(2025, 6, 15), now), UrgencyBand::HighPriority);
    assert_eq!(urgency_band(date(2025, 6, 16), now), UrgencyBand::Normal);
    assert_eq!(urgency_band(date(2025, 5, 20), now), UrgencyBand::Urgent);
    assert_eq!(UrgencyBand::HighPriority.label(), "high priority");
}
