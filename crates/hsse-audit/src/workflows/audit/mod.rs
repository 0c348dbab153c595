//! Audit compliance scoring and corrective-action deadline derivation.
//!
//! Everything here is pure: the scorer reads an immutable response snapshot and the deriver
//! maps finding metadata to a suggested deadline. Malformed inputs degrade to documented
//! defaults instead of failing.

pub mod capa;
pub mod domain;
pub mod import;
pub mod remediation;
pub mod risk;
pub mod router;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use capa::CapaDraft;
pub use domain::{
    Category, CategoryId, ChecklistTemplate, ComplianceStatus, Finding, FindingType, Priority,
    Question, QuestionId, QuestionResponse, RemediationSuggestion, ResponseSet, Severity,
};
pub use import::{ChecklistTemplateImporter, TemplateImportError};
pub use remediation::{
    days_remaining, priority_for, remediation_window_days, suggest_remediation, urgency_band,
    UrgencyBand,
};
pub use risk::risk_level;
pub use router::audit_router;
pub use scoring::{
    score, CategoryScore, ColorBand, ComplianceScorer, Grade, OverallScoreResult, ScoringPolicy,
};
pub use session::ChecklistSession;
