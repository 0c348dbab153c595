use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for checklist categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// Identifier wrapper for checklist questions; responses are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Immutable checklist definition fetched per audit type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "auditType")]
    pub audit_type: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ChecklistTemplate {
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories
            .iter()
            .flat_map(|category| category.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.questions.len())
            .sum()
    }

    pub fn contains_question(&self, id: &QuestionId) -> bool {
        self.questions().any(|question| &question.id == id)
    }
}

/// Weighted group of questions. Weights are authored on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "weight_or_zero")]
    pub weight: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "weight_or_zero")]
    pub weight: f64,
    /// Form validation hint only; scoring ignores it.
    #[serde(default, alias = "isMandatory")]
    pub is_mandatory: bool,
}

fn weight_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Categorical judgment recorded against a single question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "Option<String>")]
pub enum ComplianceStatus {
    #[default]
    Compliant,
    NonCompliant,
    Observation,
    NotApplicable,
    Opportunity,
    Unrecognized,
}

impl ComplianceStatus {
    pub fn from_label(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "COMPLIANT" => Self::Compliant,
            "NON_COMPLIANT" => Self::NonCompliant,
            "OBSERVATION" => Self::Observation,
            "NOT_APPLICABLE" => Self::NotApplicable,
            "OPPORTUNITY" => Self::Opportunity,
            _ => Self::Unrecognized,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-compliant",
            Self::Observation => "Observation",
            Self::NotApplicable => "Not applicable",
            Self::Opportunity => "Opportunity for improvement",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl From<String> for ComplianceStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Option<String>> for ComplianceStatus {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::default(), |label| Self::from_label(&label))
    }
}

/// One answer captured against a checklist question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(default, alias = "complianceStatus")]
    pub compliance_status: ComplianceStatus,
    #[serde(default, alias = "answerText")]
    pub answer_text: String,
    #[serde(default)]
    pub notes: String,
}

impl QuestionResponse {
    pub fn with_status(status: ComplianceStatus) -> Self {
        Self {
            compliance_status: status,
            ..Self::default()
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer_text.is_empty()
    }
}

/// Immutable snapshot of the responses for one checklist.
///
/// A question without an entry resolves to `QuestionResponse::default()`, the same
/// `Compliant` response a freshly seeded checklist carries, so "never answered" and
/// "explicitly marked compliant" score identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    responses: BTreeMap<QuestionId, QuestionResponse>,
}

impl ResponseSet {
    /// One default response per template question.
    pub fn seeded(template: &ChecklistTemplate) -> Self {
        template
            .questions()
            .map(|question| (question.id.clone(), QuestionResponse::default()))
            .collect()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&QuestionResponse> {
        self.responses.get(id)
    }

    pub fn status_for(&self, id: &QuestionId) -> ComplianceStatus {
        self.get(id)
            .map(|response| response.compliance_status)
            .unwrap_or_default()
    }

    pub fn insert(
        &mut self,
        id: QuestionId,
        response: QuestionResponse,
    ) -> Option<QuestionResponse> {
        self.responses.insert(id, response)
    }

    pub(crate) fn entry_mut(&mut self, id: QuestionId) -> &mut QuestionResponse {
        self.responses.entry(id).or_default()
    }

    /// Responses carrying non-empty answer text.
    pub fn answered_count(&self) -> usize {
        self.responses
            .values()
            .filter(|response| response.is_answered())
            .count()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &QuestionResponse)> {
        self.responses.iter()
    }
}

impl FromIterator<(QuestionId, QuestionResponse)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, QuestionResponse)>>(iter: T) -> Self {
        Self {
            responses: iter.into_iter().collect(),
        }
    }
}

/// Classification of an audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "Option<String>")]
pub enum FindingType {
    MajorNc,
    MinorNc,
    Observation,
    Opportunity,
    Unrecognized,
}

impl FindingType {
    pub fn from_label(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "MAJOR_NC" => Self::MajorNc,
            "MINOR_NC" => Self::MinorNc,
            "OBSERVATION" => Self::Observation,
            "OPPORTUNITY" => Self::Opportunity,
            _ => Self::Unrecognized,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MajorNc => "Major non-conformity",
            Self::MinorNc => "Minor non-conformity",
            Self::Observation => "Observation",
            Self::Opportunity => "Opportunity for improvement",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl From<String> for FindingType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Option<String>> for FindingType {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unrecognized, |label| Self::from_label(&label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "Option<String>")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Unrecognized,
}

impl Severity {
    pub fn from_label(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Unrecognized,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Option<String>> for Severity {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unrecognized, |label| Self::from_label(&label))
    }
}

/// Corrective-action priority. Always one of the four known levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Finding metadata consumed by the remediation deriver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(alias = "findingType")]
    pub finding_type: FindingType,
    pub severity: Severity,
}

/// Pre-filled corrective-action values for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationSuggestion {
    pub priority: Priority,
    pub target_date: NaiveDate,
}

fn normalize_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
