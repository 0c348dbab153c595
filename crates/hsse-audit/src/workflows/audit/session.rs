use tracing::{debug, warn};

use super::domain::{ChecklistTemplate, ComplianceStatus, QuestionId, QuestionResponse, ResponseSet};
use super::scoring::{ComplianceScorer, OverallScoreResult};

/// Editing session owning the mutable checklist state.
///
/// The scorer only ever sees the immutable `ResponseSet` snapshot, so every score reflects
/// the latest edit. Swapping templates discards all responses.
#[derive(Debug, Clone, Default)]
pub struct ChecklistSession {
    template: Option<ChecklistTemplate>,
    responses: ResponseSet,
}

impl ChecklistSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(template: ChecklistTemplate) -> Self {
        let mut session = Self::new();
        session.select_template(Some(template));
        session
    }

    pub fn select_template(&mut self, template: Option<ChecklistTemplate>) {
        self.responses = template
            .as_ref()
            .map(ResponseSet::seeded)
            .unwrap_or_default();
        debug!(
            template = template.as_ref().map(|t| t.name.as_str()).unwrap_or(""),
            seeded = self.responses.len(),
            "checklist template selected"
        );
        self.template = template;
    }

    pub fn template(&self) -> Option<&ChecklistTemplate> {
        self.template.as_ref()
    }

    pub fn snapshot(&self) -> &ResponseSet {
        &self.responses
    }

    /// Replace the response for a template question. Returns `false` for unknown questions.
    pub fn record(&mut self, question_id: QuestionId, response: QuestionResponse) -> bool {
        if !self.knows(&question_id) {
            return false;
        }
        self.responses.insert(question_id, response);
        true
    }

    pub fn set_status(&mut self, question_id: QuestionId, status: ComplianceStatus) -> bool {
        if !self.knows(&question_id) {
            return false;
        }
        self.responses.entry_mut(question_id).compliance_status = status;
        true
    }

    pub fn set_answer(&mut self, question_id: QuestionId, answer_text: impl Into<String>) -> bool {
        if !self.knows(&question_id) {
            return false;
        }
        self.responses.entry_mut(question_id).answer_text = answer_text.into();
        true
    }

    pub fn set_notes(&mut self, question_id: QuestionId, notes: impl Into<String>) -> bool {
        if !self.knows(&question_id) {
            return false;
        }
        self.responses.entry_mut(question_id).notes = notes.into();
        true
    }

    pub fn score(&self, scorer: &ComplianceScorer) -> Option<OverallScoreResult> {
        scorer.score(self.template.as_ref(), &self.responses)
    }

    fn knows(&self, question_id: &QuestionId) -> bool {
        let known = self
            .template
            .as_ref()
            .map(|template| template.contains_question(question_id))
            .unwrap_or(false);
        if !known {
            warn!(question = %question_id.0, "ignoring response for unknown checklist question");
        }
        known
    }
}
