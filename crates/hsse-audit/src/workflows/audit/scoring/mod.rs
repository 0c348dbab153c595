mod config;
mod grading;
mod rules;

pub use config::{
    ScoringPolicy, DEFAULT_DISTINCTION_THRESHOLD, DEFAULT_PASS_THRESHOLD, DEFAULT_WEIGHT_TOLERANCE,
};
pub use grading::{ColorBand, Grade};

use std::collections::BTreeMap;

use super::domain::{CategoryId, ChecklistTemplate, ResponseSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that applies the grading policy to a checklist snapshot.
#[derive(Debug, Clone, Default)]
pub struct ComplianceScorer {
    policy: ScoringPolicy,
}

impl ComplianceScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score a response snapshot against a template.
    ///
    /// Returns `None` when no template is loaded or the template has no categories; callers
    /// treat that as "nothing to display yet".
    pub fn score(
        &self,
        template: Option<&ChecklistTemplate>,
        responses: &ResponseSet,
    ) -> Option<OverallScoreResult> {
        let template = template?;
        if template.categories.is_empty() {
            return None;
        }

        let tolerance = self.policy.weight_tolerance();
        let mut category_scores = BTreeMap::new();
        let mut weighted_categories = Vec::with_capacity(template.categories.len());

        for category in &template.categories {
            let tally = rules::score_category(category, responses, tolerance);
            let weight = rules::effective_weight(category.weight);
            let weighted_contribution = rules::weighted_contribution(tally.score, weight);
            weighted_categories.push((tally.score, weight));

            debug!(
                category = %category.id.0,
                score = tally.score,
                question_weight = tally.total_weight,
                weighted_contribution,
                "scored checklist category"
            );

            category_scores.insert(
                category.id.clone(),
                CategoryScore {
                    score: tally.score,
                    weight,
                    weighted_contribution,
                },
            );
        }

        let overall = rules::weighted_score(&weighted_categories, tolerance);
        let overall_score = overall.score;
        debug!(
            overall_score,
            category_weight = overall.total_weight,
            "scored checklist"
        );

        let (grade, color_band) = self.policy.classify(overall_score);

        Some(OverallScoreResult {
            overall_score,
            grade,
            color_band,
            category_scores,
            answered_count: responses.answered_count(),
            question_count: template.question_count(),
        })
    }
}

/// Score a snapshot with the default grading policy.
pub fn score(
    template: Option<&ChecklistTemplate>,
    responses: &ResponseSet,
) -> Option<OverallScoreResult> {
    ComplianceScorer::default().score(template, responses)
}

/// Per-category breakdown feeding the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: f64,
    pub weight: f64,
    pub weighted_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScoreResult {
    pub overall_score: f64,
    pub grade: Grade,
    pub color_band: ColorBand,
    pub category_scores: BTreeMap<CategoryId, CategoryScore>,
    pub answered_count: usize,
    pub question_count: usize,
}

impl OverallScoreResult {
    pub fn progress_label(&self) -> String {
        format!(
            "{} of {} questions answered",
            self.answered_count, self.question_count
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{:.1}% ({}, {})",
            self.overall_score,
            self.grade.label(),
            self.color_band.label()
        )
    }
}
