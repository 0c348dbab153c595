use super::super::domain::{Category, ComplianceStatus, ResponseSet};
use tracing::warn;

const FULL_WEIGHT: f64 = 100.0;

/// Percentage credited for a status. Unknown statuses are fail-open.
pub(crate) fn status_score(status: ComplianceStatus) -> f64 {
    match status {
        ComplianceStatus::Compliant | ComplianceStatus::NotApplicable => 100.0,
        ComplianceStatus::Observation | ComplianceStatus::Opportunity => 90.0,
        ComplianceStatus::NonCompliant => 0.0,
        ComplianceStatus::Unrecognized => 100.0,
    }
}

pub(crate) fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() {
        weight
    } else {
        0.0
    }
}

/// Rescale an accumulated score to a 100-point basis when its weights are off-balance.
///
/// A zero (or negative) total keeps the accumulated value.
pub(crate) fn renormalize(accumulated: f64, total_weight: f64, tolerance: f64) -> f64 {
    if total_weight > 0.0 && (total_weight - FULL_WEIGHT).abs() > tolerance {
        accumulated / total_weight * FULL_WEIGHT
    } else {
        accumulated
    }
}

/// Weighted average of `(score, weight)` pairs on a 100-point basis.
///
/// Weights large enough to overflow the plain sum are rescaled by the largest weight, which
/// keeps the ratio intact. The returned score is always finite.
pub(crate) fn weighted_score(entries: &[(f64, f64)], tolerance: f64) -> WeightedTally {
    let (accumulated, total_weight) = accumulate(entries, 1.0);
    let score = renormalize(accumulated, total_weight, tolerance);
    if score.is_finite() {
        return WeightedTally {
            score,
            total_weight,
        };
    }

    let scale = entries
        .iter()
        .map(|&(_, weight)| weight.abs())
        .fold(0.0, f64::max);
    let rescaled = if scale > 0.0 {
        let (accumulated, scaled_total) = accumulate(entries, scale);
        if scaled_total > 0.0 {
            accumulated / scaled_total * FULL_WEIGHT
        } else {
            0.0
        }
    } else {
        0.0
    };

    let score = if rescaled.is_finite() {
        rescaled
    } else {
        warn!(total_weight, "weighted score overflowed; reporting zero");
        0.0
    };

    WeightedTally {
        score,
        total_weight,
    }
}

fn accumulate(entries: &[(f64, f64)], scale: f64) -> (f64, f64) {
    entries
        .iter()
        .fold((0.0, 0.0), |(accumulated, total), &(score, weight)| {
            let weight = weight / scale;
            (accumulated + score * weight / FULL_WEIGHT, total + weight)
        })
}

pub(crate) struct WeightedTally {
    pub score: f64,
    pub total_weight: f64,
}

pub(crate) fn score_category(
    category: &Category,
    responses: &ResponseSet,
    tolerance: f64,
) -> WeightedTally {
    let entries: Vec<(f64, f64)> = category
        .questions
        .iter()
        .map(|question| {
            let status = responses.status_for(&question.id);
            (status_score(status), effective_weight(question.weight))
        })
        .collect();

    weighted_score(&entries, tolerance)
}

/// Share of the overall score contributed by one category.
pub(crate) fn weighted_contribution(category_score: f64, category_weight: f64) -> f64 {
    let weight = effective_weight(category_weight);
    let contribution = category_score * weight / FULL_WEIGHT;
    if contribution.is_finite() {
        return contribution;
    }

    let contribution = category_score / FULL_WEIGHT * weight;
    if contribution.is_finite() {
        contribution
    } else {
        0.0
    }
}
