use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::capa::CapaDraft;
use super::domain::{
    ChecklistTemplate, Finding, FindingType, Priority, ResponseSet, Severity,
};
use super::scoring::{ComplianceScorer, OverallScoreResult};

/// Body accepted by the scoring endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub template: Option<ChecklistTemplate>,
    #[serde(default)]
    pub responses: ResponseSet,
}

/// Body accepted by the remediation endpoint. `today` defaults to the server's local date.
#[derive(Debug, Clone, Deserialize)]
pub struct RemediationRequest {
    #[serde(alias = "findingType")]
    pub finding_type: FindingType,
    pub severity: Severity,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default, alias = "targetDate")]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemediationView {
    pub finding_type: FindingType,
    pub severity: Severity,
    pub priority: Priority,
    pub suggested_target_date: NaiveDate,
    pub target_date: NaiveDate,
    pub risk_level: u8,
    pub days_remaining: i64,
    pub urgency: &'static str,
}

/// Returned by the scoring endpoint when there is nothing to score yet.
#[derive(Debug, Clone, Serialize)]
pub struct UnscoredView {
    pub score: Option<OverallScoreResult>,
    pub detail: &'static str,
}

/// Router exposing checklist scoring and remediation suggestions.
pub fn audit_router(scorer: Arc<ComplianceScorer>) -> Router {
    Router::new()
        .route("/api/v1/audits/score", post(score_handler))
        .route("/api/v1/findings/remediation", post(remediation_handler))
        .with_state(scorer)
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<ComplianceScorer>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match scorer.score(request.template.as_ref(), &request.responses) {
        Some(result) => {
            info!(
                overall_score = result.overall_score,
                grade = result.grade.label(),
                "scored audit checklist"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        None => {
            let view = UnscoredView {
                score: None,
                detail: "no checklist template loaded",
            };
            (StatusCode::OK, Json(view)).into_response()
        }
    }
}

pub(crate) async fn remediation_handler(Json(request): Json<RemediationRequest>) -> Response {
    let RemediationRequest {
        finding_type,
        severity,
        today,
        target_date,
    } = request;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut draft = CapaDraft::from_finding(
        Finding {
            finding_type,
            severity,
        },
        today,
    );
    if let Some(target_date) = target_date {
        draft.override_target_date(target_date);
    }

    let now = today.and_time(NaiveTime::MIN);
    let view = RemediationView {
        finding_type,
        severity,
        priority: draft.priority,
        suggested_target_date: draft.suggested.target_date,
        target_date: draft.target_date,
        risk_level: draft.risk_level,
        days_remaining: draft.days_remaining(now),
        urgency: draft.urgency(now).label(),
    };

    (StatusCode::OK, Json(view)).into_response()
}
