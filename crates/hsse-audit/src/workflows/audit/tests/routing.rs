use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::audit::router::audit_router;
use crate::workflows::audit::scoring::ComplianceScorer;

fn router() -> axum::Router {
    audit_router(Arc::new(ComplianceScorer::default()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn score_endpoint_returns_grade_and_breakdown() {
    let template = serde_json::to_value(split_template()).expect("template serializes");
    let request = post_json(
        "/api/v1/audits/score",
        json!({
            "template": template,
            "responses": {
                "q1": { "compliance_status": "COMPLIANT", "answer_text": "Yes" },
                "q2": { "compliance_status": "NON_COMPLIANT" }
            }
        }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall_score"], json!(60.0));
    assert_eq!(body["grade"], "PASS");
    assert_eq!(body["color_band"], "AMBER");
    assert_eq!(body["answered_count"], 1);
    assert_eq!(body["category_scores"]["ppe"]["score"], json!(60.0));
}

#[tokio::test]
async fn score_endpoint_reports_missing_template() {
    let request = post_json("/api/v1/audits/score", json!({ "responses": {} }));

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body["score"].is_null());
    assert_eq!(body["detail"], "no checklist template loaded");
}

#[tokio::test]
async fn remediation_endpoint_prefills_deadline() {
    let request = post_json(
        "/api/v1/findings/remediation",
        json!({
            "finding_type": "MAJOR_NC",
            "severity": "CRITICAL",
            "today": "2025-06-02"
        }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["priority"], "CRITICAL");
    assert_eq!(body["target_date"], "2025-06-16");
    assert_eq!(body["risk_level"], 9);
    assert_eq!(body["days_remaining"], 14);
    assert_eq!(body["urgency"], "high priority");
}

#[tokio::test]
async fn remediation_endpoint_bands_overridden_dates() {
    let request = post_json(
        "/api/v1/findings/remediation",
        json!({
            "findingType": "OPPORTUNITY",
            "severity": "unheard-of",
            "today": "2025-06-02",
            "targetDate": "2025-06-05"
        }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    let body = read_json_body(response).await;
    assert_eq!(body["priority"], "MEDIUM");
    assert_eq!(body["suggested_target_date"], "2025-08-31");
    assert_eq!(body["target_date"], "2025-06-05");
    assert_eq!(body["risk_level"], 3);
    assert_eq!(body["urgency"], "urgent");
}

#[tokio::test]
async fn malformed_payloads_are_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/findings/remediation")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"finding_type\": \"MAJOR_NC\", \"severity\": 42}"))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn null_classifications_fall_back_to_defaults() {
    let request = post_json(
        "/api/v1/findings/remediation",
        json!({
            "finding_type": null,
            "severity": null,
            "today": "2025-06-02"
        }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["priority"], "MEDIUM");
    assert_eq!(body["target_date"], "2025-07-02");
    assert_eq!(body["risk_level"], 3);
}

#[tokio::test]
async fn score_endpoint_accepts_null_statuses() {
    let template = serde_json::to_value(split_template()).expect("template serializes");
    let request = post_json(
        "/api/v1/audits/score",
        json!({
            "template": template,
            "responses": {
                "q1": { "compliance_status": null },
                "q2": { "compliance_status": "NON_COMPLIANT" }
            }
        }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall_score"], json!(60.0));
}
