use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::audit::domain::{
    Category, CategoryId, ChecklistTemplate, ComplianceStatus, Question, QuestionId,
    QuestionResponse, ResponseSet,
};

pub(super) fn question(id: &str, weight: f64) -> Question {
    Question {
        id: QuestionId::from(id),
        text: format!("Question {id}"),
        weight,
        is_mandatory: false,
    }
}

pub(super) fn category(id: &str, weight: f64, questions: Vec<Question>) -> Category {
    Category {
        id: CategoryId::from(id),
        name: id.to_uppercase(),
        weight,
        questions,
    }
}

pub(super) fn template(categories: Vec<Category>) -> ChecklistTemplate {
    ChecklistTemplate {
        name: "Site HSSE inspection".to_string(),
        audit_type: Some("internal".to_string()),
        categories,
    }
}

/// One category (weight 100) with two questions weighted 60/40.
pub(super) fn split_template() -> ChecklistTemplate {
    template(vec![category(
        "ppe",
        100.0,
        vec![question("q1", 60.0), question("q2", 40.0)],
    )])
}

/// Two categories: housekeeping (30) and fire safety (70).
pub(super) fn site_template() -> ChecklistTemplate {
    template(vec![
        category(
            "housekeeping",
            30.0,
            vec![question("h1", 50.0), question("h2", 50.0)],
        ),
        category(
            "fire",
            70.0,
            vec![
                question("f1", 40.0),
                question("f2", 30.0),
                question("f3", 30.0),
            ],
        ),
    ])
}

pub(super) fn responses(entries: &[(&str, ComplianceStatus)]) -> ResponseSet {
    entries
        .iter()
        .map(|(id, status)| (QuestionId::from(*id), QuestionResponse::with_status(*status)))
        .collect()
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
