use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct TemplateRecord {
    pub(crate) category_id: String,
    pub(crate) category_name: String,
    pub(crate) category_weight: f64,
    pub(crate) question_id: String,
    pub(crate) question_text: String,
    pub(crate) question_weight: f64,
    pub(crate) is_mandatory: bool,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<TemplateRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<TemplateRow>() {
        let row = record?;
        records.push(TemplateRecord {
            category_name: row.category_name.unwrap_or_else(|| row.category_id.clone()),
            category_id: row.category_id,
            category_weight: row.category_weight.unwrap_or(0.0),
            question_text: row.question_text.unwrap_or_default(),
            question_id: row.question_id,
            question_weight: row.question_weight.unwrap_or(0.0),
            is_mandatory: row.mandatory.as_deref().map(is_truthy).unwrap_or(false),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct TemplateRow {
    #[serde(rename = "Category ID")]
    category_id: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category_name: Option<String>,
    #[serde(rename = "Category Weight", default)]
    category_weight: Option<f64>,
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Question", default, deserialize_with = "empty_string_as_none")]
    question_text: Option<String>,
    #[serde(rename = "Question Weight", default)]
    question_weight: Option<f64>,
    #[serde(rename = "Mandatory", default, deserialize_with = "empty_string_as_none")]
    mandatory: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}
