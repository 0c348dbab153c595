mod parser;

use std::io::Read;
use std::path::Path;

use super::domain::{Category, CategoryId, ChecklistTemplate, Question, QuestionId};

/// Failures raised while reading a flat checklist export.
#[derive(Debug, thiserror::Error)]
pub enum TemplateImportError {
    #[error("failed to read checklist template: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid checklist template CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Builds a `ChecklistTemplate` from a one-row-per-question CSV export.
pub struct ChecklistTemplateImporter;

impl ChecklistTemplateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ChecklistTemplate, TemplateImportError> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;
        let mut template = Self::from_reader(file)?;
        template.name = name;
        Ok(template)
    }

    /// Rows are grouped by category id in first-seen order. The first row of a category
    /// supplies its name and weight.
    pub fn from_reader<R: Read>(reader: R) -> Result<ChecklistTemplate, TemplateImportError> {
        let mut categories: Vec<Category> = Vec::new();

        for record in parser::parse_records(reader)? {
            let category_id = CategoryId(record.category_id);
            let index = match categories.iter().position(|c| c.id == category_id) {
                Some(index) => index,
                None => {
                    categories.push(Category {
                        id: category_id,
                        name: record.category_name,
                        weight: record.category_weight,
                        questions: Vec::new(),
                    });
                    categories.len() - 1
                }
            };

            categories[index].questions.push(Question {
                id: QuestionId(record.question_id),
                text: record.question_text,
                weight: record.question_weight,
                is_mandatory: record.is_mandatory,
            });
        }

        Ok(ChecklistTemplate {
            name: String::new(),
            audit_type: None,
            categories,
        })
    }
}
