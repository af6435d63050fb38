use quiz_core::model::ProcessedDocument;

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub filename: String,
    pub read_time_str: String,
    pub question_count: usize,
    pub questions_str: String,
    pub summary_html: String,
}

impl From<&ProcessedDocument> for SummaryVm {
    fn from(doc: &ProcessedDocument) -> Self {
        let question_count = doc.question_count();
        Self {
            filename: doc.filename().to_string(),
            read_time_str: format!("{} min read", doc.estimated_read_minutes()),
            question_count,
            questions_str: format!("{question_count} quiz questions"),
            summary_html: markdown_to_html(doc.summary()),
        }
    }
}
