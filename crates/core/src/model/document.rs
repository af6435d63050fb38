use serde::{Deserialize, Serialize};

/// Average reading speed used for the summary time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// A single multiple-choice question as produced by the processing service.
///
/// `answer` is expected to equal exactly one of `options`; this is trusted,
/// not re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        self.answer == candidate
    }
}

/// Summary and quiz returned for one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    filename: String,
    summary: String,
    quiz: Vec<QuizQuestion>,
}

impl ProcessedDocument {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        summary: impl Into<String>,
        quiz: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            filename: filename.into(),
            summary: summary.into(),
            quiz,
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.quiz.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.len()
    }

    /// Tokens between single spaces. An empty summary is one token and
    /// consecutive spaces produce empty tokens.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.summary.split(' ').count()
    }

    /// Minutes needed to read the summary, rounded up. Never zero.
    #[must_use]
    pub fn estimated_read_minutes(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE)
    }
}
