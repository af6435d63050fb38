use std::collections::BTreeMap;

use crate::model::document::QuizQuestion;

//
// ─── QUIZ SESSION ─────────────────────────────────────────────────────────────
//

/// In-progress answers for one quiz attempt.
///
/// Answers are keyed by question index; a missing key means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    user_answers: BTreeMap<usize, String>,
    score: Option<usize>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn user_answers(&self) -> &BTreeMap<usize, String> {
        &self.user_answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.user_answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Records `option` for `index`, replacing any earlier answer.
    pub fn select_answer(&mut self, index: usize, option: impl Into<String>) {
        self.user_answers.insert(index, option.into());
    }

    /// Counts questions whose recorded answer matches the correct one.
    ///
    /// Unanswered questions count as incorrect. Works on partial answer sets.
    #[must_use]
    pub fn compute_score(&self, quiz: &[QuizQuestion]) -> usize {
        quiz.iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answer(*index)
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count()
    }

    /// True once every question in `quiz` has a non-empty answer.
    #[must_use]
    pub fn can_submit(&self, quiz: &[QuizQuestion]) -> bool {
        self.answered_count(quiz.len()) == quiz.len()
    }

    /// Non-empty answers among the first `len` questions.
    #[must_use]
    pub fn answered_count(&self, len: usize) -> usize {
        self.user_answers
            .range(..len)
            .filter(|(_, answer)| !answer.is_empty())
            .count()
    }

    #[must_use]
    pub fn remaining(&self, len: usize) -> usize {
        len - self.answered_count(len)
    }

    pub(crate) fn record_score(&mut self, score: usize) {
        self.score = Some(score);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to `index`, clamped to the last question.
    pub fn go_to(&mut self, index: usize, len: usize) {
        self.current_index = index.min(len.saturating_sub(1));
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current_index.saturating_add(1), len);
    }

    pub fn previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }
}

//
// ─── RESULTS ──────────────────────────────────────────────────────────────────
//

/// Feedback band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Outstanding,
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl ScoreTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            80..=89 => Self::Excellent,
            70..=79 => Self::Great,
            60..=69 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding!",
            Self::Excellent => "Excellent!",
            Self::Great => "Great job!",
            Self::Good => "Good effort!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Final score for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Score as a whole percentage, rounded half up. An empty quiz is 0%.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.score * 200 + self.total) / (self.total * 2);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage())
    }
}

/// How an option is shown when reviewing a finished question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    CorrectAnswer,
    WrongPick,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionReview {
    pub text: String,
    pub mark: OptionMark,
}

/// Per-question breakdown shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub index: usize,
    pub question: String,
    pub user_answer: Option<String>,
    pub is_correct: bool,
    pub options: Vec<OptionReview>,
}

impl QuizSession {
    #[must_use]
    pub fn review(&self, quiz: &[QuizQuestion]) -> Vec<QuestionReview> {
        quiz.iter()
            .enumerate()
            .map(|(index, question)| {
                let user_answer = self.answer(index);
                let is_correct = user_answer.is_some_and(|answer| question.is_correct(answer));
                let options = question
                    .options()
                    .iter()
                    .map(|option| {
                        let mark = if question.is_correct(option) {
                            OptionMark::CorrectAnswer
                        } else if !is_correct && user_answer == Some(option.as_str()) {
                            OptionMark::WrongPick
                        } else {
                            OptionMark::Neutral
                        };
                        OptionReview {
                            text: option.clone(),
                            mark,
                        }
                    })
                    .collect();

                QuestionReview {
                    index,
                    question: question.question().to_string(),
                    user_answer: user_answer.map(str::to_string),
                    is_correct,
                    options,
                }
            })
            .collect()
    }
}
