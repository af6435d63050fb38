use quiz_core::SessionState;
use quiz_core::model::{OptionMark, QuestionReview};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    pub badge: &'static str,
    pub options: Vec<ReviewOptionVm>,
}

impl From<&QuestionReview> for ReviewVm {
    fn from(review: &QuestionReview) -> Self {
        Self {
            number: review.index + 1,
            question: review.question.clone(),
            is_correct: review.is_correct,
            badge: if review.is_correct { "Correct" } else { "Incorrect" },
            options: review
                .options
                .iter()
                .map(|option| ReviewOptionVm {
                    text: option.text.clone(),
                    class: match option.mark {
                        OptionMark::CorrectAnswer => "option correct",
                        OptionMark::WrongPick => "option wrong",
                        OptionMark::Neutral => "option",
                    },
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_str: String,
    pub percentage_str: String,
    pub message: &'static str,
    pub questions: Vec<ReviewVm>,
}

impl ResultsVm {
    /// Returns `None` until the attempt has been scored.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let result = state.result()?;
        let questions = state.review().iter().map(ReviewVm::from).collect();
        Some(Self {
            score_str: format!(
                "You scored {} out of {} questions",
                result.score, result.total
            ),
            percentage_str: format!("{}%", result.percentage()),
            message: result.tier().message(),
            questions,
        })
    }
}
