use quiz_core::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub index: usize,
    pub answered: bool,
    pub current: bool,
}

/// One-question-at-a-time view of the attempt in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub progress_pct: usize,
    pub position_str: String,
    pub progress_str: String,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub steps: Vec<StepVm>,
    pub has_previous: bool,
    pub has_next: bool,
    pub can_submit: bool,
    pub submit_label: String,
}

impl QuizVm {
    /// Returns `None` when there is no document to quiz on.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let doc = state.document()?;
        let quiz = state.quiz();
        let total = doc.question_count();
        let index = quiz.current_index().min(total.saturating_sub(1));
        let answered = quiz.answered_count(total);
        let remaining = quiz.remaining(total);
        let can_submit = state.can_submit_quiz();

        let (question, options) = doc.question(index).map_or_else(
            || (String::new(), Vec::new()),
            |q| {
                let selected = quiz.answer(index);
                let options = q
                    .options()
                    .iter()
                    .map(|text| OptionVm {
                        text: text.clone(),
                        selected: selected == Some(text.as_str()),
                    })
                    .collect();
                (q.question().to_string(), options)
            },
        );

        let steps = (0..total)
            .map(|i| StepVm {
                index: i,
                answered: quiz.answer(i).is_some_and(|a| !a.is_empty()),
                current: i == index,
            })
            .collect();

        Some(Self {
            index,
            total,
            answered,
            progress_pct: if total == 0 { 0 } else { answered * 100 / total },
            position_str: format!("Question {} of {total}", index + 1),
            progress_str: format!("{answered} / {total}"),
            question,
            options,
            steps,
            has_previous: index > 0,
            has_next: index + 1 < total,
            can_submit,
            submit_label: submit_label(can_submit, remaining),
        })
    }
}

#[must_use]
pub fn submit_label(can_submit: bool, remaining: usize) -> String {
    if can_submit {
        return "Submit Quiz".to_string();
    }
    let plural = if remaining == 1 { "" } else { "s" };
    format!("Answer {remaining} more question{plural}")
}
