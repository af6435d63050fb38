use crate::model::{ProcessedDocument, QuestionReview, QuizResult, QuizSession};
use crate::navigation::{
    NavAction, NavigationGuardViolation, Prerequisites, Screen, TransitionError,
};

/// Everything the views share for one run of the app.
///
/// Not persisted. Owned by whoever drives the UI and handed to views
/// explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    document: Option<ProcessedDocument>,
    quiz: QuizSession,
    screen: Screen,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> Option<&ProcessedDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn prerequisites(&self) -> Prerequisites {
        Prerequisites {
            has_document: self.document.is_some(),
            has_score: self.quiz.score().is_some(),
        }
    }

    fn question_count(&self) -> usize {
        self.document
            .as_ref()
            .map_or(0, ProcessedDocument::question_count)
    }

    /// Replaces the document wholesale and lands on the summary.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotAllowed` unless on the upload screen; the
    /// session is left untouched in that case.
    pub fn commit_document(&mut self, document: ProcessedDocument) -> Result<(), TransitionError> {
        let prereq = Prerequisites {
            has_document: true,
            has_score: false,
        };
        let next = self.screen.transition(NavAction::DocumentProcessed, prereq)?;
        self.document = Some(document);
        self.quiz.reset();
        self.screen = next;
        Ok(())
    }

    /// Shows `requested` if its data is present, otherwise moves to the redirect target.
    ///
    /// # Errors
    ///
    /// Returns the `NavigationGuardViolation` after the redirect has been applied.
    pub fn enter(&mut self, requested: Screen) -> Result<Screen, NavigationGuardViolation> {
        match requested.check(self.prerequisites()) {
            Ok(screen) => {
                self.screen = screen;
                Ok(screen)
            }
            Err(violation) => {
                self.screen = violation.redirect;
                Err(violation)
            }
        }
    }

    fn apply(&mut self, action: NavAction) -> Result<Screen, TransitionError> {
        let next = self.screen.transition(action, self.prerequisites())?;
        self.screen = next;
        Ok(next)
    }

    /// Starts a fresh attempt; earlier answers never carry over.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when not on the summary screen.
    pub fn start_quiz(&mut self) -> Result<(), TransitionError> {
        self.apply(NavAction::StartQuiz)?;
        self.quiz.reset();
        Ok(())
    }

    /// Records an answer for the current attempt.
    pub fn select_answer(&mut self, index: usize, option: impl Into<String>) {
        self.quiz.select_answer(index, option);
    }

    pub fn go_to_question(&mut self, index: usize) {
        let len = self.question_count();
        self.quiz.go_to(index, len);
    }

    pub fn next_question(&mut self) {
        let len = self.question_count();
        self.quiz.next(len);
    }

    pub fn previous_question(&mut self) {
        self.quiz.previous();
    }

    #[must_use]
    pub fn can_submit_quiz(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| self.quiz.can_submit(doc.quiz()))
    }

    /// Scores the attempt once and moves to the results.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::QuizIncomplete` if any question is unanswered,
    /// or `TransitionError::NotAllowed` when no quiz is in progress.
    pub fn submit_quiz(&mut self) -> Result<QuizResult, TransitionError> {
        if self.screen != Screen::QuizInProgress {
            return Err(TransitionError::NotAllowed {
                from: self.screen,
                action: NavAction::SubmitQuiz,
            });
        }
        let total = self.question_count();
        if !self.can_submit_quiz() {
            return Err(TransitionError::QuizIncomplete {
                remaining: self.quiz.remaining(total),
            });
        }

        self.apply(NavAction::SubmitQuiz)?;
        let score = self
            .document
            .as_ref()
            .map_or(0, |doc| self.quiz.compute_score(doc.quiz()));
        self.quiz.record_score(score);
        Ok(QuizResult::new(score, total))
    }

    /// # Errors
    ///
    /// Returns `TransitionError::NotAllowed` unless on the results screen.
    pub fn back_to_summary(&mut self) -> Result<(), TransitionError> {
        self.apply(NavAction::BackToSummary).map(|_| ())
    }

    /// Returns to the upload screen. The current document stays until replaced.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotAllowed` from the upload or quiz screens.
    pub fn upload_another(&mut self) -> Result<(), TransitionError> {
        self.apply(NavAction::UploadAnother).map(|_| ())
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        let score = self.quiz.score()?;
        Some(QuizResult::new(score, self.question_count()))
    }

    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview> {
        self.document
            .as_ref()
            .map(|doc| self.quiz.review(doc.quiz()))
            .unwrap_or_default()
    }
}
