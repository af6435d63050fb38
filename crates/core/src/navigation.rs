//! Screen flow for the upload → summary → quiz → results cycle.
//!
//! All allowed moves live in [`Screen::transition`]; data-dependent screens are
//! guarded by [`Screen::check`].

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Uploading,
    Summary,
    QuizInProgress,
    QuizResults,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Uploading => "upload",
            Screen::Summary => "summary",
            Screen::QuizInProgress => "quiz",
            Screen::QuizResults => "results",
        };
        f.write_str(name)
    }
}

/// User or network events that move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    DocumentProcessed,
    StartQuiz,
    SubmitQuiz,
    BackToSummary,
    UploadAnother,
}

/// What the session currently holds, as far as the guards care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prerequisites {
    pub has_document: bool,
    pub has_score: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardReason {
    MissingDocument,
    MissingScore,
}

/// A data-dependent screen was requested without its data.
///
/// Not shown to the user; the caller redirects to `redirect`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot enter {screen} ({reason:?}); redirecting to {redirect}")]
pub struct NavigationGuardViolation {
    pub screen: Screen,
    pub redirect: Screen,
    pub reason: GuardReason,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("{action:?} is not allowed from {from}")]
    NotAllowed { from: Screen, action: NavAction },

    #[error("quiz has {remaining} unanswered question(s)")]
    QuizIncomplete { remaining: usize },

    #[error(transparent)]
    Guard(#[from] NavigationGuardViolation),
}

impl Screen {
    /// Checks whether this screen may be shown given `prereq`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationGuardViolation` naming the screen to redirect to.
    pub fn check(self, prereq: Prerequisites) -> Result<Self, NavigationGuardViolation> {
        let needs_document = !matches!(self, Screen::Uploading);
        if needs_document && !prereq.has_document {
            return Err(NavigationGuardViolation {
                screen: self,
                redirect: Screen::Uploading,
                reason: GuardReason::MissingDocument,
            });
        }
        if self == Screen::QuizResults && !prereq.has_score {
            return Err(NavigationGuardViolation {
                screen: self,
                redirect: Screen::QuizInProgress,
                reason: GuardReason::MissingScore,
            });
        }
        Ok(self)
    }

    /// Applies `action` using the transition table.
    ///
    /// The score guard on `QuizResults` is not applied here because the
    /// score is produced by the transition itself.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotAllowed` for moves outside the table and
    /// `TransitionError::Guard` when the target needs a document that is missing.
    pub fn transition(
        self,
        action: NavAction,
        prereq: Prerequisites,
    ) -> Result<Self, TransitionError> {
        let next = match (self, action) {
            (Screen::Uploading, NavAction::DocumentProcessed) => Screen::Summary,
            (Screen::Summary, NavAction::StartQuiz) => Screen::QuizInProgress,
            (Screen::QuizInProgress, NavAction::SubmitQuiz) => Screen::QuizResults,
            (Screen::QuizResults, NavAction::BackToSummary) => Screen::Summary,
            (Screen::Summary | Screen::QuizResults, NavAction::UploadAnother) => Screen::Uploading,
            (from, action) => return Err(TransitionError::NotAllowed { from, action }),
        };

        let prereq = Prerequisites {
            has_score: true,
            ..prereq
        };
        Ok(next.check(prereq)?)
    }
}
