use thiserror::Error;

use crate::model::{UploadError, ValidationError};
use crate::navigation::{NavigationGuardViolation, TransitionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Guard(#[from] NavigationGuardViolation),
}
