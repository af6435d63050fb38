mod document;
mod quiz;
mod upload;

pub use document::{ProcessedDocument, QuizQuestion, WORDS_PER_MINUTE};
pub use quiz::{
    OptionMark, OptionReview, QuestionReview, QuizResult, QuizSession, ScoreTier,
};
pub use upload::{
    PDF_MEDIA_TYPE, UploadError, UploadForm, UploadedFile, ValidationError, media_type_for_name,
};
