mod guard;
mod quiz;
mod results;
mod summary;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use guard::use_screen_guard;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use summary::SummaryView;
pub use upload::{UploadIntent, UploadView};
