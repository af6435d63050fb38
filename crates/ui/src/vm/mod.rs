mod markdown_vm;
mod notification_vm;
mod quiz_vm;
mod results_vm;
mod summary_vm;
mod upload_vm;

pub use markdown_vm::{markdown_to_html, normalize_markdown, sanitize_html};
pub use notification_vm::{Notification, NotificationKind};
pub use quiz_vm::{OptionVm, QuizVm, StepVm, submit_label};
pub use results_vm::{ResultsVm, ReviewOptionVm, ReviewVm};
pub use summary_vm::SummaryVm;
pub use upload_vm::{UploadVm, format_size};
