use quiz_core::model::UploadForm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadVm {
    pub selected_name: Option<String>,
    pub selected_size_str: Option<String>,
    pub can_submit: bool,
    pub in_flight: bool,
    pub submit_label: &'static str,
}

impl From<&UploadForm> for UploadVm {
    fn from(form: &UploadForm) -> Self {
        let selected = form.selected();
        Self {
            selected_name: selected.map(|file| file.name().to_string()),
            selected_size_str: selected.map(|file| format_size(file.len())),
            can_submit: form.can_submit(),
            in_flight: form.is_in_flight(),
            submit_label: if form.is_in_flight() {
                "Processing PDF..."
            } else {
                "Generate Summary & Quiz"
            },
        }
    }
}

#[must_use]
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{}.{} MB", bytes / MB, (bytes % MB) * 10 / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes.div_ceil(KB))
    } else {
        format!("{bytes} B")
    }
}
