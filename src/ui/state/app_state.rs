use std::path::PathBuf;

use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::editor_service::TableEditor;

pub struct AppState {
    pub editor: Signal<TableEditor>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub last_dir: Signal<Option<PathBuf>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            editor: use_signal(TableEditor::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            last_dir: use_signal(|| None::<PathBuf>),
        }
    }
}
