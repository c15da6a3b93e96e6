pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Selection,
    Table,
}

impl ExportScope {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportScope::Selection => "selected_rows.json",
            ExportScope::Table => "table.json",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ExportScope::Selection => "Download selected rows as json",
            ExportScope::Table => "Download table as json",
        }
    }
}

/// A serialized export ready to be handed to the save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub scope: ExportScope,
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub row_count: usize,
    pub body: String,
}

impl ExportArtifact {
    pub fn json(scope: ExportScope, row_count: usize, body: String) -> Self {
        Self {
            scope,
            file_name: scope.file_name(),
            content_type: JSON_CONTENT_TYPE,
            row_count,
            body,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }
}
