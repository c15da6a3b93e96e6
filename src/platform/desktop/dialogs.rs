use std::path::{Path, PathBuf};

use rfd::FileDialog;

use crate::domain::entities::export::ExportArtifact;
use crate::infra::export::file_sink::write_artifact;
use crate::usecase::ports::sink::{ArtifactSink, SaveError, SaveOutcome};

pub const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls"];
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

/// Returns `None` when the user closes the picker without choosing.
pub fn pick_spreadsheet(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Upload your Excel file")
        .add_filter("Excel", EXCEL_EXTENSIONS)
        .add_filter("Spreadsheets", SPREADSHEET_EXTENSIONS);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Native save dialog pre-filled with the artifact's file name.
#[derive(Debug, Clone, Default)]
pub struct SaveDialogSink {
    pub start_dir: Option<PathBuf>,
}

impl ArtifactSink for SaveDialogSink {
    fn save(&self, artifact: &ExportArtifact) -> Result<SaveOutcome, SaveError> {
        let mut dialog = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(artifact.file_name);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return Ok(SaveOutcome::Cancelled);
        };
        write_artifact(&path, artifact)?;
        Ok(SaveOutcome::Saved(path.display().to_string()))
    }
}
