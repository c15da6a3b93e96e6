use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::export::ExportArtifact;
use crate::usecase::ports::sink::{ArtifactSink, SaveError, SaveOutcome};

pub fn write_artifact(path: &Path, artifact: &ExportArtifact) -> Result<(), SaveError> {
    std::fs::write(path, artifact.bytes()).map_err(|source| SaveError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        path = %path.display(),
        content_type = artifact.content_type,
        bytes = artifact.body.len(),
        "artifact written"
    );
    Ok(())
}

/// Writes artifacts under a fixed directory using the artifact's file name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    pub dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&self, artifact: &ExportArtifact) -> Result<SaveOutcome, SaveError> {
        let path = self.dir.join(artifact.file_name);
        write_artifact(&path, artifact)?;
        Ok(SaveOutcome::Saved(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::export::ExportScope;

    #[test]
    fn writes_artifact_under_its_file_name() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let sink = DirectorySink::new(dir.path());
        let artifact = ExportArtifact::json(ExportScope::Selection, 0, "[]".to_string());

        let outcome = sink.save(&artifact).expect("save should succeed");

        let path = dir.path().join("selected_rows.json");
        assert_eq!(outcome, SaveOutcome::Saved(path.display().to_string()));
        assert_eq!(std::fs::read_to_string(&path).expect("file should exist"), "[]");
    }

    #[test]
    fn missing_directory_reports_write_error() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let sink = DirectorySink::new(dir.path().join("missing"));
        let artifact = ExportArtifact::json(ExportScope::Table, 0, "[]".to_string());

        let result = sink.save(&artifact);

        assert!(matches!(result, Err(SaveError::Write { .. })));
    }
}
