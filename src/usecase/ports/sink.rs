use crate::domain::entities::export::ExportArtifact;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(String),
    Cancelled,
}

/// The client-side save action for an exported artifact.
pub trait ArtifactSink {
    fn save(&self, artifact: &ExportArtifact) -> Result<SaveOutcome, SaveError>;
}
