use crate::domain::entities::export::{ExportArtifact, ExportScope};
use crate::domain::entities::table::Row;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize rows: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializes rows as a 2-space indented JSON array of objects.
pub fn rows_to_json<'a, I>(rows: I) -> Result<(usize, String), ExportError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let rows: Vec<&Row> = rows.into_iter().collect();
    let body = serde_json::to_string_pretty(&rows)?;
    Ok((rows.len(), body))
}

pub fn build_artifact<'a, I>(scope: ExportScope, rows: I) -> Result<ExportArtifact, ExportError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let (row_count, body) = rows_to_json(rows)?;
    Ok(ExportArtifact::json(scope, row_count, body))
}
