use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::table::Record;
use crate::usecase::ports::parser::SpreadsheetParser;

pub struct ImportService {
    parser: Arc<dyn SpreadsheetParser>,
}

impl ImportService {
    pub fn new(parser: Arc<dyn SpreadsheetParser>) -> Self {
        Self { parser }
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let records = self
            .parser
            .parse(bytes)
            .context("file is not a readable spreadsheet")?;
        Ok(records)
    }

    pub fn import_file(&self, path: &Path) -> Result<Vec<Record>> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        let records = self
            .parse_bytes(&bytes)
            .with_context(|| format!("failed to import: {}", path.display()))?;
        info!(
            path = %path.display(),
            records = records.len(),
            "spreadsheet parsed"
        );
        Ok(records)
    }
}
