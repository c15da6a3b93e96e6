use crate::domain::entities::table::Record;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read spreadsheet: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook has no worksheets")]
    NoWorksheet,
}

/// Turns a file payload into records from its first worksheet.
pub trait SpreadsheetParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Record>, ParseError>;
}
