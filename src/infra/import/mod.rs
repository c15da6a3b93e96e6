pub mod csv;
pub mod records;
pub mod xlsx;

use tracing::debug;

use self::csv::parse_delimited;
use self::xlsx::parse_workbook;
use crate::domain::entities::table::Record;
use crate::usecase::ports::parser::{ParseError, SpreadsheetParser};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Workbook,
    Delimited,
}

pub fn detect_payload(bytes: &[u8]) -> PayloadKind {
    if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
        PayloadKind::Workbook
    } else {
        PayloadKind::Delimited
    }
}

/// Default parser: workbooks through calamine, anything else as CSV text.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookParser;

impl SpreadsheetParser for WorkbookParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
        let kind = detect_payload(bytes);
        debug!(?kind, len = bytes.len(), "parsing payload");
        match kind {
            PayloadKind::Workbook => parse_workbook(bytes),
            PayloadKind::Delimited => parse_delimited(bytes),
        }
    }
}
