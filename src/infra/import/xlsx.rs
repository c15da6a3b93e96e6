use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::domain::entities::table::Record;
use crate::infra::import::records::records_from_rows;
use crate::usecase::ports::parser::ParseError;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => v.to_string(),
        Data::Empty => String::new(),
    }
}

pub fn records_from_range(range: &Range<Data>) -> Vec<Record> {
    records_from_rows(
        range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>()),
    )
}

/// Reads the first worksheet of an xlsx/xlsm/xlsb/xls/ods payload.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::NoWorksheet)??;
    Ok(records_from_range(&range))
}
