use crate::domain::entities::table::Record;
use crate::infra::import::records::records_from_rows;
use crate::usecase::ports::parser::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads comma-separated text; the first line is the header row.
pub fn parse_delimited(bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(records_from_rows(rows))
}
