use std::collections::HashMap;

use crate::domain::entities::table::Record;

pub const EMPTY_HEADER: &str = "__EMPTY";

/// Makes header names unique: blanks become `__EMPTY`, repeats get `_1`, `_2`, ...
pub fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.iter()
        .map(|cell| {
            let base = if cell.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                cell.clone()
            };
            let Some(mut counter) = seen.get(&base).copied() else {
                seen.insert(base.clone(), 1);
                return base;
            };
            let mut candidate = format!("{base}_{counter}");
            counter += 1;
            while seen.contains_key(&candidate) {
                candidate = format!("{base}_{counter}");
                counter += 1;
            }
            seen.insert(base, counter);
            seen.insert(candidate.clone(), 1);
            candidate
        })
        .collect()
}

/// Converts a grid of cell texts into records keyed by the first row.
///
/// Empty cells are left out of each record and rows with no values are
/// skipped. Cells past the header row's width get generated names.
pub fn records_from_rows<I>(rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut rows = rows.into_iter();
    let Some(mut header_row) = rows.next() else {
        return Vec::new();
    };
    let body: Vec<Vec<String>> = rows.collect();

    let width = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header_row.len()))
        .max()
        .unwrap_or(0);
    header_row.resize(width, String::new());
    let headers = unique_headers(&header_row);

    body.into_iter()
        .filter_map(|cells| {
            let mut record = Record::new();
            for (header, value) in headers.iter().zip(cells) {
                if !value.is_empty() {
                    record.insert(header.as_str(), value);
                }
            }
            (!record.is_empty()).then_some(record)
        })
        .collect()
}
