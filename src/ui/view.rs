use crate::domain::entities::export::ExportScope;
use crate::domain::entities::table::RowId;
use crate::usecase::ports::sink::SaveOutcome;
use crate::usecase::services::editor_service::{EditorSnapshot, IngestOutcome};

pub const PAGE_TITLE: &str = "Upload your Excel file";
pub const SELECT_HEADER: &str = "Select";
pub const FULL_TABLE_LABEL: &str = "Download full table as json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub index: usize,
    pub selected: bool,
    /// One entry per column; missing cells are empty.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub selected_count: usize,
    pub export_label: &'static str,
    pub show_full_table_export: bool,
}

/// `None` until a table has been loaded.
pub fn table_view(snapshot: &EditorSnapshot) -> Option<TableView> {
    let table = snapshot.table.as_ref()?;
    let columns = snapshot.columns().to_vec();
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowView {
            id: row.id(),
            index,
            selected: snapshot.is_selected(row.id()),
            cells: columns
                .iter()
                .map(|column| row.get(column).unwrap_or_default().to_string())
                .collect(),
        })
        .collect();
    let scope = snapshot.export_scope();

    Some(TableView {
        columns,
        rows,
        selected_count: snapshot.selection.len(),
        export_label: scope.button_label(),
        show_full_table_export: scope == ExportScope::Selection,
    })
}

pub fn ingest_status(outcome: IngestOutcome, source: &str) -> Option<String> {
    match outcome {
        IngestOutcome::Loaded { rows, columns } => Some(format!(
            "Loaded {source}: {rows} rows, {columns} columns"
        )),
        IngestOutcome::Ignored => Some(format!("{source} has no rows; table unchanged")),
        IngestOutcome::Stale => None,
    }
}

pub fn save_status(outcome: &SaveOutcome, row_count: usize) -> String {
    match outcome {
        SaveOutcome::Saved(path) => format!("Saved {row_count} rows to {path}"),
        SaveOutcome::Cancelled => "Export cancelled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::table::Record;
    use crate::usecase::services::editor_service::TableEditor;

    fn loaded_editor() -> TableEditor {
        let mut editor = TableEditor::new();
        editor.ingest(vec![
            Record::from_pairs([("Name", "Ann"), ("City", "Oslo")]),
            Record::from_pairs([("Name", "Bo")]),
        ]);
        editor
    }

    #[test]
    fn empty_editor_has_no_table_view() {
        assert!(table_view(&TableEditor::new().snapshot()).is_none());
    }

    #[test]
    fn rows_render_in_column_order_with_blank_gaps() {
        let view = table_view(&loaded_editor().snapshot()).expect("table should render");

        assert_eq!(view.columns, vec!["Name".to_string(), "City".to_string()]);
        assert_eq!(view.rows[0].cells, vec!["Ann".to_string(), "Oslo".to_string()]);
        assert_eq!(view.rows[1].cells, vec!["Bo".to_string(), String::new()]);
        assert_eq!(view.rows[1].index, 1);
    }

    #[test]
    fn labels_follow_selection() {
        let mut editor = loaded_editor();
        let view = table_view(&editor.snapshot()).expect("table should render");
        assert_eq!(view.export_label, "Download table as json");
        assert!(!view.show_full_table_export);

        editor.toggle(view.rows[1].id);

        let view = table_view(&editor.snapshot()).expect("table should render");
        assert_eq!(view.export_label, "Download selected rows as json");
        assert!(view.show_full_table_export);
        assert!(view.rows[1].selected);
        assert!(!view.rows[0].selected);
        assert_eq!(view.selected_count, 1);
    }

    #[test]
    fn stale_ingest_has_no_status() {
        assert_eq!(ingest_status(IngestOutcome::Stale, "a.xlsx"), None);
        assert_eq!(
            ingest_status(IngestOutcome::Loaded { rows: 2, columns: 3 }, "a.xlsx"),
            Some("Loaded a.xlsx: 2 rows, 3 columns".to_string())
        );
    }

    #[test]
    fn save_status_mentions_destination() {
        let status = save_status(&SaveOutcome::Saved("/tmp/table.json".to_string()), 4);
        assert_eq!(status, "Saved 4 rows to /tmp/table.json");
        assert_eq!(save_status(&SaveOutcome::Cancelled, 4), "Export cancelled");
    }
}
