use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::edit::CellEdit;
use crate::domain::entities::export::{ExportArtifact, ExportScope};
use crate::domain::entities::selection::SelectionSet;
use crate::domain::entities::table::{Record, Row, RowId, Table};
use crate::usecase::services::export_service::{build_artifact, ExportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Empty,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Loaded { rows: usize, columns: usize },
    /// Zero records; the previous table is kept.
    Ignored,
    /// A newer ingestion was started before this one finished.
    Stale,
}

/// Immutable view of the editor state. Rows are shared with the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub table: Option<Table>,
    pub selection: SelectionSet,
}

impl EditorSnapshot {
    pub fn phase(&self) -> EditorPhase {
        if self.table.is_some() {
            EditorPhase::Loaded
        } else {
            EditorPhase::Empty
        }
    }

    pub fn columns(&self) -> &[String] {
        self.table.as_ref().map(Table::columns).unwrap_or_default()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selection.contains(id)
    }

    pub fn export_scope(&self) -> ExportScope {
        scope_for(&self.selection)
    }
}

fn scope_for(selection: &SelectionSet) -> ExportScope {
    if selection.is_empty() {
        ExportScope::Table
    } else {
        ExportScope::Selection
    }
}

/// Owns the table, columns, and selection. State changes only through ingestion,
/// [`TableEditor::toggle`] and [`TableEditor::update`]; rendering reads an [`EditorSnapshot`].
#[derive(Debug, Default)]
pub struct TableEditor {
    table: Option<Table>,
    selection: SelectionSet,
    next_row_id: u64,
    latest_ticket: u64,
}

impl TableEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            table: self.table.clone(),
            selection: self.selection.clone(),
        }
    }

    pub fn is_current(&self, ticket: IngestTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Starts an ingestion. Any ticket issued earlier becomes stale.
    pub fn begin_ingest(&mut self) -> IngestTicket {
        self.latest_ticket += 1;
        IngestTicket(self.latest_ticket)
    }

    pub fn finish_ingest(&mut self, ticket: IngestTicket, records: Vec<Record>) -> IngestOutcome {
        if !self.is_current(ticket) {
            warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding superseded ingestion"
            );
            return IngestOutcome::Stale;
        }
        self.apply_records(records)
    }

    /// Synchronous ingestion: begin and finish in one step.
    #[allow(dead_code)]
    pub fn ingest(&mut self, records: Vec<Record>) -> IngestOutcome {
        let ticket = self.begin_ingest();
        self.finish_ingest(ticket, records)
    }

    fn apply_records(&mut self, records: Vec<Record>) -> IngestOutcome {
        if records.is_empty() {
            warn!("parsed file has no records; keeping current table");
            return IngestOutcome::Ignored;
        }

        let rows: Vec<Row> = records
            .into_iter()
            .map(|record| {
                self.next_row_id += 1;
                Row::new(RowId::from(self.next_row_id), record)
            })
            .collect();
        let table = Table::from_rows(rows);
        let outcome = IngestOutcome::Loaded {
            rows: table.len(),
            columns: table.columns().len(),
        };

        self.table = Some(table);
        self.selection.clear();
        info!(?outcome, "table replaced");
        outcome
    }

    /// Flips selection of a row. Returns whether the row is now selected.
    pub fn toggle(&mut self, id: RowId) -> bool {
        let selected = self.selection.toggle(id);
        debug!(row = u64::from(id), selected, "toggled row selection");
        selected
    }

    /// Replaces one cell value. Out-of-range rows are ignored.
    pub fn update(&mut self, row_index: usize, column: &str, value: impl Into<String>) -> bool {
        let Some(table) = self.table.as_mut() else {
            return false;
        };
        let applied = table.set_value(row_index, column, value);
        if applied {
            debug!(row_index, column, "cell updated");
        } else {
            debug!(row_index, column, "ignoring update outside table");
        }
        applied
    }

    pub fn apply_edit(&mut self, edit: CellEdit) -> bool {
        self.update(edit.cell.row_idx, &edit.cell.column, edit.value)
    }

    /// Scope picked by [`Self::export_json`]: the selection whenever one exists.
    pub fn export_scope(&self) -> ExportScope {
        scope_for(&self.selection)
    }

    pub fn export_json(&self) -> Result<ExportArtifact, ExportError> {
        self.export(self.export_scope())
    }

    /// Exports every row regardless of the current selection.
    pub fn export_table_json(&self) -> Result<ExportArtifact, ExportError> {
        self.export(ExportScope::Table)
    }

    fn export(&self, scope: ExportScope) -> Result<ExportArtifact, ExportError> {
        let artifact = match (scope, self.table.as_ref()) {
            (_, None) => build_artifact(scope, std::iter::empty())?,
            (ExportScope::Table, Some(table)) => {
                build_artifact(scope, table.rows().iter().map(Arc::as_ref))?
            }
            (ExportScope::Selection, Some(table)) => {
                build_artifact(scope, self.selection.iter().filter_map(|id| table.find(id)))?
            }
        };
        info!(
            scope = ?artifact.scope,
            file_name = artifact.file_name,
            rows = artifact.row_count,
            "export prepared"
        );
        Ok(artifact)
    }
}
