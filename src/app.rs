use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::domain::entities::edit::CellEdit;
use crate::infra::export::file_sink::DirectorySink;
use crate::infra::import::WorkbookParser;
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::dialogs::{pick_spreadsheet, SaveDialogSink};
use crate::ui::state::app_state::AppState;
use crate::ui::view::{
    ingest_status, save_status, table_view, FULL_TABLE_LABEL, PAGE_TITLE, SELECT_HEADER,
};
use crate::usecase::ports::sink::ArtifactSink;
use crate::usecase::services::editor_service::{EditorPhase, TableEditor};
use crate::usecase::services::import_service::ImportService;

const CELL_STYLE: &str = "border: 1px solid black; padding: 4px 8px; white-space: nowrap;";
const HEADER_STYLE: &str =
    "border: 1px solid black; padding: 4px 8px; background: #f3f4f6; text-align: center;";
const BUTTON_STYLE: &str = "margin-top: 16px; margin-right: 8px; padding: 8px 16px;";

/// Dialog-based save unless the config asks for silent saves into a known directory.
pub fn artifact_sink(config: &AppConfig) -> Box<dyn ArtifactSink> {
    let export_dir = config.resolved_export_dir();
    match (config.ask_before_save, export_dir) {
        (false, Some(dir)) => Box::new(DirectorySink::new(dir)),
        (_, start_dir) => Box::new(SaveDialogSink { start_dir }),
    }
}

fn run_export(
    editor: Signal<TableEditor>,
    mut status: Signal<String>,
    config: &AppConfig,
    full_table: bool,
) {
    let prepared = {
        let editor = editor.read();
        if full_table {
            editor.export_table_json()
        } else {
            editor.export_json()
        }
    };
    let artifact = match prepared {
        Ok(artifact) => artifact,
        Err(err) => {
            error!("export failed: {err}");
            status.set(format!("Export failed: {err}"));
            return;
        }
    };

    match artifact_sink(config).save(&artifact) {
        Ok(outcome) => status.set(save_status(&outcome, artifact.row_count)),
        Err(err) => {
            error!("saving {} failed: {err}", artifact.file_name);
            status.set(format!("Export failed: {err}"));
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let AppState {
        mut editor,
        mut busy,
        mut status,
        mut last_dir,
    } = AppState::new();

    let import_service =
        use_hook(|| Arc::new(ImportService::new(Arc::new(WorkbookParser))));

    let snapshot = editor.read().snapshot();
    let upload_label = match snapshot.phase() {
        EditorPhase::Empty => "Choose file (.xlsx, .xls)",
        EditorPhase::Loaded => "Replace file (.xlsx, .xls)",
    };
    let view = table_view(&snapshot);

    let config_for_export = config.clone();
    let config_for_full_export = config.clone();

    let table_section = match view {
        Some(view) => rsx! {
            div {
                style: "overflow-x: auto;",
                table {
                    style: "border-collapse: collapse; width: 100%; font-size: 0.875rem; text-align: left;",
                    thead {
                        tr {
                            th { style: "{HEADER_STYLE}", "{SELECT_HEADER}" }
                            for column in view.columns.iter() {
                                th { style: "{HEADER_STYLE}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        {view.rows.iter().map(|row| {
                            let id = row.id;
                            let row_idx = row.index;
                            let cells = view
                                .columns
                                .iter()
                                .cloned()
                                .zip(row.cells.iter().cloned())
                                .collect::<Vec<_>>();
                            rsx!(
                                tr {
                                    key: "{id.0}",
                                    td { style: "{CELL_STYLE} text-align: center;",
                                        input {
                                            r#type: "checkbox",
                                            checked: row.selected,
                                            onchange: move |_| {
                                                editor.write().toggle(id);
                                            }
                                        }
                                    }
                                    {cells.into_iter().map(|(column, value)| {
                                        rsx!(
                                            td { style: "{CELL_STYLE}",
                                                input {
                                                    style: "border: none; background: transparent; text-align: center;",
                                                    value: "{value}",
                                                    onchange: move |event| {
                                                        editor
                                                            .write()
                                                            .apply_edit(CellEdit::new(row_idx, column.clone(), event.value()));
                                                    }
                                                }
                                            }
                                        )
                                    })}
                                }
                            )
                        })}
                    }
                }
            }
            button {
                style: "{BUTTON_STYLE} background: #3b82f6; color: white; border-radius: 4px;",
                onclick: move |_| run_export(editor, status, &config_for_export, false),
                "{view.export_label}"
            }
            if view.show_full_table_export {
                button {
                    style: "{BUTTON_STYLE} border: 1px solid #3b82f6; border-radius: 4px;",
                    onclick: move |_| run_export(editor, status, &config_for_full_export, true),
                    "{FULL_TABLE_LABEL}"
                }
                span { style: "color: #555;", "{view.selected_count} selected" }
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: sans-serif;",
            h1 { style: "font-size: 1.5rem; font-weight: bold; color: #991b1b;", "{PAGE_TITLE}" }
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 16px;",
                button {
                    style: "padding: 8px; border: 1px solid #999; border-radius: 4px;",
                    onclick: move |_| {
                        let start_dir = last_dir();
                        let Some(path) = pick_spreadsheet(start_dir.as_deref()) else {
                            debug!("no file chosen");
                            return;
                        };
                        if let Some(parent) = path.parent() {
                            last_dir.set(Some(parent.to_path_buf()));
                        }
                        let source = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());

                        let ticket = editor.write().begin_ingest();
                        busy.set(true);
                        status.set(format!("Reading {source}"));

                        let import_service = import_service.clone();
                        spawn(async move {
                            let result = run_blocking(move || import_service.import_file(&path))
                                .await
                                .map_err(anyhow::Error::from)
                                .and_then(|parsed| parsed);
                            match result {
                                Ok(records) => {
                                    let outcome = editor.write().finish_ingest(ticket, records);
                                    if let Some(message) = ingest_status(outcome, &source) {
                                        status.set(message);
                                        busy.set(false);
                                    }
                                }
                                Err(err) => {
                                    error!("{err:#}");
                                    if editor.read().is_current(ticket) {
                                        status.set(format!("Import failed: {err:#}"));
                                        busy.set(false);
                                    }
                                }
                            }
                        });
                    },
                    "{upload_label}"
                }
                span { style: "color: #555;", if busy() { "Parsing… " } "{status}" }
            }

            {table_section}
        }
    }
}
