use dioxus::prelude::*;
use shared_http::api::RecordId;

/// One rendered row: the record id (if any) and its display cells.
pub type TableRow = (Option<RecordId>, Vec<String>);

/// Plain table; an actions column is added when either handler is given.
#[component]
pub fn DataTable(
    headers: Vec<String>,
    rows: Vec<TableRow>,
    on_edit: Option<EventHandler<RecordId>>,
    on_delete: Option<EventHandler<RecordId>>,
) -> Element {
    let with_actions = on_edit.is_some() || on_delete.is_some();

    rsx! {
        div { class: "table-wrapper",
            table { class: "data-table",
                thead {
                    tr {
                        for header in headers {
                            th { key: "{header}", "{header}" }
                        }
                        if with_actions {
                            th { class: "actions", "Ações" }
                        }
                    }
                }
                tbody {
                    for (index, (id, cells)) in rows.into_iter().enumerate() {
                        tr { key: "{index}",
                            for (column, cell) in cells.into_iter().enumerate() {
                                td { key: "{column}", "{cell}" }
                            }
                            if with_actions {
                                td { class: "actions",
                                    if let (Some(id), Some(handler)) = (id, on_edit) {
                                        button {
                                            class: "icon-button",
                                            title: "Editar",
                                            onclick: move |_| handler.call(id),
                                            "✎"
                                        }
                                    }
                                    if let (Some(id), Some(handler)) = (id, on_delete) {
                                        button {
                                            class: "icon-button danger",
                                            title: "Excluir",
                                            onclick: move |_| handler.call(id),
                                            "🗑"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
