//! Table, form dialog and delete confirmation shared by every record screen.

use dioxus::prelude::*;
use transportadora::catalog::Managed;
use transportadora::directory::Directory;
use transportadora::forms::{FieldKind, FieldSpec};
use transportadora::screen::{DialogMode, EntityScreen, ScreenCell, load_rows, run_mutation};
use transportadora::{Gateway, HasResource};

use crate::components::button::Button;
use crate::components::dialog::Dialog;
use crate::components::input::{Input, Select};
use crate::components::toast::use_notification_toast;
use crate::widgets::data_table::DataTable;
use crate::widgets::empty_state::EmptyState;

/// Lends the signal-held screen to the shared load and write sequencing.
struct SharedScreen<E: 'static>(Signal<EntityScreen<E>>);

impl<E: 'static> ScreenCell<E> for SharedScreen<E> {
    fn update<R>(&mut self, f: impl FnOnce(&mut EntityScreen<E>) -> R) -> R {
        f(&mut self.0.write())
    }
}

pub fn entity_page<E>() -> Element
where
    E: Managed,
    Gateway: HasResource<E>,
{
    let gateway = use_context::<Gateway>();
    let mut screen = use_signal(EntityScreen::<E>::new);
    let client = gateway.resource();

    use_future(move || {
        let gateway = gateway.clone();
        async move {
            let directory = Directory::load(&gateway, E::LOOKUPS).await;
            screen.write().set_directory(directory);
            let client = gateway.resource();
            load_rows(&mut SharedScreen(screen), client.as_ref()).await;
        }
    });

    let state = screen.read();
    let headers: Vec<String> = E::HEADERS.iter().map(|h| h.to_string()).collect();
    let rows = state.table_rows();
    let is_loading = state.is_loading();
    let notification = state.notification().cloned();
    let deleting = state.is_deleting();
    let confirm_open = state.pending_delete().is_some();
    let dialog = state.dialog().cloned();
    let directory = state.directory().clone();
    drop(state);

    use_notification_toast(notification, move |_| screen.write().dismiss_notification());

    let title = E::TITLE;
    let noun = E::NOUN;
    let save_client = client.clone();
    let delete_client = client;

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "{title}" }
                Button { onclick: move |_| screen.write().open_create(), "Adicionar" }
            }

            if is_loading {
                p { class: "loading", "Carregando..." }
            } else if rows.is_empty() {
                EmptyState {
                    plural: E::PLURAL,
                    noun: E::NOUN,
                    on_add: move |_| screen.write().open_create(),
                }
            } else {
                DataTable {
                    headers,
                    rows,
                    on_edit: Some(EventHandler::new(move |id| {
                        screen.write().open_edit(id);
                    })),
                    on_delete: Some(EventHandler::new(move |id| screen.write().request_delete(id))),
                }
            }

            if let Some(dialog) = dialog {
                Dialog {
                    title: match dialog.mode {
                        DialogMode::Create => format!("Adicionar {}", E::LABEL),
                        DialogMode::Edit(_) => format!("Editar {}", E::LABEL),
                    },
                    on_close: move |_| screen.write().close_dialog(),
                    form { class: "entity-form",
                        for spec in E::FIELDS.iter().copied() {
                            FormField {
                                key: "{spec.name}",
                                spec: FieldSpecProp(spec),
                                value: dialog.form.get(spec.name).to_string(),
                                error: dialog.error_for(spec.name).map(str::to_string),
                                options: field_options(&spec, &directory),
                                on_change: move |value: String| screen.write().set_field(spec.name, value),
                            }
                        }
                        div { class: "dialog-actions",
                            Button {
                                variant: "secondary",
                                onclick: move |_| screen.write().close_dialog(),
                                "Cancelar"
                            }
                            Button {
                                disabled: dialog.saving,
                                onclick: move |_| {
                                    let Some(mutation) = screen.write().begin_save() else {
                                        return;
                                    };
                                    let client = save_client.clone();
                                    spawn(async move {
                                        run_mutation(&mut SharedScreen(screen), mutation, client.as_ref()).await;
                                    });
                                },
                                if dialog.saving { "Salvando..." } else { "Salvar" }
                            }
                        }
                    }
                }
            }

            if confirm_open {
                Dialog {
                    title: "Confirmar exclusão",
                    on_close: move |_| screen.write().cancel_delete(),
                    p { "Tem certeza que deseja excluir este registro de {noun}?" }
                    div { class: "dialog-actions",
                        Button {
                            variant: "secondary",
                            disabled: deleting,
                            onclick: move |_| screen.write().cancel_delete(),
                            "Cancelar"
                        }
                        Button {
                            variant: "danger",
                            disabled: deleting,
                            onclick: move |_| {
                                let Some(mutation) = screen.write().begin_delete() else {
                                    return;
                                };
                                let client = delete_client.clone();
                                spawn(async move {
                                    run_mutation(&mut SharedScreen(screen), mutation, client.as_ref()).await;
                                });
                            },
                            "Excluir"
                        }
                    }
                }
            }
        }
    }
}

/// `FieldSpec` carries a fn pointer, so compare it by field name.
#[derive(Clone, Copy)]
struct FieldSpecProp(FieldSpec);

impl PartialEq for FieldSpecProp {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

/// Drop-down entries for choice and reference fields.
fn field_options(spec: &FieldSpec, directory: &Directory) -> Option<Vec<(String, String)>> {
    match spec.kind {
        FieldKind::Choice(options) => Some(options().into_iter().map(|o| (o.clone(), o)).collect()),
        FieldKind::Reference(collection) => Some(
            directory
                .options(collection)
                .into_iter()
                .map(|(id, label)| (id.to_string(), label))
                .collect(),
        ),
        _ => None,
    }
}

#[component]
fn FormField(
    spec: FieldSpecProp,
    value: String,
    error: Option<String>,
    options: Option<Vec<(String, String)>>,
    on_change: EventHandler<String>,
) -> Element {
    let FieldSpecProp(spec) = spec;

    if let Some(options) = options {
        let placeholder = match spec.kind {
            FieldKind::Reference(_) => Some("Selecione...".to_string()),
            _ => None,
        };
        return rsx! {
            Select {
                id: spec.name,
                label: spec.label,
                value,
                options,
                placeholder,
                required: spec.required,
                error,
                onchange: move |e: FormEvent| on_change.call(e.value()),
            }
        };
    }

    let input_type = match spec.kind {
        FieldKind::Integer | FieldKind::Decimal => "number",
        FieldKind::Date => "date",
        _ => "text",
    };
    rsx! {
        Input {
            id: spec.name,
            label: spec.label,
            value,
            input_type,
            required: spec.required,
            error,
            oninput: move |e: FormEvent| on_change.call(e.value()),
        }
    }
}
