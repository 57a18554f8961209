use std::sync::Arc;

use dioxus::prelude::*;
use shared_http::api::Customer;
use transportadora::Gateway;
use transportadora::accounts::AccountsScreen;
use transportadora::ports::AccountsClient;

use crate::components::button::Button;
use crate::components::dialog::Dialog;
use crate::components::input::Input;
use crate::components::toast::use_notification_toast;

async fn load(mut screen: Signal<AccountsScreen>, accounts: Arc<dyn AccountsClient>) {
    let page = screen.write().begin_load();
    let result = accounts.customers(page).await;
    screen.write().finish_load(result);
}

fn copy_to_clipboard(token: &str) {
    match serde_json::to_string(token) {
        Ok(literal) => {
            document::eval(&format!("navigator.clipboard.writeText({literal})"));
        }
        Err(e) => warn!("Could not encode token for the clipboard: {}", e),
    }
}

/// Display values of one customer row.
struct CustomerRow {
    customer_id: String,
    token: String,
    created_at: String,
    active: bool,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.clone(),
            token: customer.token_preview(),
            created_at: customer.created_at.clone().unwrap_or_default(),
            active: customer.is_active(),
        }
    }
}

#[component]
pub fn Gerenciamento() -> Element {
    let gateway = use_context::<Gateway>();
    let mut screen = use_signal(AccountsScreen::new);
    let accounts = gateway.accounts.clone();

    use_future({
        let accounts = accounts.clone();
        move || load(screen, accounts.clone())
    });

    let state = screen.read();
    let customers: Vec<CustomerRow> = state.visible().into_iter().map(CustomerRow::from).collect();
    let page = state.page;
    let last_page = state.last_page;
    let has_previous = state.has_previous();
    let has_next = state.has_next();
    let loading = state.loading;
    let search = state.search.clone();
    let dialog = state.dialog().cloned();
    let notification = state.notification().cloned();
    drop(state);

    use_notification_toast(notification, move |_| screen.write().dismiss_notification());

    let previous_accounts = accounts.clone();
    let next_accounts = accounts.clone();
    let confirm_accounts = accounts;

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Gerenciamento de clientes" }
            }

            Input {
                id: "search",
                label: "Buscar cliente",
                value: search,
                placeholder: "ID do cliente",
                error: None,
                oninput: move |e: FormEvent| screen.write().set_search(e.value()),
            }

            if loading {
                p { class: "loading", "Carregando..." }
            } else {
                div { class: "table-wrapper",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "ID do cliente" }
                                th { "Token" }
                                th { "Status" }
                                th { "Criado em" }
                                th { class: "actions", "Ações" }
                            }
                        }
                        tbody {
                            for customer in customers {
                                tr { key: "{customer.customer_id}",
                                    td { "{customer.customer_id}" }
                                    td { class: "token", "{customer.token}" }
                                    td {
                                        if customer.active {
                                            span { class: "status-badge running", "Ativo" }
                                        } else {
                                            span { class: "status-badge stopped", "Inativo" }
                                        }
                                    }
                                    td { "{customer.created_at}" }
                                    td { class: "actions",
                                        Button {
                                            variant: "ghost",
                                            onclick: {
                                                let customer_id = customer.customer_id.clone();
                                                move |_| {
                                                    if let Some(token) = screen.write().copy_token(&customer_id) {
                                                        copy_to_clipboard(&token);
                                                    }
                                                }
                                            },
                                            "Copiar token"
                                        }
                                        Button {
                                            variant: if customer.active { "danger" } else { "secondary" },
                                            onclick: {
                                                let customer_id = customer.customer_id.clone();
                                                move |_| screen.write().open_toggle(&customer_id)
                                            },
                                            if customer.active { "Desativar" } else { "Reativar" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "pagination",
                Button {
                    variant: "secondary",
                    disabled: !has_previous,
                    onclick: move |_| {
                        if screen.write().previous_page().is_some() {
                            spawn(load(screen, previous_accounts.clone()));
                        }
                    },
                    "Anterior"
                }
                span { class: "page-indicator", "Página {page} de {last_page}" }
                Button {
                    variant: "secondary",
                    disabled: !has_next,
                    onclick: move |_| {
                        if screen.write().next_page().is_some() {
                            spawn(load(screen, next_accounts.clone()));
                        }
                    },
                    "Próxima"
                }
            }

            if let Some(dialog) = dialog {
                Dialog {
                    title: if dialog.reactivate { "Reativar cliente" } else { "Desativar cliente" },
                    on_close: move |_| screen.write().close_dialog(),
                    if dialog.reactivate {
                        p { "Reativar o acesso de {dialog.customer_id}?" }
                    } else {
                        p { "Informe a data de desativação de {dialog.customer_id}." }
                        Input {
                            id: "entry-date",
                            label: "Data de desativação",
                            value: dialog.date.clone(),
                            input_type: "date",
                            required: true,
                            error: None,
                            oninput: move |e: FormEvent| screen.write().set_date(e.value()),
                        }
                    }
                    div { class: "dialog-actions",
                        Button {
                            variant: "secondary",
                            onclick: move |_| screen.write().close_dialog(),
                            "Cancelar"
                        }
                        Button {
                            onclick: move |_| {
                                let Some(action) = screen.write().confirm() else {
                                    return;
                                };
                                let accounts = confirm_accounts.clone();
                                spawn(async move {
                                    let result = action.run(accounts.as_ref()).await;
                                    let reload = screen.write().finish_action(&action, result);
                                    if reload {
                                        load(screen, accounts).await;
                                    }
                                });
                            },
                            "Confirmar"
                        }
                    }
                }
            }
        }
    }
}
