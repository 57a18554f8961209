use std::sync::Arc;

use dioxus::prelude::*;
use transportadora::Gateway;
use transportadora::dashboard::{
    ARRECADACAO_HEADERS, DashboardScreen, FUNCIONARIOS_HEADERS, MEDIA_HEADERS, Panel, PanelView,
    PendingReport, arrecadacao_cells, funcionario_cells, media_cells,
};
use transportadora::ports::ReportsClient;

use crate::components::button::Button;
use crate::components::input::{Input, Select};
use crate::widgets::data_table::DataTable;

fn run_report(mut screen: Signal<DashboardScreen>, reports: Arc<dyn ReportsClient>, pending: Option<PendingReport>) {
    let Some(pending) = pending else {
        return;
    };
    spawn(async move {
        let result = pending.query.fetch(reports.as_ref()).await;
        screen.write().finish(pending, result);
    });
}

fn report_body<T>(panel: &Panel<T>, headers: &[&str], cells: fn(&T) -> Vec<String>) -> Element {
    match panel.view() {
        PanelView::Loading => rsx! {
            p { class: "panel-loading", "Carregando..." }
        },
        PanelView::Fallback(text) => rsx! {
            p { class: "panel-fallback", "{text}" }
        },
        PanelView::Rows(rows) => rsx! {
            DataTable {
                headers: headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
                rows: rows.iter().map(|row| (None, cells(row))).collect::<Vec<_>>(),
                on_edit: None,
                on_delete: None,
            }
        },
    }
}

#[component]
pub fn Dashboard() -> Element {
    let gateway = use_context::<Gateway>();
    let mut screen = use_signal(DashboardScreen::new);

    use_future({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move {
                let result = gateway.estados.find_all().await;
                screen.write().set_estados(result);
            }
        }
    });

    let state = screen.read();
    let options: Vec<(String, String)> = state
        .estado_options()
        .into_iter()
        .map(|(id, label)| (id.to_string(), label))
        .collect();
    let media_estado = state.media_estado.clone();
    let arrecadacao_estado = state.arrecadacao_estado.clone();
    let mes = state.mes.clone();
    let ano = state.ano.clone();
    let can_search = state.period().is_some();
    let media = report_body(&state.media, MEDIA_HEADERS, media_cells);
    let arrecadacao = report_body(&state.arrecadacao, ARRECADACAO_HEADERS, arrecadacao_cells);
    let funcionarios = report_body(&state.funcionarios, FUNCIONARIOS_HEADERS, funcionario_cells);
    drop(state);

    let media_reports = gateway.reports.clone();
    let arrecadacao_reports = gateway.reports.clone();
    let funcionario_reports = gateway.reports.clone();

    rsx! {
        div { class: "page-container dashboard",
            div { class: "page-header",
                h1 { "Dashboard" }
            }

            section { class: "panel",
                h2 { "Média de fretes por estado" }
                Select {
                    id: "media-estado",
                    label: "Estado",
                    value: media_estado,
                    options: options.clone(),
                    placeholder: Some("Selecione um estado".to_string()),
                    error: None,
                    onchange: move |e: FormEvent| {
                        let pending = screen.write().select_media_estado(e.value());
                        run_report(screen, media_reports.clone(), pending);
                    },
                }
                {media}
            }

            section { class: "panel",
                h2 { "Arrecadação de fretes por estado" }
                Select {
                    id: "arrecadacao-estado",
                    label: "Estado",
                    value: arrecadacao_estado,
                    options,
                    placeholder: Some("Selecione um estado".to_string()),
                    error: None,
                    onchange: move |e: FormEvent| {
                        let pending = screen.write().select_arrecadacao_estado(e.value());
                        run_report(screen, arrecadacao_reports.clone(), pending);
                    },
                }
                {arrecadacao}
            }

            section { class: "panel",
                h2 { "Fretes por funcionário" }
                div { class: "period-filter",
                    Input {
                        id: "mes",
                        label: "Mês",
                        value: mes,
                        input_type: "number",
                        placeholder: "1-12",
                        error: None,
                        oninput: move |e: FormEvent| screen.write().set_mes(e.value()),
                    }
                    Input {
                        id: "ano",
                        label: "Ano",
                        value: ano,
                        input_type: "number",
                        placeholder: "2024",
                        error: None,
                        oninput: move |e: FormEvent| screen.write().set_ano(e.value()),
                    }
                    Button {
                        disabled: !can_search,
                        onclick: move |_| {
                            let pending = screen.write().search_funcionarios();
                            run_report(screen, funcionario_reports.clone(), pending);
                        },
                        "Pesquisar"
                    }
                }
                {funcionarios}
            }
        }
    }
}
