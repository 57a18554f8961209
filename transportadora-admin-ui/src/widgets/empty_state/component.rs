use dioxus::prelude::*;

use crate::components::button::Button;

/// Placeholder for a record table with no rows; its button opens the create form.
#[component]
pub fn EmptyState(plural: &'static str, noun: &'static str, on_add: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "📭" }
            h3 { class: "empty-title", "Nenhum registro de {plural}" }
            p { class: "empty-description", "Use o botão abaixo para cadastrar {noun}." }
            Button { onclick: move |e| on_add.call(e), "Adicionar" }
        }
    }
}
