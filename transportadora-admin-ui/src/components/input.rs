use dioxus::prelude::*;

/// Labelled text input with an optional validation message under it.
#[component]
pub fn Input(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: if error.is_some() { "form-group has-error" } else { "form-group" },
            label { r#for: "{id}",
                "{label}"
                if required {
                    span { class: "required", "*" }
                }
            }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                step: if input_type == "number" { "any" } else { "" },
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| oninput.call(e),
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Labelled drop-down; `options` are `(value, label)` pairs.
#[component]
pub fn Select(
    id: String,
    label: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] required: bool,
    error: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: if error.is_some() { "form-group has-error" } else { "form-group" },
            label { r#for: "{id}",
                "{label}"
                if required {
                    span { class: "required", "*" }
                }
            }
            select {
                id: "{id}",
                name: "{id}",
                value: "{value}",
                onchange: move |e| onchange.call(e),
                if let Some(placeholder) = placeholder {
                    option { value: "", "{placeholder}" }
                }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}
