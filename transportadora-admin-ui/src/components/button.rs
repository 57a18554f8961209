use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(default = "primary".to_string())] variant: String,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button button-{variant}",
            r#type: "{button_type}",
            disabled,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
