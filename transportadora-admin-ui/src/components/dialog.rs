use dioxus::prelude::*;
use dioxus_primitives::dialog::{DialogContent, DialogRoot, DialogTitle};

/// Modal that stays open while mounted; dismissing it calls `on_close`.
#[component]
pub fn Dialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        DialogRoot {
            class: "dialog-backdrop",
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent { class: "dialog",
                div { class: "dialog-header",
                    DialogTitle { "{title}" }
                    button {
                        class: "dialog-close",
                        aria_label: "Fechar",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "dialog-body", {children} }
            }
        }
    }
}
