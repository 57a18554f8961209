use dioxus::prelude::*;
use strum::IntoEnumIterator;
use transportadora::navigation::Page;

use crate::components::button::Button;
use crate::{Route, Session};

#[component]
pub fn Header() -> Element {
    let mut session = use_context::<Session>();
    let nav = navigator();
    let current = use_route::<Route>();
    let title = Page::iter()
        .find(|page| Route::from(*page) == current)
        .map(|page| page.to_string())
        .unwrap_or_default();
    let email = session
        .read()
        .as_ref()
        .map(|s| s.email.clone())
        .unwrap_or_default();

    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "{title}" }
            div { class: "header-actions",
                if !email.is_empty() {
                    span { class: "header-user", "{email}" }
                }
                Button {
                    variant: "ghost",
                    onclick: move |_| {
                        info!("User logged out");
                        session.set(None);
                        nav.push(Route::from(Page::SignIn));
                    },
                    "Sair"
                }
            }
        }
    }
}
