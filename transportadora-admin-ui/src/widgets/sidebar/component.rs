use dioxus::prelude::*;
use transportadora::navigation::Page;

use crate::Route;
use crate::widgets::server_status::ServerStatus;

#[component]
pub fn Sidebar() -> Element {
    let current = use_route::<Route>();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Transportadora" }
            }
            nav { class: "sidebar-nav",
                for (page, path, icon) in Page::sidebar().into_iter().map(|p| (p, p.path(), p.icon_text())) {
                    Link {
                        key: "{path}",
                        to: Route::from(page),
                        class: if Route::from(page) == current { "nav-item active" } else { "nav-item" },
                        span { class: "nav-icon", "{icon}" }
                        span { class: "nav-label", "{page}" }
                    }
                }
            }
            div { class: "sidebar-footer",
                ServerStatus {}
            }
        }
    }
}
