use dioxus::prelude::*;
use transportadora::Gateway;

#[component]
pub fn ServerStatus() -> Element {
    let gateway = use_context::<Gateway>();
    let health_resource = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match gateway.check_health().await {
                Ok(health) => health.message,
                Err(e) => {
                    warn!("Health check failed: {}", e);
                    "Down".to_string()
                }
            }
        }
    });

    rsx! {
        div { class: "server-status",
            match health_resource.read().as_ref() {
                Some(status) => {
                    let dot_class = if status == "Down" {
                        "status-dot error"
                    } else {
                        "status-dot healthy"
                    };
                    rsx! {
                        span { class: "{dot_class}" }
                        span { "Servidor: {status}" }
                    }
                }
                None => rsx! {
                    span { class: "status-dot loading" }
                    span { "Servidor: verificando..." }
                },
            }
        }
    }
}
