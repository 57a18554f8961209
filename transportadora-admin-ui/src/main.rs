use dioxus::prelude::*;
use shared_http::api::LoginResponse;
use transportadora::Gateway;
use transportadora::navigation::Page;

mod components;
mod pages;
mod widgets;

use pages::{
    Cidades, Clientes, Dashboard, Estados, Fretes, Funcionarios, Gerenciamento, Login,
    PessoasFisicas, PessoasJuridicas,
};
use components::toast::ToastProvider;
use widgets::header::Header;
use widgets::sidebar::Sidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/session/signin")]
    Login {},
    #[layout(AppShell)]
        #[route("/material/customers")]
        Clientes {},
        #[route("/material/city")]
        Cidades {},
        #[route("/material/state")]
        Estados {},
        #[route("/material/progress")]
        PessoasFisicas {},
        #[route("/material/pj")]
        PessoasJuridicas {},
        #[route("/material/frete")]
        Fretes {},
        #[route("/material/employee")]
        Funcionarios {},
        #[route("/material/table")]
        Dashboard {},
        #[route("/material/gerenciamento")]
        Gerenciamento {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Clientes => Route::Clientes {},
            Page::Cidades => Route::Cidades {},
            Page::Estados => Route::Estados {},
            Page::PessoasFisicas => Route::PessoasFisicas {},
            Page::PessoasJuridicas => Route::PessoasJuridicas {},
            Page::Fretes => Route::Fretes {},
            Page::Funcionarios => Route::Funcionarios {},
            Page::Dashboard => Route::Dashboard {},
            Page::Gerenciamento => Route::Gerenciamento {},
            Page::SignIn => Route::Login {},
        }
    }
}

/// Signed-in user, if any.
pub type Session = Signal<Option<LoginResponse>>;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Gateway::from_env);
    use_context_provider(|| Signal::new(None::<LoginResponse>));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider { Router::<Route> {} }
    }
}

/// Sidebar and header around every material page.
#[component]
fn AppShell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "app-main",
                Header {}
                main { class: "app-content", Outlet::<Route> {} }
            }
        }
    }
}
