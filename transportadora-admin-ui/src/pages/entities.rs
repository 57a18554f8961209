use dioxus::prelude::*;
use shared_http::api::{Cidade, Cliente, Estado, Frete, Funcionario, PessoaFisica, PessoaJuridica};

use super::entity_page::entity_page;

#[component]
pub fn Clientes() -> Element {
    entity_page::<Cliente>()
}

#[component]
pub fn Cidades() -> Element {
    entity_page::<Cidade>()
}

#[component]
pub fn Estados() -> Element {
    entity_page::<Estado>()
}

#[component]
pub fn PessoasFisicas() -> Element {
    entity_page::<PessoaFisica>()
}

#[component]
pub fn PessoasJuridicas() -> Element {
    entity_page::<PessoaJuridica>()
}

#[component]
pub fn Fretes() -> Element {
    entity_page::<Frete>()
}

#[component]
pub fn Funcionarios() -> Element {
    entity_page::<Funcionario>()
}
