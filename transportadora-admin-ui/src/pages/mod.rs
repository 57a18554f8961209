mod dashboard;
mod entities;
mod entity_page;
mod gerenciamento;
mod login;

pub use dashboard::Dashboard;
pub use entities::{
    Cidades, Clientes, Estados, Fretes, Funcionarios, PessoasFisicas, PessoasJuridicas,
};
pub use gerenciamento::Gerenciamento;
pub use login::Login;
