mod accounts;
mod flexible;
mod records;
mod reports;
mod requests;
mod responses;

pub use accounts::{Customer, CustomerPage};
pub use records::{
    Cidade, Cliente, Estado, Frete, Funcionario, Pagador, PessoaFisica, PessoaJuridica, Record,
    RecordId, Reference, TipoCliente,
};
pub use reports::{ArrecadacaoFretes, FreteFuncionario, MediaFretes, ReportEnvelope};
pub use requests::{AccountForm, LoginRequest};
pub use responses::{Ack, ErrorResponse, HealthResponse, LoginResponse};
