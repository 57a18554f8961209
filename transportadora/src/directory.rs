//! Reference lists used to resolve foreign keys for display.

use shared_http::api::{
    Cidade, Cliente, Estado, Funcionario, PessoaFisica, PessoaJuridica, Record, RecordId,
};
use tracing::warn;

use crate::gateway::Gateway;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub estados: Vec<Estado>,
    pub cidades: Vec<Cidade>,
    pub clientes: Vec<Cliente>,
    pub pessoas_fisicas: Vec<PessoaFisica>,
    pub pessoas_juridicas: Vec<PessoaJuridica>,
    pub funcionarios: Vec<Funcionario>,
}

fn find<E: Record>(rows: &[E], id: RecordId) -> Option<&E> {
    rows.iter().find(|row| row.id() == Some(id))
}

impl Directory {
    /// Fetches the given collections; a failed one is logged and left empty.
    pub async fn load(gateway: &Gateway, collections: &[&str]) -> Self {
        let mut directory = Directory::default();
        for collection in collections {
            let outcome = match *collection {
                c if c == Estado::COLLECTION => gateway
                    .estados
                    .find_all()
                    .await
                    .map(|rows| directory.estados = rows),
                c if c == Cidade::COLLECTION => gateway
                    .cidades
                    .find_all()
                    .await
                    .map(|rows| directory.cidades = rows),
                c if c == Cliente::COLLECTION => gateway
                    .clientes
                    .find_all()
                    .await
                    .map(|rows| directory.clientes = rows),
                c if c == PessoaFisica::COLLECTION => gateway
                    .pessoas_fisicas
                    .find_all()
                    .await
                    .map(|rows| directory.pessoas_fisicas = rows),
                c if c == PessoaJuridica::COLLECTION => gateway
                    .pessoas_juridicas
                    .find_all()
                    .await
                    .map(|rows| directory.pessoas_juridicas = rows),
                c if c == Funcionario::COLLECTION => gateway
                    .funcionarios
                    .find_all()
                    .await
                    .map(|rows| directory.funcionarios = rows),
                other => {
                    warn!("No reference list named {}", other);
                    Ok(())
                }
            };
            if let Err(e) = outcome {
                warn!("Could not load reference list {}: {}", collection, e);
            }
        }
        directory
    }

    pub fn estado(&self, id: RecordId) -> String {
        find(&self.estados, id)
            .map(|e| e.nome_estado.clone())
            .unwrap_or_else(|| "Estado não encontrado".to_string())
    }

    pub fn cidade(&self, id: RecordId) -> String {
        find(&self.cidades, id)
            .map(|c| c.nome_cidade.clone())
            .unwrap_or_else(|| "Cidade não encontrada".to_string())
    }

    /// A client is named by its pessoa física or jurídica row.
    pub fn cliente(&self, id: RecordId) -> String {
        if let Some(pf) = find(&self.pessoas_fisicas, id) {
            return pf.nome.clone();
        }
        if let Some(pj) = find(&self.pessoas_juridicas, id) {
            return pj.razao_social.clone();
        }
        match find(&self.clientes, id) {
            Some(_) => format!("Cliente {}", id),
            None => "Cliente não encontrado".to_string(),
        }
    }

    pub fn representante(&self, id: RecordId) -> String {
        find(&self.pessoas_fisicas, id)
            .map(|pf| pf.nome.clone())
            .unwrap_or_else(|| "Representante não encontrado".to_string())
    }

    pub fn funcionario(&self, id: RecordId) -> String {
        find(&self.funcionarios, id)
            .map(|f| f.nome_funcionario.clone())
            .unwrap_or_else(|| "Funcionário não encontrado".to_string())
    }

    /// `(id, label)` pairs for a reference dropdown.
    pub fn options(&self, collection: &str) -> Vec<(RecordId, String)> {
        fn pairs<E: Record>(rows: &[E], label: impl Fn(&E) -> String) -> Vec<(RecordId, String)> {
            rows.iter()
                .filter_map(|row| row.id().map(|id| (id, label(row))))
                .collect()
        }

        match collection {
            c if c == Estado::COLLECTION => pairs(&self.estados, |e| format!("{} ({})", e.nome_estado, e.uf)),
            c if c == Cidade::COLLECTION => pairs(&self.cidades, |c| c.nome_cidade.clone()),
            c if c == Cliente::COLLECTION => pairs(&self.clientes, |c| {
                format!("{} - {}", c.id_cliente.unwrap_or_default(), self.cliente(c.id_cliente.unwrap_or_default()))
            }),
            c if c == PessoaFisica::COLLECTION => pairs(&self.pessoas_fisicas, |p| p.nome.clone()),
            c if c == PessoaJuridica::COLLECTION => pairs(&self.pessoas_juridicas, |p| p.razao_social.clone()),
            c if c == Funcionario::COLLECTION => pairs(&self.funcionarios, |f| f.nome_funcionario.clone()),
            _ => Vec::new(),
        }
    }
}
