//! In-memory tables behind the REST collections.
//!
//! Rows are kept as JSON together with their outgoing references, so one
//! lock covers every collection and referential checks span tables.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use shared_http::api::{
    Cidade, Cliente, Estado, Frete, Funcionario, PessoaFisica, PessoaJuridica, Record, RecordId,
    Reference,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Registro {id} não encontrado em {collection}.")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },
    #[error("Registro {id} já existe em {collection}.")]
    Duplicate {
        collection: &'static str,
        id: RecordId,
    },
    #[error("Referência inválida: {collection} {id} não existe.")]
    MissingReference {
        collection: &'static str,
        id: RecordId,
    },
    #[error("Não é possível excluir o registro {id} de {collection}: ele está vinculado a {referrer}.")]
    Referenced {
        collection: &'static str,
        id: RecordId,
        referrer: &'static str,
    },
    #[error("Registro inválido: {0}")]
    Invalid(String),
    #[error("Chave inválida em {collection}: {reason}")]
    InvalidKey {
        collection: &'static str,
        reason: String,
    },
    #[error("Cliente {0} não encontrado.")]
    UnknownCustomer(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug)]
struct Stored {
    value: Value,
    references: Vec<Reference>,
}

#[derive(Debug)]
struct Table {
    next_id: RecordId,
    rows: BTreeMap<RecordId, Stored>,
}

impl Table {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// All collections, keyed by path segment.
#[derive(Debug)]
pub struct Database {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

fn encode<E: Record>(record: &E) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| StoreError::Invalid(e.to_string()))
}

fn decode<E: Record>(value: &Value) -> Result<E> {
    serde_json::from_value(value.clone()).map_err(|e| StoreError::Invalid(e.to_string()))
}

impl Database {
    pub fn new() -> Self {
        let tables = [
            Estado::COLLECTION,
            Cidade::COLLECTION,
            Cliente::COLLECTION,
            PessoaFisica::COLLECTION,
            PessoaJuridica::COLLECTION,
            Funcionario::COLLECTION,
            Frete::COLLECTION,
        ]
        .into_iter()
        .map(|collection| (collection, Table::new()))
        .collect();
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn list<E: Record>(&self) -> Result<Vec<E>> {
        let tables = self.tables.read().await;
        match tables.get(E::COLLECTION) {
            Some(table) => table.rows.values().map(|row| decode(&row.value)).collect(),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get<E: Record>(&self, id: RecordId) -> Result<E> {
        let tables = self.tables.read().await;
        let row = tables
            .get(E::COLLECTION)
            .and_then(|table| table.rows.get(&id))
            .ok_or(StoreError::NotFound {
                collection: E::COLLECTION,
                id,
            })?;
        decode(&row.value)
    }

    /// Stores a new record. A record that already carries its key keeps it
    /// when the key is free; otherwise the next counter value is assigned.
    /// Records keyed by another collection must carry their key.
    pub async fn insert<E: Record>(&self, mut record: E) -> Result<E> {
        let mut tables = self.tables.write().await;
        let references = record.references();
        check_references(&tables, &references)?;

        let table = tables
            .entry(E::COLLECTION)
            .or_insert_with(Table::new);
        let invalid = |reason: String| StoreError::InvalidKey {
            collection: E::COLLECTION,
            reason,
        };
        let id = match (record.id(), E::KEYED_BY) {
            (Some(id), _) if id <= 0 => return Err(invalid(format!("{id} não é positivo"))),
            (Some(id), _) if table.rows.contains_key(&id) => {
                return Err(StoreError::Duplicate {
                    collection: E::COLLECTION,
                    id,
                })
            }
            (Some(id), _) => id,
            (None, Some(owner)) => return Err(invalid(format!("{} é obrigatório ({owner})", E::ID_FIELD))),
            (None, None) => table.next_id,
        };
        let after = id
            .checked_add(1)
            .ok_or_else(|| invalid(format!("{id} excede o limite")))?;
        table.next_id = table.next_id.max(after);
        record.set_id(id);

        let value = encode(&record)?;
        table.rows.insert(id, Stored { value, references });
        info!("Inserted {} {}", E::COLLECTION, id);
        Ok(record)
    }

    /// Full replace of an existing row; the key comes from the path.
    pub async fn replace<E: Record>(&self, id: RecordId, mut record: E) -> Result<E> {
        let mut tables = self.tables.write().await;
        record.set_id(id);
        let references = record.references();
        check_references(&tables, &references)?;

        let row = tables
            .get_mut(E::COLLECTION)
            .and_then(|table| table.rows.get_mut(&id))
            .ok_or(StoreError::NotFound {
                collection: E::COLLECTION,
                id,
            })?;
        row.value = encode(&record)?;
        row.references = references;
        info!("Replaced {} {}", E::COLLECTION, id);
        Ok(record)
    }

    /// Refuses to remove a row other rows still point at.
    pub async fn remove<E: Record>(&self, id: RecordId) -> Result<()> {
        let mut tables = self.tables.write().await;
        let target = Reference::new(E::COLLECTION, id);

        if !tables
            .get(E::COLLECTION)
            .is_some_and(|table| table.rows.contains_key(&id))
        {
            return Err(StoreError::NotFound {
                collection: E::COLLECTION,
                id,
            });
        }

        let mut referrers: Vec<&'static str> = tables
            .iter()
            .filter(|(_, table)| table.rows.values().any(|row| row.references.contains(&target)))
            .map(|(collection, _)| *collection)
            .collect();
        referrers.sort_unstable();
        if let Some(&referrer) = referrers.first() {
            debug!("{} {} still referenced by {}", E::COLLECTION, id, referrer);
            return Err(StoreError::Referenced {
                collection: E::COLLECTION,
                id,
                referrer,
            });
        }

        if let Some(table) = tables.get_mut(E::COLLECTION) {
            table.rows.remove(&id);
        }
        info!("Removed {} {}", E::COLLECTION, id);
        Ok(())
    }
}

fn check_references(tables: &HashMap<&'static str, Table>, references: &[Reference]) -> Result<()> {
    for reference in references {
        let exists = tables
            .get(reference.collection)
            .is_some_and(|table| table.rows.contains_key(&reference.id));
        if !exists {
            return Err(StoreError::MissingReference {
                collection: reference.collection,
                id: reference.id,
            });
        }
    }
    Ok(())
}
