use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::flexible;

/// Server-assigned numeric identifier.
pub type RecordId = i64;

/// Outgoing link from one record to a row of another collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub collection: &'static str,
    pub id: RecordId,
}

impl Reference {
    pub fn new(collection: &'static str, id: RecordId) -> Self {
        Self { collection, id }
    }
}

/// A flat, server-owned record exposed as a REST collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment of the collection, e.g. `cidades`.
    const COLLECTION: &'static str;
    /// Name of the key column on the wire.
    const ID_FIELD: &'static str;

    /// Collection whose key this record shares. Such rows must arrive
    /// with that key set; the backend never assigns one.
    const KEYED_BY: Option<&'static str> = None;

    fn id(&self) -> Option<RecordId>;
    fn set_id(&mut self, id: RecordId);

    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

fn parse_label<'de, D, T>(deserializer: D, what: &str) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|_| D::Error::custom(format!("unknown {what} '{raw}'")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TipoCliente {
    #[default]
    #[strum(to_string = "Física", serialize = "Fisica")]
    Fisica,
    #[strum(to_string = "Jurídica", serialize = "Juridica")]
    Juridica,
}

impl TipoCliente {
    pub fn options() -> Vec<String> {
        Self::iter().map(|v| v.to_string()).collect()
    }
}

impl Serialize for TipoCliente {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TipoCliente {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_label(deserializer, "client type")
    }
}

/// Who pays the freight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Pagador {
    #[default]
    #[strum(to_string = "Remetente")]
    Remetente,
    #[strum(to_string = "Destinatário", serialize = "Destinatario")]
    Destinatario,
}

impl Pagador {
    pub fn options() -> Vec<String> {
        Self::iter().map(|v| v.to_string()).collect()
    }
}

impl Serialize for Pagador {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pagador {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_label(deserializer, "payer")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_cliente: Option<RecordId>,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(deserialize_with = "flexible::id")]
    pub id_cidade: RecordId,
    #[serde(deserialize_with = "flexible::date")]
    pub data_insc: NaiveDate,
    #[serde(default)]
    pub tipo_cliente: TipoCliente,
}

impl Record for Cliente {
    const COLLECTION: &'static str = "clientes";
    const ID_FIELD: &'static str = "id_cliente";

    fn id(&self) -> Option<RecordId> {
        self.id_cliente
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_cliente = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(Cidade::COLLECTION, self.id_cidade)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cidade {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_cidade: Option<RecordId>,
    pub nome_cidade: String,
    #[serde(deserialize_with = "flexible::decimal")]
    pub preco_unit_peso: f64,
    #[serde(deserialize_with = "flexible::decimal")]
    pub preco_unit_valor: f64,
    #[serde(deserialize_with = "flexible::id")]
    pub id_estado: RecordId,
}

impl Record for Cidade {
    const COLLECTION: &'static str = "cidades";
    const ID_FIELD: &'static str = "id_cidade";

    fn id(&self) -> Option<RecordId> {
        self.id_cidade
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_cidade = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(Estado::COLLECTION, self.id_estado)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estado {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_estado: Option<RecordId>,
    pub nome_estado: String,
    pub uf: String,
    #[serde(deserialize_with = "flexible::decimal")]
    pub icms_local: f64,
    #[serde(deserialize_with = "flexible::decimal")]
    pub icms_outro_uf: f64,
}

impl Record for Estado {
    const COLLECTION: &'static str = "estados";
    const ID_FIELD: &'static str = "id_estado";

    fn id(&self) -> Option<RecordId> {
        self.id_estado
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_estado = Some(id);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frete {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_frete: Option<RecordId>,
    #[serde(deserialize_with = "flexible::date")]
    pub data_frete: NaiveDate,
    #[serde(deserialize_with = "flexible::decimal")]
    pub valor_mercadoria: f64,
    #[serde(default)]
    pub frete_tipo: String,
    #[serde(deserialize_with = "flexible::decimal")]
    pub peso: f64,
    /// Computed by the backend; optional on input.
    #[serde(default, deserialize_with = "flexible::option_decimal")]
    pub frete_valor: Option<f64>,
    #[serde(default, deserialize_with = "flexible::option_decimal")]
    pub valor_icms: Option<f64>,
    #[serde(default, deserialize_with = "flexible::option_decimal")]
    pub valor_pedagio: Option<f64>,
    #[serde(default)]
    pub quem_paga_frete: Pagador,
    #[serde(deserialize_with = "flexible::id")]
    pub id_remetente: RecordId,
    #[serde(deserialize_with = "flexible::id")]
    pub id_destinatario: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_funcionario: Option<RecordId>,
}

impl Record for Frete {
    const COLLECTION: &'static str = "fretes";
    const ID_FIELD: &'static str = "id_frete";

    fn id(&self) -> Option<RecordId> {
        self.id_frete
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_frete = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        let mut refs = vec![
            Reference::new(Cliente::COLLECTION, self.id_remetente),
            Reference::new(Cliente::COLLECTION, self.id_destinatario),
        ];
        if let Some(funcionario) = self.id_funcionario {
            refs.push(Reference::new(Funcionario::COLLECTION, funcionario));
        }
        refs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funcionario {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_funcionario: Option<RecordId>,
    pub nome_funcionario: String,
    #[serde(default, deserialize_with = "flexible::text")]
    pub numero_registro: String,
}

impl Record for Funcionario {
    const COLLECTION: &'static str = "funcionarios";
    const ID_FIELD: &'static str = "id_funcionario";

    fn id(&self) -> Option<RecordId> {
        self.id_funcionario
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_funcionario = Some(id);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PessoaFisica {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_cliente: Option<RecordId>,
    pub nome: String,
    #[serde(rename = "CPF", deserialize_with = "flexible::text")]
    pub cpf: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub telefone: String,
}

impl Record for PessoaFisica {
    const COLLECTION: &'static str = "pessoas-fisicas";
    const ID_FIELD: &'static str = "id_cliente";
    const KEYED_BY: Option<&'static str> = Some(Cliente::COLLECTION);

    fn id(&self) -> Option<RecordId> {
        self.id_cliente
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_cliente = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        self.id_cliente
            .map(|cliente| vec![Reference::new(Cliente::COLLECTION, cliente)])
            .unwrap_or_default()
    }
}

/// Company client; keyed by the id of the `Cliente` row it extends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PessoaJuridica {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::option_id")]
    pub id_cliente: Option<RecordId>,
    pub razao_social: String,
    #[serde(rename = "CNPJ", deserialize_with = "flexible::text")]
    pub cnpj: String,
    #[serde(default, deserialize_with = "flexible::text")]
    pub inscricao_estadual: String,
    #[serde(deserialize_with = "flexible::id")]
    pub id_representante: RecordId,
}

impl Record for PessoaJuridica {
    const COLLECTION: &'static str = "pessoas-juridicas";
    const ID_FIELD: &'static str = "id_cliente";
    const KEYED_BY: Option<&'static str> = Some(Cliente::COLLECTION);

    fn id(&self) -> Option<RecordId> {
        self.id_cliente
    }

    fn set_id(&mut self, id: RecordId) {
        self.id_cliente = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        let mut refs = vec![Reference::new(PessoaFisica::COLLECTION, self.id_representante)];
        if let Some(cliente) = self.id_cliente {
            refs.push(Reference::new(Cliente::COLLECTION, cliente));
        }
        refs
    }
}
