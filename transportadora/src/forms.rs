//! Dialog-bound form state.
//!
//! A form is a list of `(wire field, raw text)` pairs. Parsing builds the JSON
//! object the backend expects and deserializes it into the record, so the
//! record's serde attributes stay the single source of wire names.

use chrono::NaiveDate;
use serde_json::{Map, Number, Value};
use shared::FieldError;
use shared_http::api::Record;

#[derive(Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    /// `YYYY-MM-DD`, as produced by a date input.
    Date,
    /// Closed set of labels.
    Choice(fn() -> Vec<String>),
    /// Id of a row in the named collection.
    Reference(&'static str),
}

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    fn default_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(options) => options().into_iter().next().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

const INVALID_NUMBER: &str = "Número inválido";
const INVALID_DATE: &str = "Data inválida";
const INVALID_OPTION: &str = "Opção inválida";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    values: Vec<(&'static str, String)>,
}

impl FormValues {
    pub fn blank(fields: &[FieldSpec]) -> Self {
        Self {
            values: fields.iter().map(|f| (f.name, f.default_value())).collect(),
        }
    }

    /// Pre-fills every field from the record's wire representation.
    pub fn from_record<E: Record>(fields: &[FieldSpec], record: &E) -> Self {
        let wire = serde_json::to_value(record).unwrap_or(Value::Null);
        let values = fields
            .iter()
            .map(|field| {
                let raw = match wire.get(field.name) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    _ => String::new(),
                };
                (field.name, raw)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.iter_mut().find(|(field, _)| *field == name) {
            slot.1 = value.into();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Checks required fields and number/date shape, then builds the record.
    pub fn parse<E: Record>(&self, fields: &[FieldSpec]) -> Result<E, Vec<FieldError>> {
        let mut object = Map::new();
        let mut errors = Vec::new();

        for field in fields {
            let raw = self.get(field.name).trim();
            if raw.is_empty() {
                if field.required {
                    errors.push(FieldError::required(field.name));
                } else if matches!(field.kind, FieldKind::Text) {
                    object.insert(field.name.to_string(), Value::String(String::new()));
                }
                continue;
            }
            match parse_value(field.kind, raw) {
                Ok(value) => {
                    object.insert(field.name.to_string(), value);
                }
                Err(message) => errors.push(FieldError::new(field.name, message)),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|e| vec![FieldError::new("formulario", e.to_string())])
    }
}

fn parse_value(kind: FieldKind, raw: &str) -> Result<Value, &'static str> {
    match kind {
        FieldKind::Text => Ok(Value::String(raw.to_string())),
        FieldKind::Integer | FieldKind::Reference(_) => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| INVALID_NUMBER),
        FieldKind::Decimal => raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(INVALID_NUMBER),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| Value::String(date.format("%Y-%m-%d").to_string()))
            .map_err(|_| INVALID_DATE),
        FieldKind::Choice(options) => {
            if options().iter().any(|option| option == raw) {
                Ok(Value::String(raw.to_string()))
            } else {
                Err(INVALID_OPTION)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use shared_http::api::{Cidade, Frete, Pagador};

    use super::*;

    const CIDADE_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("nome_cidade", "Nome", FieldKind::Text),
        FieldSpec::required("preco_unit_peso", "Preço por peso", FieldKind::Decimal),
        FieldSpec::required("preco_unit_valor", "Preço por valor", FieldKind::Decimal),
        FieldSpec::required("id_estado", "Estado", FieldKind::Reference("estados")),
    ];

    #[test]
    fn test_parse_builds_record_without_id() {
        let mut form = FormValues::blank(CIDADE_FIELDS);
        form.set("nome_cidade", "B");
        form.set("preco_unit_peso", "1,5");
        form.set("preco_unit_valor", "2");
        form.set("id_estado", "10");

        let cidade: Cidade = form.parse(CIDADE_FIELDS).unwrap();
        assert_eq!(cidade.id_cidade, None);
        assert_eq!(cidade.nome_cidade, "B");
        assert_eq!(cidade.preco_unit_peso, 1.5);
        assert_eq!(cidade.id_estado, 10);
    }

    #[test]
    fn test_parse_reports_every_bad_field() {
        let mut form = FormValues::blank(CIDADE_FIELDS);
        form.set("preco_unit_peso", "abc");
        form.set("id_estado", "10");

        let errors = form.parse::<Cidade>(CIDADE_FIELDS).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::required("nome_cidade"),
                FieldError::new("preco_unit_peso", INVALID_NUMBER),
                FieldError::required("preco_unit_valor"),
            ]
        );
    }

    #[test]
    fn test_from_record_round_trips_through_form() {
        let cidade = Cidade {
            id_cidade: Some(1),
            nome_cidade: "A".into(),
            preco_unit_peso: 2.25,
            preco_unit_valor: 3.0,
            id_estado: 10,
        };
        let form = FormValues::from_record(CIDADE_FIELDS, &cidade);
        assert_eq!(form.get("nome_cidade"), "A");
        assert_eq!(form.get("preco_unit_peso"), "2.25");
        assert_eq!(form.get("id_estado"), "10");

        let parsed: Cidade = form.parse(CIDADE_FIELDS).unwrap();
        assert_eq!(parsed.id_cidade, None);
        assert_eq!(parsed.preco_unit_peso, 2.25);
    }

    #[test]
    fn test_choice_and_optional_fields() {
        let fields = &[
            FieldSpec::required("data_frete", "Data", FieldKind::Date),
            FieldSpec::required("valor_mercadoria", "Valor", FieldKind::Decimal),
            FieldSpec::optional("frete_tipo", "Tipo", FieldKind::Text),
            FieldSpec::required("peso", "Peso", FieldKind::Decimal),
            FieldSpec::required("quem_paga_frete", "Pagador", FieldKind::Choice(Pagador::options)),
            FieldSpec::required("id_remetente", "Remetente", FieldKind::Reference("clientes")),
            FieldSpec::required("id_destinatario", "Destinatário", FieldKind::Reference("clientes")),
            FieldSpec::optional("id_funcionario", "Funcionário", FieldKind::Reference("funcionarios")),
        ];
        let mut form = FormValues::blank(fields);
        assert_eq!(form.get("quem_paga_frete"), "Remetente");

        form.set("data_frete", "2024-05-01");
        form.set("valor_mercadoria", "100");
        form.set("peso", "10");
        form.set("quem_paga_frete", "Destinatário");
        form.set("id_remetente", "1");
        form.set("id_destinatario", "2");

        let frete: Frete = form.parse(fields).unwrap();
        assert_eq!(frete.quem_paga_frete, Pagador::Destinatario);
        assert_eq!(frete.id_funcionario, None);
        assert_eq!(frete.frete_tipo, "");

        form.set("quem_paga_frete", "Ninguém");
        form.set("data_frete", "01/05/2024");
        let errors = form.parse::<Frete>(fields).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&FieldError::new("data_frete", INVALID_DATE)));
        assert!(errors.contains(&FieldError::new("quem_paga_frete", INVALID_OPTION)));
    }
}
