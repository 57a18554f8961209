use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::flexible;
use super::records::RecordId;

/// Average freight value per city of a state, as origin and as destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFretes {
    pub nome_estado: String,
    pub nome_cidade: String,
    #[serde(default, deserialize_with = "flexible::decimal")]
    pub media_fretes_origem: f64,
    #[serde(default, deserialize_with = "flexible::decimal")]
    pub media_fretes_destino: f64,
}

/// Freight counts per city of a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrecadacaoFretes {
    pub nome_estado: String,
    pub nome_cidade: String,
    #[serde(default, deserialize_with = "flexible::integer")]
    pub quantidade_fretes_origem: i64,
    #[serde(default, deserialize_with = "flexible::integer")]
    pub quantidade_fretes_destino: i64,
}

/// A freight handled by an employee on behalf of a company client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreteFuncionario {
    #[serde(deserialize_with = "flexible::id")]
    pub id_frete: RecordId,
    #[serde(deserialize_with = "flexible::date")]
    pub data_frete: NaiveDate,
    pub funcionario_responsavel: String,
    pub empresa: String,
    pub representante_nome: String,
    #[serde(default, deserialize_with = "flexible::text")]
    pub representante_telefone: String,
}

/// Report endpoints wrap their rows in an outer array (`[[row, ...]]`).
/// A flat `[row, ...]` body is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEnvelope<T> {
    Nested(Vec<Vec<T>>),
    Flat(Vec<T>),
}

impl<T> ReportEnvelope<T> {
    /// Rows of the first result set.
    pub fn into_rows(self) -> Vec<T> {
        match self {
            ReportEnvelope::Nested(sets) => sets.into_iter().next().unwrap_or_default(),
            ReportEnvelope::Flat(rows) => rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_envelope_takes_first_set() {
        let body = json!([
            [
                {"nome_estado": "SP", "nome_cidade": "Campinas", "media_fretes_origem": "150.75", "media_fretes_destino": 80},
            ],
            []
        ]);
        let rows = serde_json::from_value::<ReportEnvelope<MediaFretes>>(body)
            .unwrap()
            .into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nome_cidade, "Campinas");
        assert_eq!(rows[0].media_fretes_origem, 150.75);
    }

    #[test]
    fn test_flat_and_empty_envelopes() {
        let flat = json!([{
            "nome_estado": "SP",
            "nome_cidade": "Santos",
            "quantidade_fretes_origem": "3",
            "quantidade_fretes_destino": 1
        }]);
        let rows = serde_json::from_value::<ReportEnvelope<ArrecadacaoFretes>>(flat)
            .unwrap()
            .into_rows();
        assert_eq!(rows[0].quantidade_fretes_origem, 3);

        let empty = serde_json::from_value::<ReportEnvelope<ArrecadacaoFretes>>(json!([]))
            .unwrap()
            .into_rows();
        assert!(empty.is_empty());

        let nested_empty = serde_json::from_value::<ReportEnvelope<ArrecadacaoFretes>>(json!([[]]))
            .unwrap()
            .into_rows();
        assert!(nested_empty.is_empty());
    }

    #[test]
    fn test_employee_row_parses_timestamp_date() {
        let row: FreteFuncionario = serde_json::from_value(json!({
            "id_frete": 9,
            "data_frete": "2024-06-10T03:00:00.000Z",
            "funcionario_responsavel": "Ana",
            "empresa": "ACME",
            "representante_nome": "Bia",
            "representante_telefone": 11999990000u64
        }))
        .unwrap();
        assert_eq!(row.data_frete, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(row.representante_telefone, "11999990000");
    }
}
