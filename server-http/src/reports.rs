//! Dashboard aggregates computed over the in-memory tables.

use std::collections::HashMap;

use chrono::Datelike;
use shared_http::api::{
    ArrecadacaoFretes, Cidade, Cliente, Estado, Frete, FreteFuncionario, Funcionario, MediaFretes,
    PessoaFisica, PessoaJuridica, RecordId,
};

use crate::store::{Database, Result};

/// Freights leaving from and arriving at each city of a state.
struct CityTraffic {
    estado: String,
    cidade: String,
    origem: Vec<f64>,
    destino: Vec<f64>,
}

async fn traffic_by_city(db: &Database, id_estado: RecordId) -> Result<Vec<CityTraffic>> {
    let estado = match db.get::<Estado>(id_estado).await {
        Ok(estado) => estado,
        Err(_) => return Ok(Vec::new()),
    };
    let cidades: Vec<Cidade> = db
        .list::<Cidade>()
        .await?
        .into_iter()
        .filter(|c| c.id_estado == id_estado)
        .collect();
    let cidade_of: HashMap<RecordId, RecordId> = db
        .list::<Cliente>()
        .await?
        .into_iter()
        .filter_map(|c| c.id_cliente.map(|id| (id, c.id_cidade)))
        .collect();
    let fretes = db.list::<Frete>().await?;

    let traffic = cidades
        .into_iter()
        .filter_map(|cidade| {
            let id_cidade = cidade.id_cidade?;
            let in_city = |cliente: RecordId| cidade_of.get(&cliente) == Some(&id_cidade);
            let valor = |f: &Frete| f.frete_valor.unwrap_or_default();
            let origem: Vec<f64> = fretes.iter().filter(|f| in_city(f.id_remetente)).map(valor).collect();
            let destino: Vec<f64> = fretes.iter().filter(|f| in_city(f.id_destinatario)).map(valor).collect();
            if origem.is_empty() && destino.is_empty() {
                return None;
            }
            Some(CityTraffic {
                estado: estado.nome_estado.clone(),
                cidade: cidade.nome_cidade,
                origem,
                destino,
            })
        })
        .collect();
    Ok(traffic)
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Cities of the state with at least one freight, unknown states yield nothing.
pub async fn media_fretes(db: &Database, id_estado: RecordId) -> Result<Vec<MediaFretes>> {
    Ok(traffic_by_city(db, id_estado)
        .await?
        .into_iter()
        .map(|t| MediaFretes {
            media_fretes_origem: average(&t.origem),
            media_fretes_destino: average(&t.destino),
            nome_estado: t.estado,
            nome_cidade: t.cidade,
        })
        .collect())
}

pub async fn arrecadacao_fretes(db: &Database, id_estado: RecordId) -> Result<Vec<ArrecadacaoFretes>> {
    Ok(traffic_by_city(db, id_estado)
        .await?
        .into_iter()
        .map(|t| ArrecadacaoFretes {
            quantidade_fretes_origem: t.origem.len() as i64,
            quantidade_fretes_destino: t.destino.len() as i64,
            nome_estado: t.estado,
            nome_cidade: t.cidade,
        })
        .collect())
}

/// Freights of the month handled by an employee for a company sender.
pub async fn fretes_funcionarios(db: &Database, mes: u32, ano: i32) -> Result<Vec<FreteFuncionario>> {
    let funcionarios: HashMap<RecordId, Funcionario> = db
        .list::<Funcionario>()
        .await?
        .into_iter()
        .filter_map(|f| f.id_funcionario.map(|id| (id, f)))
        .collect();
    let empresas: HashMap<RecordId, PessoaJuridica> = db
        .list::<PessoaJuridica>()
        .await?
        .into_iter()
        .filter_map(|pj| pj.id_cliente.map(|id| (id, pj)))
        .collect();
    let pessoas: HashMap<RecordId, PessoaFisica> = db
        .list::<PessoaFisica>()
        .await?
        .into_iter()
        .filter_map(|pf| pf.id_cliente.map(|id| (id, pf)))
        .collect();

    let rows = db
        .list::<Frete>()
        .await?
        .into_iter()
        .filter(|f| f.data_frete.month() == mes && f.data_frete.year() == ano)
        .filter_map(|frete| {
            let funcionario = funcionarios.get(&frete.id_funcionario?)?;
            let empresa = empresas.get(&frete.id_remetente)?;
            let representante = pessoas.get(&empresa.id_representante)?;
            Some(FreteFuncionario {
                id_frete: frete.id_frete?,
                data_frete: frete.data_frete,
                funcionario_responsavel: funcionario.nome_funcionario.clone(),
                empresa: empresa.razao_social.clone(),
                representante_nome: representante.nome.clone(),
                representante_telefone: representante.telefone.clone(),
            })
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shared_http::api::{Pagador, TipoCliente};

    use super::*;

    async fn seeded() -> Database {
        let db = Database::new();
        db.insert(Estado {
            id_estado: None,
            nome_estado: "São Paulo".into(),
            uf: "SP".into(),
            icms_local: 0.18,
            icms_outro_uf: 0.12,
        })
        .await
        .unwrap();
        for nome in ["Campinas", "Santos"] {
            db.insert(Cidade {
                id_cidade: None,
                nome_cidade: nome.into(),
                preco_unit_peso: 1.0,
                preco_unit_valor: 0.1,
                id_estado: 1,
            })
            .await
            .unwrap();
        }
        for (id_cidade, tipo_cliente) in [(1, TipoCliente::Juridica), (2, TipoCliente::Fisica)] {
            db.insert(Cliente {
                id_cliente: None,
                endereco: "Rua".into(),
                telefone: "1".into(),
                id_cidade,
                data_insc: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                tipo_cliente,
            })
            .await
            .unwrap();
        }
        db.insert(PessoaFisica {
            id_cliente: Some(2),
            nome: "Bia".into(),
            cpf: "123".into(),
            endereco: "Rua".into(),
            telefone: "1199".into(),
        })
        .await
        .unwrap();
        db.insert(PessoaJuridica {
            id_cliente: Some(1),
            razao_social: "ACME".into(),
            cnpj: "00".into(),
            inscricao_estadual: "1".into(),
            id_representante: 2,
        })
        .await
        .unwrap();
        db.insert(Funcionario {
            id_funcionario: None,
            nome_funcionario: "Rui".into(),
            numero_registro: "7".into(),
        })
        .await
        .unwrap();
        for (valor, dia) in [(100.0, 5), (51.0, 20)] {
            db.insert(Frete {
                id_frete: None,
                data_frete: NaiveDate::from_ymd_opt(2024, 6, dia).unwrap(),
                valor_mercadoria: 1000.0,
                frete_tipo: "normal".into(),
                peso: 10.0,
                frete_valor: Some(valor),
                valor_icms: None,
                valor_pedagio: None,
                quem_paga_frete: Pagador::Remetente,
                id_remetente: 1,
                id_destinatario: 2,
                id_funcionario: Some(1),
            })
            .await
            .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_media_per_city() {
        let db = seeded().await;
        let rows = media_fretes(&db, 1).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].nome_cidade, "Campinas");
        assert_eq!(rows[0].media_fretes_origem, 75.5);
        assert_eq!(rows[0].media_fretes_destino, 0.0);
        assert_eq!(rows[1].media_fretes_destino, 75.5);

        assert!(media_fretes(&db, 99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_arrecadacao_counts() {
        let db = seeded().await;
        let rows = arrecadacao_fretes(&db, 1).await.unwrap();
        assert_eq!(rows[0].quantidade_fretes_origem, 2);
        assert_eq!(rows[1].quantidade_fretes_destino, 2);
    }

    #[tokio::test]
    async fn test_employee_freights_join_company_and_representative() {
        let db = seeded().await;
        let rows = fretes_funcionarios(&db, 6, 2024).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].empresa, "ACME");
        assert_eq!(rows[0].representante_nome, "Bia");
        assert_eq!(rows[0].funcionario_responsavel, "Rui");

        assert!(fretes_funcionarios(&db, 7, 2024).await.unwrap().is_empty());
    }
}
