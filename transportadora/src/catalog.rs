//! Per-entity screen metadata: labels, form fields, table layout and messages.

use std::fmt::Debug;

use chrono::NaiveDate;
use shared_http::api::{
    Cidade, Cliente, Estado, Frete, Funcionario, Pagador, PessoaFisica, PessoaJuridica, Record,
    TipoCliente,
};

use crate::directory::Directory;
use crate::forms::{FieldKind, FieldSpec};

/// Grammatical gender of the noun, for message agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    fn ending(self) -> &'static str {
        match self {
            Gender::Masculine => "o",
            Gender::Feminine => "a",
        }
    }
}

/// A record type with a management screen.
pub trait Managed: Record + PartialEq + Debug {
    /// Capitalized singular, e.g. `Pessoa Física`.
    const LABEL: &'static str;
    /// Lowercase singular used in error messages.
    const NOUN: &'static str;
    const PLURAL: &'static str;
    const TITLE: &'static str;
    const GENDER: Gender;
    const FIELDS: &'static [FieldSpec];
    const HEADERS: &'static [&'static str];
    /// Collections the table needs to resolve references.
    const LOOKUPS: &'static [&'static str] = &[];

    fn cells(&self, directory: &Directory) -> Vec<String>;
}

pub fn created_message<E: Managed>() -> String {
    format!("{} cadastrad{} com sucesso!", E::LABEL, E::GENDER.ending())
}

pub fn updated_message<E: Managed>() -> String {
    format!("{} atualizad{} com sucesso!", E::LABEL, E::GENDER.ending())
}

pub fn deleted_message<E: Managed>() -> String {
    format!("{} excluíd{} com sucesso!", E::LABEL, E::GENDER.ending())
}

pub fn save_failed_message<E: Managed>() -> String {
    format!("Erro ao salvar {}.", E::NOUN)
}

pub fn delete_failed_message<E: Managed>() -> String {
    format!("Erro ao excluir {}.", E::NOUN)
}

pub fn load_failed_message<E: Managed>() -> String {
    format!("Erro ao carregar {}.", E::PLURAL)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_else(|| "-".to_string())
}

fn format_id<E: Record>(record: &E) -> String {
    record.id().map(|id| id.to_string()).unwrap_or_default()
}

impl Managed for Cliente {
    const LABEL: &'static str = "Cliente";
    const NOUN: &'static str = "cliente";
    const PLURAL: &'static str = "clientes";
    const TITLE: &'static str = "Clientes";
    const GENDER: Gender = Gender::Masculine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("endereco", "Endereço", FieldKind::Text),
        FieldSpec::required("telefone", "Telefone", FieldKind::Text),
        FieldSpec::required("id_cidade", "Cidade", FieldKind::Reference(Cidade::COLLECTION)),
        FieldSpec::required("data_insc", "Data de inscrição", FieldKind::Date),
        FieldSpec::required("tipo_cliente", "Tipo de cliente", FieldKind::Choice(TipoCliente::options)),
    ];
    const HEADERS: &'static [&'static str] =
        &["ID", "Endereço", "Telefone", "Cidade", "Data de inscrição", "Tipo"];
    const LOOKUPS: &'static [&'static str] = &[Cidade::COLLECTION];

    fn cells(&self, directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.endereco.clone(),
            self.telefone.clone(),
            directory.cidade(self.id_cidade),
            format_date(self.data_insc),
            self.tipo_cliente.to_string(),
        ]
    }
}

impl Managed for Cidade {
    const LABEL: &'static str = "Cidade";
    const NOUN: &'static str = "cidade";
    const PLURAL: &'static str = "cidades";
    const TITLE: &'static str = "Cidades";
    const GENDER: Gender = Gender::Feminine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nome_cidade", "Nome da cidade", FieldKind::Text),
        FieldSpec::required("preco_unit_peso", "Preço unitário por peso", FieldKind::Decimal),
        FieldSpec::required("preco_unit_valor", "Preço unitário por valor", FieldKind::Decimal),
        FieldSpec::required("id_estado", "Estado", FieldKind::Reference(Estado::COLLECTION)),
    ];
    const HEADERS: &'static [&'static str] =
        &["ID", "Nome", "Preço unit. peso", "Preço unit. valor", "Estado"];
    const LOOKUPS: &'static [&'static str] = &[Estado::COLLECTION];

    fn cells(&self, directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.nome_cidade.clone(),
            format_decimal(self.preco_unit_peso),
            format_decimal(self.preco_unit_valor),
            directory.estado(self.id_estado),
        ]
    }
}

impl Managed for Estado {
    const LABEL: &'static str = "Estado";
    const NOUN: &'static str = "estado";
    const PLURAL: &'static str = "estados";
    const TITLE: &'static str = "Estados";
    const GENDER: Gender = Gender::Masculine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nome_estado", "Nome do estado", FieldKind::Text),
        FieldSpec::required("uf", "UF", FieldKind::Text),
        FieldSpec::required("icms_local", "ICMS local", FieldKind::Decimal),
        FieldSpec::required("icms_outro_uf", "ICMS outra UF", FieldKind::Decimal),
    ];
    const HEADERS: &'static [&'static str] = &["ID", "Nome", "UF", "ICMS local", "ICMS outra UF"];

    fn cells(&self, _directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.nome_estado.clone(),
            self.uf.clone(),
            format_decimal(self.icms_local),
            format_decimal(self.icms_outro_uf),
        ]
    }
}

impl Managed for Frete {
    const LABEL: &'static str = "Frete";
    const NOUN: &'static str = "frete";
    const PLURAL: &'static str = "fretes";
    const TITLE: &'static str = "Fretes";
    const GENDER: Gender = Gender::Masculine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("data_frete", "Data do frete", FieldKind::Date),
        FieldSpec::required("valor_mercadoria", "Valor da mercadoria", FieldKind::Decimal),
        FieldSpec::required("frete_tipo", "Tipo de frete", FieldKind::Text),
        FieldSpec::required("peso", "Peso", FieldKind::Decimal),
        FieldSpec::optional("frete_valor", "Valor do frete", FieldKind::Decimal),
        FieldSpec::optional("valor_icms", "Valor ICMS", FieldKind::Decimal),
        FieldSpec::optional("valor_pedagio", "Valor pedágio", FieldKind::Decimal),
        FieldSpec::required("quem_paga_frete", "Quem paga o frete", FieldKind::Choice(Pagador::options)),
        FieldSpec::required("id_remetente", "Remetente", FieldKind::Reference(Cliente::COLLECTION)),
        FieldSpec::required("id_destinatario", "Destinatário", FieldKind::Reference(Cliente::COLLECTION)),
        FieldSpec::optional("id_funcionario", "Funcionário", FieldKind::Reference(Funcionario::COLLECTION)),
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Data",
        "Valor mercadoria",
        "Tipo",
        "Peso",
        "Valor frete",
        "ICMS",
        "Pedágio",
        "Pagador",
        "Remetente",
        "Destinatário",
        "Funcionário",
    ];
    const LOOKUPS: &'static [&'static str] = &[
        Cliente::COLLECTION,
        PessoaFisica::COLLECTION,
        PessoaJuridica::COLLECTION,
        Funcionario::COLLECTION,
    ];

    fn cells(&self, directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            format_date(self.data_frete),
            format_decimal(self.valor_mercadoria),
            self.frete_tipo.clone(),
            format_decimal(self.peso),
            format_optional(self.frete_valor),
            format_optional(self.valor_icms),
            format_optional(self.valor_pedagio),
            self.quem_paga_frete.to_string(),
            directory.cliente(self.id_remetente),
            directory.cliente(self.id_destinatario),
            self.id_funcionario
                .map(|id| directory.funcionario(id))
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl Managed for Funcionario {
    const LABEL: &'static str = "Funcionário";
    const NOUN: &'static str = "funcionário";
    const PLURAL: &'static str = "funcionários";
    const TITLE: &'static str = "Funcionários";
    const GENDER: Gender = Gender::Masculine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nome_funcionario", "Nome", FieldKind::Text),
        FieldSpec::required("numero_registro", "Número de registro", FieldKind::Text),
    ];
    const HEADERS: &'static [&'static str] = &["ID", "Nome", "Número de registro"];

    fn cells(&self, _directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.nome_funcionario.clone(),
            self.numero_registro.clone(),
        ]
    }
}

impl Managed for PessoaFisica {
    const LABEL: &'static str = "Pessoa Física";
    const NOUN: &'static str = "pessoa física";
    const PLURAL: &'static str = "pessoas físicas";
    const TITLE: &'static str = "Pessoas Físicas";
    const GENDER: Gender = Gender::Feminine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("id_cliente", "Cliente", FieldKind::Reference(Cliente::COLLECTION)),
        FieldSpec::required("nome", "Nome", FieldKind::Text),
        FieldSpec::required("CPF", "CPF", FieldKind::Text),
        FieldSpec::required("endereco", "Endereço", FieldKind::Text),
        FieldSpec::required("telefone", "Telefone", FieldKind::Text),
    ];
    const HEADERS: &'static [&'static str] = &["ID", "Nome", "CPF", "Endereço", "Telefone"];
    const LOOKUPS: &'static [&'static str] = &[Cliente::COLLECTION];

    fn cells(&self, _directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.nome.clone(),
            self.cpf.clone(),
            self.endereco.clone(),
            self.telefone.clone(),
        ]
    }
}

impl Managed for PessoaJuridica {
    const LABEL: &'static str = "Pessoa Jurídica";
    const NOUN: &'static str = "pessoa jurídica";
    const PLURAL: &'static str = "pessoas jurídicas";
    const TITLE: &'static str = "Pessoas Jurídicas";
    const GENDER: Gender = Gender::Feminine;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("id_cliente", "Cliente", FieldKind::Reference(Cliente::COLLECTION)),
        FieldSpec::required("razao_social", "Razão social", FieldKind::Text),
        FieldSpec::required("CNPJ", "CNPJ", FieldKind::Text),
        FieldSpec::required("inscricao_estadual", "Inscrição estadual", FieldKind::Text),
        FieldSpec::required(
            "id_representante",
            "Representante",
            FieldKind::Reference(PessoaFisica::COLLECTION),
        ),
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Razão social",
        "CNPJ",
        "Inscrição estadual",
        "Cliente",
        "Representante",
    ];
    const LOOKUPS: &'static [&'static str] = &[Cliente::COLLECTION, PessoaFisica::COLLECTION];

    fn cells(&self, directory: &Directory) -> Vec<String> {
        vec![
            format_id(self),
            self.razao_social.clone(),
            self.cnpj.clone(),
            self.inscricao_estadual.clone(),
            self.id_cliente
                .map(|id| directory.cliente(id))
                .unwrap_or_else(|| "Cliente não encontrado".to_string()),
            directory.representante(self.id_representante),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormValues;

    #[test]
    fn test_messages_agree_with_gender() {
        assert_eq!(created_message::<Cidade>(), "Cidade cadastrada com sucesso!");
        assert_eq!(updated_message::<Funcionario>(), "Funcionário atualizado com sucesso!");
        assert_eq!(deleted_message::<PessoaFisica>(), "Pessoa Física excluída com sucesso!");
        assert_eq!(save_failed_message::<PessoaJuridica>(), "Erro ao salvar pessoa jurídica.");
        assert_eq!(delete_failed_message::<Estado>(), "Erro ao excluir estado.");
        assert_eq!(load_failed_message::<Frete>(), "Erro ao carregar fretes.");
    }

    #[test]
    fn test_headers_match_cells() {
        let directory = Directory::default();
        let cidade = Cidade {
            id_cidade: Some(1),
            nome_cidade: "A".into(),
            preco_unit_peso: 1.0,
            preco_unit_valor: 2.0,
            id_estado: 10,
        };
        assert_eq!(cidade.cells(&directory).len(), Cidade::HEADERS.len());
        assert_eq!(cidade.cells(&directory)[4], "Estado não encontrado");

        let funcionario = Funcionario {
            id_funcionario: Some(2),
            nome_funcionario: "Rui".into(),
            numero_registro: "77".into(),
        };
        assert_eq!(funcionario.cells(&directory), vec!["2", "Rui", "77"]);
    }

    #[test]
    fn test_pessoa_fisica_form_requires_a_cliente() {
        let mut form = FormValues::blank(PessoaFisica::FIELDS);
        form.set("nome", "Ana");
        form.set("CPF", "123");
        form.set("endereco", "Rua A");
        form.set("telefone", "1199");
        let errors = form.parse::<PessoaFisica>(PessoaFisica::FIELDS).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id_cliente");

        form.set("id_cliente", "2");
        let pf = form.parse::<PessoaFisica>(PessoaFisica::FIELDS).unwrap();
        assert_eq!(pf.id_cliente, Some(2));
        assert_eq!(PessoaFisica::LOOKUPS, &["clientes"]);
    }

    #[test]
    fn test_dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "09/03/2024");
        assert_eq!(format_decimal(1.5), "1.50");
    }
}
