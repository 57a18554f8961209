//! Dashboard: three independent report panels.

use shared::Result;
use shared_http::api::{ArrecadacaoFretes, Estado, FreteFuncionario, MediaFretes, RecordId};
use tracing::warn;

use crate::catalog::format_date;
use crate::gateway::Gateway;
use crate::ports::ReportsClient;

pub const STATE_FALLBACK: &str = "Selecione um estado para visualizar os dados";
pub const PERIOD_FALLBACK: &str = "Insira o mês e o ano para visualizar os dados";

pub const MEDIA_HEADERS: &[&str] = &[
    "Estado",
    "Cidade",
    "Média de fretes (origem)",
    "Média de fretes (destino)",
];
pub const ARRECADACAO_HEADERS: &[&str] = &[
    "Estado",
    "Cidade",
    "Fretes (origem)",
    "Fretes (destino)",
];
pub const FUNCIONARIOS_HEADERS: &[&str] = &[
    "ID do frete",
    "Data",
    "Funcionário responsável",
    "Empresa",
    "Representante",
    "Telefone do representante",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Media,
    Arrecadacao,
    Funcionarios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportQuery {
    Media(RecordId),
    Arrecadacao(RecordId),
    Funcionarios { mes: u32, ano: i32 },
}

impl ReportQuery {
    pub fn panel(&self) -> PanelKind {
        match self {
            ReportQuery::Media(_) => PanelKind::Media,
            ReportQuery::Arrecadacao(_) => PanelKind::Arrecadacao,
            ReportQuery::Funcionarios { .. } => PanelKind::Funcionarios,
        }
    }

    pub async fn fetch(&self, reports: &dyn ReportsClient) -> Result<ReportRows> {
        Ok(match *self {
            ReportQuery::Media(id) => ReportRows::Media(reports.media_fretes(id).await?),
            ReportQuery::Arrecadacao(id) => {
                ReportRows::Arrecadacao(reports.arrecadacao_fretes(id).await?)
            }
            ReportQuery::Funcionarios { mes, ano } => {
                ReportRows::Funcionarios(reports.fretes_funcionarios(mes, ano).await?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    Media(Vec<MediaFretes>),
    Arrecadacao(Vec<ArrecadacaoFretes>),
    Funcionarios(Vec<FreteFuncionario>),
}

/// A fetch in flight; finishing a superseded one is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReport {
    pub query: ReportQuery,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    pub loading: bool,
    pub rows: Vec<T>,
    fallback: &'static str,
    seq: u64,
}

pub enum PanelView<'a, T> {
    Loading,
    Fallback(&'static str),
    Rows(&'a [T]),
}

impl<T> Panel<T> {
    fn new(fallback: &'static str) -> Self {
        Self {
            loading: false,
            rows: Vec::new(),
            fallback,
            seq: 0,
        }
    }

    pub fn view(&self) -> PanelView<'_, T> {
        if self.loading {
            PanelView::Loading
        } else if self.rows.is_empty() {
            PanelView::Fallback(self.fallback)
        } else {
            PanelView::Rows(&self.rows)
        }
    }

    fn start(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    fn clear(&mut self) {
        self.seq += 1;
        self.loading = false;
        self.rows.clear();
    }

    fn finish(&mut self, seq: u64, rows: Option<Vec<T>>) {
        if seq != self.seq {
            return;
        }
        self.loading = false;
        self.rows = rows.unwrap_or_default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardScreen {
    pub estados: Vec<Estado>,
    pub media_estado: String,
    pub arrecadacao_estado: String,
    pub mes: String,
    pub ano: String,
    pub media: Panel<MediaFretes>,
    pub arrecadacao: Panel<ArrecadacaoFretes>,
    pub funcionarios: Panel<FreteFuncionario>,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            estados: Vec::new(),
            media_estado: String::new(),
            arrecadacao_estado: String::new(),
            mes: String::new(),
            ano: String::new(),
            media: Panel::new(STATE_FALLBACK),
            arrecadacao: Panel::new(STATE_FALLBACK),
            funcionarios: Panel::new(PERIOD_FALLBACK),
        }
    }

    pub fn set_estados(&mut self, result: Result<Vec<Estado>>) {
        match result {
            Ok(estados) => self.estados = estados,
            Err(e) => {
                warn!("Could not load states for the dashboard: {}", e);
                self.estados.clear();
            }
        }
    }

    /// `(id, label)` pairs for both state dropdowns.
    pub fn estado_options(&self) -> Vec<(RecordId, String)> {
        self.estados
            .iter()
            .filter_map(|e| e.id_estado.map(|id| (id, e.nome_estado.clone())))
            .collect()
    }

    /// An empty selection clears the panel and fetches nothing.
    pub fn select_media_estado(&mut self, value: impl Into<String>) -> Option<PendingReport> {
        self.media_estado = value.into();
        match self.media_estado.trim().parse::<RecordId>() {
            Ok(id) => Some(PendingReport {
                query: ReportQuery::Media(id),
                seq: self.media.start(),
            }),
            Err(_) => {
                self.media.clear();
                None
            }
        }
    }

    pub fn select_arrecadacao_estado(&mut self, value: impl Into<String>) -> Option<PendingReport> {
        self.arrecadacao_estado = value.into();
        match self.arrecadacao_estado.trim().parse::<RecordId>() {
            Ok(id) => Some(PendingReport {
                query: ReportQuery::Arrecadacao(id),
                seq: self.arrecadacao.start(),
            }),
            Err(_) => {
                self.arrecadacao.clear();
                None
            }
        }
    }

    pub fn set_mes(&mut self, value: impl Into<String>) {
        self.mes = value.into();
    }

    pub fn set_ano(&mut self, value: impl Into<String>) {
        self.ano = value.into();
    }

    /// Month and year as entered, if both are filled and well formed.
    pub fn period(&self) -> Option<(u32, i32)> {
        let mes = self.mes.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))?;
        let ano = self.ano.trim().parse::<i32>().ok().filter(|a| *a > 0)?;
        Some((mes, ano))
    }

    pub fn search_funcionarios(&mut self) -> Option<PendingReport> {
        let (mes, ano) = self.period()?;
        Some(PendingReport {
            query: ReportQuery::Funcionarios { mes, ano },
            seq: self.funcionarios.start(),
        })
    }

    /// A failure is logged and clears only the panel it belongs to.
    pub fn finish(&mut self, pending: PendingReport, result: Result<ReportRows>) {
        let seq = pending.seq;
        match (pending.query.panel(), result) {
            (PanelKind::Media, Ok(ReportRows::Media(rows))) => self.media.finish(seq, Some(rows)),
            (PanelKind::Arrecadacao, Ok(ReportRows::Arrecadacao(rows))) => {
                self.arrecadacao.finish(seq, Some(rows))
            }
            (PanelKind::Funcionarios, Ok(ReportRows::Funcionarios(rows))) => {
                self.funcionarios.finish(seq, Some(rows))
            }
            (panel, outcome) => {
                if let Err(e) = outcome {
                    warn!("Report {:?} failed: {}", pending.query, e);
                }
                match panel {
                    PanelKind::Media => self.media.finish(seq, None),
                    PanelKind::Arrecadacao => self.arrecadacao.finish(seq, None),
                    PanelKind::Funcionarios => self.funcionarios.finish(seq, None),
                }
            }
        }
    }

    pub async fn mount(&mut self, gateway: &Gateway) {
        let result = gateway.estados.find_all().await;
        self.set_estados(result);
    }

    pub async fn run(&mut self, pending: Option<PendingReport>, reports: &dyn ReportsClient) {
        if let Some(pending) = pending {
            let result = pending.query.fetch(reports).await;
            self.finish(pending, result);
        }
    }
}

/// Averages are shown floored.
pub fn media_cells(row: &MediaFretes) -> Vec<String> {
    vec![
        row.nome_estado.clone(),
        row.nome_cidade.clone(),
        (row.media_fretes_origem.floor() as i64).to_string(),
        (row.media_fretes_destino.floor() as i64).to_string(),
    ]
}

pub fn arrecadacao_cells(row: &ArrecadacaoFretes) -> Vec<String> {
    vec![
        row.nome_estado.clone(),
        row.nome_cidade.clone(),
        row.quantidade_fretes_origem.to_string(),
        row.quantidade_fretes_destino.to_string(),
    ]
}

pub fn funcionario_cells(row: &FreteFuncionario) -> Vec<String> {
    vec![
        row.id_frete.to_string(),
        format_date(row.data_frete),
        row.funcionario_responsavel.clone(),
        row.empresa.clone(),
        row.representante_nome.clone(),
        row.representante_telefone.clone(),
    ]
}
