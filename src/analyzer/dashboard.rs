/// Dashboard metrics, recomputed on demand from the full ticket collection.
use serde::Serialize;

use super::stats::{media, pct};
use crate::config::AppConfig;
use crate::parser::types::Ticket;

/// Categorias fixas de satisfação, na ordem exibida pelo dashboard.
pub const CATEGORIAS_SATISFACAO: &[&str] =
    &["Ruim", "Regular", "Médio", "Bom", "Excelente"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_chamados: usize,
    pub chamados_abertos: usize,
    pub chamados_encerrados: usize,
    /// Mean TMA in minutes, rounded to the nearest integer. 0 on empty input.
    pub media_tma: i64,
    /// Mean FRT in minutes, rounded to the nearest integer. 0 on empty input.
    pub media_frt: i64,
    pub distribuicao_satisfacao: SatisfacaoDistribuicao,
    pub agente_mais_produtivo: String,
    pub chamados_alta_prioridade: usize,
    /// Encerrados / total em %, one decimal. 0.0 on empty input.
    pub taxa_resolucao: f64,
}

/// Tally per fixed satisfaction category. Values outside the five labels
/// are not counted anywhere, so the sum may be below the ticket total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SatisfacaoDistribuicao {
    #[serde(rename = "Ruim")]
    pub ruim: usize,
    #[serde(rename = "Regular")]
    pub regular: usize,
    #[serde(rename = "Médio")]
    pub medio: usize,
    #[serde(rename = "Bom")]
    pub bom: usize,
    #[serde(rename = "Excelente")]
    pub excelente: usize,
}

impl SatisfacaoDistribuicao {
    pub fn total(&self) -> usize {
        self.ruim + self.regular + self.medio + self.bom + self.excelente
    }
}

/// Pure, reentrant, never fails: degenerate inputs produce the documented
/// sentinels instead of errors.
pub fn calculate_stats(tickets: &[Ticket]) -> DashboardStats {
    calculate_stats_with_config(tickets, &AppConfig::default())
}

pub fn calculate_stats_with_config(
    tickets: &[Ticket],
    config: &AppConfig,
) -> DashboardStats {
    let total_chamados = tickets.len();

    let chamados_abertos = tickets
        .iter()
        .filter(|t| contem_ci(&config.status_abertos, &t.status))
        .count();
    let chamados_encerrados = tickets
        .iter()
        .filter(|t| contem_ci(&config.status_encerrados, &t.status))
        .count();
    let chamados_alta_prioridade = tickets
        .iter()
        .filter(|t| contem_ci(&config.prioridades_criticas, &t.prioridade))
        .count();

    let tmas: Vec<f64> = tickets.iter().map(|t| t.tma).collect();
    let frts: Vec<f64> = tickets.iter().map(|t| t.frt).collect();

    DashboardStats {
        total_chamados,
        chamados_abertos,
        chamados_encerrados,
        media_tma: media(&tmas).round() as i64,
        media_frt: media(&frts).round() as i64,
        distribuicao_satisfacao: distribuicao_satisfacao(tickets),
        agente_mais_produtivo: agente_mais_produtivo(tickets),
        chamados_alta_prioridade,
        taxa_resolucao: pct(chamados_encerrados, total_chamados),
    }
}

fn contem_ci(categorias: &[String], valor: &str) -> bool {
    let valor = valor.to_lowercase();
    categorias.iter().any(|c| c == &valor)
}

/// Exact-string tally, no case folding: "bom" is not "Bom".
fn distribuicao_satisfacao(tickets: &[Ticket]) -> SatisfacaoDistribuicao {
    let mut dist = SatisfacaoDistribuicao::default();
    for t in tickets {
        match t.satisfacao.as_str() {
            "Ruim" => dist.ruim += 1,
            "Regular" => dist.regular += 1,
            "Médio" => dist.medio += 1,
            "Bom" => dist.bom += 1,
            "Excelente" => dist.excelente += 1,
            _ => {}
        }
    }
    dist
}

/// Agent with the highest ticket count. Ties resolve to the agent first
/// encountered in insertion order; "N/A" for an empty collection.
fn agente_mais_produtivo(tickets: &[Ticket]) -> String {
    let mut contagens: Vec<(&str, usize)> = Vec::new();
    for t in tickets {
        match contagens
            .iter_mut()
            .find(|(nome, _)| *nome == t.agente_responsavel)
        {
            Some((_, c)) => *c += 1,
            None => contagens.push((t.agente_responsavel.as_str(), 1)),
        }
    }

    let mut melhor: Option<(&str, usize)> = None;
    for &(nome, c) in &contagens {
        if melhor.map_or(true, |(_, max)| c > max) {
            melhor = Some((nome, c));
        }
    }
    melhor
        .map(|(nome, _)| nome.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
