/// Categorical and time-series buckets for the dashboard charts.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::types::Ticket;

const MESES_ABREVIADOS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chamados_por_agente: Vec<CategoryCount>,
    pub chamados_por_motivo: Vec<CategoryCount>,
    pub chamados_por_prioridade: Vec<CategoryCount>,
    pub chamados_por_departamento: Vec<CategoryCount>,
    pub evolucao_mensal: Vec<MonthlyCount>,
}

/// One bucket of a categorical tally. The vector order is the first
/// occurrence order in the collection; consumers re-sort for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub label: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Sort key, `YYYY-MM`.
    pub periodo: String,
    /// Display label, e.g. "Jun/2024".
    pub mes: String,
    pub total: usize,
}

/// Pure and reentrant. Tallies are by exact field value, no case
/// normalization. Dates were validated by the mapper, so the monthly
/// series does not re-check them.
pub fn chart_data(tickets: &[Ticket]) -> ChartData {
    ChartData {
        chamados_por_agente: contar_por(tickets, |t| &t.agente_responsavel),
        chamados_por_motivo: contar_por(tickets, |t| &t.motivo),
        chamados_por_prioridade: contar_por(tickets, |t| &t.prioridade),
        chamados_por_departamento: contar_por(tickets, |t| &t.departamento),
        evolucao_mensal: evolucao_mensal(tickets),
    }
}

fn contar_por<'a, F>(tickets: &'a [Ticket], campo: F) -> Vec<CategoryCount>
where
    F: Fn(&'a Ticket) -> &'a str,
{
    let mut contagens: Vec<CategoryCount> = Vec::new();
    for t in tickets {
        let valor = campo(t);
        match contagens.iter_mut().find(|c| c.label == valor) {
            Some(c) => c.total += 1,
            None => contagens.push(CategoryCount {
                label: valor.to_string(),
                total: 1,
            }),
        }
    }
    contagens
}

/// Per-month totals keyed by the `YYYY-MM` prefix of the opening date,
/// emitted ascending by key.
fn evolucao_mensal(tickets: &[Ticket]) -> Vec<MonthlyCount> {
    let mut por_mes: BTreeMap<String, usize> = BTreeMap::new();
    for t in tickets {
        let data = t.data_abertura.split(' ').next().unwrap_or("");
        let mut partes = data.split('-');
        let ano = partes.next().unwrap_or("");
        let mes = partes.next().unwrap_or("");
        *por_mes.entry(format!("{ano}-{mes}")).or_insert(0) += 1;
    }

    por_mes
        .into_iter()
        .map(|(periodo, total)| {
            let mes = rotulo_mensal(&periodo);
            MonthlyCount { periodo, mes, total }
        })
        .collect()
}

fn rotulo_mensal(periodo: &str) -> String {
    let mut partes = periodo.split('-');
    let ano = partes.next().unwrap_or("");
    let mes: usize = partes
        .next()
        .and_then(|m| m.parse().ok())
        .unwrap_or(0);
    format!("{}/{}", nome_mes_abreviado(mes), ano)
}

fn nome_mes_abreviado(mes: usize) -> &'static str {
    MESES_ABREVIADOS
        .get(mes.wrapping_sub(1))
        .copied()
        .unwrap_or("???")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(data_abertura: &str, agente: &str, motivo: &str) -> Ticket {
        Ticket {
            id: "1".to_string(),
            data_abertura: data_abertura.to_string(),
            data_fechamento: String::new(),
            status: "Aberto".to_string(),
            prioridade: "Alta".to_string(),
            motivo: motivo.to_string(),
            solucao: String::new(),
            solicitante: "Maria".to_string(),
            agente_responsavel: agente.to_string(),
            departamento: "TI".to_string(),
            tma: 10.0,
            frt: 5.0,
            satisfacao: "Bom".to_string(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let data = chart_data(&[]);
        assert!(data.chamados_por_agente.is_empty());
        assert!(data.evolucao_mensal.is_empty());
    }

    #[test]
    fn test_tally_first_occurrence_order() {
        let tickets = vec![
            ticket("2024-06-11 22:01:27", "Bruno", "Rede"),
            ticket("2024-06-12 08:00:00", "Ana", "Impressora"),
            ticket("2024-06-13 09:30:00", "Bruno", "Rede"),
        ];
        let data = chart_data(&tickets);
        assert_eq!(
            data.chamados_por_agente,
            vec![
                CategoryCount { label: "Bruno".into(), total: 2 },
                CategoryCount { label: "Ana".into(), total: 1 },
            ]
        );
        assert_eq!(data.chamados_por_motivo[0].label, "Rede");
        assert_eq!(data.chamados_por_motivo[0].total, 2);
    }

    #[test]
    fn test_tally_is_case_sensitive() {
        let tickets = vec![
            ticket("2024-06-11 22:01:27", "ana", "Rede"),
            ticket("2024-06-12 08:00:00", "Ana", "Rede"),
        ];
        let data = chart_data(&tickets);
        assert_eq!(data.chamados_por_agente.len(), 2);
    }

    #[test]
    fn test_monthly_key_and_label_scenario() {
        let tickets = vec![ticket("2024-06-11 22:01:27", "Ana", "Rede")];
        let data = chart_data(&tickets);
        assert_eq!(data.evolucao_mensal.len(), 1);
        assert_eq!(data.evolucao_mensal[0].periodo, "2024-06");
        assert_eq!(data.evolucao_mensal[0].mes, "Jun/2024");
        assert_eq!(data.evolucao_mensal[0].total, 1);
    }

    #[test]
    fn test_monthly_evolution_sorted_ascending() {
        let tickets = vec![
            ticket("2024-12-01 10:00:00", "Ana", "Rede"),
            ticket("2023-02-15 10:00:00", "Ana", "Rede"),
            ticket("2024-01-20 10:00:00", "Ana", "Rede"),
            ticket("2024-12-25 10:00:00", "Ana", "Rede"),
        ];
        let data = chart_data(&tickets);
        let periodos: Vec<&str> = data
            .evolucao_mensal
            .iter()
            .map(|m| m.periodo.as_str())
            .collect();
        assert_eq!(periodos, vec!["2023-02", "2024-01", "2024-12"]);
        for janela in periodos.windows(2) {
            assert!(janela[0] < janela[1]);
        }
        let soma: usize = data.evolucao_mensal.iter().map(|m| m.total).sum();
        assert_eq!(soma, tickets.len());
    }

    #[test]
    fn test_month_name_table() {
        assert_eq!(nome_mes_abreviado(1), "Jan");
        assert_eq!(nome_mes_abreviado(6), "Jun");
        assert_eq!(nome_mes_abreviado(12), "Dez");
        assert_eq!(nome_mes_abreviado(0), "???");
        assert_eq!(nome_mes_abreviado(13), "???");
    }

    #[test]
    fn test_year_boundary_labels() {
        let tickets = vec![
            ticket("2023-12-31 23:59:59", "Ana", "Rede"),
            ticket("2024-01-01 00:00:00", "Ana", "Rede"),
        ];
        let data = chart_data(&tickets);
        let rotulos: Vec<&str> = data
            .evolucao_mensal
            .iter()
            .map(|m| m.mes.as_str())
            .collect();
        assert_eq!(rotulos, vec!["Dez/2023", "Jan/2024"]);
    }
}
