pub mod analyzer;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod state;

pub use analyzer::charts::{chart_data, CategoryCount, ChartData, MonthlyCount};
pub use analyzer::dashboard::{
    calculate_stats, calculate_stats_with_config, DashboardStats, SatisfacaoDistribuicao,
};
pub use config::{load_config, save_config, AppConfig};
pub use error::AppError;
pub use export::{export_csv, export_xlsx, generate_csv, generate_xlsx};
pub use parser::{parse_csv_reader, parse_file, parse_xlsx_reader, ParseOutput, Ticket};
pub use state::AppState;

// ─── E2E Integration Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod e2e_tests {
    use crate::*;

    const HDR: &str = concat!(
        "ID do Chamado,Data de Abertura,Data de Fechamento,Status,",
        "Prioridade,Motivo,Solução,Solicitante,Agente Responsável,",
        "Departamento,TMA (minutos),FRT (minutos),Satisfação do Cliente"
    );

    fn fixture_csv() -> String {
        format!(
            "{HDR}\n\
             1,2024-05-02 08:12:00,2024-05-02 12:40:00,Encerrado,Alta,Erro de sistema,Reinicialização,Maria,Ana,TI,268,12,Excelente\n\
             2,2024-06-11 22:01:27,2024-06-12 10:00:00,Fechado,Urgente,Rede,Troca de cabo,João,Ana,TI,719,30,Bom\n\
             3,2024-06-15 09:00:00,,Aberto,Média,Impressora,,Carla,Bruno,Financeiro,45,5,Médio\n\
             4,2024-06-20 14:30:00,,Em andamento,Baixa,Acesso,,Pedro,Ana,RH,60,8,Qualquer"
        )
    }

    /// E2E: parse CSV -> session state -> stats -> charts -> exports.
    #[test]
    fn test_e2e_import_and_aggregate_pipeline() {
        // 1. Parse
        let out = parse_csv_reader(fixture_csv().as_bytes()).expect("CSV parsing failed");
        assert_eq!(out.tickets.len(), 4);
        assert_eq!(out.detected_columns.len(), 13);

        // 2. Publish into session state
        let state = AppState::new();
        state.replace(out.tickets);
        let tickets = state.snapshot();

        // 3. Dashboard stats
        let stats = calculate_stats(&tickets);
        assert_eq!(stats.total_chamados, 4);
        assert_eq!(stats.chamados_abertos, 2);
        assert_eq!(stats.chamados_encerrados, 2);
        assert_eq!(stats.taxa_resolucao, 50.0);
        // (268 + 719 + 45 + 60) / 4 = 273
        assert_eq!(stats.media_tma, 273);
        // (12 + 30 + 5 + 8) / 4 = 13.75 -> 14
        assert_eq!(stats.media_frt, 14);
        assert_eq!(stats.agente_mais_produtivo, "Ana");
        assert_eq!(stats.chamados_alta_prioridade, 2);
        // "Qualquer" is not a fixed category, only 3 of 4 are tallied
        assert_eq!(stats.distribuicao_satisfacao.total(), 3);
        assert_eq!(stats.distribuicao_satisfacao.excelente, 1);
        assert_eq!(stats.distribuicao_satisfacao.bom, 1);
        assert_eq!(stats.distribuicao_satisfacao.medio, 1);

        // 4. Chart buckets
        let charts = chart_data(&tickets);
        assert_eq!(charts.chamados_por_agente[0].label, "Ana");
        assert_eq!(charts.chamados_por_agente[0].total, 3);
        assert_eq!(charts.chamados_por_departamento.len(), 3);
        let periodos: Vec<&str> = charts
            .evolucao_mensal
            .iter()
            .map(|m| m.periodo.as_str())
            .collect();
        assert_eq!(periodos, vec!["2024-05", "2024-06"]);
        assert_eq!(charts.evolucao_mensal[0].mes, "Mai/2024");
        assert_eq!(charts.evolucao_mensal[1].mes, "Jun/2024");
        let soma: usize = charts.evolucao_mensal.iter().map(|m| m.total).sum();
        assert_eq!(soma, tickets.len());

        // 5. CSV round-trip over a filtered subsequence
        let filtrados: Vec<Ticket> = tickets
            .iter()
            .filter(|t| t.departamento == "TI")
            .cloned()
            .collect();
        let bytes = generate_csv(&filtrados).expect("generate_csv failed");
        let relidos = parse_csv_reader(bytes.as_slice()).expect("re-parse failed");
        assert_eq!(relidos.tickets, filtrados);

        // 6. XLSX round-trip, bytes start with PK (0x50 0x4B)
        let bytes = generate_xlsx(&tickets).expect("generate_xlsx failed");
        assert_eq!(bytes[0], 0x50, "First byte should be 0x50 (P)");
        assert_eq!(bytes[1], 0x4B, "Second byte should be 0x4B (K)");
        let relidos =
            parse_xlsx_reader(std::io::Cursor::new(bytes)).expect("XLSX re-parse failed");
        assert_eq!(relidos.tickets.as_slice(), tickets.as_slice());

        // 7. Reset clears the session
        state.clear();
        assert!(state.is_empty());
        let vazio = calculate_stats(&state.snapshot());
        assert_eq!(vazio.total_chamados, 0);
        assert_eq!(vazio.agente_mais_produtivo, "N/A");
    }

    /// E2E: import failures surface one human-readable message and leave
    /// no partial collection behind.
    #[test]
    fn test_e2e_failed_import_leaves_state_untouched() {
        let state = AppState::new();
        state.replace(
            parse_csv_reader(fixture_csv().as_bytes())
                .unwrap()
                .tickets,
        );

        let quebrado = format!(
            "{HDR}\n1,2024-06-11 22:01:27,,Aberto,Alta,M,S,Sol,Ana,TI,muitos,5,Bom"
        );
        let err = parse_csv_reader(quebrado.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("Linha 2:"));

        // The previous session collection is still intact.
        assert_eq!(state.len(), 4);
    }
}
