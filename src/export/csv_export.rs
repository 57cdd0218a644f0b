use crate::error::AppError;
use crate::parser::columns::REQUIRED;
use crate::parser::types::Ticket;

/// Serialize tickets to comma-separated UTF-8 bytes, header row first,
/// columns in the fixed required order. Fields with embedded delimiters,
/// quotes or newlines are quoted by the writer.
pub fn generate_csv(tickets: &[Ticket]) -> Result<Vec<u8>, AppError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(REQUIRED)?;

    for t in tickets {
        let tma = t.tma.to_string();
        let frt = t.frt.to_string();
        wtr.write_record([
            t.id.as_str(),
            t.data_abertura.as_str(),
            t.data_fechamento.as_str(),
            t.status.as_str(),
            t.prioridade.as_str(),
            t.motivo.as_str(),
            t.solucao.as_str(),
            t.solicitante.as_str(),
            t.agente_responsavel.as_str(),
            t.departamento.as_str(),
            tma.as_str(),
            frt.as_str(),
            t.satisfacao.as_str(),
        ])?;
    }

    wtr.into_inner().map_err(|e| AppError::Custom(e.to_string()))
}

/// Write the delimited export to `path`.
pub fn export_csv(tickets: &[Ticket], path: &str) -> Result<(), AppError> {
    let bytes = generate_csv(tickets)?;
    std::fs::write(path, &bytes)?;
    log::info!("Export CSV de {} chamados para {}", tickets.len(), path);
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
