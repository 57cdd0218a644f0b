use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::AppError;
use crate::export::create_header_format;
use crate::parser::columns::REQUIRED;
use crate::parser::types::Ticket;

const NOME_ABA: &str = "Chamados";

/// Serialize tickets to XLSX bytes: one sheet named "Chamados", header
/// row with the labeled columns, TMA/FRT kept as native numbers.
pub fn generate_xlsx(tickets: &[Ticket]) -> Result<Vec<u8>, AppError> {
    let mut wb = Workbook::new();
    write_chamados(&mut wb, tickets)?;
    Ok(wb.save_to_buffer()?)
}

/// Write the workbook export to `path`.
pub fn export_xlsx(tickets: &[Ticket], path: &str) -> Result<(), AppError> {
    let bytes = generate_xlsx(tickets)?;
    std::fs::write(path, &bytes)?;
    log::info!("Export XLSX de {} chamados para {}", tickets.len(), path);
    Ok(())
}

fn write_chamados(wb: &mut Workbook, tickets: &[Ticket]) -> Result<(), XlsxError> {
    let ws = wb.add_worksheet();
    ws.set_name(NOME_ABA)?;

    let hdr = create_header_format();
    for (col, h) in REQUIRED.iter().enumerate() {
        ws.write_with_format(0, col as u16, *h, &hdr)?;
    }

    for (i, t) in tickets.iter().enumerate() {
        let row = (i + 1) as u32;
        ws.write(row, 0, t.id.as_str())?;
        ws.write(row, 1, t.data_abertura.as_str())?;
        ws.write(row, 2, t.data_fechamento.as_str())?;
        ws.write(row, 3, t.status.as_str())?;
        ws.write(row, 4, t.prioridade.as_str())?;
        ws.write(row, 5, t.motivo.as_str())?;
        ws.write(row, 6, t.solucao.as_str())?;
        ws.write(row, 7, t.solicitante.as_str())?;
        ws.write(row, 8, t.agente_responsavel.as_str())?;
        ws.write(row, 9, t.departamento.as_str())?;
        ws.write(row, 10, t.tma)?;
        ws.write(row, 11, t.frt)?;
        ws.write(row, 12, t.satisfacao.as_str())?;
    }

    if !tickets.is_empty() {
        ws.set_freeze_panes(1, 0)?;
        ws.autofilter(0, 0, tickets.len() as u32, (REQUIRED.len() - 1) as u16)?;
    }

    ws.set_column_width(0, 14)?;
    for col in 1u16..=2 {
        ws.set_column_width(col, 20)?;
    }
    for col in 3u16..=12 {
        ws.set_column_width(col, 18)?;
    }

    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
