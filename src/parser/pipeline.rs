use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Instant;

use calamine::{Data, Reader as _, Xlsx};

use crate::error::AppError;
use crate::parser::coerce::{parse_datetime, parse_minutos};
use crate::parser::columns::{validate_columns, ColumnMap};
use crate::parser::types::{ParseOutput, RawTicket, Ticket};

/// Parse a ticket spreadsheet from `path`, dispatching on the extension:
/// `.csv` for delimited text, `.xlsx` for a workbook (first sheet only).
/// Any malformed row aborts the whole import, no partial list escapes.
pub fn parse_file(path: &str) -> Result<ParseOutput, AppError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let out = if ext == "csv" {
        let file = File::open(path)?;
        parse_csv_reader(BufReader::new(file))?
    } else if ext == "xlsx" {
        let file = File::open(path)?;
        parse_xlsx_reader(BufReader::new(file))?
    } else {
        return Err(AppError::UnsupportedFormat(ext));
    };

    log::info!(
        "Import de {} chamados de {} em {}ms",
        out.tickets.len(),
        path,
        out.parse_duration_ms
    );
    Ok(out)
}

/// Core CSV parsing logic, accepts any `Read` source, useful for tests.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<ParseOutput, AppError> {
    let start = Instant::now();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    // Phase 1: validate columns
    let headers = rdr.headers()?.clone();
    let col_map = ColumnMap::from_headers(&headers);
    validate_columns(&col_map)?;

    // Phase 2: map records
    let mut tickets: Vec<Ticket> = Vec::new();
    let mut linha = 1usize; // the header occupies line 1

    for result in rdr.records() {
        linha += 1;
        let record = result?;
        let raw = record_to_raw(&col_map, &record);
        let ticket = map_ticket(&raw)
            .map_err(|mensagem| AppError::InvalidRow { linha, mensagem })?;
        tickets.push(ticket);
    }

    finish(tickets, &col_map, start)
}

/// Workbook counterpart of `parse_csv_reader`: first sheet, first row as
/// header. Rows are funneled through the same record mapping as CSV.
pub fn parse_xlsx_reader<R: Read + Seek>(reader: R) -> Result<ParseOutput, AppError> {
    let start = Instant::now();

    let mut workbook: Xlsx<_> = Xlsx::new(reader)?;
    let primeira_aba = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or(AppError::EmptyFile)?;
    let range = workbook.worksheet_range(&primeira_aba)?;

    let mut rows = range.rows();
    let headers: csv::StringRecord = match rows.next() {
        Some(cells) => cells.iter().map(cell_to_string).collect(),
        None => csv::StringRecord::new(),
    };
    let col_map = ColumnMap::from_headers(&headers);
    validate_columns(&col_map)?;

    let mut tickets: Vec<Ticket> = Vec::new();
    let mut linha = 1usize;

    for cells in rows {
        linha += 1;
        let record: csv::StringRecord = cells.iter().map(cell_to_string).collect();
        let raw = record_to_raw(&col_map, &record);
        let ticket = map_ticket(&raw)
            .map_err(|mensagem| AppError::InvalidRow { linha, mensagem })?;
        tickets.push(ticket);
    }

    finish(tickets, &col_map, start)
}

fn finish(
    tickets: Vec<Ticket>,
    col_map: &ColumnMap,
    start: Instant,
) -> Result<ParseOutput, AppError> {
    if tickets.is_empty() {
        return Err(AppError::EmptyFile);
    }
    Ok(ParseOutput {
        tickets,
        detected_columns: col_map.all_headers().to_vec(),
        parse_duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        outro => outro.to_string(),
    }
}

fn record_to_raw(col_map: &ColumnMap, record: &csv::StringRecord) -> RawTicket {
    RawTicket {
        id: col_map.get(record, "ID do Chamado").map(str::to_string),
        data_abertura: col_map.get(record, "Data de Abertura").map(str::to_string),
        data_fechamento: col_map
            .get(record, "Data de Fechamento")
            .map(str::to_string),
        status: col_map.get(record, "Status").map(str::to_string),
        prioridade: col_map.get(record, "Prioridade").map(str::to_string),
        motivo: col_map.get(record, "Motivo").map(str::to_string),
        solucao: col_map.get(record, "Solução").map(str::to_string),
        solicitante: col_map.get(record, "Solicitante").map(str::to_string),
        agente_responsavel: col_map
            .get(record, "Agente Responsável")
            .map(str::to_string),
        departamento: col_map.get(record, "Departamento").map(str::to_string),
        tma: col_map.get(record, "TMA (minutos)").map(str::to_string),
        frt: col_map.get(record, "FRT (minutos)").map(str::to_string),
        satisfacao: col_map
            .get(record, "Satisfação do Cliente")
            .map(str::to_string),
    }
}

fn map_ticket(raw: &RawTicket) -> Result<Ticket, String> {
    // Data de Abertura (the monthly evolution depends on its shape)
    let data_abertura = raw
        .data_abertura
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    if parse_datetime(&data_abertura).is_none() {
        return Err(format!("Data de Abertura inválida: {:?}", data_abertura));
    }

    // TMA / FRT (minutos)
    let tma_str = raw.tma.as_deref().unwrap_or("");
    let tma = parse_minutos(tma_str)
        .ok_or_else(|| format!("TMA (minutos) inválido: {:?}", tma_str))?;
    let frt_str = raw.frt.as_deref().unwrap_or("");
    let frt = parse_minutos(frt_str)
        .ok_or_else(|| format!("FRT (minutos) inválido: {:?}", frt_str))?;

    // Everything else passes through unchanged, empty strings included.
    // Unknown satisfaction categories are accepted here; they are only
    // excluded from the distribution tally at aggregation time.
    Ok(Ticket {
        id: raw.id.clone().unwrap_or_default(),
        data_abertura,
        data_fechamento: raw.data_fechamento.clone().unwrap_or_default(),
        status: raw.status.clone().unwrap_or_default(),
        prioridade: raw.prioridade.clone().unwrap_or_default(),
        motivo: raw.motivo.clone().unwrap_or_default(),
        solucao: raw.solucao.clone().unwrap_or_default(),
        solicitante: raw.solicitante.clone().unwrap_or_default(),
        agente_responsavel: raw.agente_responsavel.clone().unwrap_or_default(),
        departamento: raw.departamento.clone().unwrap_or_default(),
        tma,
        frt,
        satisfacao: raw.satisfacao.clone().unwrap_or_default(),
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
