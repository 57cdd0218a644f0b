use serde::{Deserialize, Serialize};

/// Row as decoded from the spreadsheet, keyed by the required columns but
/// still untyped. Never escapes the parser: `pipeline::map_ticket` turns
/// it into a `Ticket` or aborts the import.
#[derive(Debug, Clone, Default)]
pub struct RawTicket {
    pub id: Option<String>,
    pub data_abertura: Option<String>,
    pub data_fechamento: Option<String>,
    pub status: Option<String>,
    pub prioridade: Option<String>,
    pub motivo: Option<String>,
    pub solucao: Option<String>,
    pub solicitante: Option<String>,
    pub agente_responsavel: Option<String>,
    pub departamento: Option<String>,
    pub tma: Option<String>,
    pub frt: Option<String>,
    pub satisfacao: Option<String>,
}

/// One support case, fully populated at construction and never mutated.
///
/// `data_abertura` is guaranteed to match `YYYY-MM-DD HH:MM:SS`;
/// `data_fechamento` is carried as-is and may be empty while the ticket
/// is still open. `tma` and `frt` are non-negative minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub data_abertura: String,
    pub data_fechamento: String,
    pub status: String,
    pub prioridade: String,
    pub motivo: String,
    pub solucao: String,
    pub solicitante: String,
    pub agente_responsavel: String,
    pub departamento: String,
    pub tma: f64,
    pub frt: f64,
    pub satisfacao: String,
}

/// Output of the parse pipeline, consumed by the UI boundary.
#[derive(Debug)]
pub struct ParseOutput {
    pub tickets: Vec<Ticket>,
    pub detected_columns: Vec<String>,
    pub parse_duration_ms: u64,
}
