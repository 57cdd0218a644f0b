use std::collections::HashMap;

use crate::error::AppError;

/// Colunas obrigatórias: o import falha se qualquer uma estiver ausente.
/// A ordem daqui também é a ordem das colunas no export.
pub const REQUIRED: &[&str] = &[
    "ID do Chamado",
    "Data de Abertura",
    "Data de Fechamento",
    "Status",
    "Prioridade",
    "Motivo",
    "Solução",
    "Solicitante",
    "Agente Responsável",
    "Departamento",
    "TMA (minutos)",
    "FRT (minutos)",
    "Satisfação do Cliente",
];

/// Maps column names to their index in a tabular record.
pub struct ColumnMap {
    indices: HashMap<String, usize>,
    headers: Vec<String>,
}

impl ColumnMap {
    /// Build a ColumnMap from the header record.
    /// Header fields are trimmed of surrounding whitespace.
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut indices = HashMap::new();
        let mut header_list = Vec::new();
        for (i, field) in headers.iter().enumerate() {
            let name = field.trim().to_string();
            indices.insert(name.clone(), i);
            header_list.push(name);
        }
        ColumnMap {
            indices,
            headers: header_list,
        }
    }

    /// Get the value of a named column from a record.
    pub fn get<'a>(&self, record: &'a csv::StringRecord, col: &str) -> Option<&'a str> {
        self.indices.get(col).and_then(|&i| record.get(i))
    }

    /// Returns true if the column is present in the headers.
    pub fn has(&self, col: &str) -> bool {
        self.indices.contains_key(col)
    }

    /// All header names in order.
    pub fn all_headers(&self) -> &[String] {
        &self.headers
    }
}

/// Required labels absent from the headers. Presence only, values are
/// never inspected here; an empty header set reports every label.
pub fn missing_required(col_map: &ColumnMap) -> Vec<String> {
    REQUIRED
        .iter()
        .filter(|&&c| !col_map.has(c))
        .map(|c| c.to_string())
        .collect()
}

/// Validate that all required columns are present.
/// Returns `AppError::MissingColumns` with the missing labels otherwise.
pub fn validate_columns(col_map: &ColumnMap) -> Result<(), AppError> {
    let faltando = missing_required(col_map);
    if faltando.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(faltando))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
