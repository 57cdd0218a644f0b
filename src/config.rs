use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Category sets consumed by the statistics engine. Entries are matched
/// case-insensitively against ticket fields, so they are stored lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub status_abertos: Vec<String>,
    pub status_encerrados: Vec<String>,
    pub prioridades_criticas: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            status_abertos: vec![
                "aberto".into(),
                "em andamento".into(),
                "pendente".into(),
            ],
            status_encerrados: vec!["encerrado".into(), "fechado".into()],
            prioridades_criticas: vec!["alta".into(), "urgente".into()],
        }
    }
}

/// Loads the config from a JSON file, falling back to defaults when the
/// file does not exist yet.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let conteudo = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&conteudo)?)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), AppError> {
    std::fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
