use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro ao ler arquivo: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erro ao ler planilha: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Erro ao gerar planilha: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Erro de serialização: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Campos obrigatórios faltando: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Arquivo vazio ou sem dados")]
    EmptyFile,

    #[error("Formato inválido: {0}")]
    UnsupportedFormat(String),

    #[error("Linha {linha}: {mensagem}")]
    InvalidRow { linha: usize, mensagem: String },

    #[error("{0}")]
    Custom(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
