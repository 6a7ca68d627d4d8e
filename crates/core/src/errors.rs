use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReviewStoreError {
    #[error("review source `{}` is unavailable: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error("no reviews found for restaurant `{name}`")]
    NotFound { name: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("could not identify a restaurant name in query `{query}`")]
    AmbiguousQuery { query: String },
    #[error(transparent)]
    Store(#[from] ReviewStoreError),
}

impl ReviewStoreError {
    pub fn source_unavailable(path: &Path, reason: impl ToString) -> Self {
        Self::SourceUnavailable { path: path.to_path_buf(), reason: reason.to_string() }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::SourceUnavailable { path, .. } => {
                let file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Arquivo {file} não encontrado.")
            }
            Self::NotFound { name } => format!("Restaurante {name} não encontrado."),
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::NotFound { .. } => "not_found",
        }
    }
}

impl RatingError {
    pub fn user_message(&self) -> String {
        match self {
            Self::AmbiguousQuery { .. } => {
                "Nome do restaurante não identificado na consulta.".to_string()
            }
            Self::Store(error) => error.user_message(),
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::AmbiguousQuery { .. } => "ambiguous_query",
            Self::Store(error) => error.error_class(),
        }
    }
}
