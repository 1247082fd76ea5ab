use thiserror::Error;

/// Errors returned by catalog lookups and table checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown filetype: {0:?}")]
    UnknownFiletype(String),

    #[error("Unknown CRS: {0:?}")]
    UnknownCrs(String),

    #[error("Invalid EPSG code {0:?}, expected EPSG:<digits>")]
    InvalidEpsg(String),

    #[error("Invalid catalog table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
