use thiserror::Error;

use crate::salt::SaltMap;

pub use self::{
    lines::{DotEnvLines, PhpDefines},
    table::SaltTable,
};

mod lines;
mod table;

/// How a salt map is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Table,
    Json,
    Yaml,
    Php,
    DotEnv,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("'{0}' is not a valid environment variable name")]
    InvalidEnvName(String),
}

/// Render `salts` in `format`. Key order is kept and values are written verbatim.
pub fn render(salts: &SaltMap, format: Format) -> Result<String, OutputError> {
    Ok(match format {
        Format::Table => SaltTable(salts).to_string(),
        Format::Json => serde_json::to_string_pretty(salts)? + "\n",
        Format::Yaml => serde_yaml::to_string(salts)?,
        Format::Php => PhpDefines(salts).to_string(),
        Format::DotEnv => DotEnvLines::new(salts)?.to_string(),
    })
}
