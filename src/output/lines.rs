use std::fmt::{Display, Formatter};

use super::OutputError;
use crate::salt::SaltMap;

/// PHP single-quoted literal: only `\` and `'` need escaping.
fn php_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `define( 'NAME', 'salt' );` per entry, names padded so the salts line up.
#[derive(Debug, Clone, Copy)]
pub struct PhpDefines<'a>(pub &'a SaltMap);

impl Display for PhpDefines<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .0
            .keys()
            .map(|name| format!("{},", php_quoted(name)))
            .collect();
        let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        for (name, salt) in names.iter().zip(self.0.values()) {
            writeln!(f, "define( {:<width$} {} );", name, php_quoted(salt))?;
        }
        Ok(())
    }
}

/// `NAME='salt'` per entry. Only shell-style identifiers are accepted as names.
#[derive(Debug, Clone, Copy)]
pub struct DotEnvLines<'a>(&'a SaltMap);

impl<'a> DotEnvLines<'a> {
    pub fn new(salts: &'a SaltMap) -> Result<Self, OutputError> {
        if let Some(bad) = salts.keys().find(|name| !is_env_name(name)) {
            Err(OutputError::InvalidEnvName(bad.clone()))?;
        }
        Ok(DotEnvLines(salts))
    }
}

fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Display for DotEnvLines<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Salts never contain `'`, so single quotes keep `$` and `#` literal.
        for (name, salt) in self.0 {
            writeln!(f, "{}='{}'", name, salt)?;
        }
        Ok(())
    }
}
