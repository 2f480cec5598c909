use anyhow::{Context, Result};
use clap::{Args, Parser};
use log::info;

use wp_salts::{
    output::{render, Format},
    salt::{wp_salts, OsRandom},
};

/// Generate WordPress-style secret keys and salts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct SaltsArgs {
    #[command(flatten)]
    format: OutputFormat,

    /// Salt length; values below 64 are raised to 64.
    #[arg(short = 'l', long = "length", env = "WP_SALTS_LENGTH")]
    length: Option<usize>,

    /// Secret names to generate. Defaults to the eight WordPress keys and salts.
    keys: Vec<String>,
}

#[derive(Args, Clone, Debug)]
#[group(required = false, multiple = false)]
struct OutputFormat {
    /// Print as a JSON object.
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Print as YAML.
    #[arg(short = 'y', long = "yaml")]
    yaml: bool,

    /// Print as PHP `define()` statements.
    #[arg(short = 'p', long = "php")]
    php: bool,

    /// Print as dotenv lines.
    #[arg(short = 'e', long = "env")]
    env: bool,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat { json: true, .. } => Format::Json,
            OutputFormat { yaml: true, .. } => Format::Yaml,
            OutputFormat { php: true, .. } => Format::Php,
            OutputFormat { env: true, .. } => Format::DotEnv,
            OutputFormat { .. } => Format::Table,
        }
    }
}

/// Entry point of program.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = SaltsArgs::parse();
    let format = Format::from(args.format);
    info!("writing salts as {:?}", format);

    let salts = wp_salts(&OsRandom, args.keys.as_slice(), args.length)
        .with_context(|| "failed to generate salts")?;
    let rendered = render(&salts, format).with_context(|| "failed to format salts")?;
    print!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wp_salts::output::Format;

    use super::SaltsArgs;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        SaltsArgs::command().debug_assert()
    }

    #[test]
    fn parses_keys_and_length() {
        let args = SaltsArgs::parse_from(["wpsalts", "--php", "-l", "80", "ONE", "TWO"]);
        assert_eq!(args.keys, ["ONE", "TWO"]);
        assert_eq!(args.length, Some(80));
        assert_eq!(Format::from(args.format), Format::Php);
    }

    #[test]
    fn table_by_default() {
        let args = SaltsArgs::parse_from(["wpsalts"]);
        assert!(args.keys.is_empty());
        assert_eq!(Format::from(args.format), Format::Table);
    }

    #[test]
    fn formats_are_exclusive() {
        assert!(SaltsArgs::try_parse_from(["wpsalts", "--json", "--yaml"]).is_err());
    }

    #[test]
    fn length_must_be_numeric() {
        assert!(SaltsArgs::try_parse_from(["wpsalts", "--length", "long"]).is_err());
    }
}
