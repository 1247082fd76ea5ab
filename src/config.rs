use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::OnceLock;

use geocatalog::{filetype_options, EpsgCode};

#[derive(Parser, Debug, Clone)]
#[command(name = "geocatalog")]
#[command(version)]
#[command(about = "Inspect the geospatial output file types and CRS options")]
#[command(long_about = "\
geocatalog - Output format and coordinate reference system catalog

Lists the file types a converter can write and the coordinate reference
systems it can project into, in the order a picker should show them.

EXAMPLES:
    # List output file types
    geocatalog filetypes

    # CRS options as JSON, default first
    geocatalog --format json crs

    # A single file type
    geocatalog show gpkg

    # Resolve a CRS by EPSG code
    geocatalog resolve-crs EPSG:4326

    # Using environment variables
    export GEOCATALOG_FORMAT=json
    geocatalog filetypes
")]
pub struct Config {
    /// Output format
    ///
    /// `text` prints aligned columns, `json` prints the tables as JSON objects.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "GEOCATALOG_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all output file types
    Filetypes,

    /// List CRS options in display order
    Crs,

    /// Show a single output file type
    Show {
        /// File type key
        #[arg(value_enum)]
        key: FiletypeChoice,
    },

    /// Look up a CRS option by EPSG code (e.g. EPSG:4326)
    ResolveCrs {
        /// EPSG code in the form EPSG:<digits>
        #[arg(value_name = "EPSG")]
        value: EpsgCode,
    },

    /// Check the catalog tables for consistency
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A file type key accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiletypeChoice(pub &'static str);

static FILETYPE_CHOICE_VARIANTS: OnceLock<Vec<FiletypeChoice>> = OnceLock::new();

impl ValueEnum for FiletypeChoice {
    fn value_variants<'a>() -> &'a [Self] {
        FILETYPE_CHOICE_VARIANTS
            .get_or_init(|| filetype_options().keys().map(FiletypeChoice).collect())
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        filetype_options()
            .get(self.0)
            .map(|option| PossibleValue::new(self.0).help(option.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filetype_choices_follow_catalog_order() {
        let keys: Vec<&str> = FiletypeChoice::value_variants().iter().map(|c| c.0).collect();
        let expected: Vec<&str> = filetype_options().keys().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_parse_show() {
        let config = Config::try_parse_from(["geocatalog", "show", "cesiumtiles"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        match config.command {
            Command::Show { key } => assert_eq!(key, FiletypeChoice("cesiumtiles")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_filetype() {
        assert!(Config::try_parse_from(["geocatalog", "show", "geotiff"]).is_err());
    }

    #[test]
    fn test_parse_resolve_crs() {
        let config =
            Config::try_parse_from(["geocatalog", "resolve-crs", "EPSG:3857", "--format", "json"])
                .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        match config.command {
            Command::ResolveCrs { value } => assert_eq!(value, EpsgCode::new(3857)),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Config::try_parse_from(["geocatalog", "resolve-crs", "4326"]).is_err());
    }
}
