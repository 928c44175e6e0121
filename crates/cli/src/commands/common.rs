use clap::Args;
use hookgen_core::{Error, GeneratorConfig, OperationShape};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hookgen.toml";

/// Generator configuration flags shared by the subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Generator configuration file (defaults to ./hookgen.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scalar type whose values are JSON-encoded text (overrides the config file)
    #[arg(long, value_name = "SCALAR")]
    pub json_scalar: Option<String>,

    /// Omit the JSDoc header above each transformer
    #[arg(long)]
    pub no_docs: bool,
}

impl ConfigArgs {
    /// Load the configuration file, then apply command-line overrides.
    pub fn resolve(&self) -> Result<GeneratorConfig, String> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.is_file().then_some(default)
            }
        };

        let mut config = match path {
            Some(path) => GeneratorConfig::load(&path).map_err(|err| err.to_string())?,
            None => GeneratorConfig::default(),
        };

        if let Some(scalar) = &self.json_scalar {
            config.json_scalar.clone_from(scalar);
        }
        if self.no_docs {
            config.docs = false;
        }

        debug!(?config, "Resolved generator configuration.");
        Ok(config)
    }
}

/// Read every input document, keeping operations in input order.
pub fn load_operations(inputs: &[PathBuf]) -> Result<Vec<OperationShape>, String> {
    let mut operations = Vec::new();
    for input in inputs {
        operations.extend(load_document(input)?);
    }
    Ok(operations)
}

fn load_document(path: &Path) -> Result<Vec<OperationShape>, String> {
    OperationShape::load(path).map_err(|err| match err {
        Error::Io { .. } => err.to_string(),
        _ => format!("{}: {err}", path.display()),
    })
}
