use clap::Args;
use hookgen_core::generate_transformers;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use super::common::{ConfigArgs, load_operations};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by hookgen. Do not edit.\n";

/// Arguments of `hookgen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Operation documents (JSON), each holding one operation or an array of them
    #[arg(long, short, num_args = 1.., required = true, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output .ts file (stdout if omitted)
    #[arg(long, short, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Run `hookgen generate`, returning the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    match generate(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<(), String> {
    let config = args.config.resolve()?;
    let operations = load_operations(&args.input)?;

    // Operations share nothing but read-only inputs; collect keeps input order.
    let sections: Vec<String> = operations
        .par_iter()
        .filter_map(|operation| generate_transformers(operation, &config))
        .map(|transformers| transformers.render())
        .collect();

    info!(
        operations = operations.len(),
        generated = sections.len(),
        "Generated JSON transformers."
    );

    let mut ts_code = String::from(GENERATED_HEADER);
    for section in &sections {
        ts_code.push('\n');
        ts_code.push_str(section);
    }

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|err| {
                    format!("Failed to create {}: {err}", parent.display())
                })?;
            }
            fs::write(path, &ts_code)
                .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
            debug!(
                out = %path.display(),
                ts_code_len = ts_code.len(),
                "Wrote transformers."
            );
        }
        None => print!("{ts_code}"),
    }

    Ok(())
}
