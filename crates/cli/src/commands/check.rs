use clap::Args;
use hookgen_core::OperationKind;
use std::path::PathBuf;

use super::common::{ConfigArgs, load_operations};

/// Arguments of `hookgen check`.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Operation documents (JSON), each holding one operation or an array of them
    #[arg(long, short, num_args = 1.., required = true, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Run `hookgen check`, returning the process exit code.
///
/// Prints one line per operation telling which sides carry JSON fields.
pub fn run(args: CheckArgs) -> i32 {
    let report = args
        .config
        .resolve()
        .and_then(|config| {
            let operations = load_operations(&args.input)?;
            Ok(operations
                .iter()
                .map(|operation| {
                    if operation.kind == OperationKind::Subscription {
                        return format!("{}: skipped (subscription)", operation.name);
                    }
                    let usage = operation.json_usage(&config);
                    format!(
                        "{}: output {}, input {}",
                        operation.name,
                        describe(usage.output),
                        describe(usage.input)
                    )
                })
                .collect::<Vec<_>>())
        });

    match report {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn describe(has_json: bool) -> &'static str {
    if has_json { "json" } else { "plain" }
}
