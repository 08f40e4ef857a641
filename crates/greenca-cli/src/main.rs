use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use greenca_cli::cli::{Cli, Commands};
use greenca_cli::commands::{self, predict::PredictArgs, EXIT_FATAL, EXIT_REQUEST_FAILED};
use greenca_cli::App;
use greenca_core::errors::GreencaError;
use greenca_core::tracing::init_tracing;
use greenca_predict::diagnostics::render_failure;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match dispatch(cli, &root) {
        Ok(code) => commands::exit_code(code),
        Err(err) => commands::exit_code(report(&err)),
    }
}

fn dispatch(cli: Cli, root: &std::path::Path) -> anyhow::Result<u8> {
    let config = App::load_config(&cli.global, root)?;
    init_tracing(&config.observability);
    let app = App::from_config(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Predict {
            assignments,
            values,
            interactive,
            json,
        } => {
            // Load before collecting input: a missing artifact ends the
            // session before the user fills in the form.
            let predictor = app.predictor()?;
            let args = PredictArgs {
                assignments,
                values_file: values,
                interactive,
                json,
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            commands::predict::execute(&app.collector(), &predictor, &args, &mut input, &mut out)
        }
        Commands::Schema { toml } => commands::schema::execute(&app.schema, toml, &mut out),
        Commands::Verify => commands::verify::execute(&app.config.model, &app.schema, &mut out),
    }
}

/// Print a failure and pick the exit code: startup failures are fatal,
/// anything else only failed this request.
fn report(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<GreencaError>() {
        Some(e) => {
            eprintln!("{}", render_failure(e, None));
            if e.is_fatal() {
                EXIT_FATAL
            } else {
                EXIT_REQUEST_FAILED
            }
        }
        None => {
            eprintln!("error: {err:#}");
            EXIT_FATAL
        }
    }
}
