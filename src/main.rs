use env_logger::{Builder, Env};
use log::LevelFilter;

use fractal_toolkit::{PpmFilePresenter, RunCliCommand, parse_args_from};

/// `RUST_LOG` is honoured, defaulting to `info`; `--verbosity` overrides both.
fn init_logging(verbosity: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = verbosity {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args_from(std::env::args_os()).unwrap_or_else(|err| err.exit());

    init_logging(args.verbosity);

    RunCliCommand::new(PpmFilePresenter::new()).execute(args.command)?;

    Ok(())
}
