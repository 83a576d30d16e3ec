use clap::Parser;
use rum::cli::Cli;
use rum::{loader, machine};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.default_log_level())
        .parse_env("RUST_LOG")
        .init();

    if let Err(err) = run(&cli) {
        log::error!("{err}");
        eprintln!("rum: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), rum::UmError> {
    let program = loader::boot(&cli.program)?;
    machine::run(program)
}
