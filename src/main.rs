use clap::Parser;
use modsel::cli::commands::{generate::GenerateCommand, CommandHandler};
use modsel::cli::Cli;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = GenerateCommand::from(&cli);
    debug!("Running {} with {:?}", command.name(), cli);

    if let Err(e) = command.execute() {
        println!("{}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so prompts and status lines on stdout stay clean
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::new(format!("modsel={}", level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
