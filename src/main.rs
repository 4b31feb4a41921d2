//! CLI entry point for batch kite fleet optimization

use clap::Parser;
use kiteparade::io::cli::{BatchProcessor, Cli};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> kiteparade::Result<()> {
    let cli = Cli::parse();

    // Logging is diagnostics only; a terminal without a logger still gets results
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
