use clap::Parser;
use refprune::application::{prune_file, PruneOptions};
use refprune::cli::{format_report, logging, Cli};
use refprune::error::PruneError;
use refprune::infrastructure::{RuleConfig, WriteMode};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PruneError> {
    let config = match &cli.rules {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };

    let (path, rules) = config.resolve(cli.file, cli.exclude, cli.keep_marker)?;

    let options = PruneOptions {
        path,
        rules,
        dry_run: cli.dry_run,
        write_mode: if cli.no_atomic {
            WriteMode::Direct
        } else {
            WriteMode::Atomic
        },
    };

    let report = prune_file(&options)?;
    print!("{}", format_report(&report, cli.verbose));
    Ok(())
}
