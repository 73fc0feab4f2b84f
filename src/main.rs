use anyhow::{Context, Result};
use clap::Parser;
use lastgreen::{cli, report, LastGreenError};

fn main() {
    // Parse command line arguments; usage errors exit with 2
    let args = cli::Args::parse();

    // Initialize logging
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<LastGreenError>()
            .map_or(1, LastGreenError::exit_code);
        std::process::exit(code);
    }
}

fn run(args: cli::Args) -> Result<()> {
    let start_path = match args.repo_path {
        Some(ref repo) => repo.clone(),
        None => std::env::current_dir().context("can't get current directory")?,
    };

    let build = args.build().context("missing build command")?;

    let repo = lastgreen::discover_repository(&start_path)?;
    log::debug!("Found {} repository at: {}", repo.kind(), repo.root().display());

    let result = lastgreen::find_last_passing(&repo, build)?;

    if args.json {
        println!("{}", report::json_report(repo.kind(), repo.root(), &result)?);
    } else {
        println!("{}", report::summary_line(&result));
    }

    Ok(())
}
