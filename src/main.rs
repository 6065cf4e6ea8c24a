//! Journey CLI - walk a learner through an ordered sequence of modules

use clap::Parser;
use journey::cli::{Cli, Commands};
use journey::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so --json output stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> journey::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => journey::cli::commands::init::run(cwd, force).await,
        Some(Commands::Modules { json }) => journey::cli::commands::modules::run(cwd, json).await,
        Some(Commands::Status { json }) => journey::cli::commands::status::run(cwd, json).await,
        Some(Commands::Begin { name }) => journey::cli::commands::begin::run(cwd, &name).await,
        Some(Commands::Select { id }) => journey::cli::commands::select::run(cwd, id).await,
        Some(Commands::Complete { id }) => journey::cli::commands::complete::run(cwd, id).await,
        Some(Commands::Finish) => journey::cli::commands::finish::run(cwd).await,
        Some(Commands::Restart) => journey::cli::commands::restart::run(cwd).await,
        Some(Commands::Content { id, json }) => {
            journey::cli::commands::content::run(cwd, id, json).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
