use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueHint};
use g::Result;
use g::commands::completions::Shell;
use g::commands::{clone, completions, create, list, resume, sh};
use g::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "g")]
#[command(about = "Clone, find and open projects laid out as <root>/<host>/<owner>/<name>")]
#[command(version)]
#[command(override_usage = "g [OPTIONS] CMD [ARGS]")]
pub struct Cli {
    /// Project root (defaults to ~/Projects)
    #[arg(long, global = true, env = "G_PROJECT_ROOT", value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,
    /// Increase diagnostic output (-v, -vv, -vvv); G_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a repository into <root>/<host>/<owner>/<name>
    Clone {
        /// Remote URL, e.g. git@github.com:owner/name.git
        #[arg(value_hint = ValueHint::Url)]
        url: String,
    },
    /// Open a shell in the project matching [host/][owner/]name
    Sh {
        /// Project query; the name matches as a substring
        #[arg(value_hint = ValueHint::Other)]
        query: String,
    },
    /// Create a repository on GitHub, then clone it
    Create {
        /// Repository name
        #[arg(value_hint = ValueHint::Other)]
        name: String,
    },
    /// List projects matching [host/][owner/]name (glob syntax)
    List {
        /// Project query; all projects when omitted
        #[arg(value_hint = ValueHint::Other)]
        query: Option<String>,
    },
    /// Pick one of the most recently opened projects and open a shell in it
    Resume,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(&e),
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let Some(command) = cli.command else {
        usage();
        return Ok(1);
    };

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        completions::write_completions(shell, &mut cmd, &mut std::io::stdout());
        return Ok(0);
    }

    let config = Config::load(cli.root)?;

    match command {
        Commands::Clone { url } => clone::clone_project(&config, &url),
        Commands::Sh { query } => sh::open_shell(&config, &query),
        Commands::Create { name } => create::create_project(&config, &name),
        Commands::List { query } => {
            list::list_projects(&config, query.as_deref())?;
            Ok(0)
        }
        Commands::Resume => resume::resume_project(&config),
        Commands::Completions { .. } => Ok(0),
    }
}

fn parse_failure(e: &clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            usage();
            ExitCode::FAILURE
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}

fn usage() {
    eprintln!("Usage: g [OPTIONS] CMD [ARGS]");
    eprintln!("Help : g -h");
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("G_LOG").unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
