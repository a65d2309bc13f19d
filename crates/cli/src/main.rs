mod cmd;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use prana_lib::BuildError;
use tracing_subscriber::EnvFilter;

use crate::cmd::{BuildArgs, cmd_build, cmd_info};
use crate::output::print_error;

/// prana - build freestanding kernel images with the go toolchain
#[derive(Parser)]
#[command(name = "prana")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Compile a kernel image (or test harness) for the kernel target
  Build(BuildArgs),

  /// Show the target and toolchain a build would use
  Info {
    /// Toolchain root to resolve the compiler from
    #[arg(long)]
    goroot: Option<std::path::PathBuf>,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Build(args) => cmd_build(args),
    Commands::Info { goroot } => {
      cmd_info(goroot.as_deref());
      Ok(())
    }
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      exit_code(&err)
    }
  }
}

/// A compiler that ran and failed hands its own exit code back to the shell.
fn exit_code(err: &anyhow::Error) -> ExitCode {
  err
    .downcast_ref::<BuildError>()
    .and_then(BuildError::exit_code)
    .and_then(|code| u8::try_from(code).ok())
    .filter(|code| *code != 0)
    .map(ExitCode::from)
    .unwrap_or(ExitCode::FAILURE)
}
