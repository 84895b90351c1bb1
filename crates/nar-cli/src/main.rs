/// NAR command-line tool — look at the token stream of a Nix archive.
///
/// # Command overview
///
/// ```text
/// nar <COMMAND> [OPTIONS]
///
/// Commands:
///   tokens     Print every string token in a NAR file
///   expect     Check that a NAR file starts with the given literals
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log every decoded token to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, malformed token, etc.)   |
///
/// Reports go to stdout, logs and errors to stderr.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_expect;
mod cmd_tokens;
mod report;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Inspect the token stream of a Nix archive (NAR).
#[derive(Parser)]
#[command(name = "nar", version, about = "NAR token stream inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every decoded token to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print every string token in a NAR file.
    Tokens(TokensArgs),
    /// Check that a NAR file starts with the given literals.
    Expect(ExpectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `nar tokens`.
///
/// Reads string tokens one after another until the file ends on a token
/// boundary, or until the first malformed token.
///
/// ```text
/// ┌─────────────┬───────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                                │
/// ├─────────────┼───────────────────────────────────────────────────────┤
/// │ --max-len N │ Reject tokens longer than N bytes                     │
/// │ --count N   │ Stop after N tokens                                   │
/// │ --show-hex  │ Hex dump each token's content, 16 bytes per line      │
/// └─────────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct TokensArgs {
    /// Path to the `.nar` file.
    pub file: PathBuf,

    /// Largest token length accepted, in bytes.
    #[arg(long)]
    pub max_len: Option<u64>,

    /// Stop after this many tokens.
    #[arg(long)]
    pub count: Option<usize>,

    /// Show a hex dump of each token's content.
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `nar expect`.
///
/// Matches the leading tokens of the file against the given literals, in
/// order. With no literals, checks for the `nix-archive-1` magic.
#[derive(clap::Args)]
pub struct ExpectArgs {
    /// Path to the `.nar` file.
    pub file: PathBuf,

    /// Literals the file must start with.
    #[arg(default_values_t = [nar_wire::NAR_MAGIC.to_string()])]
    pub literals: Vec<String>,

    /// Largest token length accepted, in bytes.
    #[arg(long)]
    pub max_len: Option<u64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Tokens(args) => cmd_tokens::run(&args),
        Commands::Expect(args) => cmd_expect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "nar_wire=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
