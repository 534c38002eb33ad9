use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use ppwd::{Environment, TargetLength};

/// Print the current working directory, shortened to fit in a shell prompt
///
/// If the path is not shorter than LENGTH, $HOME is replaced with ~ and then directories are
/// abbreviated to their first letter, starting from the root, until it fits. The final directory
/// is always printed in full.
///
/// A negative LENGTH compresses to its absolute value even if the path already fits.
///
/// Example: `ppwd -15` in /home/alice/projects/rust/ppwd prints ~/p/rust/ppwd
#[derive(Debug, Parser)]
#[clap(version, verbatim_doc_comment)]
struct Args {
    #[clap(short, long, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    /// Parse LENGTH like C's atoi; anything without leading digits becomes 0
    #[clap(long)]
    lenient: bool,

    /// Use the given home directory instead of $HOME
    #[clap(long)]
    home: Option<PathBuf>,

    /// Do not replace the home directory with ~
    #[clap(short = 'T', long, conflicts_with = "home")]
    no_tilde: bool,

    /// Shorten the given path instead of the current working directory
    #[clap(long)]
    path: Option<PathBuf>,

    /// Maximum length of the output; negative to always compress
    ///
    /// If not given, the path is printed in full.
    #[clap(allow_hyphen_values = true, allow_negative_numbers = true)]
    length: Option<String>,
}

fn main() -> eyre::Result<()> {
    let use_color = std::io::stderr().is_terminal();
    if use_color {
        color_eyre::install()?;
    }

    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .with_env_var("PPWD_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .init();

    let target = match &args.length {
        None => TargetLength::default(),
        Some(raw) if args.lenient => TargetLength::parse_lenient(raw),
        Some(raw) => TargetLength::parse(raw)?,
    };
    tracing::debug!("Target: {target:?}");

    // An explicit --path means the working directory isn't needed, which matters when it has been
    // deleted out from under us.
    let mut env = match &args.path {
        Some(path) => Environment::new(path.clone(), std::env::var_os("HOME")),
        None => Environment::from_process()?,
    };
    if let Some(home) = &args.home {
        env = env.with_home_dir(Some(home.clone()));
    }
    if args.no_tilde {
        env = env.with_home_dir(None::<PathBuf>);
    }

    let mut line = env.compress(target);
    line.push(b'\n');
    std::io::stdout().lock().write_all(&line)?;

    Ok(())
}
