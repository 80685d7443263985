use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cuberoll")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// fmt, clippy, tests and docs, stopping at the first failure
    Check,
    /// cargo fmt --check
    Fmt,
    /// clippy with warnings denied
    Clippy,
    /// Workspace tests
    Test,
    /// Rustdoc for the workspace
    Doc,
    /// Run the kernel frame-step bench
    Bench,
    /// Drive the CLI end to end: roll table plus a scripted square loop
    Smoke,
}

const FMT: &[&str] = &["fmt", "--all", "--", "--check"];
const CLIPPY: &[&str] = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"];
const TEST: &[&str] = &["test", "--workspace"];
const DOC: &[&str] = &["doc", "--workspace", "--no-deps"];
const BENCH: &[&str] = &["bench", "-p", "cuberoll-kernel", "--bench", "bench_roll_loop"];
const SMOKE_TABLE: &[&str] = &["run", "-q", "-p", "cuberoll-cli", "--", "table"];
const SMOKE_SIMULATE: &[&str] = &[
    "run", "-q", "-p", "cuberoll-cli", "--", "simulate", "--keys", "w.d.s.a.", "--dt", "0.05",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for args in [FMT, CLIPPY, TEST, DOC] {
                cargo(args)?;
            }
        }
        Commands::Fmt => cargo(FMT)?,
        Commands::Clippy => cargo(CLIPPY)?,
        Commands::Test => cargo(TEST)?,
        Commands::Doc => cargo(DOC)?,
        Commands::Bench => cargo(BENCH)?,
        Commands::Smoke => {
            cargo(SMOKE_TABLE)?;
            cargo(SMOKE_SIMULATE)?;
        }
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let line = args.join(" ");
    println!("==> cargo {line}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("cargo {line} failed ({status})");
    }
    Ok(())
}
