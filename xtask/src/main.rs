//! Build automation tasks for the led4-counter project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

const BINARIES: [&str; 2] = ["led4_counter", "led4_clock"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for led4-counter project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, docs, and a cross build of the binaries
    CheckAll,
    /// Cross-build the library and binaries for a Raspberry Pi
    Build {
        #[arg(long, default_value = "pi4")]
        board: Board,
        #[arg(long)]
        release: bool,
    },
    /// Cross-build one binary in release mode and print where it landed
    Bin {
        /// Binary name (led4_counter or led4_clock)
        name: String,
        #[arg(long, default_value = "pi4")]
        board: Board,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    /// Pi Zero / Pi 1 (ARMv6, 32-bit)
    Pi0,
    /// Pi 2 / Pi 3 running a 32-bit OS
    Pi3,
    /// Pi 3 / 4 / 5 running a 64-bit OS
    Pi4,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pi0 => write!(f, "pi0"),
            Board::Pi3 => write!(f, "pi3"),
            Board::Pi4 => write!(f, "pi4"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pi0 => "arm-unknown-linux-gnueabihf",
            Board::Pi3 => "armv7-unknown-linux-gnueabihf",
            Board::Pi4 => "aarch64-unknown-linux-gnu",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board, release } => build_all(board, release),
        Commands::Bin { name, board } => build_bin(&name, board),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests (no_std core)...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["test", "--package", "led4-counter"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running host tests (std)...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "test",
        "--package",
        "led4-counter",
        "--features",
        "std",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--package",
        "led4-counter",
        "--no-deps",
        "--features",
        "rpi",
    ])) {
        return ExitCode::FAILURE;
    }

    let board = Board::Pi4;
    println!(
        "\n{}",
        format!("==> Cross-building binaries for {board} ({})...", board.target()).cyan()
    );
    if !cross_build(board, false) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_all(board: Board, release: bool) -> ExitCode {
    if cross_build(board, release) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cross_build(board: Board, release: bool) -> bool {
    let workspace_root = workspace_root();
    let target = board.target();
    println!(
        "{}",
        format!("Building library and binaries for {board} ({target})").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root).args([
        "build",
        "--package",
        "led4-counter",
        "--bins",
        "--target",
        target,
        "--features",
        "rpi",
    ]);
    if release {
        cmd.arg("--release");
    }

    run_command(&mut cmd)
}

fn build_bin(name: &str, board: Board) -> ExitCode {
    if !BINARIES.contains(&name) {
        eprintln!(
            "{}",
            format!("Unknown binary '{name}'; expected one of {BINARIES:?}").red()
        );
        return ExitCode::FAILURE;
    }

    let workspace_root = workspace_root();
    let target = board.target();
    println!("{}", format!("Building '{name}' for {board}").cyan());
    println!("  Target: {}", target.bright_black());

    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--package",
        "led4-counter",
        "--bin",
        name,
        "--release",
        "--target",
        target,
        "--features",
        "rpi",
    ])) {
        return ExitCode::FAILURE;
    }

    let bin_path = format!("target/{target}/release/{name}");
    println!("{}", format!("Binary: {bin_path}").green().bold());
    println!(
        "{}",
        "Copy it to the Pi and run it as a user in the `gpio` group.".bright_black()
    );
    ExitCode::SUCCESS
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
