//! Development automation for the `papersync` workspace.
//!
//! Run with: `cargo xtask <task>`
//!
//! Output is meant for a developer's terminal, so plain `println!` is used
//! instead of structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};

mod features;

/// `(name, description)` for `cargo xtask help`.
const TASKS: &[(&str, &str)] = &[
    ("ci", "fmt, clippy, test and test-features in sequence"),
    ("fmt", "Check Rust formatting"),
    ("clippy", "Lint every target, warnings denied"),
    ("test", "Run the workspace test suite"),
    ("test-features", "Build papersync-infra with and without thumbnails"),
    ("audit", "Audit dependencies with cargo-audit"),
    ("help", "Show this message"),
];

fn main() -> ExitCode {
    let task = env::args().nth(1).unwrap_or_else(|| "help".to_string());

    let result = match task.as_str() {
        "ci" => ci(),
        "fmt" => fmt(),
        "clippy" => clippy(),
        "test" => test(),
        "test-features" => features::test_feature_matrix(),
        "audit" => audit(),
        "help" => {
            print_help();
            Ok(())
        }
        unknown => {
            print_help();
            Err(anyhow::anyhow!("unknown task '{unknown}'"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xtask {task} failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("papersync development tasks\n");
    println!("USAGE:\n    cargo xtask <TASK>\n");
    println!("TASKS:");
    for (name, description) in TASKS {
        println!("    {name:<14} {description}");
    }
}

/// Run `cargo <args>` and fail with `hint` on a non-zero exit.
fn cargo(args: &[&str], hint: &str) -> Result<()> {
    println!("$ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("could not spawn cargo {}", args[0]))?;
    if !status.success() {
        bail!("cargo {} failed; {hint}", args[0]);
    }
    Ok(())
}

fn fmt() -> Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "run 'cargo fmt --all' to fix")
}

fn clippy() -> Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        "see the lints above",
    )
}

fn test() -> Result<()> {
    cargo(&["test", "--workspace"], "see the failing tests above")
}

fn ci() -> Result<()> {
    let steps: [(&str, fn() -> Result<()>); 4] = [
        ("format", fmt),
        ("clippy", clippy),
        ("tests", test),
        ("feature matrix", features::test_feature_matrix),
    ];

    for (index, (label, step)) in steps.iter().enumerate() {
        println!("\n==> [{}/{}] {label}", index + 1, steps.len());
        step()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn audit() -> Result<()> {
    let installed = Command::new("cargo")
        .args(["audit", "--version"])
        .output()
        .is_ok_and(|output| output.status.success());
    if !installed {
        bail!("cargo-audit not found; install it with 'cargo install cargo-audit'");
    }
    cargo(&["audit"], "vulnerable dependencies reported above")
}
