use std::process::Command;

use anyhow::{Context, Result};

/// `(label, extra cargo args)` for every supported build of `papersync-infra`.
const FEATURE_COMBINATIONS: &[(&str, &[&str])] = &[
    ("default", &[]),
    ("no thumbnails", &["--no-default-features"]),
];

/// Check that all required feature combinations compile successfully.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} papersync-infra feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, (label, args)) in FEATURE_COMBINATIONS.iter().enumerate() {
        println!(
            "\n[{}/{}] cargo check -p papersync-infra {}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            args.join(" ")
        );

        let status = Command::new("cargo")
            .args(["check", "-p", "papersync-infra", "--all-targets"])
            .args(*args)
            .status()
            .with_context(|| format!("Failed to run cargo check for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed to compile");
        }

        println!("✅ Features '{label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
