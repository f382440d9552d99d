//! Build script for the catalog CLI.
//!
//! Copies `.env.example` into the local data directory next to where the
//! binary looks for its `.env` file:
//! - Linux: `~/.local/share/catalogcli/.env.example`
//! - macOS: `~/Library/Application Support/catalogcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/catalogcli/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=config");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("catalogcli");

    if !template.is_file() {
        println!("cargo:warning=.env.example not found at {}", template.display());
        return Ok(());
    }

    // never overwrite a template the user may have edited in place
    let target = out_dir.join(".env.example");
    if target.exists() {
        return Ok(());
    }

    if let Err(e) = fs::create_dir_all(&out_dir).and_then(|_| fs::copy(&template, &target)) {
        println!("cargo:warning=could not copy .env.example to {}: {}", target.display(), e);
    }
    Ok(())
}
