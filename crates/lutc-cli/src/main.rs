//! LUTC command-line driver.
//!
//! Reads a JSON manifest (or falls back to the built-in firmware catalogue),
//! synthesizes the selected tables, compiles them into the header /
//! implementation pair, writes both files, and logs a SHA-256 digest of each
//! document so build reproducibility can be audited from the log alone.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sha2::{Digest, Sha256};

use lutc_codegen::{compile, CompileOptions};
use lutc_tables::Manifest;

#[derive(Debug, Parser)]
#[command(name = "lutc", version, about = "Compile DSP lookup tables to C++ data declarations")]
struct Args {
    /// JSON manifest selecting tables and parameters. Defaults to the
    /// built-in catalogue.
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory the header/implementation pair is written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Override the manifest's aggregating struct name.
    #[arg(long)]
    struct_name: Option<String>,

    /// Override the manifest's output file stem.
    #[arg(long)]
    file_stem: Option<String>,
}

fn load_manifest(args: &Args) -> anyhow::Result<Manifest> {
    let mut manifest = match &args.manifest {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading manifest `{}`", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing manifest `{}`", path.display()))?
        }
        None => Manifest::default_catalogue(),
    };
    if let Some(struct_name) = &args.struct_name {
        manifest.struct_name = struct_name.clone();
    }
    if let Some(file_stem) = &args.file_stem {
        manifest.file_stem = file_stem.clone();
    }
    Ok(manifest)
}

fn sha256_hex(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let manifest = load_manifest(&args)?;
    log::info!("synthesizing {} tables", manifest.tables.len());
    let dataset = manifest.synthesize()?;

    let options = CompileOptions::new(&manifest.struct_name, &manifest.file_stem);
    let compiled = compile(&dataset, &options)?;
    let (header_path, impl_path) = compiled.write_to(&args.out_dir)?;

    log::info!(
        "{}: sha256 {}",
        header_path.display(),
        sha256_hex(&compiled.header)
    );
    log::info!(
        "{}: sha256 {}",
        impl_path.display(),
        sha256_hex(&compiled.implementation)
    );
    Ok(())
}
