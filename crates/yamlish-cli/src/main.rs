use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use yamlish::{Manifest, Metadata, Value};

#[derive(Parser, Debug)]
#[command(
    name = "yamlish-cli",
    about = "Render JSON as block-style YAML-ish text",
    version
)]
struct Args {
    /// Wrap the input as the spec of a manifest with this kind
    /// (requires --api-version and --name)
    #[arg(long)]
    kind: Option<String>,

    /// apiVersion for the generated manifest
    #[arg(long)]
    api_version: Option<String>,

    /// metadata.name for the generated manifest
    #[arg(long)]
    name: Option<String>,

    /// metadata.namespace for the generated manifest
    #[arg(long)]
    namespace: Option<String>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let json: serde_json::Value = serde_json::from_str(&buf)?;
    let value = Value::from_json(&json)?;

    let out = match args.kind {
        Some(kind) => {
            let api_version = args
                .api_version
                .context("--api-version is required with --kind")?;
            let name = args.name.context("--name is required with --kind")?;
            let mut metadata = Metadata::new(name);
            if let Some(namespace) = args.namespace {
                metadata = metadata.namespace(namespace);
            }
            Manifest::new(api_version, kind, metadata, value).to_yaml()
        }
        None => yamlish::encode(&value),
    };
    println!("{}", out);

    Ok(())
}
