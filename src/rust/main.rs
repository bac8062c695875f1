use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use medscreen::{schema_for, ArtifactStore, DiseaseCategory, Dispatcher};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Disease category to screen for (diabetes, heart, parkinsons, lungs, thyroid)
    category: String,

    /// Clinical parameters as field=value pairs, e.g. Glucose=120
    values: Vec<String>,

    /// Directory holding the model artifacts (defaults to MEDSCREEN_MODELS
    /// or the platform data directory)
    #[arg(short, long)]
    models_dir: Option<PathBuf>,

    /// Print the category's required fields and exit
    #[arg(short, long)]
    schema: bool,
}

fn parse_values(pairs: &[String]) -> anyhow::Result<HashMap<String, f64>> {
    let mut values = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .with_context(|| format!("expected field=value, got '{pair}'"))?;
        let value: f64 = raw
            .parse()
            .with_context(|| format!("value for '{name}' is not numeric: '{raw}'"))?;
        values.insert(name.to_string(), value);
    }
    Ok(values)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.schema {
        let category: DiseaseCategory = args.category.parse()?;
        println!("{}", category.title());
        for spec in schema_for(category) {
            println!("  {:<24} {}", spec.name, spec.help);
        }
        return Ok(());
    }

    let models_dir = args
        .models_dir
        .unwrap_or_else(ArtifactStore::default_models_dir);
    info!("Loading model artifacts from {models_dir:?}");

    // A broken artifact set must refuse to start rather than serve a
    // partial registry.
    let store = match ArtifactStore::load_all(&models_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => bail!("refusing to start: {e}"),
    };
    let dispatcher = Dispatcher::new(store);

    let values = parse_values(&args.values)?;
    let verdict = dispatcher.predict(&args.category, &values)?;

    info!(
        "{}: raw label {}",
        verdict.category.title(),
        verdict.raw_label
    );
    println!("{}", verdict.display_text);

    Ok(())
}
