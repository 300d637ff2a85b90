use std::path::PathBuf;
use std::time::Instant;
use clap::Parser;
use log::info;
use typifier::config::{DEFAULT_MODEL_PATH, DEFAULT_TRAINING_DATA};
use typifier::{artifact, dataset, Pipeline, TrainerConfig};

/// Products printed after training as a quick sanity check
const SANITY_PRODUCTS: [&str; 17] = [
    "butter",
    "margarine",
    "baguette",
    "apfel",
    "shampoo",
    "tomaten",
    "ketchup",
    "cola",
    "müsli",
    "spaghetti",
    "zucker",
    "rindfleisch",
    "blumenkohl",
    "schokolade",
    "kaffee",
    "babyflasche",
    "fertigsuppe",
];

#[derive(Parser)]
#[command(author, version, about = "Train the product type pipeline", long_about = None)]
struct Args {
    /// CSV file with `product` and `type` columns
    #[arg(short, long, default_value = DEFAULT_TRAINING_DATA)]
    data: PathBuf,

    /// Where to write the trained artifact
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    output: PathBuf,

    /// Iteration limit for the logistic regression
    #[arg(long, default_value_t = 200)]
    max_iterations: u64,
}

fn main() -> anyhow::Result<()> {
    typifier::init_logger();
    let args = Args::parse();
    let start = Instant::now();

    let examples = dataset::load_csv(&args.data)?;
    info!("{} distinct types in training data", dataset::labels(&examples).len());

    let pipeline = Pipeline::builder()
        .with_config(TrainerConfig::default().with_max_iterations(args.max_iterations))
        .add_examples(examples)?
        .build()?;

    artifact::save(&pipeline, &args.output)?;
    println!("model saved");
    info!("Training finished in {:.2?}", start.elapsed());

    for product in SANITY_PRODUCTS {
        let predicted = pipeline.predict(product)?;
        println!("{} -> Type: {}", product, predicted);
    }

    Ok(())
}
