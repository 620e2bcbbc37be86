use anyhow::Context;
use clap::Parser;
use shoptrend::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Predict a customer's subscription status from a few key details
#[derive(Parser, Debug)]
#[command(name = "shoptrend")]
#[command(about = "Subscription-status predictor for shopping-trends data", long_about = None)]
struct Args {
    /// Path to the fitted artifact directory
    #[arg(short, long, default_value = "./artifacts")]
    artifact_dir: PathBuf,

    /// Customer age
    #[arg(long, default_value_t = 30.0)]
    age: f32,

    /// Purchase amount in USD
    #[arg(long, default_value_t = 50.0)]
    amount: f32,

    /// Customer gender (falls back to the model's default when omitted)
    #[arg(long)]
    gender: Option<String>,

    /// Purchase category
    #[arg(long)]
    category: Option<String>,

    /// Payment method for this purchase
    #[arg(long)]
    payment_method: Option<String>,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting shoptrend v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifact directory: {:?}", args.artifact_dir);

    // Fail fast: no prediction path is reachable unless every artifact
    // loads cleanly.
    let bundle = ArtifactBundle::load(&args.artifact_dir).with_context(|| {
        format!(
            "failed to load model artifacts from {}",
            args.artifact_dir.display()
        )
    })?;
    let predictor = bundle
        .into_predictor(PredictorConfig::default())
        .context("artifacts are inconsistent with each other")?;

    let collected = CollectedFields::minimal();
    debug!(fields = ?collected.iter().collect::<Vec<_>>(), "user-collected fields");

    let mut inputs = FeatureRecord::new();
    inputs.insert("Age", args.age);
    inputs.insert("Purchase Amount (USD)", args.amount);
    if let Some(gender) = args.gender {
        inputs.insert("Gender", gender);
    }
    if let Some(category) = args.category {
        inputs.insert("Category", category);
    }
    if let Some(payment_method) = args.payment_method {
        inputs.insert("Payment Method", payment_method);
    }

    let response = predictor.respond(&inputs);

    if args.json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        match &response {
            PredictionResponse::Success(prediction) => {
                let confidence = prediction
                    .confidence
                    .map(|c| format!(" — Confidence: {c:.2}"))
                    .unwrap_or_default();
                println!("Prediction: {}{confidence}", prediction.label);
            }
            PredictionResponse::Failure { message, .. } => {
                eprintln!("Prediction failed: {message}");
            }
        }
    }

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
