use clap::Parser;
use color_season::config::Configuration;
use color_season::error::AppError;
use color_season::pipeline::orchestration::{
    AnalysisPipeline, AnalysisRequest, ClassificationService,
};
use color_season::pipeline::types::ManualSignal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::{ServiceBuilder, ServiceExt};
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "color-season", about = "Classify portraits into twelve color seasons")]
struct Cli {
    /// Portrait images to analyze
    photos: Vec<PathBuf>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Analyze photos even when they fail the quality gate
    #[arg(long)]
    force: bool,
    #[arg(long)]
    no_lighting_correction: bool,
    /// Hand-entered signal as JSON, e.g. {"skin_l":60,"skin_b":-4,"chroma":45,"hair_l":15,"eye_l":25}
    #[arg(long, value_name = "JSON")]
    manual: Option<String>,
    /// Deterministic synthetic signal for each key
    #[arg(long, value_name = "KEY")]
    synthetic: Vec<String>,
    /// Print photo-taking guidelines and exit
    #[arg(long)]
    guidelines: bool,
}

fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut configuration = Configuration::load(cli.config.as_deref())?;
    if cli.no_lighting_correction {
        configuration.extraction.apply_lighting_correction = false;
    }
    init_logging(&configuration.log_level);

    if cli.guidelines {
        let guidelines = AnalysisPipeline::user_guidelines();
        println!("{}", serde_json::to_string_pretty(&guidelines)?);
        return Ok(());
    }

    let mut requests = Vec::new();
    if let Some(manual) = &cli.manual {
        let signal: ManualSignal = serde_json::from_str(manual)?;
        requests.push(("manual".to_string(), AnalysisRequest::Manual(signal)));
    }
    for key in &cli.synthetic {
        requests.push((
            format!("synthetic:{key}"),
            AnalysisRequest::Synthetic { key: key.clone() },
        ));
    }
    for path in &cli.photos {
        requests.push((
            path.display().to_string(),
            AnalysisRequest::Path {
                path: path.clone(),
                force: cli.force,
            },
        ));
    }
    if requests.is_empty() {
        error!("nothing to analyze, pass photo paths, --manual or --synthetic");
        return Ok(());
    }

    let workers = configuration.batch.workers.max(1);
    let service = ServiceBuilder::new()
        .concurrency_limit(workers)
        .timeout(Duration::from_millis(configuration.batch.request_timeout_ms))
        .service(ClassificationService::new(Arc::new(AnalysisPipeline::new(
            &configuration,
        ))));

    info!(count = requests.len(), workers, "starting analysis");
    let results = futures::future::join_all(requests.into_iter().map(|(input, request)| {
        let service = service.clone();
        async move { (input, service.oneshot(request).await) }
    }))
    .await;

    for (input, result) in results {
        match result {
            Ok(outcome) => {
                let line = serde_json::json!({ "input": input, "outcome": outcome });
                println!("{line}");
            }
            Err(err) => error!(%input, error = %err, "analysis failed"),
        }
    }
    Ok(())
}
