use clap::Parser;
use serp_rewrite::config::{AnalysisConfig, SerpApiConfig};
use serp_rewrite::fetchers::WebSource;
use serp_rewrite::pipeline::UrlAnalysisPipeline;
use serp_rewrite::results::AnalysisTarget;
use serp_rewrite::{export, input, report};
use std::error::Error;

mod args;
use args::{Args, convert_device};

/// Cells longer than this are shortened in the terminal view (the CSV keeps them whole)
const MAX_CELL_CHARS: usize = 100;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    // Credentials are checked before anything else is read
    let serp_config = SerpApiConfig::from_env()?;

    let mut config = match &args.config_file {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(device) = args.device {
        config.device = convert_device(device);
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    let urls = input::read_urls(&args.input)?;
    let targets = AnalysisTarget::from_urls(urls, config.device);
    let source = WebSource::new(&config, serp_config)?;
    let pipeline = UrlAnalysisPipeline::new(source).with_limit(config.limit);

    ::log::info!(
        "Starting analysis of {} URLs for {} (limit {})",
        targets.len(),
        config.device,
        pipeline.limit()
    );

    let start_time = std::time::Instant::now();
    let report = pipeline
        .run(&targets, |progress| println!("{}", progress))
        .await;
    ::log::info!(
        "Analyzed {} URLs in {:.2} seconds",
        report.rows.len() + report.warnings.len(),
        start_time.elapsed().as_secs_f64()
    );

    for warning in &report.warnings {
        eprintln!("{}", warning);
    }

    let table = report::to_table(&report);
    println!();
    print!("{}", report::render_plain(&table, MAX_CELL_CHARS));

    if !args.no_export {
        let path = export::export_to_dir(&table, &args.output_dir)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}
