use clap::Parser;
use fs_core::{classify_bias, Config, CounterArticleSearch};
use fs_news::{NewsApiClient, StubNewsSearch};
use fs_scrapers::ArticleExtractor;
use fs_web::{AnalysisPipeline, AppState};
use std::sync::Arc;
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "flipside", author, version, about = "Analyze political news articles and find the other side", long_about = None)]
struct Cli {
    /// Model to use for inference. Available models: openai (default), deepseek, dummy
    #[arg(long, global = true)]
    model: Option<String>,
    /// Return a canned counter-article instead of querying NewsAPI
    #[arg(long, global = true)]
    stub_search: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = logging::DEFAULT_FILTER)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8000
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze a single article and print the result as JSON
    Analyze {
        url: String,
    },
    /// Print the bias label for a URL
    Bias {
        url: String,
    },
}

impl Cli {
    fn config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(model) = &self.model {
            overrides.push(("LLM_PROVIDER", model.clone()));
        }
        if let Commands::Serve { bind: Some(bind) } = &self.command {
            overrides.push(("FLIPSIDE_BIND", bind.clone()));
        }
        overrides
    }
}

fn build_pipeline(config: &Config, stub_search: bool) -> fs_core::Result<AnalysisPipeline> {
    let extractor = Arc::new(ArticleExtractor::new()?);
    let model = fs_inference::create_model(config)?;
    let search: Arc<dyn CounterArticleSearch> = if stub_search {
        Arc::new(StubNewsSearch::new())
    } else {
        Arc::new(NewsApiClient::new(config)?)
    };
    info!("📰 Counter-article search initialized (using {})", search.name());

    Ok(AnalysisPipeline::new(extractor, model, search).with_lookback_days(config.counter_lookback_days))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    if let Commands::Bias { url } = &cli.command {
        println!("{}", classify_bias(url));
        return Ok(());
    }

    let config = Config::from_env_with(&cli.config_overrides())?;
    let pipeline = build_pipeline(&config, cli.stub_search)?;

    match cli.command {
        Commands::Serve { .. } => {
            fs_web::serve(&config, AppState::new(pipeline)).await?;
        }
        Commands::Analyze { url } => {
            let response = pipeline.analyze(&url).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Bias { .. } => {}
    }

    Ok(())
}
