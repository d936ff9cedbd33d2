//! footfall — visit-tracking agent entrypoint.

mod autostart;
mod cli;
mod environment;
mod logging;
mod reqwest_http;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ff_config::Options;
use ff_types::ports::env::VisitEnvironment;
use ff_types::ports::http::HttpClient;
use ff_types::Attributes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init_logging()?;

    let http: Arc<dyn HttpClient> =
        Arc::new(reqwest_http::ReqwestHttpClient::new().context("build http client")?);
    let env: Arc<dyn VisitEnvironment> = Arc::new(environment::ProcessEnvironment);

    match args.command {
        cli::Commands::Run(run_args) => run(run_args, http, env).await,
        cli::Commands::Action(action_args) => action(action_args, http, env).await,
    }
}

fn resolve_options(doc: Option<&str>) -> Options {
    match doc {
        Some(doc) => Options::resolve_str(doc),
        None => Options::default(),
    }
}

async fn run(
    args: cli::RunArgs,
    http: Arc<dyn HttpClient>,
    env: Arc<dyn VisitEnvironment>,
) -> anyhow::Result<()> {
    // Explicit flags win; otherwise fall back to the env-driven autostart.
    let handle = match (args.server, args.domain_id) {
        (Some(server), Some(domain_id)) => {
            let options = resolve_options(args.options.as_deref());
            let tracker = ff_core::create(&server, options, http, env);
            if tracker.is_noop() {
                tracing::info!("tracker is in the no-op form, nothing will be sent");
            }
            Some(tracker.record(&domain_id, None).await?)
        }
        _ => autostart::auto_detect_and_start(http, env).await,
    };

    let Some(handle) = handle else {
        return Ok(());
    };
    if let Some(record_id) = handle.record_id() {
        tracing::info!(record_id = %record_id, "visit record created");
    }

    tokio::signal::ctrl_c().await.context("wait for ctrl-c")?;
    handle.stop();
    Ok(())
}

async fn action(
    args: cli::ActionArgs,
    http: Arc<dyn HttpClient>,
    env: Arc<dyn VisitEnvironment>,
) -> anyhow::Result<()> {
    let server = args
        .server
        .or_else(|| std::env::var("FF_SERVER").ok())
        .context("--server or FF_SERVER required")?;
    let attrs: Attributes =
        serde_json::from_str(&args.attrs).context("attrs must be a JSON object")?;

    let options = resolve_options(args.options.as_deref());
    let tracker = ff_core::create(&server, options, http, env);
    let handle = tracker.action(&args.event_id, attrs).await?;

    if let Some(action_id) = handle.action_id() {
        tracing::info!(action_id = %action_id, "action created");
        println!("{action_id}");
    }
    Ok(())
}
