use anyhow::Result;
use clap::Parser;
use console::Term;
use news_pulse::cli::Cli;
use news_pulse::news::Fetcher;
use news_pulse::open_url::open_page;
use news_pulse::{config, session};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Keep the interactive menu readable unless RUST_LOG asks for more
    let default_level = if args.once { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let mut cfg = config::load(args.feeds.clone())?;
    args.apply(&mut cfg);
    info!(feeds = cfg.feeds.len(), output = %cfg.output.display(), "configuration loaded");

    let fetcher = Fetcher::new(&cfg.http)?;

    if args.once {
        let page = session::render_to_file(&fetcher, &cfg).await?;
        println!(
            "{} of {} stories written to {}",
            page.records.len(),
            page.total,
            cfg.output.display()
        );
        if !args.no_open {
            if let Err(err) = open_page(&cfg.output) {
                warn!(error = %err, "could not open page");
            }
        }
        return Ok(());
    }

    // Clear terminal at startup for a clean UI
    let _ = Term::stdout().clear_screen();
    session::run(cfg, &fetcher, !args.no_open).await
}
