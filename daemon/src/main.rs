//! heartbeat-watch: keeps a heartbeat page's display slots up to date from
//! the server's live stats feed, and exposes the formatters on the command line.

mod sinks;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use heartbeat_page::{Page, Slot};
use heartbeat_types::Timestamp;
use heartbeat_utils::{format_absolute_date, init_logging, HumanTime, LogFormat};
use heartbeat_websocket::{parse_page_url, ShutdownController, SinkKind, StatsFeed, WatchConfig};

#[derive(Parser)]
#[command(name = "heartbeat-watch", about = "Follow a heartbeat server's live stats")]
struct Cli {
    /// Page URL to follow. "/" is the index page, any other path the stats page.
    #[arg(long, env = "HEARTBEAT_PAGE_URL")]
    page_url: Option<String>,

    /// Feed path on the page's origin.
    #[arg(long, env = "HEARTBEAT_FEED_PATH")]
    feed_path: Option<String>,

    /// Where slot values go: "stdout" or "log".
    #[arg(long, env = "HEARTBEAT_SINK")]
    sink: Option<SinkKind>,

    /// Only show these slots (comma-separated keys, e.g. "uptime,total-beats").
    #[arg(long, env = "HEARTBEAT_SLOTS", value_delimiter = ',')]
    slots: Vec<Slot>,

    /// Text for zero-length durations.
    #[arg(long, env = "HEARTBEAT_ZERO_DURATION_TEXT")]
    zero_duration_text: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "HEARTBEAT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "HEARTBEAT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "HEARTBEAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Subscribe to the stats feed and show updates (default).
    Watch,
    /// Format a count of seconds as a duration.
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Format a Unix timestamp as a UTC date.
    Date {
        #[arg(allow_negative_numbers = true)]
        timestamp: f64,
    },
    /// Describe a signed offset from now in seconds (negative is in the past).
    Humanize {
        #[arg(allow_negative_numbers = true, required_unless_present = "at")]
        offset: Option<i64>,
        /// Describe this Unix timestamp relative to the current time instead.
        #[arg(long, allow_negative_numbers = true, conflicts_with = "offset")]
        at: Option<f64>,
        /// List every unit instead of one approximate period.
        #[arg(long)]
        precise: bool,
    },
    /// Print the effective configuration as TOML.
    PrintConfig,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<WatchConfig> {
        let mut config = match &self.config {
            Some(path) => WatchConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => WatchConfig::default(),
        };
        if let Some(page_url) = &self.page_url {
            config.page_url = page_url.clone();
        }
        if let Some(feed_path) = &self.feed_path {
            config.feed_path = feed_path.clone();
        }
        if let Some(sink) = self.sink {
            config.sink = sink;
        }
        if !self.slots.is_empty() {
            config.slots = Some(self.slots.clone());
        }
        if let Some(text) = &self.zero_duration_text {
            config.zero_duration_text = text.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(config).await?,
        Command::Duration { seconds } => {
            println!("{}", config.duration_formatter().format(seconds)?);
        }
        Command::Date { timestamp } => {
            println!("{}", format_absolute_date(Timestamp::from_secs_f64(timestamp)?)?);
        }
        Command::Humanize { offset, at, precise } => {
            let time = match at {
                Some(at) => HumanTime::from_now(Timestamp::from_secs_f64(at)?),
                None => HumanTime::from_secs(offset.unwrap_or_default()),
            };
            if precise {
                println!("{time:#}");
            } else {
                println!("{time}");
            }
        }
        Command::PrintConfig => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

async fn watch(config: WatchConfig) -> anyhow::Result<()> {
    init_logging(config.log_format, &config.log_level);
    config.validate()?;

    let page = Page::from_path(parse_page_url(&config.page_url)?.path());
    let slots = sinks::bind_slots(&config, page);
    let feed = StatsFeed::for_page(
        &config.page_url,
        &config.feed_path,
        slots,
        config.duration_formatter(),
    )?;
    tracing::info!(
        "Watching {:?} page at {} ({} slots shown)",
        page,
        feed.url(),
        feed.renderer().slots().len(),
    );

    let controller = Arc::new(ShutdownController::new());
    let shutdown = controller.subscribe();
    let signals = {
        let controller = controller.clone();
        tokio::spawn(async move {
            if let Err(e) = controller.wait_for_signal().await {
                tracing::warn!("cannot listen for shutdown signals: {e}");
            }
        })
    };

    let summary = feed.run(shutdown).await;
    signals.abort();
    let summary = summary?;
    tracing::info!(
        "Feed closed after {} snapshots ({} shown, {} skipped)",
        summary.received,
        summary.rendered,
        summary.skipped,
    );
    Ok(())
}
