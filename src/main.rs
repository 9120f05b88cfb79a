use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;

use omnibox::app::{App, AppStore};
use omnibox::classify::dispatch;
use omnibox::config::{self, Config, ConfigResult};
use omnibox::controller::SearchBox;
use omnibox::history::storage::default_data_dir;
use omnibox::history::{FileStore, HistoryStore, MemoryStore};
use omnibox::remote::{HttpRemoteSource, MockRemoteSource, RemoteSuggestionSource};
use omnibox::suggest::corpus::{self, DEMO_HISTORY};
use omnibox::suggest::{MatchRanker, OrchestratorSettings, SuggestionClient, SuggestionOrchestrator};

/// Longest the UI waits for input before checking for suggestions
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Budget for the one-time download of augmentation titles
const TITLES_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Search box with ranked autocomplete, recent searches and instant answers
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.config/omnibox/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip remote augmentation entirely
    #[arg(long)]
    offline: bool,

    /// Quiet period before a lookup runs, in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Newline-separated suggestion corpus (blank lines and # comments ignored)
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Print suggestions for QUERY and exit
    #[arg(long, value_name = "QUERY", conflicts_with = "classify")]
    suggest: Option<String>,

    /// Print the instant answer for QUERY and exit
    #[arg(long, value_name = "QUERY")]
    classify: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logger();

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(ms) = args.debounce_ms {
        config.suggestions.debounce_ms = ms;
    }
    if args.offline {
        config.remote.enabled = false;
    }

    if let Some(query) = &args.classify {
        return print_classification(query);
    }

    let corpus = match &args.corpus {
        Some(path) => corpus::load_corpus_from_path(path)
            .wrap_err_with(|| format!("Failed to read corpus {}", path.display()))?,
        None => corpus::default_corpus(),
    };

    if let Some(query) = &args.suggest {
        return print_suggestions(query, corpus, &config);
    }

    let app = build_app(corpus, &config, warning);

    // Initialize terminal (raw mode, alternate screen)
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app
            .search_box
            .time_until_tick(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));
        app.handle_events(timeout)?;
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn build_app(corpus: Vec<String>, config: &Config, warning: Option<String>) -> App {
    let lucky_picks = corpus.clone();
    let client = SuggestionClient::spawn(build_orchestrator(corpus, config));

    let store: AppStore = match default_data_dir() {
        Some(dir) if config.history.persist => Box::new(FileStore::new(dir)),
        _ => Box::new(MemoryStore::new()),
    };
    let mut history = HistoryStore::load(store);
    history.seed_if_empty(DEMO_HISTORY);

    let debounce = Duration::from_millis(config.suggestions.debounce_ms);
    let search_box = SearchBox::new(client, history, debounce).with_lucky_picks(lucky_picks);

    let mut app = App::new(search_box, Instant::now());
    app.notice = warning;
    app
}

fn build_orchestrator(
    corpus: Vec<String>,
    config: &Config,
) -> SuggestionOrchestrator<Box<dyn RemoteSuggestionSource>> {
    let settings = OrchestratorSettings {
        cache_capacity: config.suggestions.cache_capacity,
        remote_timeout: config.remote.timeout(),
    };
    SuggestionOrchestrator::new(MatchRanker::new(corpus), remote_source(config), settings)
}

fn remote_source(config: &Config) -> Box<dyn RemoteSuggestionSource> {
    if !config.remote.enabled {
        return Box::new(MockRemoteSource::offline());
    }

    match HttpRemoteSource::new(
        config.remote.augmentation_url.clone(),
        TITLES_DOWNLOAD_TIMEOUT,
        config.remote.latency(),
    ) {
        Ok(source) => Box::new(source),
        Err(e) => {
            log::warn!("Remote suggestions disabled: {}", e);
            Box::new(MockRemoteSource::offline())
        }
    }
}

fn print_classification(query: &str) -> Result<()> {
    let outcome = dispatch(query, chrono::Local::now());
    println!("{}", outcome.kind);
    println!("{}", outcome.title());
    for line in outcome.summary_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn print_suggestions(query: &str, corpus: Vec<String>, config: &Config) -> Result<()> {
    let mut orchestrator = build_orchestrator(corpus, config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start async runtime")?;

    let suggestions = runtime.block_on(orchestrator.get_suggestions(query));
    for suggestion in suggestions.iter() {
        println!("{}", suggestion.text());
    }
    Ok(())
}

/// Debug builds log to a file so the TUI stays clean
#[cfg(debug_assertions)]
fn init_logger() {
    use std::fs::{self, OpenOptions};

    let Some(dir) = dirs::cache_dir().map(|d| d.join("omnibox")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("omnibox.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
