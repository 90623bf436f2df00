//! dm entrypoint.
//!
//! Startup order matters: arguments, config, logging and the document load
//! all happen on the normal screen so a failure can be reported plainly. Only
//! then is raw mode entered, and the `TerminalGuard` owned by the runtime puts
//! the terminal back on every way out of the loop.
use anyhow::Result;
use clap::Parser;
use core_actions::{FsPersistence, Persistence, handle_input};
use core_config::{Config, load_from};
use core_events::InputEvent;
use core_input::{CrosstermInput, InputSource};
use core_model::EditorModel;
use core_render::RenderOptions;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, FALLBACK_SIZE, TerminalBackend, TerminalGuard, enter_guard};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "dm.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "dm", version, about = "Minimal terminal text editor")]
struct Args {
    /// File to edit (UTF-8 text). Created on first save when it does not exist.
    pub path: PathBuf,
    /// Configuration file path (overrides discovery of `dm.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, log_dir: &Path) {
        let log_dir = if std::fs::create_dir_all(log_dir).is_ok() {
            log_dir
        } else {
            Path::new(".")
        };
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Load the document named on the command line. A missing file starts an
    /// empty buffer; any other failure is fatal.
    fn load_model(path: &Path, config: &Config, store: &dyn Persistence) -> Result<EditorModel> {
        let loaded = store.load(path)?;
        info!(
            target: "runtime.startup",
            file = %path.display(),
            is_new = loaded.is_new,
            line_count = loaded.buffer.line_count(),
            "document_loaded"
        );
        let mut state = EditorState::new(loaded.buffer, path);
        state.message_ttl = config.message_ttl();
        if loaded.is_new {
            state.set_ephemeral_default(format!("New file: {}", path.display()));
        }
        Ok(EditorModel::new(state))
    }
}

struct EditorRuntime<'a, I: InputSource> {
    model: EditorModel,
    config: Config,
    input: I,
    store: FsPersistence,
    terminal: TerminalGuard<'a, CrosstermBackend>,
}

impl<'a, I: InputSource> EditorRuntime<'a, I> {
    fn new(
        model: EditorModel,
        config: Config,
        input: I,
        terminal: TerminalGuard<'a, CrosstermBackend>,
    ) -> Self {
        Self {
            model,
            config,
            input,
            store: FsPersistence,
            terminal,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            line_numbers: self.config.line_numbers(),
            gutter_min_digits: self.config.gutter_min_digits(),
            status_line: self.config.status_rows() > 0,
        }
    }

    fn terminal_size(&self) -> (u16, u16) {
        match self.terminal.backend().size() {
            Ok(size) => size,
            Err(e) => {
                warn!(target: "runtime", error = %e, "terminal_size_fallback");
                FALLBACK_SIZE
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let (w, h) = self.terminal_size();
        debug!(target: "runtime", width = w, height = h, "render");
        let opts = self.render_options();
        core_render::render(&self.model, &opts, (w, h))
    }

    /// Blocking read -> dispatch -> render loop. Returns when the session quits
    /// or a terminal I/O error occurs.
    fn run(&mut self) -> Result<()> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();
        let mut needs_render = true;
        loop {
            if self.model.state_mut().tick_ephemeral() {
                needs_render = true;
            }
            if needs_render {
                self.render()?;
            }
            let event: InputEvent = self.input.next_event()?;
            let result = handle_input(&event, &mut self.model, &self.store);
            if result.quit {
                info!(target: "runtime.shutdown", dirty = self.model.state().dirty, "quit");
                return Ok(());
            }
            needs_render = result.dirty;
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_from(args.config.clone())?;
    let mut startup = AppStartup::new();
    startup.configure_logging(&config.log_dir());
    AppStartup::install_panic_hook();
    info!(
        target: "runtime",
        config_override = args.config.is_some(),
        config_found = config.raw.is_some(),
        "startup"
    );

    let model = AppStartup::load_model(&args.path, &config, &FsPersistence)?;

    let mut backend = CrosstermBackend::new();
    if let Err(e) = backend.set_title(&format!("dm - {}", args.path.display())) {
        warn!(target: "runtime", error = %e, "set_title_failed");
    }
    let guard = enter_guard(&mut backend)?;
    let mut runtime = EditorRuntime::new(model, config, CrosstermInput::new(), guard);
    let outcome = runtime.run();
    if let Err(e) = &outcome {
        error!(target: "runtime", error = %e, "fatal");
    }
    outcome
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The terminal guard has been dropped by now; this lands on the
            // normal screen.
            eprintln!("dm: {e:#}");
            ExitCode::from(1)
        }
    }
}
