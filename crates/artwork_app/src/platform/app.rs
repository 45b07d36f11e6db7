use std::io::{self, Stdout};

use anyhow::Context;
use artwork_core::{update, BrowserState, Msg};
use catalog_logging::{catalog_error, catalog_info};
use chrono::{DateTime, Local};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;

use super::cli::Args;
use super::effects::EffectRunner;
use super::settings::Settings;
use super::ui;
use super::ui::keys::KeyAction;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::resolve(&args)?;
    catalog_logging::initialize(
        settings.destination()?,
        settings.level_filter()?,
        &settings.log_file,
    );
    catalog_info!("Starting artwork browser with {:?}", settings);

    let runner =
        EffectRunner::new(settings.catalog_settings()).context("failed to start catalog engine")?;
    let state = BrowserState::with_page_size(settings.page_size()?);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = BrowserApp::new(state, runner).run(&mut terminal);
    let cleanup = cleanup_terminal(&mut terminal);

    if let Err(err) = &result {
        catalog_error!("Browser loop failed: {:#}", err);
    }
    result?;
    cleanup.context("failed to restore terminal")?;
    catalog_info!("Artwork browser exited");
    Ok(())
}

fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

struct BrowserApp {
    state: BrowserState,
    runner: EffectRunner,
    last_loaded: Option<DateTime<Local>>,
    should_quit: bool,
}

impl BrowserApp {
    fn new(state: BrowserState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            last_loaded: None,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut CrosstermTerminal) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Started);
        let mut force_draw = true;

        while !self.should_quit {
            if self.state.consume_dirty() || force_draw {
                let view = self.state.view();
                let updated_at = self
                    .last_loaded
                    .map(|at| at.format("%H:%M:%S").to_string());
                terminal.draw(|frame| ui::render::render(frame, &view, updated_at.as_deref()))?;
                force_draw = false;
            }

            if event::poll(ui::constants::TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match ui::keys::map_key(key, &self.state.view()) {
                            KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
                            KeyAction::Quit => self.should_quit = true,
                            KeyAction::Ignore => {}
                        }
                    }
                    Event::Resize(..) => force_draw = true,
                    _ => {}
                }
            }

            for msg in self.runner.poll() {
                self.dispatch_msg(msg);
            }
        }

        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let loaded_ok = matches!(&msg, Msg::PageLoaded { result: Ok(_), .. });
        let was_loading = self.state.is_loading();

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        // Only the latest generation clears loading, so this skips stale pages.
        if loaded_ok && was_loading && !self.state.is_loading() {
            self.last_loaded = Some(Local::now());
        }
        self.runner.run(effects);
    }
}
