//! Terminal User Interface (TUI) module
//!
//! Interactive console over the link API: a shorten screen and a directory
//! screen. The loop owns all state; API calls run on tokio tasks and report
//! back over a channel that is drained before every frame.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

mod app;
mod constants;
mod event_handler;
mod ui;

use crate::client::LinkApi;
use crate::config::get_config;
use crate::console::SystemClipboard;
use app::{ApiEvent, App};
use ui::ui;

/// Run the TUI application
pub async fn run_tui(api: Arc<dyn LinkApi>) -> color_eyre::Result<()> {
    let config = get_config();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(api, Box::new(SystemClipboard), tx, &config.ui);
    let tick = Duration::from_millis(config.ui.tick_ms);

    // 崩溃时先恢复终端，再交给 color-eyre 打印报告
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        previous_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("Console started against {}", config.api.base_url);
    app.request_refresh();
    let res = run_app(&mut terminal, &mut app, rx, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    info!("Console closed");
    Ok(())
}

/// Main application loop
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    mut events: UnboundedReceiver<ApiEvent>,
    tick: Duration,
) -> io::Result<()> {
    loop {
        // Apply finished requests in arrival order
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }
        app.tick(Instant::now());

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key, Instant::now())
        {
            return Ok(());
        }
    }
}
