//! A scroll-driven terminal itinerary of Manchester's pubs and bars.
//!
//! Scroll with the keys or the mouse wheel: each stop slides in as it
//! reaches the centre, and drifts upward a beat later as it leaves.

mod app;
mod config;
mod constants;
mod core;
mod platform;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::constants::{DEFAULT_FRAME_TICK_MS, INDEX_POLL_INTERVAL};
use crate::core::venues::{self, MANCHESTER_PUB_CRAWL};
use crate::platform::{haptics::TerminalBell, link::SystemLinkOpener};
use crate::ui::{
    itinerary::ItineraryWidget,
    layout::{eligible_stops, AppLayout},
    popup::ControlsPopup,
    progress::ProgressDots,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll through a Manchester pub crawl")]
struct Cli {
    /// Show bundled image names instead of remote photo URLs.
    #[arg(long)]
    local_images: bool,

    /// Don't ring the bell when opening a link.
    #[arg(long)]
    no_haptics: bool,

    /// Write the effective configuration to disk and exit.
    #[arg(long)]
    write_config: bool,

    /// Frame interval in milliseconds.
    #[arg(
        long,
        default_value_t = DEFAULT_FRAME_TICK_MS,
        value_parser = clap::value_parser!(u64).range(8..=100)
    )]
    tick_ms: u64,
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let full = frame.area();
    let compact = full.width < state.config.compact_width;
    let layout = AppLayout::from_area(full, compact);
    state.set_viewport(layout.itinerary_area.height, full.width);
    state.progress_area = layout.progress_area;

    // ── header ─────────────────────────────────────────────────
    let header = Paragraph::new(vec![
        Line::styled(venues::TITLE, Theme::title_style()),
        Line::styled(venues::SUBTITLE, Theme::subtitle_style()),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::dot_style())
            .style(Theme::page_style()),
    );
    frame.render_widget(header, layout.header_area);

    // ── itinerary ──────────────────────────────────────────────
    let immediate = state.sampler.immediate();
    let damped = state.sampler.damped();
    let eligible = eligible_stops(immediate, state.viewport_rows, state.venues.len());
    let stops = state.params.get(immediate, damped, eligible, state.compact);
    let itinerary = ItineraryWidget::new(state.venues, stops, immediate)
        .compact(state.compact)
        .local_images(state.local_images);
    state.card_zones = itinerary.render_and_hit(layout.itinerary_area, frame.buffer_mut());

    if let Some(area) = layout.progress_area {
        frame.render_widget(
            ProgressDots {
                count: state.venues.len(),
                active: state.active_index(),
            },
            area,
        );
    }

    // ── status bar ─────────────────────────────────────────────
    let hint = format!(
        "{} | {:>3.0}%",
        state.config.status_bar_hint(),
        scroll_progress(state.scroll.position(), state.scroll.max()) * 100.0
    );
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    if state.show_help {
        frame.render_widget(ControlsPopup { config: &state.config }, full);
    }
}

/// Fraction of the itinerary scrolled past, in `[0, 1]`.
fn scroll_progress(position: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    (position / max).clamp(0.0, 1.0)
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; the UI owns stdout's alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    venues::validate(MANCHESTER_PUB_CRAWL)?;

    let mut user_config = config::AppConfig::load();
    if cli.no_haptics {
        user_config.haptics = false;
    }

    if cli.write_config {
        let path = user_config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let haptics = TerminalBell::new(stdout(), user_config.haptics);
    let mut state = AppState::new(
        MANCHESTER_PUB_CRAWL,
        user_config,
        Box::new(SystemLinkOpener),
        Box::new(haptics),
    );
    state.local_images = cli.local_images;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── timers ────────────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(cli.tick_ms));
    let mut index_poll = tokio::time::interval(INDEX_POLL_INTERVAL);
    index_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // ── event loop ────────────────────────────────────────────
    let outcome: Result<()> = async {
        loop {
            terminal.draw(|frame| draw(frame, &mut state))?;

            tokio::select! {
                biased;

                event = events.recv() => {
                    match event {
                        Some(AppEvent::Key(k)) => handler::handle_key(&mut state, k),
                        Some(AppEvent::Mouse(m)) => handler::handle_mouse(&mut state, m),
                        // The next draw picks up the new size.
                        Some(AppEvent::Resize(_, _)) => {}
                        Some(AppEvent::Frame) => {}
                        // The reader gave up on the terminal.
                        None => state.should_quit = true,
                    }
                }

                _ = index_poll.tick() => state.poll_index(),
            }

            // Every wake-up is a frame, so input never stalls the glide.
            state.frame(Instant::now());

            if state.should_quit {
                break;
            }
        }
        Ok(())
    }
    .await;

    // ── teardown ──────────────────────────────────────────────
    // Dropping `index_poll` cancels the tracker's timer.
    state.unmount();
    drop(index_poll);
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    outcome
}
