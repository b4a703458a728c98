//! sectra: section navigation for static documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sectra::{app_state, config, formats, input, ui};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between smooth-scroll animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "sectra")]
#[command(about = "Section navigation for static documents", long_about = None)]
struct Args {
    /// Document to view
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Animate jumps to sections instead of repositioning instantly
    #[arg(long)]
    smooth_scroll: bool,

    /// Print the navigation model as JSON and exit
    #[arg(long)]
    outline: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.smooth_scroll {
        cfg.smooth_scroll = true;
    }

    let content = input::load_document(&args.path)?;
    let format = formats::markdown::MarkdownFormat;
    let sections = input::extract_sections(&content, &format)?;

    if sections.is_empty() {
        eprintln!("No sections found in document");
        return Ok(());
    }

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let app = app_state::AppState::startup(lines, sections, &cfg, 0);

    if args.outline {
        let json = serde_json::to_string_pretty(&app.nav_entries).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    run_tui(app)
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // While a smooth scroll is in flight, advance it between keystrokes
        // instead of blocking on input.
        let next = if app.pending_scroll.is_some() {
            if event::poll(FRAME_INTERVAL)? {
                Some(event::read()?)
            } else {
                app.tick();
                None
            }
        } else {
            Some(event::read()?)
        };

        if let Some(Event::Key(key)) = next {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up => app.select_prev(),
                KeyCode::Down => app.select_next(),
                KeyCode::Enter => app.activate_selected(),
                KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Char('k') => app.scroll_up(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::Home => app.to_top(),
                KeyCode::End => app.to_bottom(),
                KeyCode::Esc => app.cancel_scroll(),
                _ => {}
            }
        }
    }
}
