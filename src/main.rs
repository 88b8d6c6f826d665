use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

mod app;
mod cli;
mod layout;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Cli::parse();
    let config = args.load_config()?;
    let filter = args.filter()?;

    // One-shot modes print to stdout and skip the TUI entirely
    if let Some(partial) = args.suggest.as_deref() {
        cli::run_suggest(partial, &config, &filter);
        return Ok(());
    }
    if let Some(term) = args.explain.as_deref() {
        return cli::run_explain(term, &config, &filter);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, App::new(config, filter, args.term));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoid duplicates)
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
