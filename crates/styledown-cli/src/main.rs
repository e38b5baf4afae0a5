mod render;
mod viewer;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};
use styledown_config::Config;
use styledown_engine::{Converter, parsing::snapshot};

use viewer::Viewer;

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            Config::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let (dump, path) = match args.as_slice() {
        [_, flag, path] if flag == "--dump" => (true, PathBuf::from(path)),
        [_, path] if !path.starts_with('-') => (false, PathBuf::from(path)),
        _ => {
            eprintln!("Usage: {} [--dump] <file.md>", args[0]);
            process::exit(1);
        }
    };

    let config = load_config();
    let converter = match Converter::new(config.style) {
        Ok(converter) => converter,
        Err(e) => {
            log::warn!("{e}; using default style");
            Converter::default()
        }
    };
    let base_font = config.font.to_font_spec();

    let markdown = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = converter
        .convert(&markdown, &base_font)
        .with_context(|| format!("Failed to convert {}", path.display()))?;
    log::info!("{}: {} runs", path.display(), document.len());

    if dump {
        print!("{}", snapshot::render_document(&document));
        return Ok(());
    }

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut viewer = Viewer::new(title, document, base_font.size);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_down(viewer.page_rows()),
                KeyCode::PageUp => viewer.scroll_up(viewer.page_rows()),
                KeyCode::Home | KeyCode::Char('g') => viewer.go_to_top(),
                KeyCode::End | KeyCode::Char('G') => viewer.go_to_bottom(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, viewer: &mut Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take one cell on each side.
    let inner_width = chunks[0].width.saturating_sub(2);
    let inner_height = usize::from(chunks[0].height.saturating_sub(2));
    let lines = render::document_lines(&viewer.document, viewer.base_size, inner_width);
    viewer.set_layout(lines.len(), inner_height);

    let content = if lines.is_empty() {
        vec![Line::from("(empty document)")]
    } else {
        lines
    };
    let scroll = u16::try_from(viewer.scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(viewer.title.as_str()),
        )
        .scroll((scroll, 0));
    f.render_widget(paragraph, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/Home: Top | G/End: Bottom"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
