//! bihmap - A terminal map of Bosnia and Herzegovina's points of interest.

use anyhow::{Context, Result};
use bihmap::app::App;
use bihmap::config::{Config, IconTable, PriorityNames, DOCUMENT_TITLE};
use bihmap::data::{MapData, Priority};
use bihmap::input::{handle_key, handle_mouse, Action};
use bihmap::{summary, ui};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bihmap")]
#[command(about = "A terminal map of Bosnia and Herzegovina's points of interest", long_about = None)]
struct Args {
    /// Data directory holding the CSV tables and the shape files
    #[arg(default_value = "BiH/data")]
    data_dir: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start with every priority toggle active
    #[arg(long)]
    show_all: bool,

    /// Target file of the save tool
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print a summary of the data and exit
    #[arg(long)]
    summary: bool,

    /// Marker hit box half-width, in columns
    #[arg(long, default_value_t = 1)]
    hit_cols: u16,

    /// Marker hit box half-height, in rows
    #[arg(long, default_value_t = 1)]
    hit_rows: u16,

    /// Marker glyph for an icon name, as NAME=GLYPH (repeatable)
    #[arg(long = "icon", value_parser = parse_icon)]
    icons: Vec<(String, char)>,

    /// Display name for a priority, as PRIORITY=NAME (repeatable)
    #[arg(long = "priority-name", value_parser = parse_priority_name)]
    priority_names: Vec<(Priority, String)>,
}

fn parse_icon(s: &str) -> std::result::Result<(String, char), String> {
    IconTable::parse_pair(s).ok_or_else(|| format!("expected NAME=GLYPH, got '{}'", s))
}

fn parse_priority_name(s: &str) -> std::result::Result<(Priority, String), String> {
    PriorityNames::parse_pair(s).ok_or_else(|| format!("expected PRIORITY=NAME, got '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting bihmap");
    }

    // Validate path
    if !args.data_dir.is_dir() {
        eprintln!("Error: Data directory not found: {}", args.data_dir.display());
        std::process::exit(1);
    }

    let config = build_config(&args);
    let data = MapData::load(&args.data_dir)
        .with_context(|| format!("Failed to load map data from {}", args.data_dir.display()))?;

    if args.summary {
        print!("{}", summary::summarize(&data, &config.priority_names));
        return Ok(());
    }

    let app = App::new(data, config, args.export.clone())
        .context("Failed to project map data")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(DOCUMENT_TITLE)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("bihmap exited");
    }

    Ok(())
}

fn build_config(args: &Args) -> Config {
    let mut config = Config {
        show_all: args.show_all,
        ..Config::default()
    };
    config.map.hit_cols = args.hit_cols;
    config.map.hit_rows = args.hit_rows;
    for (name, glyph) in &args.icons {
        config.icons.insert(name.clone(), *glyph);
    }
    for (priority, name) in &args.priority_names {
        config.priority_names.insert(*priority, name.clone());
    }
    config
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut app, key) == Action::Quit {
                        return Ok(());
                    }
                },
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                _ => {},
            }
        }
    }
}
