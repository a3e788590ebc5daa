use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use groupwatch::{events, ui, App, Settings, StaticMetricResolver, Theme, ThemeChoice};

#[derive(Parser, Debug)]
#[command(name = "groupwatch")]
#[command(about = "Terminal dashboard for browsing and defining measurement groups")]
struct Args {
    /// Path to the settings file (optional)
    #[arg(short, long, default_value = "groupwatch.toml")]
    config: PathBuf,

    /// Color theme (overrides the settings file)
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Group to select on startup
    #[arg(short, long)]
    select: Option<String>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print groups and their resolved metrics as JSON and exit
    #[arg(short, long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let settings = Settings::load(&args.config)?;
    info!(config = %args.config.display(), "Loaded settings");

    let theme = if args.print {
        // Never query the terminal in non-interactive mode
        Theme::dark()
    } else {
        Theme::from_choice(args.theme.unwrap_or(settings.theme))
    };

    let mut app = App::new(Box::new(StaticMetricResolver::new()), theme)
        .with_status_duration(settings.status_duration());
    app.add_groups(&settings.groups);

    let initial = args.select.as_deref().unwrap_or(&settings.initial_group);
    if let Err(e) = app.select_initial_group(initial) {
        warn!(error = %e, "Initial group unavailable, keeping default selection");
    }

    if args.print {
        return print_dashboard(&app);
    }

    run_tui(app)
}

/// Send tracing output to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    info!("Starting dashboard");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll with a short timeout so expiring status messages get cleared
        if let Some(event) = events::poll_event(Duration::from_millis(250))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Print every group with the title and readings the dashboard would show
fn print_dashboard(app: &App) -> Result<()> {
    let groups: Vec<serde_json::Value> = app
        .groups()
        .iter()
        .map(|group| {
            serde_json::json!({
                "group": group,
                "title": app.resolve_title(group.id()),
                "metrics": app.resolve_metrics(group.id()),
            })
        })
        .collect();

    let export = serde_json::json!({
        "selected": app.selected_group_id(),
        "groups": groups,
    });

    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
