//! apodview: the last three weeks of NASA's Astronomy Picture of the Day
//!
//! Usage:
//!   apodview                 - Open the gallery window
//!   apodview list [query]    - Print the cards (optionally searched) to stdout
//!   apodview list --full ... - Same, with full explanations
//!   apodview range           - Print the date range that would be requested
//!   apodview help            - Show help

mod app;
mod backend;
mod config;
mod error;
mod gallery;
mod terminal;
mod ui;

use app::ApodView;
use backend::api::ApodClient;
use config::Config;
use gallery::bootstrap;
use gallery::date_range::DateRange;
use gallery::render::Renderer;
use iced::{window, Size};
use std::env;
use std::process::ExitCode;
use terminal::{ArgsQuery, TerminalDisplay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        return handle_cli_command(&args[1], &args[2..]);
    }

    match start_gallery() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn handle_cli_command(cmd: &str, rest: &[String]) -> ExitCode {
    match cmd {
        "list" | "ls" => list(rest),
        "range" => {
            let range = DateRange::current();
            println!("{} .. {}", range.start_date, range.end_date);
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            println!("apodview - NASA Astronomy Picture of the Day gallery\n");
            println!("Usage: apodview [command]\n");
            println!("Commands:");
            println!("  (none)                  Open the gallery window");
            println!("  list [--full] [query]   Print pictures, filtered by title");
            println!("  range                   Print the requested date range");
            println!("  help                    Show this help message");
            println!("\nSet {} to your api.nasa.gov key.", config::API_KEY_VAR);
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'apodview help' for usage");
            ExitCode::FAILURE
        }
    }
}

/// Fetch once and print cards; a query narrows them like the search box does
fn list(rest: &[String]) -> ExitCode {
    let expand = rest.iter().any(|a| a == "--full");
    let query = rest
        .iter()
        .filter(|a| a.as_str() != "--full")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = ApodClient::new(&config);
    let mut display = TerminalDisplay::new(std::io::stdout().lock(), expand);
    let loaded = rt.block_on(bootstrap::bootstrap(
        &client,
        Renderer::for_today(),
        &mut display,
        &mut ArgsQuery,
    ));

    let status = match loaded {
        Ok(search) => {
            tracing::debug!("{} picture(s) searchable", search.valid().len());
            if !query.trim().is_empty() {
                search.on_input(&query, &mut display);
            }
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    };

    if let Err(e) = display.finish() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    status
}

fn start_gallery() -> iced::Result {
    tracing::info!("Starting apodview...");
    let config = Config::load();

    iced::application("Astronomy Picture of the Day", ApodView::update, ApodView::view)
        .subscription(ApodView::subscription)
        .theme(ApodView::theme)
        .window(window::Settings {
            size: Size::new(900.0, 760.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || ApodView::new(config))
}
