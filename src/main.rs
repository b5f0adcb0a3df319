mod api;
mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod output;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info};

use api::{HttpMovieApi, MovieApi, Request};
use app::action::map_key_to_action;
use app::{AppState, Route};
use cli::CliArgs;
use event::{AppEvent, EventHandler};
use model::MovieId;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();
    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: CliArgs) -> error::Result<i32> {
    if !args.is_interactive() {
        logging::init_stderr();
    }
    let api: Arc<dyn MovieApi> = Arc::new(HttpMovieApi::new(args.api_config()?)?);

    if let Some(id) = &args.show {
        return Ok(print_detail(&*api, MovieId::parse(id)).await);
    }
    if args.list {
        return Ok(print_list(&*api).await);
    }

    let route = args.initial_route()?;
    logging::init_file(&args.log_path())?;
    if let Err(e) = run_tui(api, route).await {
        ratatui::restore();
        return Err(e);
    }
    Ok(0)
}

async fn print_list(api: &dyn MovieApi) -> i32 {
    let mut state = AppState::new();
    let request = state.list.load();
    state.handle_response(api::execute(api, request).await);

    match output::format_list(&state.list.movies) {
        Ok(text) => {
            print!("{}", text);
            0
        }
        Err(message) => {
            eprintln!("{}", message);
            1
        }
    }
}

async fn print_detail(api: &dyn MovieApi, id: MovieId) -> i32 {
    let mut state = AppState::new();
    if let Some(request) = state.navigate(Route::Detail(id)) {
        state.handle_response(api::execute(api, request).await);
    }
    let Some(view) = &state.detail else {
        return 1;
    };

    match output::format_detail(&view.state) {
        Ok(text) => {
            print!("{}", text);
            0
        }
        Err((text, reason)) => {
            print!("{}", text);
            eprintln!("Error: {}", reason);
            1
        }
    }
}

async fn run_tui(api: Arc<dyn MovieApi>, route: Route) -> error::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut state = AppState::new();

    // Initialize terminal
    let mut terminal = ratatui::init();
    EventHandler::new(Duration::from_millis(100)).spawn(tx.clone());

    info!(path = %route.path(), "watchlist started");
    for request in state.start(route) {
        spawn_request(&api, request, &tx);
    }

    while !state.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut state))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key_to_action(key, state.key_mode()) {
                    debug!(?action, "key action");
                    if let Some(request) = state.handle_action(action) {
                        spawn_request(&api, request, &tx);
                    }
                }
            }
            AppEvent::Api(response) => state.handle_response(response),
            AppEvent::Resize(_, _) => {
                // Terminal will redraw on next loop iteration
            }
            AppEvent::Tick => {}
        }
    }

    // Restore terminal
    ratatui::restore();
    info!("watchlist stopped");
    Ok(())
}

/// Run a request off the event loop and post its response back.
fn spawn_request(api: &Arc<dyn MovieApi>, request: Request, tx: &UnboundedSender<AppEvent>) {
    let api = Arc::clone(api);
    let tx = tx.clone();
    tokio::spawn(async move {
        let response = api::execute(&*api, request).await;
        // The loop may already be gone; a late response is simply dropped.
        let _ = tx.send(AppEvent::Api(response));
    });
}
