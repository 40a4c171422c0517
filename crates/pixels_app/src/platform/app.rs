use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use grid_logging::{grid_error, grid_warn};
use pixels_core::{update, BaselineConfig, ClientState, LoadMode, Msg, SearchDebouncer};
use pixels_engine::{
    ClientSettings, DownloadSettings, EngineEvent, EngineHandle, ImageDownloader, PixabayClient,
};

use super::commands::{self, Command};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};

const DOWNLOAD_DIR: &str = "downloads";
const IDLE_POLL: Duration = Duration::from_millis(20);

pub fn run_app() {
    logging::initialize(LogDestination::Both);

    let api_key = match std::env::var("PIXABAY_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("PIXABAY_API_KEY is not set; get a key at https://pixabay.com/api/docs/");
            return;
        }
    };

    let api = match PixabayClient::new(BaselineConfig::new(api_key), ClientSettings::default()) {
        Ok(api) => api,
        Err(err) => {
            grid_error!("could not build search client: {err}");
            return;
        }
    };
    let downloader = match ImageDownloader::new(
        PathBuf::from(DOWNLOAD_DIR),
        DownloadSettings::default(),
    ) {
        Ok(downloader) => downloader,
        Err(err) => {
            grid_error!("could not build downloader: {err}");
            return;
        }
    };
    let runner = EffectRunner::new(EngineHandle::new(api, downloader));

    let mut state = ClientState::new();
    let mut debouncer = SearchDebouncer::default();
    let line_rx = spawn_stdin_reader();

    print_help();
    state = dispatch(state, Msg::SessionStarted, &runner);

    loop {
        if let Some(text) = debouncer.poll(Instant::now()) {
            state = dispatch(state, Msg::SearchChanged(text), &runner);
        }

        while let Some(event) = runner.try_event() {
            state = handle_engine_event(state, event, &runner);
        }

        match line_rx.try_recv() {
            Ok(line) => {
                let command = match commands::parse(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                state = handle_command(state, command, &runner, &mut debouncer);
            }
            Err(TryRecvError::Empty) => thread::sleep(IDLE_POLL),
            Err(TryRecvError::Disconnected) => break,
        }
    }
}

fn handle_command(
    state: ClientState,
    command: Command,
    runner: &EffectRunner,
    debouncer: &mut SearchDebouncer,
) -> ClientState {
    match command {
        Command::Search(text) => {
            // Keystrokes go through the debouncer; the event loop commits
            // the settled text as Msg::SearchChanged.
            debouncer.input(text, Instant::now());
            state
        }
        Command::Clear => dispatch(state, Msg::SearchChanged(String::new()), runner),
        Command::Category(category) => dispatch(state, Msg::CategorySelected(category), runner),
        Command::Filter(key, value) => {
            let filters = state.identity().filters.clone().with(key, value);
            dispatch(state, Msg::FiltersApplied(filters), runner)
        }
        Command::Unfilter(key) => dispatch(state, Msg::FilterCleared(key), runner),
        Command::Reset => dispatch(state, Msg::FiltersReset, runner),
        Command::More => dispatch(state, Msg::ScrollHitBottom, runner),
        Command::Show => {
            let mut state = state;
            render(&mut state);
            state
        }
        Command::Save(number) => {
            match state.items().get(number.wrapping_sub(1)) {
                Some(item) => {
                    println!("Downloading photo {number}...");
                    runner.request_download(item.webformat_url.clone(), item.download_file_name());
                }
                None => println!("No photo number {number} on screen."),
            }
            state
        }
        Command::Help => {
            print_help();
            state
        }
        Command::Quit => state,
    }
}

fn handle_engine_event(
    state: ClientState,
    event: EngineEvent,
    runner: &EffectRunner,
) -> ClientState {
    match event {
        EngineEvent::SearchCompleted {
            query,
            mode,
            result,
        } => {
            let result = result.map_err(|err| {
                grid_warn!("search failed: {err}");
                err.to_string()
            });
            let was_append = mode == LoadMode::Append;
            let mut state = dispatch(state, Msg::FetchDone { query, mode, result }, runner);
            if was_append {
                // New rows rendered under the old bottom edge; the scroll
                // position is no longer at the threshold.
                state = dispatch(state, Msg::ScrollLeftBottom, runner);
            }
            render(&mut state);
            state
        }
        EngineEvent::DownloadCompleted { url, result } => {
            match result {
                Ok(path) => println!("Saved {} -> {}", url, path.display()),
                Err(message) => println!("Image download failed: {message}"),
            }
            state
        }
    }
}

fn dispatch(state: ClientState, msg: Msg, runner: &EffectRunner) -> ClientState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn render(state: &mut ClientState) {
    if let Some(message) = state.consume_error() {
        println!("Request failed: {message}");
        return;
    }
    let view = state.view();

    let mut context = Vec::new();
    if let Some(term) = &view.term {
        context.push(format!("\"{term}\""));
    }
    if let Some(category) = &view.category {
        context.push(format!("category {category}"));
    }
    for chip in &view.filter_chips {
        if chip.is_color {
            context.push(format!("[{}]", chip.value));
        } else {
            context.push(format!("{}={}", chip.key, chip.value));
        }
    }
    let context = if context.is_empty() {
        "editor's choice".to_string()
    } else {
        context.join(" · ")
    };

    println!(
        "-- {} photos · page {} · {}{}",
        view.items.len(),
        view.current_page,
        context,
        if view.fetching { " · loading..." } else { "" }
    );
    for (index, item) in view.items.iter().enumerate().take(10) {
        println!(
            "  {:>3}. {}x{}  {}",
            index + 1,
            item.width,
            item.height,
            item.image_url
        );
    }
    if view.items.len() > 10 {
        println!("  ... and {} more (show to re-list)", view.items.len() - 10);
    }
}

fn print_help() {
    println!("Pixels — photo browser");
    println!("  search <text>      debounced free-text search (3+ characters)");
    println!("  clear              clear the search box");
    println!("  category <name>    pick a category chip (category none to deselect)");
    println!("  filter <key> <v>   apply a filter: order, orientation, image_type, colors");
    println!("  unfilter <key>     dismiss one filter chip");
    println!("  reset              reset all filters");
    println!("  more               scroll to the bottom (loads the next page)");
    println!("  show               re-render the grid");
    println!("  save <n>           download photo n into ./{DOWNLOAD_DIR}");
    println!("  quit               exit");
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    line_rx
}
