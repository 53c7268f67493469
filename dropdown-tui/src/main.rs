mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use dropdown::{Dropdown, DropdownConfig, Selection};
use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{
    Color, Edges, Element, Event, FocusState, Key, PointerDownListeners, Size, Style, Terminal,
};

use crate::error::AppError;

const DROPDOWN_ID: &str = "dropdown";

fn main() -> ExitCode {
    init_logging();

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);

    match config::load(explicit).and_then(run) {
        Ok(selection) => {
            println!("selected: {selection}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to `<cache dir>/latest.log`. Failing to set up logging is not fatal.
fn init_logging() {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

fn run(config: DropdownConfig) -> Result<Selection, AppError> {
    let listeners = PointerDownListeners::new();
    let mut dropdown = Dropdown::from_config(DROPDOWN_ID, &config, listeners)?;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    focus.focus(&dropdown.trigger_id());

    log::info!("started with {} options", dropdown.options().len());

    loop {
        let root = ui(&dropdown);
        term.render(&root)?;

        let raw_events = term.poll(None)?;
        let events = focus.process_events(&raw_events, &root, term.layout());

        for event in &events {
            if dropdown.on_event(event, &root).is_consumed() {
                continue;
            }
            if is_quit(event) {
                log::info!("quit with {:?}", dropdown.selection());
                return Ok(dropdown.selection().clone());
            }
        }
    }
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('c'),
            modifiers,
            ..
        } => modifiers.ctrl,
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            modifiers,
            ..
        } => !modifiers.ctrl && !modifiers.alt,
        _ => false,
    }
}

fn ui(dropdown: &Dropdown) -> Element {
    let muted = Style::new().foreground(Color::oklch(0.704, 0.04, 256.788));

    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::new(1, 2, 1, 2))
        .gap(1)
        .child(Element::text("Dropdown").style(Style::new().bold()))
        .child(
            Element::text("↑/↓ move   Enter select   Esc close   q quit")
                .style(muted.clone()),
        )
        .child(dropdown.element())
        .child(
            Element::text(format!("Selected: {}", dropdown.selection()))
                .id("status")
                .style(muted),
        )
}
