use anyhow::{Context, Result};
use forest_config::AppConfig;
use forest_control::{
    initial_state, Action, ControlView, ControlViewModel, ControlsMiddleware,
    InverseCoordinateMiddleware, LogMiddleware, NextPreviousMiddleware, Observable,
    SelectorModel, State, StaticCatalog, Store,
};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

mod commands;
mod logger;

use commands::Command;

fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting forest-navigator");
    log::debug!("Logging to {}", log_file.display());

    let config = AppConfig::load();
    let catalog = Rc::new(load_catalog(&config)?);
    let store = Rc::new(build_store(&config, catalog)?);
    let view = Rc::new(ControlView::new());
    connect(&store, &view);
    view.render(&store.state());

    let result = run(&store, &view);

    log::info!("Exiting forest-navigator");
    result
}

fn load_catalog(config: &AppConfig) -> Result<StaticCatalog> {
    if let Some(path) = &config.catalog_file {
        return StaticCatalog::load(path);
    }

    let path = forest_config::paths::default_catalog_path()?;
    if path.exists() {
        StaticCatalog::load(&path)
    } else {
        log::warn!("No catalog at {}, starting empty", path.display());
        Ok(StaticCatalog::default())
    }
}

/// Seed the state from the catalog and assemble the middleware chain
fn build_store(config: &AppConfig, catalog: Rc<StaticCatalog>) -> Result<Store> {
    let patterns = if config.patterns.is_empty() {
        catalog.patterns()
    } else {
        config.patterns.clone()
    };
    let pattern = config
        .startup_pattern()
        .map(str::to_string)
        .or_else(|| patterns.first().cloned());

    let controls = ControlsMiddleware::with_patterns(Rc::clone(&catalog), patterns);
    let state = initial_state(&catalog, pattern.as_deref())
        .context("Failed to query initial state")?
        .with("patterns", controls.patterns().to_vec());

    let mut store = Store::new(state);
    store.add_middleware(Box::new(LogMiddleware::new(config.verbose_actions)));
    for name in &config.inverse_coordinates {
        store.add_middleware(Box::new(InverseCoordinateMiddleware::new(name.as_str())));
    }
    store.add_middleware(Box::new(NextPreviousMiddleware::new()));
    store.add_middleware(Box::new(controls));
    Ok(store)
}

/// Views render every new state; view gestures are dispatched into the store
fn connect(store: &Rc<Store>, view: &Rc<ControlView>) {
    let renderer = Rc::clone(view);
    store.subscribe(move |state: &State| renderer.render(state));

    let dispatcher = Rc::clone(store);
    view.subscribe(move |action: &Action| {
        if let Err(e) = dispatcher.dispatch(action.clone()) {
            log::error!("Failed to dispatch {}: {}", action, e);
            eprintln!("Error: {}", e);
        }
    });
}

fn run(store: &Store, view: &ControlView) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_model(&mut stdout, &view.model())?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match commands::parse(&line) {
            Ok(Command::Dispatch(action)) => {
                view.notify(&action);
                print_model(&mut stdout, &view.model())?;
            }
            Ok(Command::ShowState) => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&store.state())?)?;
            }
            Ok(Command::Help) => print_help(&mut stdout)?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    Ok(())
}

fn print_model(out: &mut impl Write, model: &ControlViewModel) -> io::Result<()> {
    for selector in &model.selectors {
        writeln!(out, "{}", describe(selector))?;
    }
    writeln!(out)
}

fn describe(selector: &SelectorModel) -> String {
    let current = selector
        .value
        .as_deref()
        .map(|value| {
            selector
                .menu
                .iter()
                .find(|(_, v)| v == value)
                .map_or(value, |(label, _)| label.as_str())
        })
        .unwrap_or("-");
    let current = if selector.has_buttons {
        format!("< {} >", current)
    } else {
        current.to_string()
    };
    let state = if selector.disabled {
        "disabled".to_string()
    } else {
        format!("{} options", selector.menu.len())
    };
    format!("{:<18} {:<28} {}", selector.label, current, state)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    for (usage, description) in commands::USAGE {
        writeln!(out, "  {:<26} {}", usage, description)?;
    }
    Ok(())
}
