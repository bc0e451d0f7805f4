use crate::config::Config;
use crate::controller::MealScreenController;
use crate::fetch::FetchError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the meal screen until the user quits. Fetch tasks are spawned on
/// `runtime` and cancelled when the screen closes.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let failures = events.sender();
    let controller = MealScreenController::from_config(runtime, config)
        .map_err(|err| io::Error::other(err.to_string()))?
        .with_failure_hook(Arc::new(move |err: &FetchError| {
            let _ = failures.send(AppEvent::FetchFailed(err.to_string()));
        }));

    let snapshots = events.sender();
    controller.on_snapshot(move |snapshot| {
        let _ = snapshots.send(AppEvent::Snapshot(snapshot));
    });

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.mount(|| controller.fetch());
    tracing::info!(endpoint = %config.endpoint, "Meal screen mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Snapshot(snapshot)) => app.on_snapshot(snapshot),
            Ok(AppEvent::FetchFailed(reason)) => app.on_fetch_failed(reason),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(controller);
    drop(guard);
    Ok(())
}
