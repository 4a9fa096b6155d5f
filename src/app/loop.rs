use crate::app::{action::Action, input::map_event_to_action, reducer, state::AppState, ui};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // The dropdown reports selections back through the action channel.
    let listener_tx = action_tx.clone();
    app_state.dropdown.set_on_change(move |value: &str| {
        if let Err(err) = listener_tx.try_send(Action::SelectionChanged(value.to_string())) {
            warn!(%err, "dropping selection change");
        }
    });

    info!(options = app_state.dropdown.options().len(), "event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Listener Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }
        }
    }

    info!("event loop finished");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
