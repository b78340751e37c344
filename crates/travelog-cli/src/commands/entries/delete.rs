//! `travelog delete`: immediate, confirmed, or undoable deletion.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use tokio::sync::oneshot;
use tokio::time::Instant;

use travelog_core::deferred::{DeferredDelete, DeleteOutcome, SharedStore};
use travelog_core::EntryId;

use crate::app::{AppContext, Session};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::ui::{badge, kv, print, Badge, Countdown, UiContext};

use super::report;

const TICK: Duration = Duration::from_millis(100);

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let mut session = ctx.open_store()?;

    let id = session.store.resolve_id(&args.id)?;
    let destination = session
        .store
        .get(&id)
        .map(|entry| entry.destination.clone())
        .unwrap_or_default();
    let window = match args.undo_seconds {
        Some(seconds) => Duration::from_secs(seconds),
        None => ctx.undo_window()?,
    };

    if args.confirm {
        if !ui.is_interactive() {
            return Err(
                CliError::invalid_input("--confirm needs an interactive terminal")
                    .with_hint("Pass --yes to delete without asking.")
                    .into(),
            );
        }
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete your trip to {}?", destination))
            .default(false)
            .interact()?;
        if !proceed {
            print(&ui, &badge(&ui, Badge::Info, "Kept"));
            return Ok(());
        }
    }

    if args.yes || args.confirm || window.is_zero() || !ui.is_interactive() {
        let removed = session.store.delete(&id)?;
        report(ctx, &ui, &session.store, &session.toasts, "Trip deleted", &removed);
        return Ok(());
    }

    delete_with_undo(ctx, &ui, session, id, &destination, window)
}

/// Schedule the deletion and let Enter cancel it until the window closes.
fn delete_with_undo(
    ctx: &AppContext,
    ui: &UiContext,
    session: Session,
    id: EntryId,
    destination: &str,
    window: Duration,
) -> anyhow::Result<()> {
    let Session { store, toasts, .. } = session;
    let shared: SharedStore = Arc::new(Mutex::new(store));
    let runtime = ctx.runtime()?;

    let outcome = runtime.block_on(async {
        let mut deferred = DeferredDelete::new(Arc::clone(&shared)).with_window(window);
        deferred.schedule(id.clone());

        let countdown = Countdown::new(ui, window, &format!("Deleting {}", destination));
        countdown.start();
        run_undo_window(&mut deferred, listen_for_enter(), &countdown).await
    });

    match outcome {
        DeleteOutcome::Deleted(removed) => {
            let store = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            report(ctx, ui, &store, &toasts, "Trip deleted", &removed);
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            if !ctx.quiet() {
                if ui.mode.is_pretty() {
                    print(
                        ui,
                        &badge(
                            ui,
                            Badge::Ok,
                            &format!("Undone. Your trip to {} was kept.", destination),
                        ),
                    );
                } else {
                    print(ui, "status=cancelled");
                    print(ui, &kv(ui, "entry_id", id.as_str()));
                }
            }
            Ok(())
        }
        DeleteOutcome::Failed(err) => Err(err.into()),
    }
}

/// Tick the countdown until `undo_signal` resolves `true` or the window
/// closes, then settle the deletion.
///
/// A signal of `false` (stdin closed) is ignored and the window runs out.
async fn run_undo_window(
    deferred: &mut DeferredDelete,
    mut undo_signal: oneshot::Receiver<bool>,
    countdown: &Countdown<'_>,
) -> DeleteOutcome {
    let mut signal_open = true;
    let deadline = Instant::now() + deferred.window();
    let mut ticker = tokio::time::interval(TICK);

    let undo_requested = loop {
        tokio::select! {
            pressed = &mut undo_signal, if signal_open => match pressed {
                Ok(true) => break true,
                _ => signal_open = false,
            },
            _ = ticker.tick() => {
                let now = Instant::now();
                if now >= deadline {
                    break false;
                }
                countdown.set_remaining(deadline - now);
            }
        }
    };
    countdown.clear();

    if undo_requested && deferred.undo() {
        return DeleteOutcome::Cancelled;
    }
    deferred.wait().await.unwrap_or(DeleteOutcome::Cancelled)
}

/// Resolves `true` when a line is read from stdin, `false` on EOF or error.
/// The read happens on a detached thread.
fn listen_for_enter() -> oneshot::Receiver<bool> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let pressed = matches!(std::io::stdin().read_line(&mut line), Ok(n) if n > 0);
        let _ = tx.send(pressed);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use travelog_core::storage::MemoryMirror;
    use travelog_core::{EntryDraft, EntryStore};

    const WINDOW: Duration = Duration::from_secs(4);

    fn store_with_trip() -> (SharedStore, EntryId) {
        let mut store = EntryStore::load(MemoryMirror::new());
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let id = store.add(EntryDraft::new("Paris", day, day)).unwrap().id;
        (Arc::new(Mutex::new(store)), id)
    }

    fn silent_ui() -> UiContext {
        UiContext::from_env(true, None, true, true)
    }

    #[tokio::test(start_paused = true)]
    async fn enter_within_window_keeps_trip() {
        let (store, id) = store_with_trip();
        let ui = silent_ui();
        let countdown = Countdown::new(&ui, WINDOW, "Deleting Paris");
        let mut deferred = DeferredDelete::new(Arc::clone(&store)).with_window(WINDOW);
        deferred.schedule(id);

        let (press, undo_signal) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = press.send(true);
        });

        let outcome = run_undo_window(&mut deferred, undo_signal, &countdown).await;
        assert!(matches!(outcome, DeleteOutcome::Cancelled));

        tokio::time::sleep(WINDOW * 2).await;
        assert_eq!(store.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn window_elapsing_deletes_trip() {
        let (store, id) = store_with_trip();
        let ui = silent_ui();
        let countdown = Countdown::new(&ui, WINDOW, "Deleting Paris");
        let mut deferred = DeferredDelete::new(Arc::clone(&store)).with_window(WINDOW);
        deferred.schedule(id.clone());

        let (_press, undo_signal) = oneshot::channel::<bool>();
        let outcome = run_undo_window(&mut deferred, undo_signal, &countdown).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted(ref entry) if entry.id == id));
        assert!(store.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn closed_stdin_lets_window_run_out() {
        let (store, id) = store_with_trip();
        let ui = silent_ui();
        let countdown = Countdown::new(&ui, WINDOW, "Deleting Paris");
        let mut deferred = DeferredDelete::new(Arc::clone(&store)).with_window(WINDOW);
        deferred.schedule(id);

        let (press, undo_signal) = oneshot::channel::<bool>();
        press.send(false).unwrap();
        let outcome = run_undo_window(&mut deferred, undo_signal, &countdown).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted(_)));
        assert!(store.lock().unwrap().is_empty());
    }
}
