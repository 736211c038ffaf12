use crate::api::UserApi;
use crate::config::UiConfig;
use crate::detail::DetailFetcher;
use crate::submit::UpdateSubmitter;
use crate::ui::app::{App, ExitReason, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::future::Future;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Update tasks spawned by the screen. Leaving the screen drops their
/// outcome but not the requests themselves.
#[derive(Default)]
pub struct PendingUpdates {
    tasks: Vec<JoinHandle<()>>,
}

impl PendingUpdates {
    pub fn spawn<F>(&mut self, handle: &Handle, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(handle.spawn(task));
    }

    /// Block until every spawned update has completed.
    /// Must be called from outside the runtime.
    pub fn wait(self, handle: &Handle) {
        let running = self.tasks.iter().filter(|task| !task.is_finished()).count();
        if running > 0 {
            tracing::info!(running, "waiting for in-flight updates");
        }
        for task in self.tasks {
            if let Err(err) = handle.block_on(task) {
                tracing::error!(error = %err, "update task did not complete");
            }
        }
    }
}

/// Run the update screen for `id` until it is left.
///
/// Network work is spawned on `handle`; this thread owns the terminal.
pub fn run<A>(handle: &Handle, fetcher: DetailFetcher<A>, id: String, ui: &UiConfig) -> io::Result<ExitReason>
where
    A: UserApi + 'static,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = ui.tick_rate();
    let mut app = App::new(id, ui.toast_duration());
    let events = EventHandler::new(tick_rate);
    let submitter = UpdateSubmitter::new(fetcher.clone());
    let mut pending = PendingUpdates::default();

    let outcome = loop {
        for command in app.drain_commands() {
            execute(
                handle,
                &mut app,
                command,
                &fetcher,
                &submitter,
                &mut pending,
                events.sender(),
            );
        }

        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::DetailLoaded { generation, record }) => {
                app.on_detail_loaded(generation, record)
            }
            Ok(AppEvent::DetailFailed {
                generation,
                message,
            }) => app.on_detail_failed(generation, message),
            Ok(AppEvent::UpdateFinished(outcome)) => app.on_update_finished(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    drop(guard);
    pending.wait(handle);
    outcome?;
    Ok(app.exit_reason().cloned().unwrap_or(ExitReason::Quit))
}

fn execute<A>(
    handle: &Handle,
    app: &mut App,
    command: UiCommand,
    fetcher: &DetailFetcher<A>,
    submitter: &UpdateSubmitter<A>,
    pending: &mut PendingUpdates,
    tx: Sender<AppEvent>,
) where
    A: UserApi + 'static,
{
    match command {
        UiCommand::Fetch {
            id,
            generation,
            force,
        } => {
            app.on_fetch_started(generation, fetcher.placeholder_for(&id));
            let fetcher = fetcher.clone();
            handle.spawn(async move {
                let result = if force {
                    fetcher.refetch(&id).await
                } else {
                    fetcher.fetch(&id).await
                };
                let event = match result {
                    Ok(fetched) => AppEvent::DetailLoaded {
                        generation,
                        record: fetched.record,
                    },
                    Err(err) => AppEvent::DetailFailed {
                        generation,
                        message: err.user_message(),
                    },
                };
                let _ = tx.send(event);
            });
        }
        UiCommand::Update { id, record } => {
            let submitter = submitter.clone();
            pending.spawn(handle, async move {
                let outcome = submitter.submit(&id, record).await;
                // Screen may be gone already; the outcome is then dropped
                let _ = tx.send(AppEvent::UpdateFinished(outcome));
            });
        }
    }
}
