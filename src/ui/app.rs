use crate::navigation::{Navigator, Route};
use crate::notify::{Notification, Toasts};
use crate::record::UserRecord;
use crate::submit::SubmitOutcome;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use std::time::{Duration, Instant};

/// Async work requested by the screen, executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Load `id`. `force` skips a fresh cache entry.
    Fetch {
        id: String,
        generation: u64,
        force: bool,
    },
    /// Send the edited record.
    Update { id: String, record: UserRecord },
}

/// Why the screen closed.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    /// Ctrl+Q.
    Quit,
    /// "Back" with no earlier view in this session.
    Back,
    /// Update accepted; the listing view should be shown.
    Saved { redirect: Route, message: String },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    exit: Option<ExitReason>,
    /// Update-user form state (MVI pattern).
    form: FormState,
    navigator: Navigator,
    toasts: Toasts,
    toast_ttl: Duration,
    /// Tag of the latest fetch; results carrying an older tag are dropped.
    generation: u64,
    commands: Vec<UiCommand>,
}

impl App {
    /// Opens the update screen for `id` and queues its fetch.
    pub fn new(id: impl Into<String>, toast_ttl: Duration) -> Self {
        let mut app = Self {
            exit: None,
            form: FormState::default(),
            navigator: Navigator::new(Route::UpdateUser { id: id.into() }),
            toasts: Toasts::default(),
            toast_ttl,
            generation: 0,
            commands: Vec::new(),
        };
        app.load(false);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }

    pub fn exit_reason(&self) -> Option<&ExitReason> {
        self.exit.as_ref()
    }

    pub fn request_quit(&mut self) {
        self.exit = Some(ExitReason::Quit);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn route(&self) -> Option<&Route> {
        self.navigator.current()
    }

    /// Identifier of the user being edited.
    pub fn current_id(&self) -> Option<&str> {
        match self.navigator.current() {
            Some(Route::UpdateUser { id }) => Some(id),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.toasts.current()
    }

    /// Commands queued since the last call.
    pub fn drain_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Refetch the current user from the service.
    pub fn refresh(&mut self) {
        if self.form.is_submitting() {
            return;
        }
        self.load(true);
    }

    fn load(&mut self, force: bool) {
        let Some(id) = self.current_id().map(str::to_string) else {
            return;
        };
        self.generation += 1;
        self.commands.push(UiCommand::Fetch {
            id,
            generation: self.generation,
            force,
        });
    }

    /// The runtime started the fetch tagged `generation`.
    pub fn on_fetch_started(&mut self, generation: u64, placeholder: Option<UserRecord>) {
        if generation != self.generation {
            return;
        }
        dispatch_mvi!(self, form, FormReducer, FormIntent::StartLoading { placeholder });
    }

    pub fn on_detail_loaded(&mut self, generation: u64, record: UserRecord) {
        if generation != self.generation {
            tracing::debug!(generation, "dropping superseded detail result");
            return;
        }
        dispatch_mvi!(self, form, FormReducer, FormIntent::Loaded { record });
    }

    pub fn on_detail_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        dispatch_mvi!(self, form, FormReducer, FormIntent::LoadFailed { message });
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Validate and, when every input is filled, queue exactly one update.
    pub fn submit(&mut self) {
        if !self.form.is_editing() || self.form.is_submitting() {
            return;
        }
        dispatch_mvi!(self, form, FormReducer, FormIntent::Submit);

        if let Some(key) = self.form.missing() {
            self.toasts.show(Notification::error(format!(
                "Please fill out this field: {}",
                key.label()
            )));
            return;
        }

        let Some(id) = self.current_id().map(str::to_string) else {
            return;
        };
        let Some(record) = self.form.to_record() else {
            return;
        };
        self.commands.push(UiCommand::Update { id, record });
    }

    pub fn on_update_finished(&mut self, outcome: SubmitOutcome) {
        self.toasts.show(outcome.notification().clone());
        match outcome {
            SubmitOutcome::Saved { notification, .. } => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::SubmitSucceeded);
                let redirect = self.navigator.redirect_to_list();
                self.exit = Some(ExitReason::Saved {
                    redirect,
                    message: notification.message,
                });
            }
            SubmitOutcome::Failed { .. } => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::SubmitFailed);
            }
        }
    }

    /// Previous view in history, independent of whether anything was saved.
    pub fn back(&mut self) {
        let previous = self.navigator.back().cloned();
        match previous {
            Some(Route::UpdateUser { .. }) => self.load(false),
            Some(Route::UserList) | None => self.exit = Some(ExitReason::Back),
        }
    }

    pub fn on_tick(&mut self) {
        self.toasts.expire(self.toast_ttl, Instant::now());
    }
}
