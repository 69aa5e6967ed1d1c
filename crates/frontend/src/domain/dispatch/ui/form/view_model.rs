use super::model::{self, SubmitOutcome};
use crate::shared::date_utils;
use contracts::domain::dispatch::FormState;
use leptos::prelude::*;

/// How long a save notice stays on screen.
const NOTICE_VISIBLE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient notice shown after a submit attempt.
#[derive(Debug, Clone)]
pub struct SaveNotice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl SaveNotice {
    fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: "Data saved successfully!",
        }
    }

    fn error() -> Self {
        Self {
            kind: NoticeKind::Error,
            message: "Error saving data!",
        }
    }
}

/// ViewModel for the dispatch form page.
#[derive(Clone)]
pub struct DispatchFormViewModel {
    pub form: RwSignal<FormState>,
    pub error: RwSignal<Option<String>>,
    pub notification: RwSignal<Option<SaveNotice>>,
    /// Datetime default captured once at load; reset restores this value,
    /// not the current time.
    initial_date_time: String,
}

impl DispatchFormViewModel {
    pub fn new() -> Self {
        let initial_date_time = date_utils::now_local_datetime();
        Self {
            form: RwSignal::new(FormState::new(initial_date_time.clone())),
            error: RwSignal::new(None),
            notification: RwSignal::new(None),
            initial_date_time,
        }
    }

    /// Handle an edit of the system-count input.
    pub fn set_system_count(&self, raw: String) {
        self.form.update(|f| f.apply_system_count(&raw));
    }

    /// Validate, assemble and submit the current form.
    pub fn save_command(&self) {
        let current = self.form.get();

        if !current.is_valid() {
            self.error
                .set(Some("Please fill in all required fields".to_string()));
            return;
        }
        self.error.set(None);

        let record = current.to_record();
        let notification = self.notification;
        wasm_bindgen_futures::spawn_local(async move {
            let notice = match model::submit_record(&record).await {
                SubmitOutcome::Sent => SaveNotice::success(),
                SubmitOutcome::LocalFailure(e) => {
                    log::error!("Failed to submit dispatch record: {}", e);
                    SaveNotice::error()
                }
            };
            notification.set(Some(notice));
            gloo_timers::future::TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
            notification.set(None);
        });
    }

    /// Restore the form to its load-time defaults.
    pub fn reset_command(&self) {
        self.form.set(FormState::new(self.initial_date_time.clone()));
        self.error.set(None);
    }
}
