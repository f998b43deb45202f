//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The background work of a submission (dots animation, in-flight request)
//! is owned by a `Lifecycle`, so a new submission cancels the old one.

use crate::browser::{self, WebImage};
use agro_advice::dots::DotsCycle;
use agro_advice::{Cancel, Lifecycle, Selection, Ticket, ViewState};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;
use web_sys::AbortController;

/// The running dots animation.
pub struct Animation(Task);

impl Cancel for Animation {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// A request that has been sent and not yet rendered.
pub struct InFlight {
    task: Task,
    abort: Option<AbortController>,
}

impl Cancel for InFlight {
    fn cancel(self) {
        if let Some(abort) = self.abort {
            abort.abort();
        }
        self.task.cancel();
        log::info!("Cancelled previous advice request");
    }
}

/// Shared application state for the upload page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current value of the city input
    pub city: Signal<String>,
    /// Active image and its preview URL
    pub selection: Signal<Selection<WebImage>>,
    /// Whether a file is being dragged over the drop zone
    pub drag_over: Signal<bool>,
    /// Whether the "Analyzing" indicator is shown
    pub loading: Signal<bool>,
    /// Current animation frame ("", ".", "..", "...")
    pub dots: Signal<&'static str>,
    /// Result sections of the last rendered response
    pub view: Signal<ViewState>,
    lifecycle: Signal<Lifecycle<Animation, InFlight>>,
}

impl AppState {
    /// Create a new AppState with the city input prefilled.
    pub fn new(initial_city: String) -> Self {
        Self {
            city: Signal::new(initial_city),
            selection: Signal::new(Selection::new()),
            drag_over: Signal::new(false),
            loading: Signal::new(false),
            dots: Signal::new(""),
            view: Signal::new(ViewState::default()),
            lifecycle: Signal::new(Lifecycle::new()),
        }
    }

    /// Validate a dropped or picked file and make it the active selection.
    /// A rejected file alerts and leaves the current selection as it was.
    pub fn accept_image(&mut self, image: Option<WebImage>) {
        let name = image.as_ref().map(|i| i.0.name()).unwrap_or_default();
        let offered = self.selection.write().offer(image, browser::object_url);
        match offered {
            Ok(old_url) => {
                log::info!("Selected {}", name);
                if let Some(old) = old_url {
                    browser::revoke_object_url(&old);
                }
            }
            Err(e) => {
                log::warn!("Rejected {:?}: {:?}", name, e);
                browser::alert(&e.to_string());
            }
        }
    }

    /// Start a new submission: cancel the previous one, hide every result
    /// section and start the loading indicator.
    pub fn begin_submission(&mut self, interval: Duration) -> Ticket {
        let ticket = self.lifecycle.write().supersede();
        self.view.set(ViewState::default());
        self.start_loading(interval);
        ticket
    }

    fn start_loading(&mut self, interval: Duration) {
        self.dots.set("");
        self.loading.set(true);

        let mut dots = self.dots;
        let task = spawn(async move {
            for frame in DotsCycle::new() {
                dots.set(frame);
                gloo_timers::future::sleep(interval).await;
            }
        });
        self.lifecycle.write().start_animation(Animation(task));
    }

    /// Hide the loading indicator and stop its animation.
    pub fn stop_loading(&mut self) {
        self.lifecycle.write().stop_animation();
        self.loading.set(false);
    }

    /// Track `task` as the in-flight request of `ticket`.
    pub fn track_request(&mut self, ticket: Ticket, task: Task, abort: Option<AbortController>) {
        self.lifecycle
            .write()
            .track_request(ticket, InFlight { task, abort });
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.lifecycle.read().is_current(ticket)
    }

    /// Forget the request of `ticket` once it has fully rendered.
    pub fn finish_request(&mut self, ticket: Ticket) {
        self.lifecycle.write().finish(ticket);
    }
}
