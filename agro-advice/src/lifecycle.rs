//! Ownership of a submission's background work.
//!
//! A submission runs two things in the background: the "Analyzing" animation
//! and the request itself. `Lifecycle` holds at most one of each. Starting a
//! new submission cancels whatever the previous one left running, and its
//! `Ticket` tells a finishing request whether it is still the current one.

/// Background work that can be stopped by its owner.
pub trait Cancel {
    fn cancel(self);
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Lifecycle<A, R> {
    generation: u64,
    animation: Option<A>,
    request: Option<R>,
}

impl<A, R> Default for Lifecycle<A, R> {
    fn default() -> Self {
        Self {
            generation: 0,
            animation: None,
            request: None,
        }
    }
}

impl<A: Cancel, R: Cancel> Lifecycle<A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new submission. The previous animation and request, if any,
    /// are cancelled.
    pub fn supersede(&mut self) -> Ticket {
        self.stop_animation();
        if let Some(request) = self.request.take() {
            request.cancel();
        }
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Run `animation`, cancelling the one already running.
    pub fn start_animation(&mut self, animation: A) {
        if let Some(old) = self.animation.replace(animation) {
            old.cancel();
        }
    }

    /// Cancel the running animation. Returns false when none was running.
    pub fn stop_animation(&mut self) -> bool {
        match self.animation.take() {
            Some(animation) => {
                animation.cancel();
                true
            }
            None => false,
        }
    }

    /// Hold `request` as the in-flight work of `ticket`. A request for a
    /// superseded ticket is cancelled right away.
    pub fn track_request(&mut self, ticket: Ticket, request: R) {
        if !self.is_current(ticket) {
            request.cancel();
            return;
        }
        if let Some(old) = self.request.replace(request) {
            old.cancel();
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Release the request of `ticket` once it has completed, without
    /// cancelling it. A stale ticket leaves the newer request in place.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.request.take().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its name in a shared log when cancelled.
    struct Handle {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Cancel for Handle {
        fn cancel(self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn setup() -> (Lifecycle<Handle, Handle>, Rc<RefCell<Vec<&'static str>>>) {
        (Lifecycle::new(), Rc::new(RefCell::new(Vec::new())))
    }

    fn handle(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Handle {
        Handle {
            name,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_new_submission_cancels_previous_work() {
        let (mut lifecycle, log) = setup();
        let first = lifecycle.supersede();
        lifecycle.start_animation(handle("dots-1", &log));
        lifecycle.track_request(first, handle("request-1", &log));

        let second = lifecycle.supersede();
        assert_eq!(*log.borrow(), vec!["dots-1", "request-1"]);
        assert!(!lifecycle.is_animating());
        assert!(!lifecycle.has_request());
        assert!(!lifecycle.is_current(first));
        assert!(lifecycle.is_current(second));
    }

    #[test]
    fn test_at_most_one_animation() {
        let (mut lifecycle, log) = setup();
        lifecycle.start_animation(handle("dots-1", &log));
        lifecycle.start_animation(handle("dots-2", &log));
        assert_eq!(*log.borrow(), vec!["dots-1"]);
        assert!(lifecycle.is_animating());

        assert!(lifecycle.stop_animation());
        assert!(!lifecycle.stop_animation());
        assert_eq!(*log.borrow(), vec!["dots-1", "dots-2"]);
    }

    #[test]
    fn test_finish_releases_without_cancelling() {
        let (mut lifecycle, log) = setup();
        let ticket = lifecycle.supersede();
        lifecycle.track_request(ticket, handle("request", &log));

        assert!(lifecycle.finish(ticket));
        assert!(!lifecycle.has_request());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_stale_ticket_cannot_release_newer_request() {
        let (mut lifecycle, log) = setup();
        let first = lifecycle.supersede();
        lifecycle.track_request(first, handle("request-1", &log));
        let second = lifecycle.supersede();
        lifecycle.track_request(second, handle("request-2", &log));

        assert!(!lifecycle.finish(first));
        assert!(lifecycle.has_request());
        assert!(lifecycle.finish(second));
        assert_eq!(*log.borrow(), vec!["request-1"]);
    }

    #[test]
    fn test_request_for_stale_ticket_is_cancelled() {
        let (mut lifecycle, log) = setup();
        let first = lifecycle.supersede();
        lifecycle.supersede();
        lifecycle.track_request(first, handle("late", &log));
        assert_eq!(*log.borrow(), vec!["late"]);
        assert!(!lifecycle.has_request());
    }
}
