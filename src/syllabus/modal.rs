/// Delay before the `show` transition class is applied, long enough for the
/// `display` change to land in the rendering pipeline first.
pub const SHOW_DELAY_MS: u32 = 10;
/// Delay before the container is hidden, matching the out-transition length.
pub const HIDE_DELAY_MS: u32 = 300;

/// One request to show a course's syllabus. `seq` makes repeat requests for
/// the same course distinct values, so clicking the button again while the
/// close transition is still running re-keys the component's open effect
/// instead of comparing equal and being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    seq: u64,
    course_id: String,
}

impl OpenRequest {
    pub fn next(previous: Option<&OpenRequest>, course_id: String) -> Self {
        let seq = previous.map_or(0, |request| request.seq + 1);
        Self { seq, course_id }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisibility {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Proof that a deferred transition belongs to the current open/close cycle.
/// The timers themselves are fire-and-forget; a token minted before a later
/// `request_open`/`request_close` no longer matches and its callback is a
/// no-op instead of acting on the reopened modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken {
    generation: u64,
}

/// Open/close state machine for the syllabus modal. Owns nothing but state;
/// the component drives it from clicks and timer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLifecycle {
    visibility: ModalVisibility,
    generation: u64,
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalLifecycle {
    pub fn new() -> Self {
        Self {
            visibility: ModalVisibility::Closed,
            generation: 0,
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    /// Starts (or restarts) an open. Allowed in every state: opening while a
    /// close is pending simply strands the stale hide timer.
    pub fn request_open(&mut self) -> TransitionToken {
        self.generation += 1;
        self.visibility = ModalVisibility::Opening;
        TransitionToken {
            generation: self.generation,
        }
    }

    /// The show-delay timer fired. Returns whether the `show` state should be
    /// applied now; false means the token is stale or the modal moved on.
    pub fn shown_elapsed(&mut self, token: TransitionToken) -> bool {
        if token.generation == self.generation && self.visibility == ModalVisibility::Opening {
            self.visibility = ModalVisibility::Open;
            true
        } else {
            false
        }
    }

    /// Starts a close. `None` when there is nothing to close, which makes a
    /// second `close()` a no-op rather than an error.
    pub fn request_close(&mut self) -> Option<TransitionToken> {
        match self.visibility {
            ModalVisibility::Opening | ModalVisibility::Open => {
                self.generation += 1;
                self.visibility = ModalVisibility::Closing;
                Some(TransitionToken {
                    generation: self.generation,
                })
            }
            ModalVisibility::Closed | ModalVisibility::Closing => None,
        }
    }

    /// The hide-delay timer fired. Returns whether the container should be
    /// hidden now.
    pub fn hide_elapsed(&mut self, token: TransitionToken) -> bool {
        if token.generation == self.generation && self.visibility == ModalVisibility::Closing {
            self.visibility = ModalVisibility::Closed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_close_cycle() {
        let mut modal = ModalLifecycle::new();
        assert_eq!(modal.visibility(), ModalVisibility::Closed);

        let shown = modal.request_open();
        assert_eq!(modal.visibility(), ModalVisibility::Opening);
        assert!(modal.shown_elapsed(shown));
        assert_eq!(modal.visibility(), ModalVisibility::Open);

        let hidden = modal.request_close().unwrap();
        assert_eq!(modal.visibility(), ModalVisibility::Closing);
        assert!(modal.hide_elapsed(hidden));
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
    }

    #[test]
    fn double_close_is_a_no_op() {
        let mut modal = ModalLifecycle::new();
        let shown = modal.request_open();
        modal.shown_elapsed(shown);

        let first = modal.request_close();
        assert!(first.is_some());
        assert!(modal.request_close().is_none());

        assert!(modal.hide_elapsed(first.unwrap()));
        assert!(modal.request_close().is_none());
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
    }

    #[test]
    fn reopen_while_open_resets_to_opening() {
        let mut modal = ModalLifecycle::new();
        let first = modal.request_open();
        assert!(modal.shown_elapsed(first));

        let second = modal.request_open();
        assert_eq!(modal.visibility(), ModalVisibility::Opening);
        // the first cycle's token no longer does anything
        assert!(!modal.shown_elapsed(first));
        assert!(modal.shown_elapsed(second));
        assert_eq!(modal.visibility(), ModalVisibility::Open);
    }

    #[test]
    fn stale_hide_timer_cannot_close_a_reopened_modal() {
        let mut modal = ModalLifecycle::new();
        let shown = modal.request_open();
        modal.shown_elapsed(shown);
        let stale_hide = modal.request_close().unwrap();

        // reopened before the hide timer fires
        let shown = modal.request_open();
        assert!(!modal.hide_elapsed(stale_hide));
        assert_eq!(modal.visibility(), ModalVisibility::Opening);
        assert!(modal.shown_elapsed(shown));
        assert_eq!(modal.visibility(), ModalVisibility::Open);
    }

    #[test]
    fn repeat_requests_for_one_course_are_distinct() {
        let first = OpenRequest::next(None, "oop".into());
        let second = OpenRequest::next(Some(&first), "oop".into());
        assert_ne!(first, second);
        assert_eq!(second.course_id(), "oop");
    }

    #[test]
    fn reopening_the_same_course_during_close_wins_over_the_hide_timer() {
        let first = OpenRequest::next(None, "oop".into());
        let mut modal = ModalLifecycle::new();
        let shown = modal.request_open();
        modal.shown_elapsed(shown);
        let stale_hide = modal.request_close().unwrap();

        // the re-click produces a fresh request, which drives a fresh open
        let second = OpenRequest::next(Some(&first), "oop".into());
        assert_ne!(first, second);
        let reopened = modal.request_open();

        assert!(!modal.hide_elapsed(stale_hide));
        assert!(modal.shown_elapsed(reopened));
        assert_eq!(modal.visibility(), ModalVisibility::Open);
    }

    #[test]
    fn stale_show_timer_cannot_reopen_a_closed_modal() {
        let mut modal = ModalLifecycle::new();
        let stale_shown = modal.request_open();
        let hidden = modal.request_close().unwrap();
        assert!(modal.hide_elapsed(hidden));

        assert!(!modal.shown_elapsed(stale_shown));
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
    }
}
