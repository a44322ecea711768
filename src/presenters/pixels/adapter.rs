use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use std::sync::Mutex;

/// Hands render completions from the worker thread to the GUI thread.
///
/// Keeps only the most recent event; the GUI polls once per redraw.
#[derive(Default)]
pub struct FrameMailbox {
    latest: Mutex<Option<RenderEvent>>,
}

impl FrameMailbox {
    #[must_use]
    pub fn take(&self) -> Option<RenderEvent> {
        self.latest.lock().unwrap().take()
    }
}

impl RenderPresenterPort for FrameMailbox {
    fn present(&self, event: RenderEvent) {
        *self.latest.lock().unwrap() = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::render::RenderError;

    fn error_event(generation: u64) -> RenderEvent {
        RenderEvent::Error(RenderError {
            generation,
            message: "test".to_string(),
        })
    }

    #[test]
    fn test_take_drains_the_mailbox() {
        let mailbox = FrameMailbox::default();
        mailbox.present(error_event(1));

        assert!(mailbox.take().is_some());
        assert!(mailbox.take().is_none());
    }

    #[test]
    fn test_newer_event_replaces_older() {
        let mailbox = FrameMailbox::default();
        mailbox.present(error_event(1));
        mailbox.present(error_event(2));

        match mailbox.take() {
            Some(RenderEvent::Error(err)) => assert_eq!(err.generation, 2),
            other => panic!("expected the newer error event, got {:?}", other),
        }
    }
}
