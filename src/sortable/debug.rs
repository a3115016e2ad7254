use itertools::Itertools as _;

use super::types::{Outcome, Rejection};
use super::SortableBoard;

impl<T, D> SortableBoard<T, D> {
    /// Logs a state transition, and keeps it in the ring buffer if enabled.
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message);
    }

    /// Logs why `event` was ignored and returns the matching [`Outcome`].
    pub(super) fn ignore(&mut self, event: &'static str, rejection: Rejection) -> Outcome {
        log::trace!("{event} ignored: {rejection}");
        if self.options.debug_event_log {
            self.push_debug_log_line(format!("{event} ignored: {rejection}"));
        }
        Outcome::Ignored(rejection)
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[drag {}] {}", self.session.current_id(), message));
    }

    /// Recorded transitions, oldest first. Empty unless
    /// [`super::SortableOptions::debug_event_log`] is set.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    /// One line per container: `container#1 [a, b, c] drop_enabled=true`.
    pub fn debug_summary(&self) -> String
    where
        T: std::fmt::Debug,
    {
        self.containers
            .values()
            .map(|container| {
                let items = (0..container.len())
                    .filter_map(|index| container.get(index))
                    .map(|item| format!("{item:?}"))
                    .join(", ");
                format!(
                    "{} [{items}] drop_enabled={}",
                    container.id(),
                    container.drop_enabled()
                )
            })
            .join("\n")
    }
}
