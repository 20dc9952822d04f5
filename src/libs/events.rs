//! Change notifications published by the tracker.
//!
//! Each [`Tracker`](super::tracker::Tracker) owns one [`Subscribers`] list.
//! Handlers are called synchronously, in subscription order, with a shared
//! reference to the event. They never get access to the tracker itself, so
//! they cannot mutate it while a notification is being delivered.

use crate::db::activities::Activity;
use crate::db::tasks::Task;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// A task was saved for the first time.
    TaskAdded(Task),
    /// An already saved task was saved again.
    TaskChanged(Task),
    /// A task and its activities were removed; carries the old identifier.
    TaskDeleted(i64),
    /// The running task was started, replaced or dropped.
    RunningTaskChanged(Option<Task>),
    /// A checkpoint persisted the running interval.
    ActivityRecorded(Activity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&TrackerEvent)>;

#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, handler: impl FnMut(&TrackerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn publish(&mut self, event: &TrackerEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handlers_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let first = Rc::clone(&seen);
        subscribers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&seen);
        subscribers.subscribe(move |_| second.borrow_mut().push("second"));

        subscribers.publish(&TrackerEvent::RunningTaskChanged(None));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_handler_is_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::default();

        let counter = Rc::clone(&count);
        let id = subscribers.subscribe(move |_| *counter.borrow_mut() += 1);
        subscribers.publish(&TrackerEvent::TaskDeleted(1));
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.publish(&TrackerEvent::TaskDeleted(2));

        assert_eq!(*count.borrow(), 1);
    }
}
