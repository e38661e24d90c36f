//! Externally observable holder for the last committed export list.
//!
//! [`ExportChannel`] decouples consumers (the export trigger, status
//! displays) from [`SelectionStore`](super::SelectionStore) internals: they
//! read or subscribe here and never touch the selection map. The channel has
//! a single state, "holds latest value"; publishing replaces it wholesale.
//!
//! `Arc<RwLock<..>>` rather than `Rc<RefCell<..>>` so the channel can live
//! inside Leptos signals, whose default storage wants `Send + Sync`.

use std::sync::{Arc, RwLock, Weak};

use crate::models::DocId;

type Observer = Arc<dyn Fn(&[DocId]) + Send + Sync>;

#[derive(Default)]
struct Inner {
    current: Vec<DocId>,
    observers: Vec<(u64, Observer)>,
    next_id: u64,
}

/// Shared handle to the latest committed list of checked ids.
///
/// Clones share state. Writing happens only through `publish`, which is
/// crate-private and called exclusively by `SelectionStore::commit`.
#[derive(Clone, Default)]
pub struct ExportChannel {
    inner: Arc<RwLock<Inner>>,
}

impl ExportChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last published list; empty before the first commit.
    pub fn current(&self) -> Vec<DocId> {
        self.inner.read().unwrap().current.clone()
    }

    /// Register `observer`, invoking it immediately with the current list
    /// and again on every future publish.
    pub fn subscribe(&self, observer: impl Fn(&[DocId]) + Send + Sync + 'static) -> Subscription {
        let observer: Observer = Arc::new(observer);

        let (id, snapshot) = {
            let mut inner = self.inner.write().unwrap();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&observer)));
            (id, inner.current.clone())
        };

        // Deliver outside the lock so the observer may re-enter.
        observer(&snapshot);

        Subscription {
            channel: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Replace the held list and notify every observer.
    pub(crate) fn publish(&self, list: Vec<DocId>) {
        let (snapshot, observers) = {
            let mut inner = self.inner.write().unwrap();
            inner.current = list;
            let observers: Vec<Observer> = inner
                .observers
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            (inner.current.clone(), observers)
        };

        for observer in observers {
            observer(&snapshot);
        }
    }
}

/// Handle for cancelling a subscription.
///
/// Dropping the handle does not unsubscribe; cancellation is explicit and
/// idempotent, and never affects other observers.
pub struct Subscription {
    channel: Weak<RwLock<Inner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.channel.upgrade() {
            inner
                .write()
                .unwrap()
                .observers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_observer() -> (Arc<Mutex<Vec<Vec<DocId>>>>, impl Fn(&[DocId]) + Send + Sync + 'static)
    {
        let seen: Arc<Mutex<Vec<Vec<DocId>>>> = Arc::default();
        let sink = Arc::clone(&seen);
        (seen, move |list: &[DocId]| {
            sink.lock().unwrap().push(list.to_vec())
        })
    }

    fn ids(list: &[&str]) -> Vec<DocId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn current_is_empty_before_any_publish() {
        let channel = ExportChannel::new();
        assert!(channel.current().is_empty());
    }

    #[test]
    fn subscriber_receives_the_current_value_immediately() {
        let channel = ExportChannel::new();
        channel.publish(ids(&["a"]));

        let (seen, observer) = recording_observer();
        let _sub = channel.subscribe(observer);
        assert_eq!(*seen.lock().unwrap(), vec![ids(&["a"])]);
    }

    #[test]
    fn every_subscriber_sees_each_publish() {
        let channel = ExportChannel::new();
        let (first, observer_a) = recording_observer();
        let (second, observer_b) = recording_observer();
        let _sub_a = channel.subscribe(observer_a);
        let _sub_b = channel.subscribe(observer_b);

        channel.publish(ids(&["a", "c"]));

        assert_eq!(first.lock().unwrap().last().unwrap(), &ids(&["a", "c"]));
        assert_eq!(second.lock().unwrap().last().unwrap(), &ids(&["a", "c"]));
    }

    #[test]
    fn unsubscribing_one_observer_leaves_the_rest_delivering() {
        let channel = ExportChannel::new();
        let (first, observer_a) = recording_observer();
        let (second, observer_b) = recording_observer();
        let sub_a = channel.subscribe(observer_a);
        let _sub_b = channel.subscribe(observer_b);

        sub_a.unsubscribe();
        sub_a.unsubscribe(); // idempotent
        channel.publish(ids(&["b"]));

        assert_eq!(first.lock().unwrap().len(), 1); // only the initial delivery
        assert_eq!(second.lock().unwrap().len(), 2);
        assert_eq!(second.lock().unwrap().last().unwrap(), &ids(&["b"]));
    }

    #[test]
    fn publish_replaces_the_held_list_wholesale() {
        let channel = ExportChannel::new();
        channel.publish(ids(&["a", "b"]));
        channel.publish(ids(&["c"]));
        assert_eq!(channel.current(), ids(&["c"]));
    }

    #[test]
    fn observers_may_read_the_channel_reentrantly() {
        let channel = ExportChannel::new();
        let inner = channel.clone();
        let seen: Arc<Mutex<Vec<Vec<DocId>>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let _sub = channel.subscribe(move |_list| {
            sink.lock().unwrap().push(inner.current());
        });
        channel.publish(ids(&["a"]));

        assert_eq!(seen.lock().unwrap().last().unwrap(), &ids(&["a"]));
    }
}
