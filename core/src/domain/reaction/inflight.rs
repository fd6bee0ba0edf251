use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use tokio::sync::watch;

/// Single-flight table keyed by cache key.
///
/// The first caller for a key becomes the [`Leader`] and does the work; callers
/// arriving while it runs become [`Follower`]s and receive the leader's result
/// instead of repeating the work. A key lives in the table only while its leader
/// is alive.
#[derive(Debug)]
pub struct InflightTable<T> {
    flights: Mutex<HashMap<String, watch::Receiver<Option<T>>>>,
}

pub enum Flight<'a, T> {
    Leader(Leader<'a, T>),
    Follower(Follower<T>),
}

pub struct Leader<'a, T> {
    table: &'a InflightTable<T>,
    key: String,
    sender: watch::Sender<Option<T>>,
}

pub struct Follower<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> Default for InflightTable<T> {
    fn default() -> Self {
        Self {
            flights: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Clone> InflightTable<T> {
    pub fn join(&self, key: &str) -> Flight<'_, T> {
        let mut flights = self.flights.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(receiver) = flights.get(key) {
            return Flight::Follower(Follower {
                receiver: receiver.clone(),
            });
        }

        let (sender, receiver) = watch::channel(None);
        flights.insert(key.to_string(), receiver);

        Flight::Leader(Leader {
            table: self,
            key: key.to_string(),
            sender,
        })
    }

    pub fn len(&self) -> usize {
        self.flights
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Leader<'_, T> {
    /// Hands `value` to every follower and retires the key.
    pub fn complete(self, value: T) {
        self.sender.send_replace(Some(value));
    }
}

impl<T> Drop for Leader<'_, T> {
    fn drop(&mut self) {
        self.table
            .flights
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl<T: Clone> Follower<T> {
    /// Waits for the leader's result. `None` when the leader was dropped before
    /// completing, e.g. because its request was cancelled.
    pub async fn wait(mut self) -> Option<T> {
        self.receiver
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|value| value.clone())
    }
}
