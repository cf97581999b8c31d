//! Bounded hand-off of addresses from the dispatcher to the workers.
//!
//! There is exactly one [`Producer`] and any number of [`Consumer`] clones.
//! Pushing waits while the queue is full and popping waits while it is
//! empty. Closing consumes the producer, so nothing can be enqueued
//! afterwards:
//!
//! ```compile_fail
//! # async fn demo() {
//! let capacity = std::num::NonZeroUsize::new(1).unwrap();
//! let (producer, _consumer) = gverify_lib::queue::bounded(capacity);
//! producer.close();
//! producer.push("late@gmail.com".into()).await.unwrap();
//! # }
//! ```

use std::{num::NonZeroUsize, sync::Arc};

use tokio::sync::{Mutex, mpsc};

use crate::{Error, Result};

pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Create a queue holding at most `capacity` addresses
pub fn bounded(capacity: NonZeroUsize) -> (Producer, Consumer) {
    let (sender, receiver) = mpsc::channel(capacity.get());
    (
        Producer { sender },
        Consumer {
            receiver: Arc::new(Mutex::new(receiver)),
        },
    )
}

/// Sending half, owned by the dispatcher
#[derive(Debug)]
pub struct Producer {
    sender: mpsc::Sender<String>,
}

impl Producer {
    /// Enqueue an address, waiting for a free slot if the queue is full.
    ///
    /// # Errors
    ///
    /// Fails if all consumers have been dropped, the address is handed back
    /// inside the error.
    pub async fn push(&self, address: String) -> Result {
        self.sender
            .send(address)
            .await
            .map_err(|mpsc::error::SendError(address)| Error::QueueDisconnected(address))
    }

    /// Signal that no more addresses will arrive.
    /// Addresses already in the queue are still delivered.
    pub fn close(self) {
        drop(self.sender);
    }
}

/// Receiving half, cloned once per worker
#[derive(Debug, Clone)]
pub struct Consumer {
    receiver: Arc<Mutex<mpsc::Receiver<String>>>,
}

impl Consumer {
    /// Take the next address, or `None` once the queue is closed and drained
    pub async fn pop(&self) -> Option<String> {
        self.receiver.lock().await.recv().await
    }
}
