use std::{num::NonZeroUsize, sync::Arc};

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::{
    Error, Probe, Report, Result,
    queue::{self, DEFAULT_QUEUE_CAPACITY, Producer},
    worker::Worker,
};

pub const DEFAULT_WORKERS: usize = 2;

/// Runs a fixed pool of workers over a bounded queue of addresses
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    workers: NonZeroUsize,
    capacity: NonZeroUsize,
}

impl Dispatcher {
    /// Pool of `workers` fed through a queue of [`DEFAULT_QUEUE_CAPACITY`]
    pub fn new(workers: usize) -> Result<Self> {
        Self::with_capacity(workers, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(workers: usize, capacity: usize) -> Result<Self> {
        Ok(Self {
            workers: NonZeroUsize::new(workers).ok_or(Error::InvalidPoolSize(workers))?,
            capacity: NonZeroUsize::new(capacity).ok_or(Error::InvalidQueueCapacity(capacity))?,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Check every address and report each verdict through `reporter`.
    ///
    /// Returns once all workers have exited, with the number of addresses
    /// processed. Addresses are enqueued in order, but verdicts may arrive in
    /// any order when more than one worker is running.
    pub async fn run<I, P, R>(&self, addresses: I, probe: Arc<P>, reporter: Arc<R>) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        P: Probe,
        R: Report,
    {
        let (producer, consumer) = queue::bounded(self.capacity);

        let mut pool = JoinSet::new();
        for id in 0..self.workers.get() {
            let worker = Worker::new(id, consumer.clone(), Arc::clone(&probe), Arc::clone(&reporter));
            pool.spawn(worker.run());
        }
        drop(consumer);

        let fed = feed(producer, addresses).await;
        // a dead worker explains a disconnected queue, so it is reported first
        let processed = join(pool).await?;
        fed?;
        Ok(processed)
    }
}

/// Enqueue all addresses, then close the queue
async fn feed<I>(producer: Producer, addresses: I) -> Result
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    for address in addresses {
        let address = address.into();
        debug!(%address, "adding to task queue");
        producer.push(address).await?;
    }
    producer.close();
    Ok(())
}

/// Wait for every worker, even if one of them failed
async fn join(mut pool: JoinSet<usize>) -> Result<usize> {
    let mut processed = 0;
    let mut failure = None;

    while let Some(joined) = pool.join_next().await {
        match joined {
            Ok(count) => processed += count,
            Err(e) => {
                error!(error = %e, "worker terminated abnormally");
                failure.get_or_insert(e);
            }
        }
    }

    match failure {
        Some(e) => Err(Error::Worker(e)),
        None => Ok(processed),
    }
}
