use std::sync::Arc;

use tracing::{debug, warn};

use crate::{Outcome, Probe, Report, Verdict, queue::Consumer};

/// One member of the pool. Lives until the queue is closed and drained.
pub(crate) struct Worker<P, R> {
    id: usize,
    queue: Consumer,
    probe: Arc<P>,
    reporter: Arc<R>,
}

impl<P: Probe, R: Report> Worker<P, R> {
    pub(crate) fn new(id: usize, queue: Consumer, probe: Arc<P>, reporter: Arc<R>) -> Self {
        Self {
            id,
            queue,
            probe,
            reporter,
        }
    }

    /// Process addresses until there are none left,
    /// returns how many were handled.
    pub(crate) async fn run(self) -> usize {
        debug!(worker = self.id, "worker started");

        let mut processed = 0;
        while let Some(address) = self.queue.pop().await {
            let outcome = self.probe.verify(&address).await;
            if let Outcome::Error(error) = &outcome {
                warn!(worker = self.id, %address, %error, "error verifying email address");
            }

            self.reporter.report(&Verdict { address, outcome });
            processed += 1;
        }

        debug!(worker = self.id, processed, "queue drained, worker exiting");
        processed
    }
}
