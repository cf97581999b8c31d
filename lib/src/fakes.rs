//! Stand-ins for the network and the terminal.

use std::{
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::time::sleep;

use crate::{Outcome, Probe, ProbeError, Report, Verdict};

/// Answers from fixed address sets instead of asking Gmail
#[derive(Default)]
pub(crate) struct Oracle {
    valid: HashSet<String>,
    unreachable: HashSet<String>,
    panicking: HashSet<String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl Oracle {
    pub(crate) fn valid(mut self, addresses: &[&str]) -> Self {
        self.valid.extend(addresses.iter().map(|a| a.to_string()));
        self
    }

    pub(crate) fn unreachable(mut self, addresses: &[&str]) -> Self {
        self.unreachable.extend(addresses.iter().map(|a| a.to_string()));
        self
    }

    pub(crate) fn panicking(mut self, addresses: &[&str]) -> Self {
        self.panicking.extend(addresses.iter().map(|a| a.to_string()));
        self
    }

    pub(crate) fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Probe for Oracle {
    async fn verify(&self, address: &str) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if self.panicking.contains(address) {
            panic!("probe blew up on {address}");
        } else if self.unreachable.contains(address) {
            Outcome::Error(ProbeError::Transport("connection reset by peer".into()))
        } else if self.valid.contains(address) {
            Outcome::Valid
        } else {
            Outcome::Invalid
        }
    }
}

/// Keeps every verdict in arrival order
#[derive(Default)]
pub(crate) struct Recorder(Mutex<Vec<Verdict>>);

impl Recorder {
    pub(crate) fn verdicts(&self) -> Vec<Verdict> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn addresses(&self) -> Vec<String> {
        self.verdicts().into_iter().map(|v| v.address).collect()
    }

    /// Addresses whose outcome matches `predicate`, sorted
    pub(crate) fn matching(&self, predicate: impl Fn(&Outcome) -> bool) -> Vec<String> {
        let mut addresses: Vec<_> = self
            .verdicts()
            .into_iter()
            .filter(|v| predicate(&v.outcome))
            .map(|v| v.address)
            .collect();
        addresses.sort();
        addresses
    }
}

impl Report for Recorder {
    fn report(&self, verdict: &Verdict) {
        self.0.lock().unwrap().push(verdict.clone());
    }
}
