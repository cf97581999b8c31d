use crate::Verdict;

/// Sink receiving every verdict as soon as it is known.
///
/// Called concurrently from all workers, implementations must not
/// interleave the output of two verdicts.
pub trait Report: Send + Sync + 'static {
    fn report(&self, verdict: &Verdict);
}
