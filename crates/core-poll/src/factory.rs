use std::sync::Arc;

use snowpoll_core_types::{Bag, NodeId, PollParameters};
use snowpoll_metrics::Registry;

use crate::metrics::Metrics;
use crate::poll::EarlyTermPoll;
use crate::{Clock, Error, Poll, SystemClock};

/// Stamps out polls sharing one set of parameters and metrics.
///
/// Decorators wrap at this seam, so instrumented and plain polls compose
/// the same way; see [`TracedFactory`](crate::TracedFactory).
pub trait Factory {
    /// The poll type this factory produces.
    type Poll: Poll;

    /// Create a poll over the multiset of validators that were queried.
    fn new_poll(&self, outstanding: Bag<NodeId>) -> Self::Poll;
}

/// Factory for [`EarlyTermPoll`]s.
///
/// Registers the per-reason metrics once at construction; every poll it
/// stamps shares them, along with the parameters and the clock.
#[derive(Clone, Debug)]
pub struct EarlyTermFactory {
    params: Arc<PollParameters>,
    metrics: Arc<Metrics>,
    clock: Arc<dyn Clock>,
}

impl EarlyTermFactory {
    /// Build a factory observing durations on the system clock.
    ///
    /// Fails only if `registry` rejects one of the metric vectors, e.g.
    /// when a second factory registers against the same registry.
    pub fn new(params: PollParameters, registry: &Registry) -> Result<Self, Error> {
        Self::with_clock(params, registry, Arc::new(SystemClock))
    }

    /// Build a factory measuring durations on the given clock.
    pub fn with_clock(
        params: PollParameters,
        registry: &Registry,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Error> {
        let metrics = Metrics::register(registry)?;

        Ok(Self {
            params: Arc::new(params),
            metrics: Arc::new(metrics),
            clock,
        })
    }
}

impl Factory for EarlyTermFactory {
    type Poll = EarlyTermPoll;

    fn new_poll(&self, outstanding: Bag<NodeId>) -> EarlyTermPoll {
        EarlyTermPoll::new(
            outstanding,
            Arc::clone(&self.params),
            Arc::clone(&self.metrics),
            Arc::clone(&self.clock),
        )
    }
}
