use core::fmt;
use std::time::Duration;

use snowpoll_metrics::{GaugeVec, IntCounterVec, Opts, Registry};

use crate::{Error, TerminationReason};

const REASON_LABEL: &str = "reason";

/// Terminated-poll observations, labeled by termination reason.
///
/// `poll_duration` accumulates nanoseconds additively rather than sampling
/// a histogram; operators difference it over time, alongside `poll_count`.
pub(crate) struct Metrics {
    count: IntCounterVec,
    duration: GaugeVec,
}

impl Metrics {
    /// Build and register the two metric vectors, once per factory.
    pub(crate) fn register(registry: &Registry) -> Result<Self, Error> {
        let count = IntCounterVec::new(
            Opts::new("poll_count", "Number of terminated polls by reason"),
            &[REASON_LABEL],
        )
        .map_err(Error::CountMetricsRegistration)?;
        registry
            .register(Box::new(count.clone()))
            .map_err(Error::CountMetricsRegistration)?;

        let duration = GaugeVec::new(
            Opts::new(
                "poll_duration",
                "Time (in ns) polls took to complete, by reason",
            ),
            &[REASON_LABEL],
        )
        .map_err(Error::DurationMetricsRegistration)?;
        registry
            .register(Box::new(duration.clone()))
            .map_err(Error::DurationMetricsRegistration)?;

        Ok(Self { count, duration })
    }

    /// Record one terminated poll.
    pub(crate) fn observe(&self, reason: TerminationReason, elapsed: Duration) {
        let labels = [reason.as_str()];
        self.duration
            .with_label_values(&labels)
            .add(elapsed.as_nanos() as f64);
        self.count.with_label_values(&labels).inc();
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}
