use thiserror::Error;

/// Failures raised while constructing a poll factory.
///
/// Everything past construction is total: unknown validators, duplicate
/// responses, and calls after termination degrade to no-ops.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry rejected the `poll_count` counter vector.
    #[error("failed to register poll_count vector metrics")]
    CountMetricsRegistration(#[source] snowpoll_metrics::Error),

    /// The registry rejected the `poll_duration` gauge vector.
    #[error("failed to register poll_duration vector metrics")]
    DurationMetricsRegistration(#[source] snowpoll_metrics::Error),
}
