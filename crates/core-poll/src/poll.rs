use core::fmt;
use std::sync::Arc;
use std::time::Instant;

use snowpoll_core_types::{Bag, NodeId, PollParameters, VoteId};

use crate::metrics::Metrics;
use crate::{Clock, TerminationReason};

/// One round of querying a sampled validator set for its preference.
///
/// The owning engine serializes access: it feeds in [`vote`](Poll::vote)
/// and [`drop`](Poll::drop) as responses arrive, checks
/// [`finished`](Poll::finished) after every mutation, and consumes
/// [`result`](Poll::result) on the first true.
pub trait Poll: fmt::Display {
    /// Record `validator`'s response as a vote for `vote`.
    ///
    /// Only the first response from a validator counts; later votes by the
    /// same validator, votes from validators that were never queried, and
    /// votes arriving after termination are ignored.
    fn vote(&mut self, validator: NodeId, vote: VoteId);

    /// Give up on ever receiving a response from `validator`.
    fn drop(&mut self, validator: NodeId);

    /// Whether the poll has gathered enough information to conclude.
    ///
    /// The answer latches: once true it stays true, and the poll stops
    /// mutating.
    fn finished(&mut self) -> bool;

    /// Why the poll terminated, once it has.
    fn finish_reason(&self) -> Option<TerminationReason>;

    /// Snapshot of the accumulated tally.
    fn result(&self) -> Bag<VoteId>;

    /// Render the outstanding validators and the tally, with `prefix`
    /// prepended to continuation lines.
    fn prefixed_string(&self, prefix: &str) -> String;
}

/// Poll that terminates as soon as the still-outstanding validators can no
/// longer change its outcome.
///
/// The bound is not tight: it is the earliest conclusion reachable without
/// traversing the DAG, not the earliest conclusion possible.
#[derive(Debug)]
pub struct EarlyTermPoll {
    votes: Bag<VoteId>,
    outstanding: Bag<NodeId>,
    params: Arc<PollParameters>,
    metrics: Arc<Metrics>,
    clock: Arc<dyn Clock>,
    start: Instant,
    finished: Option<TerminationReason>,
}

impl EarlyTermPoll {
    pub(crate) fn new(
        outstanding: Bag<NodeId>,
        params: Arc<PollParameters>,
        metrics: Arc<Metrics>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let start = clock.now();

        Self {
            votes: Bag::new(),
            outstanding,
            params,
            metrics,
            clock,
            start,
            finished: None,
        }
    }

    /// Number of validators still being waited on.
    pub fn remaining(&self) -> usize {
        self.outstanding.len()
    }

    /// Evaluate the termination predicate against the current tally.
    ///
    /// Rule order matters: a higher-information reason must not be masked
    /// by a more general one, so exhaustion and early failure are checked
    /// before either threshold branch.
    fn termination_reason(&self) -> Option<TerminationReason> {
        let remaining = self.outstanding.len();
        if remaining == 0 {
            // No more responses can arrive.
            return Some(TerminationReason::Exhausted);
        }

        let received = self.votes.len();
        let max_possible = received + remaining;
        if max_possible < self.params.alpha_preference {
            // Even a unanimous remainder cannot reach a preference quorum.
            return Some(TerminationReason::EarlyFail);
        }

        let freq = self.votes.mode().map_or(0, |(_, freq)| freq);

        if !self.params.confidences.is_empty() {
            return self.error_driven_reason(freq, max_possible);
        }

        if freq >= self.params.alpha_preference && max_possible < self.params.alpha_confidence {
            // A preferred id exists but confidence is out of reach.
            return Some(TerminationReason::EarlyAlphaPreference);
        }

        if freq >= self.params.alpha_confidence {
            return Some(TerminationReason::EarlyAlphaConfidence);
        }

        None
    }

    /// The predicate over the ascending `confidences` thresholds.
    ///
    /// The caller has already ruled out exhaustion and early failure and
    /// guarantees `confidences` is non-empty.
    fn error_driven_reason(&self, freq: usize, max_possible: usize) -> Option<TerminationReason> {
        let confidences = &self.params.confidences;

        let top = confidences.last().copied()?;
        if freq >= top {
            return Some(TerminationReason::EarlyAlphaConfidence);
        }

        if freq < self.params.alpha_preference {
            return None;
        }

        let lowest = confidences.first().copied()?;
        if max_possible < lowest {
            // Preference stands, but every threshold is out of reach.
            return Some(TerminationReason::EarlyAlphaPreference);
        }

        // Stuck between adjacent thresholds: the one reached cannot be
        // upgraded to the next.
        for pair in confidences.windows(2) {
            if freq >= pair[0] && max_possible < pair[1] {
                return Some(TerminationReason::EarlyAlphaPreference);
            }
        }

        None
    }
}

impl Poll for EarlyTermPoll {
    fn vote(&mut self, validator: NodeId, vote: VoteId) {
        if self.finished.is_some() {
            return;
        }

        // A validator responds at most once; its full multiplicity in the
        // sample backs the vote.
        let count = self.outstanding.remove(&validator);
        self.votes.add_count(vote, count);
    }

    fn drop(&mut self, validator: NodeId) {
        if self.finished.is_some() {
            return;
        }

        self.outstanding.remove(&validator);
    }

    fn finished(&mut self) -> bool {
        if self.finished.is_some() {
            return true;
        }

        let Some(reason) = self.termination_reason() else {
            return false;
        };

        self.finished = Some(reason);
        self.metrics.observe(reason, self.clock.now() - self.start);
        true
    }

    fn finish_reason(&self) -> Option<TerminationReason> {
        self.finished
    }

    fn result(&self) -> Bag<VoteId> {
        self.votes.clone()
    }

    fn prefixed_string(&self, prefix: &str) -> String {
        format!(
            "waiting on {}\n{prefix}received {}",
            self.outstanding.prefixed_string(prefix),
            self.votes.prefixed_string(prefix),
        )
    }
}

impl fmt::Display for EarlyTermPoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixed_string(""))
    }
}
