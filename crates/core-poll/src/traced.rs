use core::fmt;

use snowpoll_core_types::{Bag, NodeId, VoteId};
use tracing::debug;

use crate::{Factory, Poll, TerminationReason};

/// Factory decorator that logs every interaction with the polls it stamps.
#[derive(Clone, Debug)]
pub struct TracedFactory<F> {
    name: String,
    inner: F,
}

impl<F> TracedFactory<F> {
    /// Decorate `inner`, tagging every event with `name`.
    pub fn new(name: impl Into<String>, inner: F) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }
}

impl<F: Factory> Factory for TracedFactory<F> {
    type Poll = TracedPoll<F::Poll>;

    fn new_poll(&self, outstanding: Bag<NodeId>) -> Self::Poll {
        debug!(poll = %self.name, queried = outstanding.len(), "new poll");

        TracedPoll {
            name: self.name.clone(),
            inner: self.inner.new_poll(outstanding),
        }
    }
}

/// Poll wrapper emitting a `tracing` event per call, produced by
/// [`TracedFactory`].
#[derive(Debug)]
pub struct TracedPoll<P> {
    name: String,
    inner: P,
}

impl<P: Poll> Poll for TracedPoll<P> {
    fn vote(&mut self, validator: NodeId, vote: VoteId) {
        debug!(poll = %self.name, %validator, %vote, "vote");
        self.inner.vote(validator, vote);
    }

    fn drop(&mut self, validator: NodeId) {
        debug!(poll = %self.name, %validator, "drop");
        self.inner.drop(validator);
    }

    fn finished(&mut self) -> bool {
        let finished = self.inner.finished();
        debug!(
            poll = %self.name,
            finished,
            reason = ?self.inner.finish_reason(),
            "finished check"
        );
        finished
    }

    fn finish_reason(&self) -> Option<TerminationReason> {
        self.inner.finish_reason()
    }

    fn result(&self) -> Bag<VoteId> {
        self.inner.result()
    }

    fn prefixed_string(&self, prefix: &str) -> String {
        self.inner.prefixed_string(prefix)
    }
}

impl<P: Poll> fmt::Display for TracedPoll<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
