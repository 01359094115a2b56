#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

//! Early-termination poll core.
//!
//! A [`Poll`] aggregates the responses of one query round over a fixed
//! multiset of sampled validators and decides, without any DAG traversal,
//! when the round has gathered enough information to conclude. Polls are
//! stamped by a [`Factory`] carrying the shared thresholds, metrics, and
//! clock; the owning engine feeds in [`vote`](Poll::vote) and
//! [`drop`](Poll::drop) events, checks [`finished`](Poll::finished) after
//! each, and consumes [`result`](Poll::result) once it reports true.

mod clock;
pub use clock::{Clock, ManualClock, SystemClock};

mod error;
pub use error::Error;

mod factory;
pub use factory::{EarlyTermFactory, Factory};

mod metrics;

mod poll;
pub use poll::{EarlyTermPoll, Poll};

mod reason;
pub use reason::TerminationReason;

mod traced;
pub use traced::{TracedFactory, TracedPoll};
