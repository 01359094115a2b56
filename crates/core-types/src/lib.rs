#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

//! Core types consumed by the snowpoll poll state machine: opaque
//! identifiers, the counted vote multiset, and the poll parameters.

mod bag;
pub use bag::Bag;

mod ids;
pub use ids::{NodeId, VoteId};

mod params;
pub use params::{ParametersError, PollParameters};
