use core::fmt;

const NODE_ID_LEN: usize = 20;
const VOTE_ID_LEN: usize = 32;

/// Identifier of a validator in the sampled set.
///
/// Opaque fixed-width bytes. Equality, ordering, and hashing are the only
/// operations the poll relies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId([u8; NODE_ID_LEN]);

impl NodeId {
    /// Width of a node id in bytes.
    pub const LEN: usize = NODE_ID_LEN;

    /// Wrap raw bytes as a node id.
    pub const fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this id.
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Identifier of the value a validator voted for, typically a block hash.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteId([u8; VOTE_ID_LEN]);

impl VoteId {
    /// Width of a vote id in bytes.
    pub const LEN: usize = VOTE_ID_LEN;

    /// Wrap raw bytes as a vote id.
    pub const fn new(bytes: [u8; VOTE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this id.
    pub const fn as_bytes(&self) -> &[u8; VOTE_ID_LEN] {
        &self.0
    }
}

impl From<[u8; VOTE_ID_LEN]> for VoteId {
    fn from(bytes: [u8; VOTE_ID_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
