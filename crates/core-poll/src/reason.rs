use core::fmt;

/// Why a poll stopped accepting responses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// Every queried validator has responded or been dropped.
    Exhausted,

    /// Too few responses can still arrive for any vote to reach
    /// `alpha_preference`.
    EarlyFail,

    /// Some vote reached `alpha_preference` but `alpha_confidence` is out
    /// of reach.
    EarlyAlphaPreference,

    /// Some vote reached `alpha_confidence`; no further response can
    /// overturn it.
    EarlyAlphaConfidence,
}

impl TerminationReason {
    /// All termination reasons.
    pub const ALL: [TerminationReason; 4] = [
        TerminationReason::Exhausted,
        TerminationReason::EarlyFail,
        TerminationReason::EarlyAlphaPreference,
        TerminationReason::EarlyAlphaConfidence,
    ];

    /// Label value for the `reason` dimension of the poll metrics.
    ///
    /// This is the only place reasons appear as strings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::EarlyFail => "early_fail",
            Self::EarlyAlphaPreference => "early_alpha_pref",
            Self::EarlyAlphaConfidence => "early_alpha_conf",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
