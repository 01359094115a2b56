use thiserror::Error;

/// Thresholds governing when a poll may terminate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollParameters {
    /// Minimum vote count for an id to count as the preferred outcome.
    pub alpha_preference: usize,

    /// Minimum vote count for an id to count as a confidence-building
    /// outcome.
    pub alpha_confidence: usize,

    /// Ascending confidence thresholds enabling error-driven termination.
    /// When empty, the poll uses the single-threshold predicate over
    /// `alpha_preference` and `alpha_confidence`.
    pub confidences: Vec<usize>,
}

impl PollParameters {
    /// Parameters selecting the single-threshold predicate.
    pub const fn new(alpha_preference: usize, alpha_confidence: usize) -> Self {
        Self {
            alpha_preference,
            alpha_confidence,
            confidences: Vec::new(),
        }
    }

    /// Switch to error-driven termination with the given thresholds.
    pub fn with_confidences(mut self, confidences: Vec<usize>) -> Self {
        self.confidences = confidences;
        self
    }

    /// Check the constraints the termination predicate assumes.
    ///
    /// Runs at configuration time; a factory built from unverified
    /// parameters may terminate polls at nonsensical points but will not
    /// otherwise misbehave.
    pub fn verify(&self) -> Result<(), ParametersError> {
        if self.alpha_preference == 0 {
            return Err(ParametersError::ZeroAlphaPreference);
        }

        if self.alpha_confidence < self.alpha_preference {
            return Err(ParametersError::AlphaConfidenceBelowPreference {
                alpha_preference: self.alpha_preference,
                alpha_confidence: self.alpha_confidence,
            });
        }

        if let (Some(&first), Some(&last)) = (self.confidences.first(), self.confidences.last()) {
            if first < self.alpha_preference {
                return Err(ParametersError::ConfidencesBelowPreference {
                    first,
                    alpha_preference: self.alpha_preference,
                });
            }

            if last < self.alpha_confidence {
                return Err(ParametersError::ConfidencesBelowConfidence {
                    last,
                    alpha_confidence: self.alpha_confidence,
                });
            }

            if self.confidences.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(ParametersError::ConfidencesNotAscending(
                    self.confidences.clone(),
                ));
            }
        }

        Ok(())
    }
}

/// Rejected poll parameters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParametersError {
    /// `alpha_preference` must be positive.
    #[error("alpha_preference must be at least 1")]
    ZeroAlphaPreference,

    /// `alpha_confidence` must not be below `alpha_preference`.
    #[error(
        "alpha_confidence ({alpha_confidence}) must be at least alpha_preference ({alpha_preference})"
    )]
    AlphaConfidenceBelowPreference {
        /// The configured preference quorum.
        alpha_preference: usize,
        /// The configured confidence quorum.
        alpha_confidence: usize,
    },

    /// The lowest confidence threshold must cover `alpha_preference`.
    #[error("confidences[0] ({first}) must be at least alpha_preference ({alpha_preference})")]
    ConfidencesBelowPreference {
        /// The lowest configured threshold.
        first: usize,
        /// The configured preference quorum.
        alpha_preference: usize,
    },

    /// The highest confidence threshold must cover `alpha_confidence`.
    #[error("last confidence ({last}) must be at least alpha_confidence ({alpha_confidence})")]
    ConfidencesBelowConfidence {
        /// The highest configured threshold.
        last: usize,
        /// The configured confidence quorum.
        alpha_confidence: usize,
    },

    /// Confidence thresholds must be strictly ascending.
    #[error("confidences must be strictly ascending, got {0:?}")]
    ConfidencesNotAscending(Vec<usize>),
}
