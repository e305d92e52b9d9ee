//! Error types for the smy-engine crate.

/// Error type for all fallible operations in the smy-engine crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Series error.
    #[error(transparent)]
    Series(#[from] smy_series::SeriesError),

    /// Classification error.
    #[error(transparent)]
    Classify(#[from] smy_classify::ClassifyError),

    /// Selection error.
    #[error(transparent)]
    Select(#[from] smy_select::SelectError),

    /// Assembly error.
    #[error(transparent)]
    Assemble(#[from] smy_assemble::AssembleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let e = EngineError::InvalidConfig {
            reason: "bad".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn select_error_is_transparent() {
        let se = smy_select::SelectError::NoCandidates {
            month: smy_calendar::CalendarMonth::JANUARY,
        };
        let ee: EngineError = se.into();
        assert!(matches!(ee, EngineError::Select(_)));
        assert_eq!(ee.to_string(), "no candidate years for month 01");
    }

    #[test]
    fn from_series_error() {
        let ee: EngineError = smy_series::SeriesError::NoChannels.into();
        assert!(matches!(ee, EngineError::Series(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EngineError>();
    }
}
