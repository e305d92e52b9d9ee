//! Error types for the smy-classify crate.

use smy_series::Channel;

use crate::parameter::Parameter;

/// Error type for all fallible operations in the smy-classify crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifyError {
    /// Returned when the series lacks a channel a tracked parameter reads.
    #[error("missing channel {channel} for parameter {parameter}")]
    MissingChannel {
        /// Parameter that needs the channel.
        parameter: Parameter,
        /// Channel that is absent.
        channel: Channel,
    },

    /// Series error.
    #[error(transparent)]
    Series(#[from] smy_series::SeriesError),
}
