use thiserror::Error;

/// The fixed error taxonomy for symbol construction.
///
/// All validity checks are local to the pipeline stage that performs them; an
/// error short-circuits the pipeline and no partial symbol is ever returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrError {
    /// No legal version (for the requested error level, within the requested
    /// range) can hold the encoded message.
    #[error("message requires {needed} bits but the largest eligible version only holds {available}")]
    DataTooLarge { needed: usize, available: usize },

    /// The user requested a specific version that cannot hold the message.
    #[error("version does not support the given data: needs {needed} bits, version holds {available}")]
    VersionDoesNotSupportGivenData { needed: usize, available: usize },

    /// The (version, error-level) combination is disallowed by the standard,
    /// e.g. Micro-QR M1 with any explicit level, or M2/M3 with level Q.
    #[error("version and error level combination is not supported")]
    VersionAndErrorLevelNotSupported,
}
