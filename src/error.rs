//!
//! Errors of the loading condition pipeline.
//!
//! # Examples
//! ```
//! use loadicator::error::{Error, StrErr};
//! //
//! // Use to return a fatal error with the origin in the message:
//! fn open(path: &str) -> Result<(), Error> {
//!     Err(Error::SourceUnavailable(StrErr::from(format!(
//!         "Ship.open | Unable to open file='{}'",
//!         path
//!     ))))
//! }
//! ```
///
/// Error wrapper for owned string and string literal.
#[repr(transparent)]
#[derive(Clone, PartialEq)]
pub struct StrErr(pub std::borrow::Cow<'static, str>);
//
//
impl std::fmt::Debug for StrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
//
//
impl std::fmt::Display for StrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
//
//
impl std::error::Error for StrErr {}
//
//
impl<T: Into<std::borrow::Cow<'static, str>>> From<T> for StrErr {
    fn from(err_str: T) -> Self {
        Self(err_str.into())
    }
}
///
/// Fatal failures of the acquisition and calculation phases.
///
/// Malformed rows are never reported here, they are dropped by the scanners.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    ///
    /// Required document or file can't be opened or read.
    SourceUnavailable(StrErr),
    ///
    /// Loading condition id is not 2 digits or outside of the known range.
    MalformedCondition(StrErr),
    ///
    /// Required structural marker is absent in the document.
    PatternNotFound(StrErr),
    ///
    /// Too few rows for the requested table lookup.
    InsufficientData(StrErr),
    ///
    /// Compartment can't be normalized.
    CompartmentResolution { id: String, cause: StrErr },
}
//
//
impl Error {
    ///
    /// Wraps `self` as the cause of compartment `id` failure.
    ///
    /// Already compartment-scoped errors are returned as is.
    pub fn for_compartment(self, id: impl Into<String>) -> Self {
        match self {
            Error::CompartmentResolution { .. } => self,
            Error::SourceUnavailable(cause)
            | Error::MalformedCondition(cause)
            | Error::PatternNotFound(cause)
            | Error::InsufficientData(cause) => Error::CompartmentResolution {
                id: id.into(),
                cause,
            },
        }
    }
    ///
    /// Short name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::SourceUnavailable(_) => "SourceUnavailable",
            Error::MalformedCondition(_) => "MalformedCondition",
            Error::PatternNotFound(_) => "PatternNotFound",
            Error::InsufficientData(_) => "InsufficientData",
            Error::CompartmentResolution { .. } => "CompartmentResolutionFailure",
        }
    }
}
//
//
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SourceUnavailable(cause)
            | Error::MalformedCondition(cause)
            | Error::PatternNotFound(cause)
            | Error::InsufficientData(cause) => write!(f, "{}: {}", self.kind(), cause),
            Error::CompartmentResolution { id, cause } => {
                write!(f, "{} of '{}': {}", self.kind(), id, cause)
            }
        }
    }
}
//
//
impl std::error::Error for Error {}
