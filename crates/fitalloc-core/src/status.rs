//! Status codes returned by fallible allocator operations.

use core::fmt;

/// Outcome of an operation that reports success or an unspecified failure.
///
/// The execution environment exposes exactly these two codes. Operations
/// that need to say *why* they failed return a `Result` with a richer
/// error type and convert into a `Status` at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub enum Status {
    /// The operation completed.
    #[default]
    Success,
    /// The operation failed for an unspecified reason.
    ErrUnspec,
}

impl Status {
    /// Whether this is [`Status::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether this is [`Status::ErrUnspec`].
    pub const fn is_err(self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ErrUnspec => write!(f, "unspecified error"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Status {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::ErrUnspec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_success() {
        assert_eq!(Status::default(), Status::Success);
        assert!(Status::default().is_success());
    }

    #[test]
    fn from_result() {
        let ok: Result<u8, ()> = Ok(1);
        let err: Result<u8, ()> = Err(());
        assert_eq!(Status::from(ok), Status::Success);
        assert_eq!(Status::from(err), Status::ErrUnspec);
        assert!(Status::from(err).is_err());
    }
}
