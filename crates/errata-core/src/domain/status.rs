//! Status: success or an [`Error`], without a payload.

use super::error::Error;
use super::outcome::Outcome;

/// Success is defined as `error == Error::NONE`.
///
/// `Status::failure(Error::NONE)` is therefore a success: there is no
/// normalization here, unlike [`Outcome::failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    error: Error,
}

impl Status {
    pub const fn success() -> Self {
        Self { error: Error::NONE }
    }

    pub const fn failure(error: Error) -> Self {
        Self { error }
    }

    pub fn is_success(&self) -> bool {
        self.error == Error::NONE
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn into_result(self) -> Result<(), Error> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::success()
    }
}

impl From<Error> for Status {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Outcome<T>> for Status {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_status()
    }
}

impl From<Result<(), Error>> for Status {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_error() {
        let status = Status::success();
        assert!(status.is_success());
        assert!(!status.is_failure());
        assert_eq!(*status.error(), Error::NONE);
    }

    #[test]
    fn failure_keeps_its_error() {
        let status = Status::failure(Error::NULL_VALUE);
        assert!(status.is_failure());
        assert_eq!(*status.error(), Error::NULL_VALUE);
    }

    #[test]
    fn failure_with_none_is_success() {
        assert!(Status::failure(Error::NONE).is_success());
        assert!(Status::failure(Error::new("", "").unwrap()).is_success());
    }

    #[test]
    fn default_is_success() {
        assert_eq!(Status::default(), Status::success());
    }

    #[test]
    fn converts_from_error_and_result() {
        let status: Status = Error::UNKNOWN.into();
        assert!(status.is_failure());

        let status: Status = Ok(()).into();
        assert!(status.is_success());
    }

    #[test]
    fn into_result_round_trips_the_error() {
        assert_eq!(Status::success().into_result(), Ok(()));
        assert_eq!(
            Status::failure(Error::UNKNOWN).into_result(),
            Err(Error::UNKNOWN)
        );
    }
}
