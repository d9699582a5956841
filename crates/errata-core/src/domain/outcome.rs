//! Outcome model: a value on success, an [`Error`] on failure.
//!
//! The constructors keep two invariants that the type cannot express on its
//! own:
//! - a failure always carries a real error (`Error::NONE` becomes
//!   `Error::UNKNOWN`);
//! - a default-constructed outcome is a failure, never a success holding a
//!   default `T`.

use super::error::Error;
use super::reference::Ref;
use super::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    state: State<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(Error),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    pub fn failure(error: Error) -> Self {
        let error = if error.is_none() { Error::UNKNOWN } else { error };
        Self {
            state: State::Failure(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// `Error::NONE` on success.
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => &Error::NONE,
            State::Failure(error) => error,
        }
    }

    pub fn value_or_default(self, fallback: T) -> T {
        self.value_or_else(|| fallback)
    }

    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value_or_recover(|_| factory())
    }

    /// Like `value_or_else`, but the factory sees the error.
    pub fn value_or_recover<F>(self, handler: F) -> T
    where
        F: FnOnce(&Error) -> T,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => handler(&error),
        }
    }

    /// Drop the value, keep success/error. Lossless for the error.
    pub fn to_status(&self) -> Status {
        match &self.state {
            State::Success(_) => Status::success(),
            State::Failure(error) => Status::failure(*error),
        }
    }

    pub fn to_error(&self) -> Error {
        *self.error()
    }

    /// Lossy: a failure becomes an absent `Ref` and its error is discarded.
    /// Read [`Outcome::error`] first if it matters.
    pub fn to_ref(self) -> Ref<T> {
        match self.state {
            State::Success(value) => Ref::present(value),
            State::Failure(_) => Ref::none(),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }

    /// Take the raw value.
    ///
    /// # Panics
    /// On a failure. Only call this after checking [`Outcome::is_success`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => invalid_unwrap("called `Outcome::unwrap()` on a failure", &error),
        }
    }

    /// # Panics
    /// On a failure, with `msg` in the panic message.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => invalid_unwrap(msg, &error),
        }
    }
}

#[cold]
#[track_caller]
fn invalid_unwrap(msg: &str, error: &Error) -> ! {
    log::error!("invalid unwrap: {msg} (error={error})");
    panic!("{msg}: {error}")
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::failure(Error::UNKNOWN)
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error.into()),
        }
    }
}
