//! Error: an immutable (code, message) pair stored inline.
//!
//! `Error` never touches the heap until a caller asks for `code()` or
//! `message()` as a `String`. It is `Copy`, so every `Status`/`Outcome`
//! holding one owns its own copy.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::text::FixedText;
use crate::error::TextError;

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "ErrorRecord", try_from = "ErrorRecord")]
pub struct Error {
    code_len: usize,
    code: FixedText,
    message_len: usize,
    message: FixedText,
}

impl Error {
    /// The "no error" sentinel. Any error with an empty code and an empty
    /// message compares equal to it.
    pub const NONE: Error = Error::from_static("", "");

    pub const UNKNOWN: Error = Error::from_static(
        "Error.Unknown",
        "An unknown or unspecified error has occurred.",
    );

    pub const NULL_VALUE: Error = Error::from_static("Error.NullValue", "Value cannot be null.");

    /// Carries a [`TextError`] as data once it has crossed into a
    /// `Status`/`Outcome`.
    pub const CAPACITY_EXCEEDED: Error = Error::from_static(
        "Error.CapacityExceeded",
        "Text exceeds the inline capacity of 150 characters.",
    );

    pub fn new(code: &str, message: &str) -> Result<Self, TextError> {
        let (code, code_len) = FixedText::create(code)?;
        let (message, message_len) = FixedText::create(message)?;
        Ok(Self {
            code_len,
            code,
            message_len,
            message,
        })
    }

    /// Const constructor for error catalogs.
    ///
    /// ```
    /// use errata_core::Error;
    ///
    /// const NOT_FOUND: Error = Error::from_static("User.NotFound", "No such user.");
    /// assert_eq!(NOT_FOUND.code(), "User.NotFound");
    /// ```
    ///
    /// Any UTF-8 literal works; a string past the capacity fails to compile.
    pub const fn from_static(code: &'static str, message: &'static str) -> Self {
        let (code, code_len) = FixedText::from_static_str(code);
        let (message, message_len) = FixedText::from_static_str(message);
        Self {
            code_len,
            code,
            message_len,
            message,
        }
    }

    pub fn code(&self) -> String {
        self.code_units().iter().collect()
    }

    pub fn message(&self) -> String {
        self.message_units().iter().collect()
    }

    pub fn is_none(&self) -> bool {
        self.code_len == 0 && self.message_len == 0
    }

    /// Compare the code without decoding it.
    pub fn has_code(&self, code: &str) -> bool {
        self.code_units().iter().copied().eq(code.chars())
    }

    fn code_units(&self) -> &[char] {
        self.code.prefix(self.code_len)
    }

    fn message_units(&self) -> &[char] {
        self.message.prefix(self.message_len)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code_units() == other.code_units() && self.message_units() == other.message_units()
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code_units().hash(state);
        self.message_units().hash(state);
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("code", &self.code())
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message_len == 0 {
            write!(f, "{}", self.code())
        } else {
            write!(f, "{}: {}", self.code(), self.message())
        }
    }
}

impl std::error::Error for Error {}

impl From<TextError> for Error {
    fn from(_: TextError) -> Self {
        Error::CAPACITY_EXCEEDED
    }
}

/// Wire shape of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub code: String,
    pub message: String,
}

impl From<Error> for ErrorRecord {
    fn from(error: Error) -> Self {
        Self {
            code: error.code(),
            message: error.message(),
        }
    }
}

impl TryFrom<ErrorRecord> for Error {
    type Error = TextError;

    fn try_from(record: ErrorRecord) -> Result<Self, Self::Error> {
        Error::new(&record.code, &record.message)
    }
}
