//! Extension traits for lifting std types into this crate's algebra.

use crate::domain::error::Error;
use crate::domain::outcome::Outcome;
use crate::domain::reference::Ref;

pub trait RefExt<T> {
    fn into_ref(self) -> Ref<T>;
}

impl<T> RefExt<T> for Option<T> {
    fn into_ref(self) -> Ref<T> {
        Ref::new(self)
    }
}

pub trait OutcomeExt<T> {
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> OutcomeExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}
