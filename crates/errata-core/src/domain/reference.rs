//! Ref: a present-or-absent value with no error information.
//!
//! `Ref<T>` is a synchronous snapshot. It is `!Send` and `!Sync`, so it cannot
//! be moved into a spawned task, and holding one across an `.await` makes the
//! enclosing future `!Send`:
//!
//! ```compile_fail
//! fn assert_send<T: Send>(_: T) {}
//! assert_send(errata_core::Ref::present(1));
//! ```
//!
//! `!Send` only guards multi-threaded spawn. A `Ref` can still be stored in a
//! collection or returned from an `async fn` polled on one thread; keeping it
//! to synchronous scopes is left to the caller.
//!
//! To carry presence across a suspension point, turn it into a
//! [`Deferred`] with `map_async`, `when_async` or `deferred`. Those consume
//! the `Ref` before anything is polled. Coming back, await the `Deferred` and
//! call `into_ref` on the resulting `Option`.
//!
//! Absence is `Option::None` underneath, so for pointer-like `T` (`&U`,
//! `Box<U>`, `NonNull<U>`) it is the null representation of `T` itself.

use std::future::Future;
use std::marker::PhantomData;

use futures_util::FutureExt;
use futures_util::future::{self, Either};

use crate::deferred::Deferred;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ref<T> {
    value: Option<T>,
    _scope: PhantomData<*const ()>,
}

impl<T> Ref<T> {
    pub fn new(value: Option<T>) -> Self {
        Self {
            value,
            _scope: PhantomData,
        }
    }

    pub fn present(value: T) -> Self {
        Self::new(Some(value))
    }

    pub fn none() -> Self {
        Self::new(None)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    pub fn value_or_default(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(factory)
    }

    /// `f` runs only when a value is present.
    pub fn map<U, F>(self, f: F) -> Ref<U>
    where
        F: FnOnce(T) -> U,
    {
        Ref::new(self.value.map(f))
    }

    /// Keep the value only if `predicate` accepts it. The predicate is never
    /// called on an absent `Ref`.
    pub fn when<P>(self, predicate: P) -> Ref<T>
    where
        P: FnOnce(&T) -> bool,
    {
        Ref::new(self.value.filter(predicate))
    }

    pub fn and_then<U, F>(self, f: F) -> Ref<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Ref::new(self.value.and_then(f))
    }

    /// Map through an async function.
    ///
    /// `f` is called right away (creating its future) when a value is
    /// present; an absent `Ref` yields an already-resolved absent `Deferred`.
    pub fn map_async<U, Fut, F>(self, f: F) -> Deferred<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.value {
            Some(value) => Deferred::new(Either::Right(f(value).map(Some))),
            None => Deferred::new(Either::Left(future::ready(None))),
        }
    }

    /// Filter through an async predicate. Same short-circuit as `map_async`.
    pub fn when_async<Fut, P>(self, predicate: P) -> Deferred<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.value {
            Some(value) => {
                let verdict = predicate(&value);
                Deferred::new(Either::Right(
                    verdict.map(move |keep| keep.then_some(value)),
                ))
            }
            None => Deferred::new(Either::Left(future::ready(None))),
        }
    }
}

impl<F: Future> Ref<F> {
    /// Lift a `Ref` around a future into a `Deferred` of its output.
    pub fn deferred(self) -> Deferred<impl Future<Output = Option<F::Output>>> {
        match self.value {
            Some(pending) => Deferred::new(Either::Right(pending.map(Some))),
            None => Deferred::new(Either::Left(future::ready(None))),
        }
    }
}

impl<T> Default for Ref<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Ref<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Ref<T>> for Option<T> {
    fn from(value: Ref<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn has_value_tracks_presence() {
        assert!(Ref::present(1).has_value());
        assert!(!Ref::<i32>::none().has_value());
        assert!(!Ref::<i32>::default().has_value());
    }

    #[test]
    fn map_transforms_present_value() {
        assert_eq!(Ref::present(2).map(|x| x * 10), Ref::present(20));
    }

    #[test]
    fn map_never_calls_f_on_absent() {
        let calls = Cell::new(0);
        let out = Ref::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(out, Ref::none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn when_keeps_or_drops() {
        assert_eq!(Ref::present(5).when(|x| *x > 0), Ref::present(5));
        assert_eq!(Ref::present(-5).when(|x| *x > 0), Ref::none());
    }

    #[test]
    fn when_never_calls_predicate_on_absent() {
        let calls = Cell::new(0);
        let out = Ref::<i32>::none().when(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(out, Ref::none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn value_or_default_shapes() {
        assert_eq!(Ref::present(3).value_or_default(9), 3);
        assert_eq!(Ref::none().value_or_default(9), 9);
        assert_eq!(Ref::present(3).value_or_else(|| 9), 3);
        assert_eq!(Ref::none().value_or_else(|| 9), 9);
    }

    #[test]
    fn option_round_trip() {
        let x = Some("text".to_string());
        assert_eq!(Ref::from(x.clone()).value_or_default(String::new()), "text");
        assert_eq!(Ref::<String>::from(None).value_or_default(String::new()), "");
        let plain: Option<i32> = Ref::present(1).into();
        assert_eq!(plain, Some(1));
    }

    #[test]
    fn and_then_flattens() {
        assert_eq!(Ref::present("7").and_then(|s| s.parse::<i32>().ok()), Ref::present(7));
        assert_eq!(Ref::present("x").and_then(|s| s.parse::<i32>().ok()), Ref::none());
    }

    #[test]
    fn absent_pointer_is_free() {
        use std::mem::size_of;
        assert_eq!(size_of::<Ref<&u64>>(), size_of::<&u64>());
        assert_eq!(size_of::<Ref<Box<u64>>>(), size_of::<Box<u64>>());
    }

    #[tokio::test]
    async fn map_async_resolves_present() {
        let out = Ref::present(4).map_async(|x| async move { x * 2 }).await;
        assert_eq!(out, Some(8));
    }

    #[tokio::test]
    async fn map_async_skips_absent() {
        let calls = Cell::new(0);
        let out = Ref::<i32>::none()
            .map_async(|x| {
                calls.set(calls.get() + 1);
                async move { x }
            })
            .await;
        assert_eq!(out, None);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn when_async_filters() {
        let keep = Ref::present(3).when_async(|x| future::ready(*x == 3)).await;
        let dropped = Ref::present(4).when_async(|x| future::ready(*x == 3)).await;
        assert_eq!(keep, Some(3));
        assert_eq!(dropped, None);
    }

    #[tokio::test]
    async fn when_async_skips_absent() {
        let calls = Cell::new(0);
        let out = Ref::<i32>::none()
            .when_async(|_| {
                calls.set(calls.get() + 1);
                future::ready(true)
            })
            .await;
        assert_eq!(out, None);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn deferred_lifts_a_ref_of_future() {
        let present = Ref::present(async { 11 }).deferred().await;
        assert_eq!(present, Some(11));

        let absent = Ref::<future::Ready<i32>>::none().deferred().await;
        assert_eq!(absent, None);
    }
}
