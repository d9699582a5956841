//! Deferred: presence/absence that resolves later.
//!
//! A `Deferred<F>` wraps any future resolving to `Option<T>`. Its combinators
//! apply the same rules as [`Ref`]: each step runs only after the previous
//! one resolved, and only while the value is still present. The rules are not
//! re-implemented here; every step re-enters `Ref` on the resolved value.
//!
//! No executor lives in this crate. Whatever runtime polls the future also
//! drives the chain:
//!
//! ```
//! use errata_core::deferred;
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let out = rt.block_on(async { deferred::present(5).map(|x| x + 1).when(|x| *x > 0).await });
//! assert_eq!(out, Some(6));
//! ```

use std::future::{Future, IntoFuture};

use futures_util::FutureExt;
use futures_util::future::{self, Ready};

use crate::domain::reference::Ref;

#[must_use = "deferred values do nothing unless awaited"]
#[derive(Debug)]
pub struct Deferred<F> {
    inner: F,
}

/// An already-resolved `Deferred`.
pub fn ready<T>(value: Option<T>) -> Deferred<Ready<Option<T>>> {
    Deferred::new(future::ready(value))
}

pub fn present<T>(value: T) -> Deferred<Ready<Option<T>>> {
    ready(Some(value))
}

pub fn absent<T>() -> Deferred<Ready<Option<T>>> {
    ready(None)
}

/// Treat the output of `pending` as present once it resolves.
pub fn lift<Fut: Future>(pending: Fut) -> Deferred<impl Future<Output = Option<Fut::Output>>> {
    Deferred::new(pending.map(Some))
}

impl<F, T> Deferred<F>
where
    F: Future<Output = Option<T>>,
{
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn map<U, M>(self, f: M) -> Deferred<impl Future<Output = Option<U>>>
    where
        M: FnOnce(T) -> U,
    {
        Deferred::new(
            self.inner
                .map(move |resolved| Ref::new(resolved).map(f).into_option()),
        )
    }

    pub fn when<P>(self, predicate: P) -> Deferred<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> bool,
    {
        Deferred::new(
            self.inner
                .map(move |resolved| Ref::new(resolved).when(predicate).into_option()),
        )
    }

    pub fn and_then<U, M>(self, f: M) -> Deferred<impl Future<Output = Option<U>>>
    where
        M: FnOnce(T) -> Option<U>,
    {
        Deferred::new(
            self.inner
                .map(move |resolved| Ref::new(resolved).and_then(f).into_option()),
        )
    }

    pub fn map_async<U, Fut, M>(self, f: M) -> Deferred<impl Future<Output = Option<U>>>
    where
        M: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Deferred::new(
            self.inner
                .then(move |resolved| Ref::new(resolved).map_async(f).into_future()),
        )
    }

    pub fn when_async<Fut, P>(self, predicate: P) -> Deferred<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        Deferred::new(
            self.inner
                .then(move |resolved| Ref::new(resolved).when_async(predicate).into_future()),
        )
    }

    pub fn value_or_default(self, fallback: T) -> impl Future<Output = T> {
        self.inner
            .map(move |resolved| Ref::new(resolved).value_or_default(fallback))
    }

    pub fn value_or_else<D>(self, factory: D) -> impl Future<Output = T>
    where
        D: FnOnce() -> T,
    {
        self.inner
            .map(move |resolved| Ref::new(resolved).value_or_else(factory))
    }
}

impl<F, T> IntoFuture for Deferred<F>
where
    F: Future<Output = Option<T>>,
{
    type Output = Option<T>;
    type IntoFuture = F;

    fn into_future(self) -> F {
        self.inner
    }
}
