//! errata-core
//!
//! Value-semantics error handling: an inline, heap-free [`Error`], the
//! [`Status`] / [`Outcome`] success-or-error containers, the [`Ref`]
//! present-or-absent container, and [`Deferred`] for applying the same
//! combinators to values that resolve later.
//!
//! # モジュール構成
//! - **domain**: 値型（`FixedText`, `Error`, `Status`, `Outcome<T>`, `Ref<T>`）
//! - **deferred**: `Deferred<F>` と生成関数（ready, present, absent, lift）
//! - **ext**: `Option` / `Result` 向けの拡張トレイト
//! - **error**: `TextError`（構築時の唯一の失敗）
//!
//! # Conversions
//! | from         | to           | loss                          |
//! |--------------|--------------|-------------------------------|
//! | `Outcome<T>` | `Status`     | value dropped                 |
//! | `Outcome<T>` | `Error`      | value dropped, `NONE` on success |
//! | `Outcome<T>` | `Ref<T>`     | error dropped on failure      |
//! | `Outcome<T>` | `T`          | panics on failure (`unwrap`)  |
//! | `Ref<T>`     | `Deferred`   | none                          |

// 値と容器
pub mod domain;

// 非同期の合成
pub mod deferred;

// 標準型との橋渡し
pub mod ext;

// 構築時エラー
pub mod error;

pub use domain::{Error, ErrorRecord, FixedText, Outcome, Ref, Status};
pub use deferred::Deferred;
pub use error::TextError;
pub use ext::{OutcomeExt, RefExt};
