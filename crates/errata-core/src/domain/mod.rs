//! Domain model: inline text, errors, and the value/absence containers.

// インライン文字列とエラー値
pub mod text;
pub mod error;

// 成功/失敗の容器
pub mod status;
pub mod outcome;

// 有無の容器（同期スナップショット）
pub mod reference;

pub use self::text::FixedText;
pub use self::error::{Error, ErrorRecord};
pub use self::status::Status;
pub use self::outcome::Outcome;
pub use self::reference::Ref;
