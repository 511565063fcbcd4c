//! 行変更トラッカーモジュール
//!
//! 編集イベントを行番号ごとに集約する変更台帳と、変更種別の型を提供

pub mod change;
pub mod line_tracker;

// 公開API
pub use change::{ChangeKind, LineChange};
pub use line_tracker::LineTracker;
