//! sabun - 外部エディタ向け行変更トラッカー
//!
//! エディタが適用した編集イベント（挿入・削除・変更）を行番号ごとに集約し、
//! 元のテキストと現在のテキストを突き合わせるのに必要な正味の差分だけを保持する

// コアモジュール
pub mod error;
pub mod logging;

// データ層
pub mod file;
pub mod tracker;

// 公開API
pub use error::{FileError, Result, SabunError};
pub use file::TextFileStreamer;
pub use tracker::{ChangeKind, LineChange, LineTracker};
