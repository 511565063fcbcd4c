//! ファイルアクセスモジュール
//!
//! 行単位の読み取り専用ファイルアクセスとパス処理を提供。
//! トラッカー本体はこの層に依存しない

pub mod path;
pub mod streamer;

// 公開API
pub use path::{expand_path, normalize_path};
pub use streamer::TextFileStreamer;
