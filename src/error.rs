//! エラーハンドリングシステム
//!
//! sabun 全体で使用される統一されたエラー型とユーティリティを定義
//! トラッカー本体は全域的で失敗しないため、エラーはファイル層とパス層に集中する

use std::io;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum SabunError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Invalid line range: start={start}, end={end}")]
    InvalidRange { start: usize, end: usize },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// io::Error を対象パス付きで典型的なバリアントへ振り分ける
    pub fn from_io(error: &io::Error, path: &str) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::Io {
                message: error.to_string(),
            },
        }
    }
}

impl From<io::Error> for SabunError {
    fn from(error: io::Error) -> Self {
        SabunError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// 標準Result型のエイリアス
pub type Result<T> = std::result::Result<T, SabunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_file_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = FileError::from_io(&io_err, "DoesNotExist");
        assert!(matches!(err, FileError::NotFound { ref path } if path == "DoesNotExist"));
    }

    #[test]
    fn io_permission_denied_maps_to_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FileError::from_io(&io_err, "secret.txt");
        assert!(matches!(err, FileError::PermissionDenied { ref path } if path == "secret.txt"));
    }

    #[test]
    fn other_io_errors_keep_their_message() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err = FileError::from_io(&io_err, "partial.txt");
        assert!(matches!(err, FileError::Io { ref message } if message.contains("truncated")));
    }

    #[test]
    fn invalid_range_displays_bounds() {
        let err = FileError::InvalidRange { start: 5, end: 2 };
        assert_eq!(err.to_string(), "Invalid line range: start=5, end=2");
    }
}
