//! パス処理ユーティリティ
//!
//! ユーザー入力パスの展開（~・環境変数）、正規化、絶対パス化

use crate::error::{Result, SabunError};
use std::env;
use std::path::{Component, Path, PathBuf};

/// パスを正規化（. や .. を解決）
///
/// ルートを超える `..` 参照はエラー
pub fn normalize_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => continue,
            Component::ParentDir => {
                if components.is_empty() {
                    return Err(SabunError::Path(
                        "パスが不正です: ルートを超えた親ディレクトリ参照".to_string(),
                    ));
                }
                components.pop();
            }
            _ => components.push(component),
        }
    }

    Ok(components.iter().collect())
}

/// 相対パスを絶対パスに変換
pub fn to_absolute<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = env::current_dir().map_err(|e| {
            SabunError::Path(format!("現在のディレクトリが取得できません: {}", e))
        })?;
        Ok(current_dir.join(path))
    }
}

/// パス展開の便利関数
///
/// ~ と環境変数を展開してから正規化・絶対パス化する
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(input)
        .map_err(|e| SabunError::Path(format!("パス展開エラー: {}", e)))?;

    let normalized = normalize_path(expanded.as_ref())?;
    to_absolute(normalized)
}
