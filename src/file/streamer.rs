//! 行単位のファイル読み取り
//!
//! 読み取り専用・逐次アクセスのラッパー。呼び出しごとにファイルを
//! 開き直し、ハンドルも読み取り位置も保持しない

use crate::error::{FileError, Result, SabunError};
use crate::file::path::expand_path;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// テキストファイルの行ストリーマ
#[derive(Debug, Clone)]
pub struct TextFileStreamer {
    path: PathBuf,
}

impl TextFileStreamer {
    /// パスをラップする（この時点ではファイルシステムに触れない）
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// ユーザー入力文字列から作成（~・環境変数を展開）
    pub fn from_input(input: &str) -> Result<Self> {
        Ok(Self::new(expand_path(input)?))
    }

    /// 対象のパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルを開いて行イテレータを返す
    fn open_lines(&self) -> Result<Lines<BufReader<File>>> {
        let display = self.path.display().to_string();

        if self.path.is_dir() {
            return Err(SabunError::File(FileError::InvalidPath { path: display }));
        }

        log::trace!("opening {} for line streaming", display);
        let file = File::open(&self.path)
            .map_err(|e| SabunError::File(FileError::from_io(&e, &display)))?;
        Ok(BufReader::new(file).lines())
    }

    /// ファイルの行数を数える
    pub fn line_count(&self) -> Result<usize> {
        let mut count = 0;
        for line in self.open_lines()? {
            line?;
            count += 1;
        }
        Ok(count)
    }

    /// 指定インデックスの行を読む（0始まり）
    ///
    /// インデックスが行数以上の場合は `None`
    pub fn read_line(&self, index: usize) -> Result<Option<String>> {
        for (current, line) in self.open_lines()?.enumerate() {
            let line = line?;
            if current == index {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// `[start, end)` の範囲の行を読む
    ///
    /// `end < start` の場合は `FileError::InvalidRange`。範囲がファイル末尾を
    /// 超える場合は存在する行だけを返す
    pub fn read_line_range(&self, start: usize, end: usize) -> Result<Vec<String>> {
        if end < start {
            return Err(SabunError::File(FileError::InvalidRange { start, end }));
        }

        let mut lines = Vec::with_capacity(end - start);
        for line in self.open_lines()?.skip(start).take(end - start) {
            lines.push(line?);
        }
        Ok(lines)
    }

    /// 全行を読む
    pub fn read_all_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for line in self.open_lines()? {
            lines.push(line?);
        }
        Ok(lines)
    }
}
