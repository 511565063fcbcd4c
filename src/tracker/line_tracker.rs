//! 変更台帳（LineTracker）
//!
//! 外部エディタが適用した編集イベントを行番号ごとにマージし、
//! 常に最小の正味差分だけを保持する。イベント履歴そのものは蓄積しない。
//!
//! マージ規則（既存エントリ × 受信イベントの全9通り）:
//! - 挿入: 挿入済み行への挿入は内容の上書き。削除済み行への同内容挿入は
//!   相殺して消滅、異なる内容なら変更化。変更済み行への挿入は after の前進
//! - 削除: 挿入済み行の削除は相殺して消滅。変更済み行の削除は元内容の
//!   削除へ畳み込み
//! - 変更: 挿入済み行の変更は挿入のまま内容更新。削除済み行の変更は
//!   元内容を before とした変更として復活。変更の連鎖は first-before /
//!   last-after に畳み込み

use std::collections::BTreeMap;

use crate::tracker::change::LineChange;

/// 行番号から正味の変更への順序付き疎マッピング
///
/// 不変条件:
/// - 1つの行番号につき高々1つの `LineChange`
/// - 列挙は常に行番号の昇順
/// - 正味で無変更となるエントリは保持しない（相殺時は削除する）
///
/// シングルスレッド前提。複数スレッドから使う場合は呼び出し側で直列化する
#[derive(Debug, Default)]
pub struct LineTracker {
    changes: BTreeMap<usize, LineChange>,
}

impl LineTracker {
    /// 空の台帳を作成
    pub fn new() -> Self {
        Self {
            changes: BTreeMap::new(),
        }
    }

    /// 変更が記録されている行数
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// 何らかの変更が記録されているか
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// 変更のある最小の行番号
    ///
    /// 台帳が空の場合は番兵値として `0` を返す。行番号0の正当な変更と
    /// 区別できないため、区別が必要な呼び出し側は先に `has_changes()` を
    /// 確認するか `first_changed_line()` を使うこと
    pub fn smallest_changed_line(&self) -> usize {
        self.first_changed_line().unwrap_or(0)
    }

    /// 変更のある最大の行番号
    ///
    /// 台帳が空の場合は番兵値として `0` を返す（`smallest_changed_line`
    /// と同じ注意が必要）
    pub fn largest_changed_line(&self) -> usize {
        self.last_changed_line().unwrap_or(0)
    }

    /// 変更のある最小の行番号（空なら `None`）
    pub fn first_changed_line(&self) -> Option<usize> {
        self.changes.keys().next().copied()
    }

    /// 変更のある最大の行番号（空なら `None`）
    pub fn last_changed_line(&self) -> Option<usize> {
        self.changes.keys().next_back().copied()
    }

    /// 変更のある行番号を昇順で列挙
    ///
    /// 呼び出しごとに先頭からの新しいイテレータを返す。イテレータは台帳を
    /// 借用するため、列挙中の変更操作は借用規則により弾かれる
    pub fn changed_line_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes.keys().copied()
    }

    /// 指定行の変更を取得（未記録なら `None`）
    pub fn change_at(&self, line_number: usize) -> Option<&LineChange> {
        self.changes.get(&line_number)
    }

    /// 挿入として記録されている行番号を昇順で列挙
    pub fn inserted_line_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes
            .iter()
            .filter(|(_, change)| change.is_insertion())
            .map(|(&line_number, _)| line_number)
    }

    /// 削除として記録されている行番号を昇順で列挙
    pub fn deleted_line_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes
            .iter()
            .filter(|(_, change)| change.is_deletion())
            .map(|(&line_number, _)| line_number)
    }

    /// 変更として記録されている行番号を昇順で列挙
    pub fn modified_line_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes
            .iter()
            .filter(|(_, change)| change.is_modification())
            .map(|(&line_number, _)| line_number)
    }

    /// 挿入イベントを記録
    ///
    /// `line` は挿入された行の内容。既存エントリとのマージ規則は
    /// モジュールドキュメント参照
    pub fn record_insertion(&mut self, line_number: usize, line: impl Into<String>) {
        let line = line.into();
        match self.changes.get(&line_number) {
            None | Some(LineChange::Inserted { .. }) => {
                self.changes
                    .insert(line_number, LineChange::Inserted { line });
            }
            Some(LineChange::Deleted { line: previous }) => {
                if *previous == line {
                    // 削除した行と同内容の再挿入は正味で無変更
                    self.changes.remove(&line_number);
                } else {
                    let before = previous.clone();
                    self.changes
                        .insert(line_number, LineChange::Modified { before, after: line });
                }
            }
            Some(LineChange::Modified { before, .. }) => {
                let before = before.clone();
                self.changes
                    .insert(line_number, LineChange::Modified { before, after: line });
            }
        }
    }

    /// 削除イベントを記録
    ///
    /// `line` は削除時点で観測された内容。既存エントリが変更の場合は
    /// 変更前の内容を優先して削除に畳み込む
    pub fn record_deletion(&mut self, line_number: usize, line: impl Into<String>) {
        let line = line.into();
        match self.changes.get(&line_number) {
            None | Some(LineChange::Deleted { .. }) => {
                self.changes
                    .insert(line_number, LineChange::Deleted { line });
            }
            Some(LineChange::Inserted { .. }) => {
                // 挿入した行の削除は正味で無変更
                self.changes.remove(&line_number);
            }
            Some(LineChange::Modified { before, .. }) => {
                let line = before.clone();
                self.changes
                    .insert(line_number, LineChange::Deleted { line });
            }
        }
    }

    /// 変更イベントを記録
    ///
    /// 既存エントリがある場合、呼び出し側の `before` ではなく記録済みの
    /// 変更前内容を優先する（first-before / last-after）
    pub fn record_modification(
        &mut self,
        line_number: usize,
        before: impl Into<String>,
        after: impl Into<String>,
    ) {
        let after = after.into();
        let merged = match self.changes.get(&line_number) {
            None => LineChange::Modified {
                before: before.into(),
                after,
            },
            Some(LineChange::Inserted { .. }) => LineChange::Inserted { line: after },
            Some(LineChange::Deleted { line: previous }) => LineChange::Modified {
                before: previous.clone(),
                after,
            },
            Some(LineChange::Modified {
                before: previous, ..
            }) => LineChange::Modified {
                before: previous.clone(),
                after,
            },
        };
        self.changes.insert(line_number, merged);
    }

    /// 挿入エントリのみ全削除
    pub fn clear_insertions(&mut self) {
        self.changes.retain(|_, change| !change.is_insertion());
    }

    /// 削除エントリのみ全削除
    pub fn clear_deletions(&mut self) {
        self.changes.retain(|_, change| !change.is_deletion());
    }

    /// 変更エントリのみ全削除
    pub fn clear_modifications(&mut self) {
        self.changes.retain(|_, change| !change.is_modification());
    }

    /// 全エントリを削除
    ///
    /// 削除前に1件でもエントリがあったかを返す
    pub fn clear(&mut self) -> bool {
        let had_changes = self.has_changes();
        if had_changes {
            log::debug!("clearing {} tracked line changes", self.change_count());
        }
        self.changes.clear();
        had_changes
    }
}
