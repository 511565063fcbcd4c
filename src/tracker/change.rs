//! 行変更の型定義
//!
//! 1行に対する正味の変更をタグ付き共用体で表現する。
//! 台帳は各行番号につき常に1つのバリアントだけを保持する

/// 1行に対する正味の変更
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    /// 元のテキストに存在せず、新しく挿入された行
    Inserted {
        /// 挿入後の内容
        line: String,
    },
    /// 元のテキストに存在し、削除された行
    Deleted {
        /// 削除前の内容
        line: String,
    },
    /// 元のテキストに存在し、内容が変更された行
    Modified {
        /// 変更前の内容
        before: String,
        /// 変更後の内容
        after: String,
    },
}

/// 変更の種別（フィルタ系APIで使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insertion,
    Deletion,
    Modification,
}

impl LineChange {
    /// 変更の種別を取得
    pub fn kind(&self) -> ChangeKind {
        match self {
            LineChange::Inserted { .. } => ChangeKind::Insertion,
            LineChange::Deleted { .. } => ChangeKind::Deletion,
            LineChange::Modified { .. } => ChangeKind::Modification,
        }
    }

    /// 挿入かどうか
    pub fn is_insertion(&self) -> bool {
        self.kind() == ChangeKind::Insertion
    }

    /// 削除かどうか
    pub fn is_deletion(&self) -> bool {
        self.kind() == ChangeKind::Deletion
    }

    /// 変更かどうか
    pub fn is_modification(&self) -> bool {
        self.kind() == ChangeKind::Modification
    }
}
