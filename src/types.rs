use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 認証ユーザーが所有するリポジトリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// アカウント内で一意な名前
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
}

impl Repository {
    #[cfg(test)]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_name: String::new(),
            private: false,
            html_url: String::new(),
        }
    }
}

/// 一回の一覧取得の結果
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub repositories: Vec<Repository>,
    /// 1ページに収まらないリポジトリがある
    pub truncated: bool,
}

/// 認証ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

/// 削除対象の選び方
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    All,
    Only(Vec<String>),
    Except(Vec<String>),
    Unspecified,
}

impl SelectionMode {
    /// フラグからモードを決定（優先順: all > only > except）
    pub fn from_flags(all: bool, only: Option<&str>, except: Option<&str>) -> Self {
        if all {
            return SelectionMode::All;
        }
        if let Some(list) = only.filter(|s| !s.trim().is_empty()) {
            return SelectionMode::Only(split_names(list));
        }
        if let Some(list) = except.filter(|s| !s.trim().is_empty()) {
            return SelectionMode::Except(split_names(list));
        }
        SelectionMode::Unspecified
    }
}

/// カンマ区切りの値を名前のリストに分割（空要素は除外）
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// 削除確認へのユーザー応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Invalid(String),
}

impl Confirmation {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "y" | "Y" => Confirmation::Yes,
            "n" | "N" => Confirmation::No,
            other => Confirmation::Invalid(other.to_string()),
        }
    }
}

/// 削除結果（選択順）
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    /// 削除できなかったリポジトリごとの `Error::DeleteFailed`
    pub failed: Vec<Error>,
}

impl DeleteReport {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.failed
            .iter()
            .filter_map(|e| match e {
                Error::DeleteFailed { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}
