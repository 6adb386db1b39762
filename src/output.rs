use crate::github::PER_PAGE;
use crate::types::Repository;
use colored::Colorize;
use std::io::{self, Write};

/// 削除対象の名前と件数を表示
pub fn print_selection<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, " - {}", name)?;
    }
    writeln!(out, "\nTotal: {} repositories", names.len())
}

/// 一覧の上限に達したことを警告
pub fn print_truncated_warning<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}: Only the first {} repositories were fetched; the rest are not listed.",
        "Warning".yellow(),
        PER_PAGE
    )
}

/// リポジトリ一覧を表示（JSON 対応）
pub fn print_repositories<W: Write>(
    out: &mut W,
    repos: &[Repository],
    json: bool,
) -> io::Result<()> {
    if json {
        let json_str = serde_json::to_string_pretty(repos).unwrap_or_else(|_| "[]".to_string());
        return writeln!(out, "{}", json_str);
    }

    if repos.is_empty() {
        return writeln!(out, "No repositories found.");
    }

    writeln!(out, "Your repositories:")?;
    for repo in repos {
        if repo.private {
            writeln!(out, "- {} {}", repo.name, "(private)".dimmed())?;
        } else {
            writeln!(out, "- {}", repo.name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(repos: &[Repository], json: bool) -> String {
        let mut out = Vec::new();
        print_repositories(&mut out, repos, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&[], false), "No repositories found.\n");
        assert_eq!(render(&[], true).trim(), "[]");
    }

    #[test]
    fn test_plain_list() {
        let text = render(&[Repository::named("alpha"), Repository::named("beta")], false);
        assert_eq!(text, "Your repositories:\n- alpha\n- beta\n");
    }

    #[test]
    fn test_json_list() {
        let text = render(&[Repository::named("alpha")], true);
        let parsed: Vec<Repository> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![Repository::named("alpha")]);
    }

    #[test]
    fn test_truncated_warning_names_page_size() {
        let mut out = Vec::new();
        print_truncated_warning(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("first 100 repositories"));
    }

    #[test]
    fn test_selection_total() {
        let mut out = Vec::new();
        print_selection(&mut out, &["x".to_string(), "y".to_string()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, " - x\n - y\n\nTotal: 2 repositories\n");
    }
}
