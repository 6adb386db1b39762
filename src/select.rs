use crate::error::{Error, Result};
use crate::types::SelectionMode;

/// Narrow the account's repository names down to the deletion targets.
///
/// `All` and `Except` follow the order of `all_names`; `Only` follows the
/// order the names were given in, with duplicates dropped. Every name passed
/// to `Only` must exist in `all_names`, unless `complete` is false: a name
/// missing from a truncated list may still be one of the account's
/// repositories, so it is passed through.
pub fn select(all_names: &[String], mode: &SelectionMode, complete: bool) -> Result<Vec<String>> {
    match mode {
        SelectionMode::All => Ok(all_names.to_vec()),
        SelectionMode::Only(names) => {
            let unknown: Vec<String> = names
                .iter()
                .filter(|n| !all_names.contains(n))
                .cloned()
                .collect();
            if complete && !unknown.is_empty() {
                return Err(Error::UnknownRepository(unknown));
            }

            let mut selected: Vec<String> = Vec::with_capacity(names.len());
            for name in names {
                if !selected.contains(name) {
                    selected.push(name.clone());
                }
            }
            Ok(selected)
        }
        SelectionMode::Except(excluded) => Ok(all_names
            .iter()
            .filter(|n| !excluded.contains(n))
            .cloned()
            .collect()),
        SelectionMode::Unspecified => Err(Error::NoModeSelected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let all = names(&["c", "a", "b"]);
        assert_eq!(select(&all, &SelectionMode::All, true).unwrap(), all);
        assert!(select(&[], &SelectionMode::All, true).unwrap().is_empty());
    }

    #[test]
    fn test_except_partitions_names() {
        let all = names(&["a", "b", "c", "d"]);
        let excluded = names(&["b", "d"]);
        let selected = select(&all, &SelectionMode::Except(excluded.clone()), true).unwrap();

        assert_eq!(selected, names(&["a", "c"]));
        assert!(selected.iter().all(|n| !excluded.contains(n)));
        for name in &all {
            assert!(selected.contains(name) || excluded.contains(name));
        }
    }

    #[test]
    fn test_except_edges() {
        let all = names(&["a", "b"]);
        assert_eq!(select(&all, &SelectionMode::Except(vec![]), true).unwrap(), all);
        assert!(select(&all, &SelectionMode::Except(all.clone()), true).unwrap().is_empty());
        // names missing from the account are ignored
        assert_eq!(
            select(&all, &SelectionMode::Except(names(&["zzz"])), true).unwrap(),
            all
        );
    }

    #[test]
    fn test_only_keeps_user_order_and_dedups() {
        let all = names(&["a", "b", "c"]);
        let selected = select(&all, &SelectionMode::Only(names(&["c", "a", "c"])), true).unwrap();
        assert_eq!(selected, names(&["c", "a"]));
    }

    #[test]
    fn test_only_rejects_unknown_names() {
        let all = names(&["a", "b"]);
        match select(&all, &SelectionMode::Only(names(&["a", "ghost", "phantom"])), true) {
            Err(Error::UnknownRepository(unknown)) => {
                assert_eq!(unknown, names(&["ghost", "phantom"]))
            }
            other => panic!("expected UnknownRepository, got {other:?}"),
        }
    }

    #[test]
    fn test_only_passes_through_names_beyond_a_truncated_list() {
        let first_page = names(&["a", "b"]);
        let selected = select(&first_page, &SelectionMode::Only(names(&["b", "repo-155"])), false).unwrap();
        assert_eq!(selected, names(&["b", "repo-155"]));
    }

    #[test]
    fn test_unspecified_is_an_error() {
        let all = names(&["a"]);
        assert!(matches!(
            select(&all, &SelectionMode::Unspecified, true),
            Err(Error::NoModeSelected)
        ));
    }
}
