//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Parse an encoded view, panicking with the offending text when it is not JSON.
pub fn parse_view(encoded: &str) -> serde_json::Value {
	serde_json::from_str(encoded).unwrap_or_else(|err| panic!("view is not valid json ({err}): {encoded:?}"))
}

/// Split a rendered `[[k v] [k v]]` pair list into its pair texts, sorted.
///
/// Map entries come out in whatever order the map yields them, so tests compare
/// the sorted pairs instead of the raw string.
pub fn sorted_pairs(rendered: &str) -> Vec<String> {
	let inner = rendered
		.strip_prefix("[[")
		.and_then(|rest| rest.strip_suffix("]]"));
	let Some(inner) = inner else {
		return Vec::new();
	};

	let mut pairs: Vec<String> = inner.split("] [").map(str::to_owned).collect();
	pairs.sort();
	pairs
}

#[cfg(test)]
mod tests {
	use super::sorted_pairs;

	#[test]
	fn pairs_are_split_and_sorted() {
		assert_eq!(sorted_pairs("[[b 2] [a 1]]"), vec!["a 1".to_owned(), "b 2".to_owned()]);
		assert!(sorted_pairs("[]").is_empty());
		assert_eq!(
			sorted_pairs("[[tags [a b]] [n map[x:1]]]"),
			vec!["n map[x:1]".to_owned(), "tags [a b]".to_owned()]
		);
	}
}
