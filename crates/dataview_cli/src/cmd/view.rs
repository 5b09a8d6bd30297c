use std::path::PathBuf;

use dataview::view::{Result, ViewOptions, view_with_options};

use crate::cmd::input::read_value;

/// Print the encoded view of a JSON document.
pub fn run(path: Option<PathBuf>, pretty: bool, max_hops: usize) -> Result<()> {
	let value = read_value(path.as_deref())?;
	let options = ViewOptions {
		max_deref_hops: max_hops,
		pretty,
	};

	println!("{}", view_with_options(&value, &options));
	Ok(())
}
