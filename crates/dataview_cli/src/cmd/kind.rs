use std::path::PathBuf;

use dataview::view::{KindClass, Result, ViewOptions, classify, deref};

use crate::cmd::input::read_value;

/// Print the dereferenced kind, class, and type label of a JSON document.
pub fn run(path: Option<PathBuf>) -> Result<()> {
	let value = read_value(path.as_deref())?;
	let resolved = deref(&value, ViewOptions::default().max_deref_hops);

	if resolved.is_absent() {
		println!("absent");
		return Ok(());
	}

	let resolved = resolved.into_value();
	let class = match classify(resolved.kind()) {
		KindClass::Simple => "simple",
		KindClass::Complicated => "complicated",
	};
	println!("type: {}", resolved.type_name());
	println!("kind: {}", resolved.kind());
	println!("class: {class}");
	Ok(())
}
