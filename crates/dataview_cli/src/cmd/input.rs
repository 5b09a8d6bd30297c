use std::io::Read;
use std::path::Path;

use dataview::view::{Result, Value};

/// Read a JSON document from `path`, or stdin when absent, into a dynamic value.
pub(crate) fn read_value(path: Option<&Path>) -> Result<Value> {
	let text = match path {
		Some(path) => std::fs::read_to_string(path)?,
		None => {
			let mut buf = String::new();
			std::io::stdin().read_to_string(&mut buf)?;
			buf
		}
	};

	let json: serde_json::Value = serde_json::from_str(&text)?;
	Ok(Value::from_json(json))
}
