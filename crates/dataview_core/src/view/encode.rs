use crate::view::{DataView, Result};

/// Turns a finished view into its string form.
pub trait Encoder {
	/// Encode one view.
	fn encode(&self, view: &DataView) -> Result<String>;
}

/// JSON encoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
	/// Indent nested objects instead of emitting one line.
	pub pretty: bool,
}

impl Encoder for JsonEncoder {
	fn encode(&self, view: &DataView) -> Result<String> {
		let encoded = if self.pretty {
			serde_json::to_string_pretty(view)?
		} else {
			serde_json::to_string(view)?
		};
		Ok(encoded)
	}
}

#[cfg(test)]
mod tests {
	use super::{Encoder, JsonEncoder};
	use crate::view::{DataView, ZERO_VALUE};

	#[test]
	fn compact_encoding_is_single_line() {
		let encoded = JsonEncoder::default().encode(&DataView::simple("int", "42")).expect("encodes");
		assert_eq!(encoded, r#"{"type":"int","value":"42"}"#);
	}

	#[test]
	fn pretty_encoding_indents() {
		let encoded = JsonEncoder { pretty: true }.encode(&ZERO_VALUE).expect("encodes");
		assert_eq!(encoded, "{\n  \"type\": \"nil\",\n  \"value\": \"nil\"\n}");
	}
}
