use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive view of one value: a type label plus either a textual value or
/// one level of named fields.
///
/// Keys that do not apply are left out of the encoded form, never `null`.
/// Empty values and empty field maps are left out as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataView {
	/// Type label.
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub ty: Option<Cow<'static, str>>,
	/// Textual rendering of the value.
	#[serde(default, skip_serializing_if = "is_empty_text")]
	pub value: Option<Cow<'static, str>>,
	/// Per-field views of a top-level record.
	#[serde(default, skip_serializing_if = "is_empty_fields")]
	pub fields: Option<BTreeMap<String, DataView>>,
}

fn is_empty_text(value: &Option<Cow<'static, str>>) -> bool {
	value.as_deref().is_none_or(str::is_empty)
}

fn is_empty_fields(fields: &Option<BTreeMap<String, DataView>>) -> bool {
	fields.as_ref().is_none_or(BTreeMap::is_empty)
}

/// View of an absent value.
pub const ZERO_VALUE: DataView = DataView {
	ty: Some(Cow::Borrowed("nil")),
	value: Some(Cow::Borrowed("nil")),
	fields: None,
};

impl DataView {
	/// View carrying a type label and a rendered value.
	pub fn simple(ty: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			ty: Some(ty.into()),
			value: Some(value.into()),
			fields: None,
		}
	}

	/// View carrying only a type label.
	pub fn stub(ty: impl Into<Cow<'static, str>>) -> Self {
		Self {
			ty: Some(ty.into()),
			value: None,
			fields: None,
		}
	}

	/// View of a record with one entry per field.
	pub fn record(ty: impl Into<Cow<'static, str>>, fields: BTreeMap<String, DataView>) -> Self {
		Self {
			ty: Some(ty.into()),
			value: None,
			fields: Some(fields),
		}
	}

	/// Whether this view is a type-only stub.
	pub fn is_stub(&self) -> bool {
		self.ty.is_some() && self.value.is_none() && self.fields.is_none()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::{DataView, ZERO_VALUE};

	#[test]
	fn zero_value_encodes_as_nil_pair() {
		let json = serde_json::to_string(&ZERO_VALUE).expect("zero value encodes");
		assert_eq!(json, r#"{"type":"nil","value":"nil"}"#);
	}

	#[test]
	fn absent_keys_are_omitted() {
		let json = serde_json::to_string(&DataView::stub("main.T")).expect("stub encodes");
		assert_eq!(json, r#"{"type":"main.T"}"#);
	}

	#[test]
	fn empty_value_and_fields_are_omitted() {
		let json = serde_json::to_string(&DataView::simple("string", "")).expect("empty value encodes");
		assert_eq!(json, r#"{"type":"string"}"#);
		let json = serde_json::to_string(&DataView::record("main.E", BTreeMap::new())).expect("empty record encodes");
		assert_eq!(json, r#"{"type":"main.E"}"#);
	}

	#[test]
	fn record_views_decode_back() {
		let mut fields = BTreeMap::new();
		fields.insert("A".to_owned(), DataView::simple("int", "1"));
		fields.insert("B".to_owned(), DataView::stub("main.T"));
		let view = DataView::record("main.R", fields);

		let json = serde_json::to_string(&view).expect("record encodes");
		assert_eq!(json, r#"{"type":"main.R","fields":{"A":{"type":"int","value":"1"},"B":{"type":"main.T"}}}"#);
		let decoded: DataView = serde_json::from_str(&json).expect("record decodes");
		assert_eq!(decoded, view);
		assert!(decoded.fields.as_ref().is_some_and(|fields| fields["B"].is_stub()));
	}
}
