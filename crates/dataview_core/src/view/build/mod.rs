use crate::view::fields::flatten_fields;
use crate::view::simple::simple_view;
use crate::view::{DataView, Deref, Encoder, JsonEncoder, KindClass, Value, ZERO_VALUE, classify, deref, render};

/// Limits and output switches for building and encoding views.
#[derive(Debug, Clone)]
pub struct ViewOptions {
	/// Maximum pointer/interface/host indirections followed per value.
	pub max_deref_hops: usize,
	/// Emit indented JSON.
	pub pretty: bool,
}

impl Default for ViewOptions {
	fn default() -> Self {
		Self {
			max_deref_hops: 64,
			pretty: false,
		}
	}
}

impl ViewOptions {
	/// Preset for output read by people at a terminal.
	pub fn for_terminal() -> Self {
		Self {
			pretty: true,
			..Self::default()
		}
	}
}

/// Build the descriptive view of `value` without encoding it.
pub fn build_view(value: &Value, options: &ViewOptions) -> DataView {
	let resolved = match deref(value, options.max_deref_hops) {
		Deref::Absent(_) => return ZERO_VALUE,
		Deref::Concrete(resolved) => resolved,
	};

	match classify(resolved.kind()) {
		KindClass::Simple => simple_view(&resolved, options.max_deref_hops),
		KindClass::Complicated => match resolved.as_struct() {
			Some(record) => DataView::record(resolved.type_name(), flatten_fields(record, options.max_deref_hops)),
			None => DataView::simple(resolved.type_name(), render(&resolved)),
		},
	}
}

/// Describe `value` as a compact JSON string.
///
/// Never fails: absent values describe as `{"type":"nil","value":"nil"}` and
/// an encoding failure yields an empty string.
pub fn view(value: &Value) -> String {
	view_with_options(value, &ViewOptions::default())
}

/// Describe `value` as a JSON string using `options`.
pub fn view_with_options(value: &Value, options: &ViewOptions) -> String {
	view_with(value, options, &JsonEncoder { pretty: options.pretty })
}

/// Describe `value` using a caller-provided encoder.
pub fn view_with(value: &Value, options: &ViewOptions, encoder: &dyn Encoder) -> String {
	let built = build_view(value, options);
	match encoder.encode(&built) {
		Ok(encoded) => encoded,
		Err(err) => {
			tracing::warn!(error = %err, "failed to encode view");
			String::new()
		}
	}
}

#[cfg(test)]
mod tests;
