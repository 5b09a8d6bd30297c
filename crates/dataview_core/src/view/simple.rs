use std::borrow::Cow;

use crate::view::render::render_nested;
use crate::view::{DataView, Value, deref, render};

/// View of a dereferenced simple-kind value.
///
/// Sequences render their flattened elements and maps render their entries as
/// `[key value]` pairs in the order the map yields them. Struct-valued map
/// entries only get the generic rendering.
pub(crate) fn simple_view(value: &Value, max_hops: usize) -> DataView {
	if let Some(items) = sequence_items(value) {
		return DataView::simple(value.type_name(), render_flat(items, max_hops));
	}

	let rendered = match value.underlying() {
		Value::Map(map) => {
			let pairs: Vec<String> = map
				.entries
				.iter()
				.flatten()
				.map(|(key, item)| format!("[{} {}]", render_nested(unwrap_interface(key)), render_nested(unwrap_interface(item))))
				.collect();
			format!("[{}]", pairs.join(" "))
		}
		Value::Host(host) => host.handle(),
		other => render(other),
	};

	DataView::simple(value.type_name(), rendered)
}

fn render_flat(items: &[Value], max_hops: usize) -> String {
	let mut flat = Vec::new();
	flatten_into(items, max_hops, max_hops, &mut flat);
	let rendered: Vec<String> = flat.iter().map(|item| render_nested(item)).collect();
	format!("[{}]", rendered.join(" "))
}

/// Dereference every element and splice nested sequences in place.
///
/// At most `levels` nested sequences are spliced; deeper ones stay whole.
fn flatten_into<'a>(items: &'a [Value], max_hops: usize, levels: usize, out: &mut Vec<Cow<'a, Value>>) {
	for item in items {
		let resolved = deref(item, max_hops).into_value();
		if levels == 0 {
			out.push(resolved);
			continue;
		}
		match resolved {
			Cow::Borrowed(inner) => match sequence_items(inner) {
				Some(nested) => flatten_into(nested, max_hops, levels - 1, out),
				None => out.push(Cow::Borrowed(inner)),
			},
			Cow::Owned(inner) => {
				let flattened: Option<Vec<Value>> = sequence_items(&inner).map(|nested| {
					let mut buf = Vec::new();
					flatten_into(nested, max_hops, levels - 1, &mut buf);
					buf.into_iter().map(Cow::into_owned).collect()
				});
				match flattened {
					Some(values) => out.extend(values.into_iter().map(Cow::Owned)),
					None => out.push(Cow::Owned(inner)),
				}
			}
		}
	}
}

fn sequence_items(value: &Value) -> Option<&[Value]> {
	match value.underlying() {
		Value::Array(array) => Some(&array.items),
		Value::Slice(slice) => Some(slice.items.as_deref().unwrap_or_default()),
		_ => None,
	}
}

static NIL: Value = Value::Nil;

fn unwrap_interface(value: &Value) -> &Value {
	match value {
		Value::Interface(iface) => iface.inner.as_deref().unwrap_or(&NIL),
		other => other,
	}
}
