use std::collections::BTreeMap;

use crate::view::simple::simple_view;
use crate::view::{DataView, KindClass, StructValue, classify, deref};

/// One view per declared field of a top-level record.
///
/// Complicated fields become type-only stubs, which caps expansion at one
/// level. Each field is dereferenced on its own, so an unreadable field only
/// degrades its own entry.
pub(crate) fn flatten_fields(record: &StructValue, max_hops: usize) -> BTreeMap<String, DataView> {
	let mut fields = BTreeMap::new();
	for field in &record.fields {
		let resolved = deref(&field.value, max_hops).into_value();
		let view = match classify(resolved.kind()) {
			KindClass::Simple => simple_view(&resolved, max_hops),
			KindClass::Complicated => DataView::stub(field.ty.to_string()),
		};

		if fields.insert(field.name.to_string(), view).is_some() {
			tracing::debug!(field = %field.name, "duplicate field name, keeping last");
		}
	}
	fields
}
