use std::borrow::Cow;

use crate::view::Value;

/// Outcome of following a chain of indirection.
#[derive(Debug, Clone)]
pub enum Deref<'a> {
	/// First concrete, non-indirect value.
	Concrete(Cow<'a, Value>),
	/// Chain ended in nil; carries the last indirect value reached.
	Absent(Cow<'a, Value>),
}

impl<'a> Deref<'a> {
	/// Whether the chain ended in nil.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent(_))
	}

	/// Value reached, concrete or the nil indirection that ended the chain.
	pub fn into_value(self) -> Cow<'a, Value> {
		match self {
			Self::Concrete(value) | Self::Absent(value) => value,
		}
	}
}

enum Step<'a> {
	Into(&'a Value),
	Extracted(Value),
	Nil,
	Stop,
}

/// Follow pointer, interface and host indirection from `value`.
///
/// Only host extraction allocates; every other step borrows from the input.
/// A host value that cannot be extracted is treated as concrete so callers can
/// render its handle. After `max_hops` steps the current value is returned as
/// concrete.
pub fn deref(value: &Value, max_hops: usize) -> Deref<'_> {
	let mut current = Cow::Borrowed(value);

	for _ in 0..max_hops {
		current = match current {
			Cow::Borrowed(item) => match step(item) {
				Step::Into(next) => Cow::Borrowed(next),
				Step::Extracted(next) => Cow::Owned(next),
				Step::Nil => return Deref::Absent(Cow::Borrowed(item)),
				Step::Stop => return Deref::Concrete(Cow::Borrowed(item)),
			},
			Cow::Owned(item) => match step(&item).detach() {
				Some(Some(next)) => Cow::Owned(next),
				Some(None) => return Deref::Absent(Cow::Owned(item)),
				None => return Deref::Concrete(Cow::Owned(item)),
			},
		};
	}

	if matches!(current.underlying(), Value::Nil) {
		return Deref::Absent(current);
	}
	if is_indirect(&current) {
		tracing::warn!(max_hops, type_name = %current.type_name(), "dereference hop limit reached");
	}
	Deref::Concrete(current)
}

impl Step<'_> {
	/// Drop the borrow: `Some(Some(next))` to continue, `Some(None)` on nil, `None` to stop.
	fn detach(self) -> Option<Option<Value>> {
		match self {
			Self::Into(next) => Some(Some(next.clone())),
			Self::Extracted(next) => Some(Some(next)),
			Self::Nil => Some(None),
			Self::Stop => None,
		}
	}
}

fn step(value: &Value) -> Step<'_> {
	match value.underlying() {
		Value::Nil => Step::Nil,
		Value::Ptr(ptr) => match &ptr.target {
			Some(target) => Step::Into(target),
			None => Step::Nil,
		},
		Value::Interface(iface) => match &iface.inner {
			Some(inner) => Step::Into(inner),
			None => Step::Nil,
		},
		Value::Host(host) => match host.extract() {
			Ok(extracted) => Step::Extracted(extracted),
			Err(err) => {
				tracing::debug!(type_name = %host.type_name(), error = %err, "host value not extractable");
				Step::Stop
			}
		},
		_ => Step::Stop,
	}
}

fn is_indirect(value: &Value) -> bool {
	matches!(value.underlying(), Value::Ptr(_) | Value::Interface(_) | Value::Host(_))
}
