use std::cmp::Ordering;
use std::fmt;

use crate::view::{Kind, Value};

/// Render any value the way `%v` does.
///
/// This is the generic textual rendering behind every view `value`.
pub fn render(value: &Value) -> String {
	Render { value, depth: 0 }.to_string()
}

/// Render a value that sits inside an enclosing composite.
pub(crate) fn render_nested(value: &Value) -> String {
	Render { value, depth: 1 }.to_string()
}

struct Render<'a> {
	value: &'a Value,
	depth: u32,
}

impl<'a> Render<'a> {
	fn child(&self, value: &'a Value) -> Self {
		Self {
			value,
			depth: self.depth + 1,
		}
	}
}

impl fmt::Display for Render<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value {
			Value::Nil => f.write_str("<nil>"),
			Value::Bool(v) => write!(f, "{v}"),
			Value::Int(v) | Value::Int64(v) => write!(f, "{v}"),
			Value::Int8(v) => write!(f, "{v}"),
			Value::Int16(v) => write!(f, "{v}"),
			Value::Int32(v) => write!(f, "{v}"),
			Value::Uint(v) | Value::Uint64(v) | Value::Uintptr(v) => write!(f, "{v}"),
			Value::Uint8(v) => write!(f, "{v}"),
			Value::Uint16(v) => write!(f, "{v}"),
			Value::Uint32(v) => write!(f, "{v}"),
			Value::Float32(v) => f.write_str(&format_float(*v)),
			Value::Float64(v) => f.write_str(&format_float(*v)),
			Value::Complex64(re, im) => write!(f, "({}{}i)", format_float(*re), signed(format_float(*im))),
			Value::Complex128(re, im) => write!(f, "({}{}i)", format_float(*re), signed(format_float(*im))),
			Value::String(v) => f.write_str(v),
			Value::UnsafePointer(addr) => write_addr(f, *addr),
			Value::Array(array) => self.write_list(f, &array.items),
			Value::Slice(slice) => self.write_list(f, slice.items.as_deref().unwrap_or_default()),
			Value::Map(map) => {
				let mut entries: Vec<&(Value, Value)> = map.entries.iter().flatten().collect();
				entries.sort_by(|a, b| compare_keys(&a.0, &b.0));
				f.write_str("map[")?;
				for (idx, (key, value)) in entries.into_iter().enumerate() {
					if idx > 0 {
						f.write_str(" ")?;
					}
					write!(f, "{}:{}", self.child(key), self.child(value))?;
				}
				f.write_str("]")
			}
			Value::Ptr(ptr) => match &ptr.target {
				None => f.write_str("<nil>"),
				Some(target) if self.depth == 0 && matches!(target.kind(), Kind::Array | Kind::Slice | Kind::Struct | Kind::Map) => {
					write!(f, "&{}", self.child(target))
				}
				Some(_) => write_addr(f, ptr.addr),
			},
			Value::Interface(iface) => match &iface.inner {
				Some(inner) => fmt::Display::fmt(&self.child(inner), f),
				None => f.write_str("<nil>"),
			},
			Value::Struct(item) => {
				f.write_str("{")?;
				for (idx, field) in item.fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(" ")?;
					}
					write!(f, "{}", self.child(&field.value))?;
				}
				f.write_str("}")
			}
			Value::Chan(chan) => write_addr(f, chan.addr),
			Value::Func(func) => write_addr(f, func.addr),
			Value::Named(named) => fmt::Display::fmt(
				&Render {
					value: &named.inner,
					depth: self.depth,
				},
				f,
			),
			// Nested host values may refer back to their parent.
			Value::Host(host) if self.depth > 0 => f.write_str(&host.handle()),
			Value::Host(host) => match host.extract() {
				// A host value that extracts to another host value stops here.
				Ok(Value::Host(_)) => f.write_str(&host.handle()),
				Ok(extracted) => fmt::Display::fmt(
					&Render {
						value: &extracted,
						depth: self.depth,
					},
					f,
				),
				Err(err) => {
					tracing::debug!(type_name = %host.type_name(), error = %err, "rendering host handle");
					f.write_str(&host.handle())
				}
			},
		}
	}
}

impl<'a> Render<'a> {
	fn write_list(&self, f: &mut fmt::Formatter<'_>, items: &'a [Value]) -> fmt::Result {
		f.write_str("[")?;
		for (idx, item) in items.iter().enumerate() {
			if idx > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{}", self.child(item))?;
		}
		f.write_str("]")
	}
}

fn write_addr(f: &mut fmt::Formatter<'_>, addr: u64) -> fmt::Result {
	if addr == 0 { f.write_str("<nil>") } else { write!(f, "0x{addr:x}") }
}

/// Shortest `%g` rendering: exponent form below `1e-4` and from `1e+06` up.
pub(crate) fn format_float<F>(value: F) -> String
where
	F: Copy + fmt::LowerExp + Into<f64>,
{
	let wide: f64 = value.into();
	if wide.is_nan() {
		return "NaN".to_owned();
	}
	if wide.is_infinite() {
		return if wide > 0.0 { "+Inf".to_owned() } else { "-Inf".to_owned() };
	}

	// `{:e}` yields the shortest round-tripping digits for the source width.
	let sci = format!("{value:e}");
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return sci;
	};
	let Ok(exp) = exp.parse::<i32>() else {
		return sci;
	};
	let (sign, mantissa) = match mantissa.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", mantissa),
	};
	let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();

	if !(-4..6).contains(&exp) {
		let (head, tail) = digits.split_at(1);
		let exp_sign = if exp < 0 { '-' } else { '+' };
		let dot = if tail.is_empty() { "" } else { "." };
		return format!("{sign}{head}{dot}{tail}e{exp_sign}{:02}", exp.abs());
	}

	if exp < 0 {
		let zeros = "0".repeat((-exp - 1) as usize);
		return format!("{sign}0.{zeros}{digits}");
	}

	let int_len = exp as usize + 1;
	if digits.len() <= int_len {
		let zeros = "0".repeat(int_len - digits.len());
		format!("{sign}{digits}{zeros}")
	} else {
		let (int_part, frac_part) = digits.split_at(int_len);
		format!("{sign}{int_part}.{frac_part}")
	}
}

fn signed(rendered: String) -> String {
	if rendered.starts_with('-') || rendered.starts_with('+') {
		rendered
	} else {
		format!("+{rendered}")
	}
}

/// Map key order used by `map[...]` rendering.
fn compare_keys(a: &Value, b: &Value) -> Ordering {
	let (a, b) = (a.underlying(), b.underlying());
	if let (Some(x), Some(y)) = (int_of(a), int_of(b)) {
		return x.cmp(&y);
	}
	if let (Some(x), Some(y)) = (float_of(a), float_of(b)) {
		// NaN sorts first.
		return x.partial_cmp(&y).unwrap_or_else(|| y.is_nan().cmp(&x.is_nan()));
	}
	match (a, b) {
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Ptr(x), Value::Ptr(y)) => x.addr.cmp(&y.addr),
		(Value::Chan(x), Value::Chan(y)) => x.addr.cmp(&y.addr),
		(Value::Interface(x), Value::Interface(y)) => match (&x.inner, &y.inner) {
			(Some(x), Some(y)) => compare_keys(x, y),
			(x, y) => x.is_some().cmp(&y.is_some()),
		},
		_ => render_nested(a).cmp(&render_nested(b)),
	}
}

fn int_of(value: &Value) -> Option<i128> {
	match value {
		Value::Int(v) | Value::Int64(v) => Some(i128::from(*v)),
		Value::Int8(v) => Some(i128::from(*v)),
		Value::Int16(v) => Some(i128::from(*v)),
		Value::Int32(v) => Some(i128::from(*v)),
		Value::Uint(v) | Value::Uint64(v) | Value::Uintptr(v) => Some(i128::from(*v)),
		Value::Uint8(v) => Some(i128::from(*v)),
		Value::Uint16(v) => Some(i128::from(*v)),
		Value::Uint32(v) => Some(i128::from(*v)),
		_ => None,
	}
}

fn float_of(value: &Value) -> Option<f64> {
	match value {
		Value::Float32(v) => Some(f64::from(*v)),
		Value::Float64(v) => Some(*v),
		_ => None,
	}
}
