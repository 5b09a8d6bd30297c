use std::collections::{BTreeMap, HashMap};

use crate::view::{Type, Value, view};

/// Conversion of native Rust values into the dynamic value model.
pub trait ToValue {
	/// Dynamic value for `self`.
	fn to_value(&self) -> Value;
}

/// Native types with a fixed static type label.
pub trait StaticType {
	/// Static type of every value of `Self`.
	fn static_type() -> Type;
}

/// Describe a native value as a compact JSON string.
pub fn view_of<T: ToValue + ?Sized>(value: &T) -> String {
	view(&value.to_value())
}

macro_rules! scalar_to_value {
	($($native:ty => $variant:ident;)*) => {
		$(
			impl StaticType for $native {
				fn static_type() -> Type {
					Type::$variant
				}
			}

			impl ToValue for $native {
				fn to_value(&self) -> Value {
					Value::$variant(*self as _)
				}
			}
		)*
	};
}

scalar_to_value! {
	bool => Bool;
	i8 => Int8;
	i16 => Int16;
	i32 => Int32;
	i64 => Int64;
	isize => Int;
	u8 => Uint8;
	u16 => Uint16;
	u32 => Uint32;
	u64 => Uint64;
	usize => Uint;
	f32 => Float32;
	f64 => Float64;
}

impl ToValue for str {
	fn to_value(&self) -> Value {
		Value::string(self)
	}
}

impl StaticType for String {
	fn static_type() -> Type {
		Type::String
	}
}

impl ToValue for String {
	fn to_value(&self) -> Value {
		Value::string(self.as_str())
	}
}

impl<T: StaticType> StaticType for Vec<T> {
	fn static_type() -> Type {
		Type::slice_of(T::static_type())
	}
}

impl<T: StaticType + ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Value {
		Value::slice(T::static_type(), self.iter().map(ToValue::to_value).collect())
	}
}

impl<T: StaticType, const N: usize> StaticType for [T; N] {
	fn static_type() -> Type {
		Type::array_of(N, T::static_type())
	}
}

impl<T: StaticType + ToValue, const N: usize> ToValue for [T; N] {
	fn to_value(&self) -> Value {
		Value::array(T::static_type(), self.iter().map(ToValue::to_value).collect())
	}
}

impl<K: StaticType, V: StaticType, S> StaticType for HashMap<K, V, S> {
	fn static_type() -> Type {
		Type::map_of(K::static_type(), V::static_type())
	}
}

impl<K: StaticType + ToValue, V: StaticType + ToValue, S> ToValue for HashMap<K, V, S> {
	fn to_value(&self) -> Value {
		let entries = self.iter().map(|(key, value)| (key.to_value(), value.to_value())).collect();
		Value::map(K::static_type(), V::static_type(), entries)
	}
}

impl<K: StaticType, V: StaticType> StaticType for BTreeMap<K, V> {
	fn static_type() -> Type {
		Type::map_of(K::static_type(), V::static_type())
	}
}

impl<K: StaticType + ToValue, V: StaticType + ToValue> ToValue for BTreeMap<K, V> {
	fn to_value(&self) -> Value {
		let entries = self.iter().map(|(key, value)| (key.to_value(), value.to_value())).collect();
		Value::map(K::static_type(), V::static_type(), entries)
	}
}

impl<T: StaticType> StaticType for Option<T> {
	fn static_type() -> Type {
		Type::ptr_to(T::static_type())
	}
}

/// `None` is a nil pointer.
impl<T: StaticType + ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value {
		match self {
			Some(inner) => Value::ptr(T::static_type(), address_of(inner), inner.to_value()),
			None => Value::nil_ptr(T::static_type()),
		}
	}
}

impl<T: StaticType> StaticType for Box<T> {
	fn static_type() -> Type {
		Type::ptr_to(T::static_type())
	}
}

impl<T: StaticType + ToValue> ToValue for Box<T> {
	fn to_value(&self) -> Value {
		Value::ptr(T::static_type(), address_of(self.as_ref()), self.as_ref().to_value())
	}
}

/// Dynamic values are statically the empty interface.
impl StaticType for Value {
	fn static_type() -> Type {
		Type::Interface
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Value {
		self.clone()
	}
}

fn address_of<T>(value: &T) -> u64 {
	std::ptr::from_ref(value) as usize as u64
}

impl Value {
	/// Convert a JSON document the way a dynamic host decodes untyped JSON.
	///
	/// Arrays become `[]interface {}` and objects `map[string]interface {}`
	/// with every element boxed in an interface.
	pub fn from_json(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Self::Nil,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(number) => {
				if let Some(v) = number.as_i64() {
					Self::Int(v)
				} else if let Some(v) = number.as_u64() {
					Self::Uint64(v)
				} else {
					Self::Float64(number.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => Self::string(v),
			serde_json::Value::Array(items) => Self::slice(Type::Interface, items.into_iter().map(Self::box_json).collect()),
			serde_json::Value::Object(entries) => Self::map(
				Type::String,
				Type::Interface,
				entries.into_iter().map(|(key, item)| (Self::string(key), Self::box_json(item))).collect(),
			),
		}
	}

	fn box_json(json: serde_json::Value) -> Self {
		match Self::from_json(json) {
			Self::Nil => Self::Interface(crate::view::InterfaceValue {
				ty: Type::Interface,
				inner: None,
			}),
			other => Self::boxed(other),
		}
	}
}
