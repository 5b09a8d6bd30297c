use std::fmt;
use std::sync::Arc;

use crate::view::{ChanDir, FieldType, FuncType, Kind, Result, Type};

/// Dynamically typed runtime value handed over by a host evaluator.
#[derive(Debug, Clone)]
pub enum Value {
	/// Untyped nil.
	Nil,
	/// `bool`
	Bool(bool),
	/// `int`
	Int(i64),
	/// `int8`
	Int8(i8),
	/// `int16`
	Int16(i16),
	/// `int32`
	Int32(i32),
	/// `int64`
	Int64(i64),
	/// `uint`
	Uint(u64),
	/// `uint8`
	Uint8(u8),
	/// `uint16`
	Uint16(u16),
	/// `uint32`
	Uint32(u32),
	/// `uint64`
	Uint64(u64),
	/// `uintptr`
	Uintptr(u64),
	/// `float32`
	Float32(f32),
	/// `float64`
	Float64(f64),
	/// `complex64` as (real, imaginary).
	Complex64(f32, f32),
	/// `complex128` as (real, imaginary).
	Complex128(f64, f64),
	/// `string`
	String(Box<str>),
	/// `unsafe.Pointer` address.
	UnsafePointer(u64),
	/// Fixed-length array.
	Array(ArrayValue),
	/// Variable-length sequence.
	Slice(SliceValue),
	/// Key/value mapping.
	Map(MapValue),
	/// Typed pointer.
	Ptr(PtrValue),
	/// Interface box.
	Interface(InterfaceValue),
	/// Record.
	Struct(StructValue),
	/// Channel handle.
	Chan(ChanValue),
	/// Function handle.
	Func(FuncValue),
	/// Non-struct value of a defined type.
	Named(NamedValue),
	/// Lazily-read host value.
	Host(Arc<dyn HostValue>),
}

/// `[N]T` value.
#[derive(Debug, Clone)]
pub struct ArrayValue {
	/// Element type.
	pub elem: Type,
	/// Elements; the array length is `items.len()`.
	pub items: Vec<Value>,
}

/// `[]T` value.
#[derive(Debug, Clone)]
pub struct SliceValue {
	/// Element type.
	pub elem: Type,
	/// Elements, `None` for a nil slice.
	pub items: Option<Vec<Value>>,
}

/// `map[K]V` value.
#[derive(Debug, Clone)]
pub struct MapValue {
	/// Key type.
	pub key: Type,
	/// Value type.
	pub value: Type,
	/// Entries in the order the host yields them, `None` for a nil map.
	pub entries: Option<Vec<(Value, Value)>>,
}

/// `*T` value.
#[derive(Debug, Clone)]
pub struct PtrValue {
	/// Pointee type.
	pub elem: Type,
	/// Address used when the pointer renders as a raw address.
	pub addr: u64,
	/// Pointee, `None` for nil.
	pub target: Option<Box<Value>>,
}

/// Interface box around a dynamic value.
#[derive(Debug, Clone)]
pub struct InterfaceValue {
	/// Static interface type.
	pub ty: Type,
	/// Dynamic value, `None` for a nil interface.
	pub inner: Option<Box<Value>>,
}

/// Record value with fields in declaration order.
#[derive(Debug, Clone)]
pub struct StructValue {
	/// Defined type name, `None` for anonymous structs.
	pub type_name: Option<Box<str>>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

/// Named struct field.
#[derive(Debug, Clone)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Declared field type.
	pub ty: Type,
	/// Current field value.
	pub value: Value,
}

/// Channel handle.
#[derive(Debug, Clone)]
pub struct ChanValue {
	/// Channel direction.
	pub dir: ChanDir,
	/// Element type.
	pub elem: Type,
	/// Handle address, `0` for nil.
	pub addr: u64,
}

/// Function handle.
#[derive(Debug, Clone)]
pub struct FuncValue {
	/// Signature.
	pub sig: FuncType,
	/// Entry address, `0` for nil.
	pub addr: u64,
}

/// Value of a defined non-struct type such as `type Celsius float64`.
#[derive(Debug, Clone)]
pub struct NamedValue {
	/// Defined type name.
	pub name: Box<str>,
	/// Underlying value.
	pub inner: Box<Value>,
}

/// Host-owned value that is only read on demand.
///
/// `extract` may fail for values the host cannot expose (unexported fields,
/// invalid handles). Callers fall back to `handle` in that case.
pub trait HostValue: fmt::Debug + Send + Sync {
	/// Host type label.
	fn type_name(&self) -> String;

	/// Runtime kind of the underlying value.
	fn kind(&self) -> Kind;

	/// Read the underlying value.
	fn extract(&self) -> Result<Value>;

	/// Raw handle rendering.
	fn handle(&self) -> String {
		format!("<{} Value>", self.type_name())
	}
}

impl Value {
	/// Build a `string` value.
	pub fn string(value: impl Into<Box<str>>) -> Self {
		Self::String(value.into())
	}

	/// Build a `[]T` value.
	pub fn slice(elem: Type, items: Vec<Value>) -> Self {
		Self::Slice(SliceValue { elem, items: Some(items) })
	}

	/// Build a `[N]T` value.
	pub fn array(elem: Type, items: Vec<Value>) -> Self {
		Self::Array(ArrayValue { elem, items })
	}

	/// Build a `map[K]V` value.
	pub fn map(key: Type, value: Type, entries: Vec<(Value, Value)>) -> Self {
		Self::Map(MapValue {
			key,
			value,
			entries: Some(entries),
		})
	}

	/// Build a non-nil pointer to `target`.
	pub fn ptr(elem: Type, addr: u64, target: Value) -> Self {
		Self::Ptr(PtrValue {
			elem,
			addr,
			target: Some(Box::new(target)),
		})
	}

	/// Build a nil `*T`.
	pub fn nil_ptr(elem: Type) -> Self {
		Self::Ptr(PtrValue { elem, addr: 0, target: None })
	}

	/// Box `inner` in an empty interface.
	pub fn boxed(inner: Value) -> Self {
		Self::Interface(InterfaceValue {
			ty: Type::Interface,
			inner: Some(Box::new(inner)),
		})
	}

	/// Give `inner` a defined type name.
	pub fn named(name: impl Into<Box<str>>, inner: Value) -> Self {
		Self::Named(NamedValue {
			name: name.into(),
			inner: Box::new(inner),
		})
	}

	/// Runtime kind.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Nil => Kind::Invalid,
			Self::Bool(_) => Kind::Bool,
			Self::Int(_) => Kind::Int,
			Self::Int8(_) => Kind::Int8,
			Self::Int16(_) => Kind::Int16,
			Self::Int32(_) => Kind::Int32,
			Self::Int64(_) => Kind::Int64,
			Self::Uint(_) => Kind::Uint,
			Self::Uint8(_) => Kind::Uint8,
			Self::Uint16(_) => Kind::Uint16,
			Self::Uint32(_) => Kind::Uint32,
			Self::Uint64(_) => Kind::Uint64,
			Self::Uintptr(_) => Kind::Uintptr,
			Self::Float32(_) => Kind::Float32,
			Self::Float64(_) => Kind::Float64,
			Self::Complex64(..) => Kind::Complex64,
			Self::Complex128(..) => Kind::Complex128,
			Self::String(_) => Kind::String,
			Self::UnsafePointer(_) => Kind::UnsafePointer,
			Self::Array(_) => Kind::Array,
			Self::Slice(_) => Kind::Slice,
			Self::Map(_) => Kind::Map,
			Self::Ptr(_) => Kind::Ptr,
			Self::Interface(_) => Kind::Interface,
			Self::Struct(_) => Kind::Struct,
			Self::Chan(_) => Kind::Chan,
			Self::Func(_) => Kind::Func,
			Self::Named(named) => named.inner.kind(),
			Self::Host(host) => host.kind(),
		}
	}

	/// Host type label of this value.
	pub fn type_name(&self) -> String {
		match self {
			Self::Nil => "nil".to_owned(),
			Self::Array(array) => Type::array_of(array.items.len(), array.elem.clone()).to_string(),
			Self::Slice(slice) => Type::slice_of(slice.elem.clone()).to_string(),
			Self::Map(map) => Type::map_of(map.key.clone(), map.value.clone()).to_string(),
			Self::Ptr(ptr) => Type::ptr_to(ptr.elem.clone()).to_string(),
			Self::Interface(iface) => iface.ty.to_string(),
			Self::Struct(item) => item.ty().to_string(),
			Self::Chan(chan) => Type::Chan(chan.dir, Box::new(chan.elem.clone())).to_string(),
			Self::Func(func) => func.sig.to_string(),
			Self::Named(named) => named.name.to_string(),
			Self::Host(host) => host.type_name(),
			scalar => scalar.kind().name().to_owned(),
		}
	}

	/// Strip defined-type wrappers.
	pub fn underlying(&self) -> &Value {
		let mut current = self;
		while let Self::Named(named) = current {
			current = &named.inner;
		}
		current
	}

	/// Borrow the record behind this value, if it is one.
	pub fn as_struct(&self) -> Option<&StructValue> {
		match self.underlying() {
			Self::Struct(item) => Some(item),
			_ => None,
		}
	}
}

impl StructValue {
	/// Build a struct of a defined type.
	pub fn named(type_name: impl Into<Box<str>>, fields: Vec<FieldValue>) -> Self {
		Self {
			type_name: Some(type_name.into()),
			fields,
		}
	}

	/// Build an anonymous struct.
	pub fn anonymous(fields: Vec<FieldValue>) -> Self {
		Self { type_name: None, fields }
	}

	/// Static type of this record.
	pub fn ty(&self) -> Type {
		let fields = self
			.fields
			.iter()
			.map(|field| FieldType {
				name: field.name.clone(),
				ty: field.ty.clone(),
			})
			.collect();
		match &self.type_name {
			Some(name) => Type::Named(name.clone(), Box::new(Type::Struct(fields))),
			None => Type::Struct(fields),
		}
	}
}

impl FieldValue {
	/// Build a field.
	pub fn new(name: impl Into<Box<str>>, ty: Type, value: Value) -> Self {
		Self {
			name: name.into(),
			ty,
			value,
		}
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Self::Struct(value)
	}
}
