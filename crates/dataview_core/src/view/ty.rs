use std::fmt;

use crate::view::Kind;

/// Static type descriptor for dynamic values.
///
/// `Display` renders the host label (`[]int`, `map[string]int`, `*main.T`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
	/// `bool`
	Bool,
	/// `int`
	Int,
	/// `int8`
	Int8,
	/// `int16`
	Int16,
	/// `int32`
	Int32,
	/// `int64`
	Int64,
	/// `uint`
	Uint,
	/// `uint8`
	Uint8,
	/// `uint16`
	Uint16,
	/// `uint32`
	Uint32,
	/// `uint64`
	Uint64,
	/// `uintptr`
	Uintptr,
	/// `float32`
	Float32,
	/// `float64`
	Float64,
	/// `complex64`
	Complex64,
	/// `complex128`
	Complex128,
	/// `string`
	String,
	/// `unsafe.Pointer`
	UnsafePointer,
	/// `[N]T`
	Array(usize, Box<Type>),
	/// `[]T`
	Slice(Box<Type>),
	/// `map[K]V`
	Map(Box<Type>, Box<Type>),
	/// `*T`
	Ptr(Box<Type>),
	/// `chan T`, `<-chan T`, `chan<- T`
	Chan(ChanDir, Box<Type>),
	/// Function signature.
	Func(FuncType),
	/// Empty interface.
	Interface,
	/// Anonymous struct.
	Struct(Vec<FieldType>),
	/// Defined type with its own name.
	Named(Box<str>, Box<Type>),
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
	/// Send and receive.
	Both,
	/// Receive only.
	Recv,
	/// Send only.
	Send,
}

/// Function signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncType {
	/// Parameter types.
	pub params: Vec<Type>,
	/// Result types.
	pub results: Vec<Type>,
	/// Last parameter is variadic; it is stored as a slice type.
	pub variadic: bool,
}

/// One declared struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
	/// Field identifier.
	pub name: Box<str>,
	/// Declared field type.
	pub ty: Type,
}

impl Type {
	/// Build `[]T`.
	pub fn slice_of(elem: Type) -> Self {
		Self::Slice(Box::new(elem))
	}

	/// Build `[N]T`.
	pub fn array_of(len: usize, elem: Type) -> Self {
		Self::Array(len, Box::new(elem))
	}

	/// Build `map[K]V`.
	pub fn map_of(key: Type, value: Type) -> Self {
		Self::Map(Box::new(key), Box::new(value))
	}

	/// Build `*T`.
	pub fn ptr_to(elem: Type) -> Self {
		Self::Ptr(Box::new(elem))
	}

	/// Build a defined type.
	pub fn named(name: impl Into<Box<str>>, underlying: Type) -> Self {
		Self::Named(name.into(), Box::new(underlying))
	}

	/// Runtime kind of values of this type.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Bool => Kind::Bool,
			Self::Int => Kind::Int,
			Self::Int8 => Kind::Int8,
			Self::Int16 => Kind::Int16,
			Self::Int32 => Kind::Int32,
			Self::Int64 => Kind::Int64,
			Self::Uint => Kind::Uint,
			Self::Uint8 => Kind::Uint8,
			Self::Uint16 => Kind::Uint16,
			Self::Uint32 => Kind::Uint32,
			Self::Uint64 => Kind::Uint64,
			Self::Uintptr => Kind::Uintptr,
			Self::Float32 => Kind::Float32,
			Self::Float64 => Kind::Float64,
			Self::Complex64 => Kind::Complex64,
			Self::Complex128 => Kind::Complex128,
			Self::String => Kind::String,
			Self::UnsafePointer => Kind::UnsafePointer,
			Self::Array(..) => Kind::Array,
			Self::Slice(_) => Kind::Slice,
			Self::Map(..) => Kind::Map,
			Self::Ptr(_) => Kind::Ptr,
			Self::Chan(..) => Kind::Chan,
			Self::Func(_) => Kind::Func,
			Self::Interface => Kind::Interface,
			Self::Struct(_) => Kind::Struct,
			Self::Named(_, underlying) => underlying.kind(),
		}
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Array(len, elem) => write!(f, "[{len}]{elem}"),
			Self::Slice(elem) => write!(f, "[]{elem}"),
			Self::Map(key, value) => write!(f, "map[{key}]{value}"),
			Self::Ptr(elem) => write!(f, "*{elem}"),
			Self::Chan(ChanDir::Both, elem) => write!(f, "chan {elem}"),
			Self::Chan(ChanDir::Recv, elem) => write!(f, "<-chan {elem}"),
			Self::Chan(ChanDir::Send, elem) => write!(f, "chan<- {elem}"),
			Self::Func(sig) => sig.fmt(f),
			Self::Interface => f.write_str("interface {}"),
			Self::Struct(fields) => {
				if fields.is_empty() {
					return f.write_str("struct {}");
				}
				f.write_str("struct { ")?;
				for (idx, field) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str("; ")?;
					}
					write!(f, "{} {}", field.name, field.ty)?;
				}
				f.write_str(" }")
			}
			Self::Named(name, _) => f.write_str(name),
			scalar => f.write_str(scalar.kind().name()),
		}
	}
}

impl fmt::Display for FuncType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("func(")?;
		let last = self.params.len().saturating_sub(1);
		for (idx, param) in self.params.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			match param {
				Type::Slice(elem) if self.variadic && idx == last => write!(f, "...{elem}")?,
				other => write!(f, "{other}")?,
			}
		}
		f.write_str(")")?;

		match self.results.as_slice() {
			[] => Ok(()),
			[single] => write!(f, " {single}"),
			many => {
				f.write_str(" (")?;
				for (idx, result) in many.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{result}")?;
				}
				f.write_str(")")
			}
		}
	}
}
