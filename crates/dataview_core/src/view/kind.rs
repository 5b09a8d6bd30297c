use std::fmt;

/// Runtime category of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Untyped nil.
	Invalid,
	/// Boolean.
	Bool,
	/// Platform-sized signed integer.
	Int,
	/// 8-bit signed integer.
	Int8,
	/// 16-bit signed integer.
	Int16,
	/// 32-bit signed integer.
	Int32,
	/// 64-bit signed integer.
	Int64,
	/// Platform-sized unsigned integer.
	Uint,
	/// 8-bit unsigned integer.
	Uint8,
	/// 16-bit unsigned integer.
	Uint16,
	/// 32-bit unsigned integer.
	Uint32,
	/// 64-bit unsigned integer.
	Uint64,
	/// Integer wide enough to hold an address.
	Uintptr,
	/// 32-bit float.
	Float32,
	/// 64-bit float.
	Float64,
	/// Complex number with 32-bit parts.
	Complex64,
	/// Complex number with 64-bit parts.
	Complex128,
	/// Fixed-length array.
	Array,
	/// Channel.
	Chan,
	/// Function.
	Func,
	/// Interface box around a dynamic value.
	Interface,
	/// Key/value mapping.
	Map,
	/// Typed pointer.
	Ptr,
	/// Variable-length sequence.
	Slice,
	/// Text.
	String,
	/// Record with named fields.
	Struct,
	/// Untyped raw pointer.
	UnsafePointer,
}

impl Kind {
	/// Lowercase kind name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Invalid => "invalid",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Int8 => "int8",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Uint => "uint",
			Self::Uint8 => "uint8",
			Self::Uint16 => "uint16",
			Self::Uint32 => "uint32",
			Self::Uint64 => "uint64",
			Self::Uintptr => "uintptr",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::Complex64 => "complex64",
			Self::Complex128 => "complex128",
			Self::Array => "array",
			Self::Chan => "chan",
			Self::Func => "func",
			Self::Interface => "interface",
			Self::Map => "map",
			Self::Ptr => "ptr",
			Self::Slice => "slice",
			Self::String => "string",
			Self::Struct => "struct",
			Self::UnsafePointer => "unsafe.Pointer",
		}
	}

	/// Whether values of this kind are laid out as an element sequence.
	pub fn is_sequence(self) -> bool {
		matches!(self, Self::Array | Self::Slice)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Partition of kinds used to pick a rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindClass {
	/// Flattens to a type label and a textual value.
	Simple,
	/// Needs structural handling: records, channels, functions, interfaces.
	Complicated,
}

/// Classify a dereferenced kind.
///
/// Pointer kinds are `Simple`: by the time a value reaches the classifier its
/// indirection has been resolved, so a remaining pointer is nil or past the hop
/// limit and renders as an address.
pub fn classify(kind: Kind) -> KindClass {
	match kind {
		Kind::Struct | Kind::Chan | Kind::Func | Kind::Interface => KindClass::Complicated,
		_ => KindClass::Simple,
	}
}
