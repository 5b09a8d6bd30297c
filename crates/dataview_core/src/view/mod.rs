mod build;
mod convert;
mod data;
mod deref;
mod encode;
mod error;
mod fields;
mod kind;
mod render;
mod simple;
mod ty;
mod value;

/// View building entry points and options.
pub use build::{ViewOptions, build_view, view, view_with, view_with_options};
/// Native and JSON conversions into the value model.
pub use convert::{StaticType, ToValue, view_of};
/// Output structure and the absent-value constant.
pub use data::{DataView, ZERO_VALUE};
/// Indirection-following helpers.
pub use deref::{Deref, deref};
/// Encoder seam and the JSON encoder.
pub use encode::{Encoder, JsonEncoder};
/// Error and result aliases.
pub use error::{Result, ViewError};
/// Kind taxonomy and classifier.
pub use kind::{Kind, KindClass, classify};
/// Generic `%v`-style rendering.
pub use render::render;
/// Static type descriptors.
pub use ty::{ChanDir, FieldType, FuncType, Type};
/// Dynamic value model.
pub use value::{ArrayValue, ChanValue, FieldValue, FuncValue, HostValue, InterfaceValue, MapValue, NamedValue, PtrValue, SliceValue, StructValue, Value};
