use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors produced while reading host values and encoding views.
///
/// None of these leave the view entry points; they are recovered where they
/// occur and degrade the output instead.
#[derive(Debug, Error)]
pub enum ViewError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encoding or decoding failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Host value cannot be read.
	#[error("value of type {type_name} is not accessible: {reason}")]
	Inaccessible {
		/// Host type label.
		type_name: String,
		/// Host-provided reason.
		reason: String,
	},
}
