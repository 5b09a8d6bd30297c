/// Top-level kind and class report.
pub mod kind;
/// Encoded view command.
pub mod view;

mod input;
