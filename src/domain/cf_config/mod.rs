//! Model-field configuration: which fields to read from which collection, and
//! how to rescale them.

pub mod document;
pub mod group;
pub mod parse;
pub mod template;
pub mod variable;

pub use document::ConfigDocument;
pub use group::{TemplateLocation, VariableGroup};
pub use parse::parse_config_content;
pub use variable::{DEFAULT_SCAL, VariableSpec};
