pub mod cf_config;
pub mod error;
pub mod match_config;

pub use cf_config::{
    ConfigDocument, DEFAULT_SCAL, TemplateLocation, VariableGroup, VariableSpec,
    parse_config_content,
};
pub use error::{AppError, KeyKind};
pub use match_config::{MappingEntry, MatchConfig, parse_match_content};
