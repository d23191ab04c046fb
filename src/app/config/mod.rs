//! Store-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::cf_config` and
//! `domain::match_config`; this module adds document access and reference
//! resolution on top.

mod load_cf_config;
mod load_match_config;

pub use load_cf_config::load_cf_config;
pub use load_match_config::load_match_config;
