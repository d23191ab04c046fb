pub mod check;
pub mod mapping;
pub mod show;
pub mod template;
