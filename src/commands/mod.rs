pub mod create;
pub mod templates;
