pub mod bundle;
pub mod defaults;
pub mod diagnostics;
pub mod error_utils;
pub mod inspect;
pub mod loader;
pub mod logging;
pub mod maven;
pub mod models;
pub mod schema;
pub mod validation;
