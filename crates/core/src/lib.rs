#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod holidays;
pub mod template;

pub use holidays::{Holiday, HolidayError, HolidaySet};
pub use template::{resolve, TemplateError, TemplateErrorKind};
