//! Career interest scoring and course recommendation API.
//!
//! Students answer a 25-question Likert quiz; the service maps the answers onto
//! a fixed interest taxonomy, ranks interest categories, and suggests courses
//! from a static catalog by keyword matching on the strongest interests.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
