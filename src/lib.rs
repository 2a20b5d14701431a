//! Language and theme preference resolution for a bilingual portfolio site.
//!
//! - [`i18n`]: active language, localized URLs and translation lookups
//! - [`theme`]: light/dark theme resolution, persistence and notification
//! - [`env`]: the browser capabilities both resolvers depend on
//! - [`portfolio`]: typed portfolio records with localized fields

pub mod config;
pub mod env;
pub mod error;
pub mod i18n;
pub mod portfolio;
pub mod site;
pub mod theme;
