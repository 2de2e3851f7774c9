//! envschema — load `.env` files and validate them against a typed schema
//! (library crate).
//!
//! The pipeline has two stages: [`dotenv::load`] parses a file into a flat
//! string mapping, and [`schema::apply`] checks required keys, casts values,
//! and fills defaults.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use envschema::dotenv::{self, LoadOptions};
//! use envschema::env::Env;
//! use envschema::schema::{self, Schema, SchemaRule, ValueKind};
//!
//! let raw = dotenv::load(Path::new(".env"), &LoadOptions::default(), &mut Env::real())?;
//! let schema = Schema::new()
//!     .rule("PORT", SchemaRule::new(ValueKind::Integer).with_default(8080i64))
//!     .rule("DATABASE_URL", SchemaRule::default().required());
//! let validated = schema::apply(&raw, &schema)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bump;
pub mod config;
pub mod constants;
pub mod dotenv;
pub mod env;
pub mod output;
pub mod schema;
