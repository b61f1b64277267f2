//! schemeconst - table and column name constants from a PHP Scheme file
//!
//! Scans a `Scheme.php` for `new Table('name')` constructions and
//! `$table->column = ...` assignments, then writes `ColumnName` and
//! `TableName` classes so application code can refer to constants instead of
//! raw strings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (read, extract, render, write)

pub mod cli;
pub mod config;
pub mod core;
