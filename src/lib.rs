//! PathQuill - attribute and file paths for walking nested values and
//! filesystem trees.
//!
//! # Modules
//!
//! - `path`: the shared path algebra, [`AttributePath`](path::AttributePath) and [`FilePath`](path::FilePath)
//! - `accessor`: reading and writing nested values through attribute paths
//! - `document`: the `Value` graph plus JSON / YAML conversion
//! - `collections`: ordered collections and dictionaries with checked access
//! - `cache`: a files cache whose manifest is driven by attribute paths
//! - `config`: settings for the files cache

pub mod accessor;
pub mod cache;
pub mod collections;
pub mod config;
pub mod document;
pub mod path;
