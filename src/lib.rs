//! jsonsift - a path-based JSON query tool.
//!
//! jsonsift pretty-prints JSON and filters it with slash-delimited path
//! expressions: extract values, trim subtrees out, or check that paths
//! exist. Array segments support indices, ranges and wildcards; object
//! segments are regular expressions matched against keys.
//!
//! The crate is organized as:
//! - [`document`] - the JSON value model, decoding and serialization
//! - [`query`] - the path engine (parsing, resolution, traversal, output)
//! - [`file`] - file/stdin input and output for the CLI
//! - [`config`] - persistent defaults from a TOML config file

pub mod config;
pub mod document;
pub mod file;
pub mod query;
