//! JSON document model, decoding and serialization.

pub mod node;
pub mod parser;
pub mod writer;
