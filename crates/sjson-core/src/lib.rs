//! # sjson-core
//!
//! Document model, parser, serializer and tree algorithms for **sjson**, the
//! JSON dialect used for save data and configuration documents.
//!
//! sjson is JSON plus *literals*: any unquoted token without whitespace or
//! structural characters is a scalar, so enumerators persist as bare words
//! (`facing: north_east`) instead of quoted strings.
//!
//! ## Quick start
//!
//! ```rust
//! use sjson_core::{parse, to_string, Value};
//!
//! let mut doc = parse("{hp: 12, facing: north_east}").unwrap();
//! doc.set("name", "Ada");
//! assert_eq!(doc.get("facing"), Some(&Value::literal("north_east")));
//!
//! let text = to_string(&doc);
//! assert_eq!(parse(&text).unwrap(), doc);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and its queries/mutators
//! - [`parser`] — text → `Value`, with line-numbered errors and a depth guard
//! - [`serializer`] — `Value` → indented text
//! - [`filter`] — `grep`, `destructive_grep`, `destructive_merge` and friends
//! - [`adapter`] — `ToJson`/`FromJson` contract for domain types
//! - [`cache`] — `DocumentCache`, the shared registry of loaded documents
//! - [`loader`] — read-parse-cache glue for files on disk
//! - [`json`] — strict JSON interop through serde
//! - [`error`] — error types

pub mod adapter;
pub mod cache;
pub mod error;
pub mod filter;
pub mod json;
pub mod loader;
pub mod parser;
pub mod serializer;
pub mod value;

pub use adapter::{decode_seq, encode_seq, EnumTable, FromJson, ToJson};
pub use cache::DocumentCache;
pub use error::{Error, Result};
pub use parser::{from_reader, parse, parse_with, ParseOptions, Parser};
pub use serializer::{to_string, to_writer};
pub use value::{LiteralKind, Map, Mode, Value};
