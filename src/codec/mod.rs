//! # Zsh Text Codec
//!
//! Converts `.zshrc`-style text into a [`ParsedConfig`] and back.
//!
//! Parsing is line oriented and never fails. Four kinds of assignment are
//! understood: `export NAME=VALUE`, `export PATH=...`, bare `PATH=...` and
//! `alias NAME=VALUE`. Every other non-blank line, comments included, is
//! carried through untouched.
//!
//! ## Module Structure
//!
//! - [`patterns`] - Regex definitions for the assignment forms
//! - [`quote`] - Quote stripping, escaping, command separator search
//! - [`classify`] - Per-line classification
//! - [`path_merge`] - PATH decomposition and deduplication
//! - [`parse`](mod@parse) / [`serialize`](mod@serialize) - The two directions
//!
//! ## Round trips
//!
//! `serialize` emits a canonical layout, so the first round trip may
//! reorder and requote a hand-written file. After that the text is a fixed
//! point: `serialize(parse(serialize(c))) == serialize(c)` for any config
//! whose values contain no `"` and no disabled aliases.
//!
//! A value containing `"` is written escaped as `\"`, but the parser ends a
//! quoted value at the first matching quote, escaped or not, so such values
//! are cut short on the next parse.
//!
//! The serializer's banner and section headers are dropped on parse. A
//! comment the user wrote that reads exactly like one of them (`# Aliases`,
//! `# PATH Configuration`, ...) is dropped too.

pub mod classify;
pub mod parse;
pub mod path_merge;
pub mod patterns;
pub mod quote;
pub mod serialize;

pub use classify::{classify_line, LineKind};
pub use parse::parse;
pub use quote::unquote;
pub use serialize::serialize;
