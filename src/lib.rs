//! Glob-style lookup over an archive's flat entry-name index.
//!
//! A pattern has one metacharacter, `*` (zero or more of any character),
//! which may be escaped as `\*`. Patterns compile to a small instruction
//! program executed as an NFA thread simulation, so matching is linear in
//! the candidate length no matter how many wildcards the pattern holds.
//!
//! # Example
//!
//! ```rust
//! use zipglob::NameIndex;
//!
//! let index = NameIndex::from_names(["a/", "a/b/c/f", "a/b/d/"]);
//!
//! assert_eq!(index.glob("a/b/c*"), vec!["a/b/c/f"]);
//! assert!(index.glob("*.txt").is_empty());
//!
//! // Exact lookup is a separate, fallible operation.
//! assert!(index.find("a/b/c/f").is_ok());
//! assert!(index.find("a/b/c/*").is_err());
//! ```
//!
//! For repeated matching against one pattern, compile once and reuse a
//! [`Matcher`]:
//!
//! ```rust
//! use zipglob::{Matcher, compile};
//!
//! let prog = compile("/path/to*");
//! let mut matcher = Matcher::new();
//! assert!(matcher.is_match(&prog, "/path/to/z"));
//! assert!(!matcher.is_match(&prog, "/path/elsewhere"));
//! ```

mod index;
pub mod pattern;

pub use index::{EntrySource, NameIndex, filter_out_dirs, find_matches, open_entry};
pub use pattern::{Inst, Matcher, Program, compile, match_one};
