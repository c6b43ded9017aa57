//! Search module: exact substring matching and word-level prefix lookup.
//!
//! Two independent strategies with different cost profiles:
//!
//! - [`kmp`]: stateless Knuth-Morris-Pratt substring search, linear in
//!   text plus pattern with no precomputation kept between calls.
//!   Suited to one-off interactive queries.
//! - [`Trie`]: a prefix tree over inserted words, built once and
//!   queried many times at O(word length) per lookup.
//!
//! [`Scanner`] applies the KMP matcher across an article collection.

pub mod kmp;
mod scan;
mod trie;

pub use scan::Scanner;
pub use trie::{Trie, TrieNode};
