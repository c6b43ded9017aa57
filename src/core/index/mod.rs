//! Word index module.
//!
//! Builds the "index once, query many" search path: every article gets
//! its own trie over the words of its title, keyed by the article's
//! stable id. The build is a full rebuild, never incremental, which
//! keeps the phase separation simple: a [`WordIndex`] is immutable once
//! constructed, so there is no window where queries can observe a
//! half-built state.

mod tokenizer;
mod word_index;

pub use tokenizer::words;
pub use word_index::WordIndex;
