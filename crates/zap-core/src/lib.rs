//! Core snippet resolution engine.
//!
//! `dict` holds the parsed dictionary and its derived lookup maps;
//! `resolver` turns typed input into ranked, case-adapted candidates.

pub mod dict;
pub mod resolver;
