//! # atxt
//!
//! A parser for the atxt annotation markup format.
//!
//! atxt is an indentation-sensitive markup language built around annotations:
//! an `@` sigil introduces a typed entity, parameters follow the name (bare
//! or parenthesised), `:` keeps nesting on the same physical line, `[...]`
//! carries inline content mid-line, and `@@` opens an unparsed region where
//! the sigil loses its meaning until indentation returns to the level the
//! region started on.
//!
//! The crate is organised as a pipeline: the lexer scans source text into a
//! flat token stream, the tree builder folds that stream into an ordered
//! tree of typed nodes, and the serializer is the structural inverse of the
//! builder. All downstream consumers navigate and mutate the tree through
//! the selection module; they never see tokens.
//!
//! For testing guidelines, see the [testing module](atxt::testing). Parser
//! tests assert complete tree shapes, not fragments.

#![allow(rustdoc::invalid_html_tags)]

pub mod atxt;
