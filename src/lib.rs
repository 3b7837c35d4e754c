//! Playbill — a builder for Shakespeare Programming Language plays.
//!
//! Describes a computation (numbers, characters, stage directions) as an
//! object graph of characters, acts, and scenes, then renders that graph
//! into SPL source text: integers become noun phrases whose length encodes
//! their binary magnitude, and assignments become dialogue spoken by
//! whichever character shares the stage with the target.

pub mod core;
pub mod schema;
pub mod wordbanks;
