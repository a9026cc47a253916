//! Fretty Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Fretty parser
//! and renderer. It includes:
//!
//! - **Semantic model**: the parsed fretboard ([`semantic::Diagram`],
//!   [`semantic::InstrumentString`], [`semantic::Marking`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawing primitives and layered SVG output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
