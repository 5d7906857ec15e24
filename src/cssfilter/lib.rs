//! # cssfilter Architecture
//!
//! cssfilter is a **UI-agnostic model for editing CSS `filter` values** such as
//! `blur(2px) grayscale(50%)`. It is a library that happens to have a CLI
//! client, not the other way around: any editor (terminal, web, native) can
//! drive the same model.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → entry ids)          │
//! │  - Fires the change listener after each mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns `CmdResult`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer                                                │
//! │  - catalog: known filter kinds, units, ranges               │
//! │  - tokenizer: string → (name, value) tokens                 │
//! │  - coerce: raw value → clamped, unit-tagged value           │
//! │  - list: ordered entries with stable ids, toCss             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cssfilter::list::FilterList;
//!
//! let mut list = FilterList::from_css("blur(30px) grayscale(200%)").unwrap();
//! assert_eq!(list.to_css(), "blur(30px) grayscale(100%)");
//!
//! let id = list.add("opacity", "0.5").unwrap();
//! list.move_to(id, 0).unwrap();
//! assert_eq!(list.to_css(), "opacity(50%) blur(30px) grayscale(100%)");
//! ```
//!
//! ## Identity
//!
//! Entries are addressed by [`model::EntryId`], assigned when an entry is
//! added and never reused. Positions are derived, always dense, and only used
//! at the edges: the CLI speaks 1-based display indexes ([`index`]) and
//! resolves them to ids before touching the list.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: One module per operation
//! - [`catalog`]: Filter kind definitions
//! - [`tokenizer`]: Depth-counting tokenizer
//! - [`coerce`]: Value parsing, clamping, rounding and formatting
//! - [`list`]: The filter list model
//! - [`reorder`]: Pure reorder arithmetic over ids
//! - [`gesture`]: Drag-to-adjust and row-drag arithmetic
//! - [`index`]: Display indexes (1, 2-4)
//! - [`model`]: Entry and value types
//! - [`config`]: Editor configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod error;
pub mod gesture;
pub mod index;
pub mod list;
pub mod model;
pub mod reorder;
pub mod tokenizer;

pub use error::{FilterError, ParseError, Result};
pub use list::FilterList;
