//! # textsplit
//!
//! Split long text into size-bounded chunks at natural boundaries and
//! hand them, in order, to a per-chunk consumer.
//!
//! The splitting itself lives in [`textsplit_core`]; this crate is the
//! boundary around it: configuration, input, and the chunk sinks.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │   Input    │──▶│ TextSplitter │──▶│    ChunkSink     │
//! │ arg/file/  │   │  (core)      │   │ stdout / export /│
//! │   stdin    │   └──────────────┘   │ stats / custom   │
//! └────────────┘                      └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! tsplit split "Some long text..." --max-chars 4096
//! tsplit split --file book.txt --format jsonl
//! cat notes.md | tsplit export --out-dir chunks/ --trim
//! tsplit stats --file book.txt --preset punctuation
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration and command-line overrides |
//! | [`input`] | Reading text from an argument, file, or stdin |
//! | [`sink`] | Per-chunk consumer trait and the ordered pipeline |
//! | [`output`] | Plain, JSON, and JSON-lines output |
//! | [`export`] | Chunk files plus manifest |
//! | [`stats`] | Chunk size statistics |
//! | [`progress`] | Progress reporting on stderr |
//! | [`commands`] | `tsplit` subcommand implementations |

pub mod commands;
pub mod config;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod progress;
pub mod sink;
pub mod stats;

pub use textsplit_core;
