//! # taplist
//!
//! A minimal static page generator for local craft beer directories. One
//! JSON file of breweries, bottle shops, bars, and restaurants in; one
//! self-contained HTML page out.
//!
//! # Architecture: One Linear Pass
//!
//! The whole run is a single in-memory transform:
//!
//! ```text
//! 1. Load      locations.json  →  Vec<Record>   (full-file read, sort by name)
//! 2. Generate  records+config  →  String        (validate, render, assemble)
//! 3. Write     page            →  output.html   (one fs::write)
//! ```
//!
//! The page is assembled completely before anything touches the output
//! target, so every failure mode (missing input, broken record, bad config)
//! leaves the filesystem exactly as it was. There is no partial output,
//! ever.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Stage 1 — reads the JSON data file, sorts records by name |
//! | [`types`] | `Record` and required-field validation shared by all stages |
//! | [`format`] | Pure field formatters: phone display, status classification |
//! | [`generate`] | Stage 2 — renders records, sections, and the full page with Maud |
//! | [`config`] | Optional `taplist.toml`: title, branding, map embed, footer |
//! | [`output`] | CLI output formatting — per-section counts after a run |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped. Note strings
//!   are the one deliberate exception — they are trusted markup from the
//!   data file.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Records Are Validated Late, Not at Parse Time
//!
//! Every `Record` field is optional at the serde layer, including the three
//! required ones. [`types::Record::validate`] then reports the first missing
//! required field *with the whole offending record attached* — far more
//! useful in a data file with hundreds of entries than a serde error
//! pointing at a byte offset. Validation runs on every section pass, so a
//! broken record aborts the run no matter which categories it names.
//!
//! ## The Clock Is an Argument
//!
//! The footer carries a build timestamp and a copyright range ending at the
//! current year. Both come from a `DateTime<Local>` the caller passes into
//! [`generate::render_page`] — rendering never reads ambient time, so tests
//! pin the clock and assert byte-identical output.
//!
//! ## Class Names Are a Contract
//!
//! The emitted CSS hooks (`store`, `map`, `phone`, `website`, `food`,
//! `on_premise`, `social`, `closed`, `no`, `in_planning`, `separator`) are
//! depended on by `static/style.css` and by anyone styling the published
//! page. Renaming one is a breaking change to the output, not a refactor.

pub mod config;
pub mod format;
pub mod generate;
pub mod load;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
