//! hookgen regenerates the table of GitHub webhook events and their activity
//! types from the GitHub Docs page "Events that trigger workflows".
//!
//! The pipeline is linear:
//!
//!     markdown source → comrak AST → extraction walk → generated Rust → rustfmt
//!
//! The file structure:
//!
//!     src
//!     ├── document.rs     # markdown → tree, text collection helpers
//!     ├── extract.rs      # the section/table walk (the core)
//!     ├── emit.rs         # Rust source rendering + rustfmt pass
//!     ├── fetch.rs        # blocking HTTP GET of the docs source
//!     ├── error.rs        # error taxonomy
//!     └── bin/hookgen.rs  # CLI
//!
//! The library is shell-agnostic: no printing, no env vars, no process exit.
//! Everything observable outside a return value lives in the binary.

pub mod document;
pub mod emit;
pub mod error;
pub mod extract;
pub mod fetch;

pub use error::Error;
pub use extract::WebhookEvent;

/// Run the whole pipeline on markdown source: parse, extract, emit, format.
///
/// `url` is only recorded in the generated header comment; nothing is fetched
/// here. Returns the formatted Rust source, or the first error encountered.
pub fn generate(source: &str, url: &str) -> Result<String, Error> {
    let arena = comrak::Arena::new();
    let root = document::parse(&arena, source);
    let hooks = extract::extract(root)?;
    emit::format_source(&emit::emit_source(&hooks, url))
}
