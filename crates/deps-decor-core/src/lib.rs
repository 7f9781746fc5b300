//! Core of deps-decor.
//!
//! Given one dependency declaration and the versions published for it, this
//! crate decides which published version best matches the declared
//! requirement and renders the outcome as an end-of-line annotation plus a
//! hover listing every version with a "replace" link.
//!
//! # Architecture
//!
//! - **Resolver**: `VersionResolver` trait with a semver implementation that
//!   classifies a requirement as up to date, compatible, incompatible or invalid
//! - **Composer**: `DecorationComposer` turns the classification into a
//!   `RenderedDecoration` (text, hover, quick-replace request, range)
//! - **Buffer**: `TextBuffer` trait for offset/position lookups, with a
//!   `LineIndex` implementation over `&str`
//! - **LSP adapters**: conversions into inlay hints, hovers, text edits and commands
//!
//! Manifest parsing, registry lookups and applying edits belong to the host.
//!
//! # Examples
//!
//! ```
//! use deps_decor_core::{Classification, DecorConfig, DecorationComposer, Item, LineIndex};
//!
//! let text = "[dependencies]\ntokio = \"^3.0.0\"\n";
//! let index = LineIndex::new(text);
//! let item = Item::new("tokio", "^3.0.0", 23, 31);
//! let versions = vec!["2.0.0".to_string(), "1.5.0".to_string()];
//!
//! let composer = DecorationComposer::new(DecorConfig::default());
//! let decoration = composer.compose(&index, &item, &versions, None);
//!
//! assert_eq!(decoration.classification, Classification::Incompatible);
//! assert_eq!(decoration.annotation_text.as_deref(), Some("❗ 2.0.0"));
//! assert!(decoration.quick_replace.is_some());
//! ```

pub mod buffer;
pub mod command;
pub mod composer;
pub mod config;
pub mod error;
pub mod links;
pub mod lsp;
pub mod resolver;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use buffer::{LineIndex, TextBuffer};
pub use command::ReplaceRequest;
pub use composer::{DecorationComposer, HoverContent, RenderedDecoration};
pub use config::{DecorConfig, LinkConfig, TemplateConfig};
pub use error::{DecorError, Result};
pub use resolver::{Resolution, SemverResolver, VersionResolver};
pub use template::Template;
pub use types::{Classification, Item};
