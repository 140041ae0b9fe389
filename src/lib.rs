//! # Trevanion - hide messages behind punctuation
//!
//! A Trevanion cipher hides a message inside an ordinary-looking cover text:
//! after every trigger punctuation mark, the N-th following character belongs
//! to the hidden message. The scheme is named after Sir John Trevanion, who
//! reportedly escaped imprisonment after receiving such a letter.
//!
//! ## Overview
//!
//! The crate provides four capabilities:
//! - **Extraction**: recover the hidden message and its source positions from
//!   a cover text ([`extract`])
//! - **Verification**: check that a cover text encodes a specific plaintext,
//!   with a position-level diff ([`check_constraints`])
//! - **Generation**: build synthetic cover texts around a plaintext using a
//!   position-indexed word database ([`CandidateGenerator`])
//! - **Search**: repeatedly generate and verify candidates until a quota of
//!   perfect matches is found or the attempt budget runs out
//!   ([`SearchController`])
//!
//! ## Example
//!
//! ```rust
//! use trevanion::{extract, CipherParams, PunctuationSet};
//!
//! let params = CipherParams {
//!     punctuation: PunctuationSet::new(",."),
//!     offset: 2,
//!     count_spaces: true,
//! };
//!
//! let result = extract("a,bc.de", &params);
//! assert_eq!(result.message, "ce");
//! assert_eq!(result.indices, vec![3, 6]);
//! ```
//!
//! ## Modules
//!
//! - [`params`]: trigger punctuation sets and shared cipher parameters
//! - [`script`]: Latin/Japanese script detection and plaintext reduction
//! - [`extract`](mod@extract): hidden-message extraction
//! - [`verify`]: constraint verification with position-level diffs
//! - [`words`]: word databases and the position index
//! - [`generate`]: cover-text generation and quality ranking
//! - [`search`]: the cancellable perfect-match search loop
//! - [`highlight`]: span classification for display consumers
//! - [`settings`]: persisted parameter defaults

/// Default trigger punctuation marks (Japanese and Latin, apostrophe included).
pub const DEFAULT_PUNCTUATION: &str = "、。,.!?;:'";

/// Default extraction offset (characters counted after each trigger).
pub const DEFAULT_OFFSET: usize = 3;

pub mod extract;
pub mod generate;
pub mod highlight;
pub mod params;
pub mod script;
pub mod search;
pub mod settings;
pub mod verify;
pub mod words;

// Re-export commonly used types at the crate root
pub use extract::{extract, ExtractionResult};
pub use generate::quality::{evaluate_quality, Quality, QUALITY_THRESHOLD};
pub use generate::style::Style;
pub use generate::{CandidateGenerator, CandidateSource, GeneratorSource};
pub use highlight::{highlight, Span, SpanKind};
pub use params::{CipherParams, PunctuationSet};
pub use script::ScriptKind;
pub use search::{ProgressEvent, SearchController, SearchHandle, SearchOutcome, SearchReport};
pub use settings::{Settings, SettingsError};
pub use verify::{check_constraints, ConstraintReport, PositionDetail, PositionStatus};
pub use words::{Lexicon, PositionIndex};
