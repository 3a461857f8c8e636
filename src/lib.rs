//! # tag-extractor
//!
//! Word-frequency "tag" extraction: stream a text source, split it into
//! lowercase ASCII-letter tokens, drop stop words, count what remains, and
//! render the counts in a deterministic ranked order.
//!
//! ## Quick start
//!
//! ```rust
//! use tag_extractor::{
//!     rank, render_top_n, FrequencyExtractor, InMemorySource, NoopSink, StopWordSet,
//! };
//!
//! let text = InMemorySource::new("doc", "The Cat sat on the mat.");
//! let stop = StopWordSet::from_list(&["the", "on"]);
//! let freq = FrequencyExtractor::new().extract(&text, &stop, &mut NoopSink).unwrap();
//!
//! let ranked = rank(&freq);
//! assert_eq!(ranked[0].word, "cat");
//! print!("{}", render_top_n(&ranked, 30));
//! ```

pub mod config;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod source;

pub use config::ExtractorConfig;
pub use errors::{Result, TagError};
pub use nlp::stopwords::StopWordSet;
pub use nlp::tokenizer::tokenize;
pub use pipeline::artifacts::{FrequencyMap, RankedEntry};
pub use pipeline::observer::{NoopSink, ProgressLog, ProgressSink};
pub use pipeline::runner::{CancelToken, FrequencyExtractor};
pub use pipeline::worker::{spawn_extraction, ExtractionEvent, ExtractionHandle, ExtractionRequest};
pub use report::{
    parse_report, rank, render_full, render_report, render_summary, render_top_n, save_report,
    write_report, ReportMetadata,
};
pub use session::{Extraction, TagSession};
pub use source::{FileSource, InMemorySource, LineSource};
