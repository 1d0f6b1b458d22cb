pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;

pub use crate::core::config::IndexConfig;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::registry::{IndexRegistry, SharedIndex};
pub use crate::core::search_index::SearchIndex;
pub use crate::core::stats::IndexStats;
pub use crate::core::types::{DocId, Document, DocumentEntry, FieldValue};
pub use crate::query::types::{FilterValue, SearchOptions};
pub use crate::search::results::{Highlight, SearchHit, SearchResponse};

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           TEXTDEX STRUCT ARCHITECTURE                         │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── CORE LAYER ───────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────┐    ┌─────────────────────────────────┐  │
│  │ struct IndexRegistry           │    │ struct SearchIndex              │  │
│  │ • config: IndexConfig          │───▶│ • analyzer: Analyzer            │  │
│  │ • indexes: RwLock<HashMap<     │    │ • highlighter: Highlighter      │  │
│  │     String, SharedIndex>>      │    │ • index: InvertedIndex          │  │
│  └────────────────────────────────┘    │ • documents: DocumentTable      │  │
│                                        │ • cache: QueryCache             │  │
│                                        │ • prefix_index: OnceLock<..>    │  │
│                                        └─────────────────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── ANALYSIS LAYER ──────────────────────────────────┐
│  StandardTokenizer ──▶ MinLengthFilter ──▶ StopWordFilter   (struct Analyzer) │
└──────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── INDEX LAYER ────────────────────────────────────┐
│  InvertedIndex: BTreeMap<term, PostingList { BTreeSet<DocId> }>              │
│  DocumentTable: HashMap<DocId, StoredDocument { document, term_freqs, .. }>  │
└──────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── SEARCH LAYER ───────────────────────────────────┐
│  QueryExecutor: exact + FuzzyAutomaton matches ─▶ filters ─▶ RelevanceScorer │
│                 ─▶ sort ─▶ paginate ─▶ Highlighter                           │
│  PrefixIndex (fst::Map) for suggestions, QueryCache (lru) for responses      │
└──────────────────────────────────────────────────────────────────────────────┘
*/
