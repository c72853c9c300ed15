//! Core data types for the vocabulary.com client
//!
//! One result type per endpoint call, combined with an explicit merge
//! into [`WordProfile`] rather than dynamic field merging.

use serde::{Deserialize, Serialize};

/// One summary-table sense: a part-of-speech label paired with its gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimarySense {
    /// Short POS label, first token of the anchor title (e.g. "verb")
    pub part_of_speech: String,

    /// Gloss text from the matching definition cell; absent when the row
    /// carried more POS labels than gloss cells
    pub gloss: Option<String>,
}

/// Detailed glosses recorded under one part-of-speech label
///
/// Kept as an ordered list rather than a map: labels appear in
/// first-occurrence order, glosses in document order within each label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosDefinitions {
    /// Full POS title from the definition heading, unprocessed
    pub part_of_speech: String,

    /// Whitespace-normalized gloss sentences
    pub glosses: Vec<String>,
}

/// Structured record extracted from a word's definition page
///
/// Constructed fresh per extraction and immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    /// The word that was looked up
    pub word: String,

    /// Audio clip reference (`data-audio` attribute), verbatim
    pub audio: Option<String>,

    /// Summary-table senses in row order, then within-row order
    pub primary: Vec<PrimarySense>,

    /// Detailed definitions grouped by POS label, insertion ordered
    pub definitions: Vec<PosDefinitions>,
}

impl WordDefinition {
    /// Glosses recorded under a part-of-speech label, if any
    pub fn glosses_for(&self, part_of_speech: &str) -> Option<&[String]> {
        self.definitions
            .iter()
            .find(|d| d.part_of_speech == part_of_speech)
            .map(|d| d.glosses.as_slice())
    }
}

/// One example sentence from the corpus endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    /// Sentence text (the `sentence` field on the wire)
    #[serde(rename = "sentence")]
    pub text: String,
}

/// Wire envelope of the corpus examples endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ExampleEnvelope {
    pub result: ExampleResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExampleResult {
    #[serde(default)]
    pub sentences: Vec<ExampleSentence>,
}

/// Domain filter narrowing example sentences to a subject area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Fiction,
    ScienceMedicine,
    Technology,
    ArtsCulture,
    Business,
}

impl Domain {
    /// Single-letter code the corpus endpoint expects in its `domain` parameter
    pub fn code(&self) -> &'static str {
        match self {
            Domain::Fiction => "F",
            Domain::ScienceMedicine => "M",
            Domain::Technology => "T",
            Domain::ArtsCulture => "A",
            Domain::Business => "B",
        }
    }
}

/// Candidate vocabulary word returned by the vocab-grabber endpoint
///
/// The frequency/familiarity metadata varies by word and is carried
/// through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrabbedWord {
    pub word: String,

    /// Remaining response fields, verbatim
    #[serde(flatten)]
    pub meta: serde_json::Value,
}

/// Combined per-word record assembled from several endpoint calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProfile {
    pub definition: WordDefinition,
    pub examples: Vec<ExampleSentence>,

    /// Inner HTML of the challenge blurb, when crawled
    pub blurb: Option<String>,
}

impl WordProfile {
    /// Merges the per-call results into one record with named fields
    pub fn merge(definition: WordDefinition, examples: Vec<ExampleSentence>) -> Self {
        Self {
            definition,
            examples,
            blurb: None,
        }
    }

    /// Attaches a challenge blurb to an already merged profile
    pub fn with_blurb(mut self, blurb: Option<String>) -> Self {
        self.blurb = blurb;
        self
    }
}
