//! High-level vocabulary.com API
//!
//! Combines the HTTP client, the endpoint table, and the parsers into a
//! one-method-per-endpoint surface.

use tracing::debug;

use crate::client::{ClientConfig, VocabClient};
use crate::error::{Result, VocabularyError};
use crate::parser::{parse_blurb, parse_definition};
use crate::types::{
    Domain, ExampleEnvelope, ExampleSentence, GrabbedWord, WordDefinition, WordProfile,
};
use crate::url::Endpoints;

/// Maximum example sentences returned per call
const MAX_EXAMPLES: usize = 10;

/// Client for the vocabulary.com endpoints
///
/// Every method is a single request/response call with no shared mutable
/// state; callers own concurrency and request pacing.
pub struct Vocabulary {
    client: VocabClient,
    endpoints: Endpoints,
}

impl Vocabulary {
    /// Create a client with default configuration and production endpoints
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_endpoints(config, Endpoints::default())
    }

    /// Create a client talking to a non-default endpoint set
    ///
    /// Useful for pointing the whole client at a test server.
    pub fn with_endpoints(config: ClientConfig, endpoints: Endpoints) -> Result<Self> {
        Ok(Self {
            client: VocabClient::with_config(config)?,
            endpoints,
        })
    }

    /// Fetch and parse the definition page for a word
    ///
    /// # Errors
    /// - `InvalidWord` if the word is empty or whitespace only
    /// - `HttpError` if the request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> vocabulary_core::Result<()> {
    /// use vocabulary_core::Vocabulary;
    /// let vocab = Vocabulary::new()?;
    /// let def = vocab.definition("run").await?;
    /// for sense in &def.primary {
    ///     println!("{}: {:?}", sense.part_of_speech, sense.gloss);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn definition(&self, word: &str) -> Result<WordDefinition> {
        let word = non_empty(word, "Word")?;

        debug!(word, "definition lookup");
        let html = self
            .client
            .get_text(&self.endpoints.definition, &[("search", word), ("lang", "en")])
            .await?;

        parse_definition(word, &html)
    }

    /// Fetch up to ten example sentences, optionally narrowed to a domain
    ///
    /// A single bounded request; there is no pagination.
    pub async fn examples(
        &self,
        word: &str,
        domain: Option<Domain>,
    ) -> Result<Vec<ExampleSentence>> {
        let word = non_empty(word, "Word")?;

        let max_results = MAX_EXAMPLES.to_string();
        let mut query = vec![("query", word), ("maxResult", max_results.as_str())];
        if let Some(domain) = domain {
            query.push(("domain", domain.code()));
        }

        let envelope: ExampleEnvelope = self
            .client
            .get_json(&self.endpoints.sentence, &query)
            .await?;

        let mut sentences = envelope.result.sentences;
        sentences.truncate(MAX_EXAMPLES);
        Ok(sentences)
    }

    /// Fetch the challenge blurb for a word
    ///
    /// Returns the blurb's inner HTML, or `None` when the page has none.
    pub async fn challenge_blurb(&self, word: &str) -> Result<Option<String>> {
        let word = non_empty(word, "Word")?;

        let html = self
            .client
            .get_text(&self.endpoints.challenge_url(word), &[])
            .await?;

        parse_blurb(&html)
    }

    /// Definition and example sentences merged into one profile
    pub async fn full_query(&self, word: &str, domain: Option<Domain>) -> Result<WordProfile> {
        let definition = self.definition(word).await?;
        let examples = self.examples(&definition.word, domain).await?;
        Ok(WordProfile::merge(definition, examples))
    }

    /// [`full_query`](Self::full_query) plus the challenge blurb
    pub async fn full_crawl(&self, word: &str, domain: Option<Domain>) -> Result<WordProfile> {
        let profile = self.full_query(word, domain).await?;
        let blurb = self.challenge_blurb(&profile.definition.word).await?;
        Ok(profile.with_blurb(blurb))
    }

    /// Fetch a named sample text, body returned verbatim
    pub async fn sample_text(&self, name: &str) -> Result<String> {
        let name = non_empty(name, "Sample name")?;
        self.client
            .get_text(&self.endpoints.sample_url(name), &[])
            .await
    }

    /// Submit raw text to the vocab grabber
    ///
    /// Returns the candidate vocabulary words in response order; their
    /// frequency/familiarity metadata is carried through opaquely.
    pub async fn grab(&self, text: &str) -> Result<Vec<GrabbedWord>> {
        non_empty(text, "Text")?;
        self.client
            .post_form(&self.endpoints.grab, &[("text", text)])
            .await
    }

    /// Audio clip URL for a `data-audio` reference from a definition page
    ///
    /// Pure URL construction; nothing is fetched.
    pub fn audio_url(&self, audio_ref: &str) -> String {
        self.endpoints.audio_url(audio_ref)
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VocabularyError::InvalidWord(format!(
            "{} cannot be empty",
            what
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_creation() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_ok());
    }

    #[test]
    fn test_vocabulary_with_custom_config() {
        let config = ClientConfig { timeout_secs: 60 };
        let vocab = Vocabulary::with_config(config);
        assert!(vocab.is_ok());
    }

    #[test]
    fn test_audio_url() {
        let vocab = Vocabulary::new().unwrap();
        assert_eq!(
            vocab.audio_url("R/RUN1"),
            "https://audio.vocab.com/1.0/us/R/RUN1.mp3"
        );
    }

    #[tokio::test]
    async fn test_definition_empty_word() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.definition("").await;
        match result {
            Err(VocabularyError::InvalidWord(msg)) => {
                assert!(msg.contains("empty"));
            }
            _ => panic!("Expected InvalidWord error"),
        }
    }

    #[tokio::test]
    async fn test_definition_whitespace_word() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.definition("   ").await;
        assert!(matches!(result, Err(VocabularyError::InvalidWord(_))));
    }

    #[tokio::test]
    async fn test_examples_empty_word() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.examples("", Some(Domain::Fiction)).await;
        assert!(matches!(result, Err(VocabularyError::InvalidWord(_))));
    }

    #[tokio::test]
    async fn test_challenge_blurb_empty_word() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.challenge_blurb("").await;
        assert!(matches!(result, Err(VocabularyError::InvalidWord(_))));
    }

    #[tokio::test]
    async fn test_sample_text_empty_name() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.sample_text("  ").await;
        match result {
            Err(VocabularyError::InvalidWord(msg)) => {
                assert!(msg.contains("Sample name"));
            }
            _ => panic!("Expected InvalidWord error"),
        }
    }

    #[tokio::test]
    async fn test_grab_empty_text() {
        let vocab = Vocabulary::new().unwrap();
        let result = vocab.grab("\n\t").await;
        assert!(matches!(result, Err(VocabularyError::InvalidWord(_))));
    }
}
