//! Endpoint URLs for vocabulary.com
//!
//! All endpoints are fixed base URLs; word and filter values travel as
//! query parameters, form fields, or trailing path segments.

/// The vocabulary.com endpoint table
///
/// `Default` carries the production URLs. Individual fields can be
/// overridden, e.g. to point the whole client at a test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Definition page (HTML), queried with `search=<word>&lang=en`
    pub definition: String,

    /// Challenge blurb page (HTML), word appended as a path segment
    pub challenge: String,

    /// Vocab-grabber endpoint (JSON), form-POSTed `text=<text>`
    pub grab: String,

    /// Named sample texts (plain text), name appended as a path segment
    pub sample: String,

    /// Example sentences (JSON), queried with `query=<word>&maxResult=10`
    pub sentence: String,

    /// Audio clips, `data-audio` reference appended as a path segment
    pub audio: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            definition: "https://www.vocabulary.com/dictionary/definition.ajax".to_string(),
            challenge: "https://www.vocabulary.com/challenge/blurb".to_string(),
            grab: "https://www.vocabulary.com/lists/vocabgrabber/grab.json".to_string(),
            sample: "https://www.vocabulary.com/textsamples".to_string(),
            sentence: "https://corpus.vocabulary.com/api/1.0/examples.json".to_string(),
            audio: "https://audio.vocab.com/1.0/us".to_string(),
        }
    }
}

impl Endpoints {
    /// Builds the challenge blurb URL for a word
    pub fn challenge_url(&self, word: &str) -> String {
        format!("{}/{}", self.challenge, urlencoding::encode(word))
    }

    /// Builds the sample text URL for a named text
    pub fn sample_url(&self, name: &str) -> String {
        format!("{}/{}", self.sample, urlencoding::encode(name))
    }

    /// Builds the audio clip URL from a `data-audio` reference
    pub fn audio_url(&self, audio_ref: &str) -> String {
        format!("{}/{}.mp3", self.audio, audio_ref)
    }
}
