//! Definition page parser for vocabulary.com
//!
//! A definition page has two structural regions: a summary table
//! (`.definitionNavigator`) pairing short POS labels with one-line glosses,
//! and a list of detailed definition headings (`h3.definition`) whose gloss
//! text trails the POS link with irregular internal line breaks.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Result, VocabularyError};
use crate::types::{PosDefinitions, PrimarySense, WordDefinition};

/// Parses a definition page and builds the word record
///
/// Missing optional pieces (audio clip, individual glosses) come back
/// absent rather than failing the call.
///
/// # Arguments
/// * `word` - The word the page was fetched for
/// * `html` - Raw HTML of the definition page
pub fn parse_definition(word: &str, html: &str) -> Result<WordDefinition> {
    let document = Html::parse_document(html);

    Ok(WordDefinition {
        word: word.to_string(),
        audio: extract_audio(&document)?,
        primary: extract_primary_senses(&document)?,
        definitions: extract_definitions(&document)?,
    })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| VocabularyError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// Reads the `data-audio` reference from the first `.audio` element
fn extract_audio(document: &Html) -> Result<Option<String>> {
    let audio = selector(".audio")?;

    Ok(document
        .select(&audio)
        .next()
        .and_then(|el| el.value().attr("data-audio"))
        .map(str::to_string))
}

/// Walks the summary table and pairs POS labels with glosses positionally
///
/// Each row contributes its labels in order; label `i` takes gloss `i` of
/// the same row, and labels past the last gloss cell get no gloss.
fn extract_primary_senses(document: &Html) -> Result<Vec<PrimarySense>> {
    let row = selector(".definitionNavigator tr")?;
    let pos_anchor = selector(".posList a")?;
    let def_cell = selector(".def")?;

    let mut senses = Vec::new();

    for tr in document.select(&row) {
        let labels: Vec<&str> = tr
            .select(&pos_anchor)
            .filter_map(|a| a.value().attr("title"))
            .map(first_token)
            .collect();

        let glosses: Vec<String> = tr
            .select(&def_cell)
            .map(|cell| cell.text().collect::<String>())
            .collect();

        for (i, label) in labels.iter().enumerate() {
            senses.push(PrimarySense {
                part_of_speech: (*label).to_string(),
                gloss: glosses.get(i).cloned(),
            });
        }
    }

    Ok(senses)
}

/// First whitespace-delimited token of a POS title
///
/// "verb (used with object)" → "verb"
fn first_token(title: &str) -> &str {
    title.split_whitespace().next().unwrap_or("")
}

/// Collects detailed glosses under their full POS titles
///
/// Labels are recorded in first-occurrence order; glosses keep document
/// order within each label. Headings without a titled link are skipped.
fn extract_definitions(document: &Html) -> Result<Vec<PosDefinitions>> {
    let heading = selector("h3.definition")?;
    let anchor = selector("a")?;

    let mut definitions: Vec<PosDefinitions> = Vec::new();

    for block in document.select(&heading) {
        let Some(pos) = block
            .select(&anchor)
            .next()
            .and_then(|a| a.value().attr("title"))
        else {
            continue;
        };

        let gloss = collapse_whitespace(&trailing_text(&block));

        match definitions.iter_mut().find(|d| d.part_of_speech == pos) {
            Some(entry) => entry.glosses.push(gloss),
            None => definitions.push(PosDefinitions {
                part_of_speech: pos.to_string(),
                glosses: vec![gloss],
            }),
        }
    }

    Ok(definitions)
}

/// Text of the heading's last child node
///
/// The gloss trails the POS link as a bare text node in the source markup.
fn trailing_text(block: &ElementRef) -> String {
    match block.children().last() {
        Some(node) => match node.value() {
            Node::Text(text) => text.to_string(),
            _ => ElementRef::wrap(node)
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
        },
        None => String::new(),
    }
}

/// Collapses every whitespace run (including newlines) to one space and trims
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
