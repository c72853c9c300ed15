//! Look up a word and print its senses, examples, and audio URL

use vocabulary_core::{Domain, Vocabulary};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let word = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "serendipity".to_string());

    let vocab = Vocabulary::new()?;
    let profile = vocab.full_crawl(&word, Some(Domain::Fiction)).await?;

    println!("{}", profile.definition.word);
    if let Some(audio) = &profile.definition.audio {
        println!("audio: {}", vocab.audio_url(audio));
    }

    for sense in &profile.definition.primary {
        println!(
            "  {}: {}",
            sense.part_of_speech,
            sense.gloss.as_deref().unwrap_or("(no gloss)")
        );
    }

    for pos in &profile.definition.definitions {
        println!("  [{}]", pos.part_of_speech);
        for gloss in &pos.glosses {
            println!("    - {}", gloss);
        }
    }

    for example in &profile.examples {
        println!("  e.g. {}", example.text);
    }

    if let Some(blurb) = &profile.blurb {
        println!("  blurb: {}", blurb);
    }

    Ok(())
}
