//! Builds a small document and splits it with a spec from the command line.
//!
//! ```text
//! cargo run --example split_document -- h1
//! cargo run --example split_document -- length=20
//! cargo run --example split_document -- auto
//! ```

use anyhow::{Context, Result};
use doctree_core::{Document, Heading, Paragraph, ThematicBreak};
use doctree_split::parse_split_spec;

fn sample_document() -> Result<Document> {
    let mut doc = Document::new();
    doc.set_title("Field Manual");
    doc.push(Paragraph::from_text("Issued to all teams. Read before use.").into());
    doc.push(Heading::with_text(1, "Setup")?.into());
    doc.push(Paragraph::from_text("Unpack the kit and verify the seal is intact.").into());
    doc.push(Heading::with_text(1, "Operation")?.into());
    doc.push(Paragraph::from_text("Power on and wait for the status light.").into());
    doc.push(ThematicBreak::new().into());
    doc.push(Heading::with_text(1, "Teardown")?.into());
    doc.push(Paragraph::from_text("Power off, repack, and log the session.").into());
    Ok(doc)
}

fn main() -> Result<()> {
    let spec_arg = std::env::args().nth(1).unwrap_or_else(|| "h1".to_string());
    let spec = parse_split_spec(&spec_arg).context("unusable split specification")?;

    let doc = sample_document()?;
    let splits = spec.apply(doc)?;

    println!("{} split(s) for spec '{spec_arg}':", splits.len());
    for split in &splits {
        println!(
            "  {:>2}. {:<30} {:>4} words  slug: {}",
            split.index,
            split.title.as_deref().unwrap_or("(untitled)"),
            split.word_count,
            split.get_filename_slug(),
        );
    }
    Ok(())
}
