//! Paragraph-level section detection.

use crate::document::{Document, TextSpan};

use super::lexicon;

/// Whether the paragraph holding `sentence` opens with a history section header.
///
/// A paragraph starts at the first sentence of the document or at a sentence whose gap
/// to the previous sentence contains a newline.
pub fn in_history_section(doc: &Document, sentence: TextSpan) -> bool {
    let sentences = doc.sentences();
    let Some(mut idx) = sentences.iter().position(|s| *s == sentence) else {
        return false;
    };
    while idx > 0 {
        let previous = sentences[idx - 1];
        let gap = doc
            .text()
            .get(previous.end()..sentences[idx].begin())
            .unwrap_or_default();
        if gap.contains('\n') {
            break;
        }
        idx -= 1;
    }
    lexicon::opens_history_section(doc.covered_text(sentences[idx]))
}
