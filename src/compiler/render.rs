//! Accordion fragment rendering.
//!
//! Assembles a parsed document and its pairs into a complete,
//! self-contained HTML fragment: a layout section carrying the title as
//! a heading, wrapping an accordion with one expandable item per pair.
//! The first item starts expanded, all others collapsed.
//!
//! The output is structural markup plus data/aria attributes only —
//! accordion interactivity and styling belong to the host page. All
//! text lifted from source files is escaped here.

use crate::compiler::escape::escape_html;
use crate::compiler::segment::QnAPair;
use crate::compiler::source::SourceDocument;

/// A rendered output artifact, addressed by category id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFragment {
    /// Echoes the source document's declared id.
    pub category_id: String,

    /// Full fragment markup.
    pub html: String,
}

/// Renders a document and its pairs into a [`CompiledFragment`].
///
/// Byte-deterministic: identical input always yields identical markup,
/// so recompiling an unchanged source tree produces byte-identical
/// fragments.
#[must_use]
pub fn render(doc: &SourceDocument, pairs: &[QnAPair]) -> CompiledFragment {
    let id = &doc.category_id;
    let mut out = Vec::new();

    out.push(format!(r#"<section class="faq-section" id="{id}">"#));
    out.push(format!("  <h2>{}</h2>", escape_html(&doc.title)));
    out.push(format!(
        r#"  <div class="faq-accordion" data-category="{id}">"#
    ));

    for (index, pair) in pairs.iter().enumerate() {
        let n = index + 1;
        let expanded = index == 0;
        out.push(render_item(id, n, pair, expanded));
    }

    out.push("  </div>".to_string());
    out.push("</section>".to_string());

    // Trailing newline so fragments diff and concatenate cleanly
    let mut html = out.join("\n");
    html.push('\n');

    CompiledFragment {
        category_id: id.clone(),
        html,
    }
}

/// Renders one expandable item. Items are keyed for independent
/// open/close state via an id derived from the category and the item's
/// 1-based position.
fn render_item(category_id: &str, n: usize, pair: &QnAPair, expanded: bool) -> String {
    let body_id = format!("{category_id}-item-{n}");
    let expanded_attr = if expanded { "true" } else { "false" };
    let hidden = if expanded { "" } else { " hidden" };

    format!(
        "    <div class=\"faq-item\" data-expanded=\"{expanded_attr}\">\n      \
         <button type=\"button\" class=\"faq-item-header\" \
         aria-expanded=\"{expanded_attr}\" aria-controls=\"{body_id}\">{question}</button>\n      \
         <div class=\"faq-item-body\" id=\"{body_id}\"{hidden}>{answer}</div>\n    \
         </div>",
        question = escape_html(&pair.question),
        answer = escape_html(&pair.answer),
    )
}
