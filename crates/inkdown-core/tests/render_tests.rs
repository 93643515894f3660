//! Integration tests for the inkdown renderer

use inkdown_core::{parse, render, Block, Inline, ListKind, Renderer};

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_render_heading_levels() {
    assert_eq!(render("# Title"), "<h1>Title</h1>");
    assert_eq!(render("## Title"), "<h2>Title</h2>");
    assert_eq!(render("### Title"), "<h3>Title</h3>");
}

#[test]
fn test_heading_is_not_paragraph_wrapped() {
    let html = render("# Title");
    assert!(!html.contains("<p>"));
}

#[test]
fn test_four_hashes_stay_text() {
    assert_eq!(render("#### Four"), "<p>#### Four</p>");
}

#[test]
fn test_heading_without_space_stays_text() {
    assert_eq!(render("#NoSpace"), "<p>#NoSpace</p>");
}

#[test]
fn test_heading_with_inline_formatting() {
    assert_eq!(
        render("## A **bold** word"),
        "<h2>A <strong>bold</strong> word</h2>"
    );
}

#[test]
fn test_longer_marker_never_downgrades() {
    // `### x` must never match the `#` rule.
    assert_eq!(render("### Deep"), "<h3>Deep</h3>");
    assert_eq!(render("## Mid\n# Top"), "<h2>Mid</h2>\n<h1>Top</h1>");
}

// ============================================================================
// Paragraph and Line Break Tests
// ============================================================================

#[test]
fn test_plain_text_wraps_in_paragraph() {
    assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
}

#[test]
fn test_single_newline_becomes_line_break() {
    assert_eq!(
        render("Line one\nLine two\nLine three"),
        "<p>Line one<br>Line two<br>Line three</p>"
    );
}

#[test]
fn test_blank_line_separates_paragraphs() {
    assert_eq!(
        render("First paragraph.\n\nSecond paragraph."),
        "<p>First paragraph.</p>\n<p>Second paragraph.</p>"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(render(""), "");
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(render("   \n\n \t \n"), "");
}

#[test]
fn test_no_empty_paragraphs_emitted() {
    let html = render("a\n\n\n\n\nb");
    assert_eq!(html, "<p>a</p>\n<p>b</p>");
    assert!(!html.contains("<p></p>"));
}

#[test]
fn test_crlf_input() {
    assert_eq!(render("a\r\nb"), "<p>a<br>b</p>");
}

#[test]
fn test_paragraph_ends_at_block_start() {
    assert_eq!(render("text\n# Head"), "<p>text</p>\n<h1>Head</h1>");
}

// ============================================================================
// Strong and Emphasis Tests
// ============================================================================

#[test]
fn test_strong_and_emphasis() {
    let html = render("**bold** and *italic*");
    assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
}

#[test]
fn test_strong_is_not_matched_as_emphasis() {
    let html = render("**x**");
    assert_eq!(html, "<p><strong>x</strong></p>");
    assert!(!html.contains("<em>"));
}

#[test]
fn test_strong_is_non_greedy() {
    assert_eq!(
        render("**a** **b**"),
        "<p><strong>a</strong> <strong>b</strong></p>"
    );
}

#[test]
fn test_emphasis_inside_strong() {
    assert_eq!(
        render("**bold *inner* bold**"),
        "<p><strong>bold <em>inner</em> bold</strong></p>"
    );
}

#[test]
fn test_unclosed_strong_stays_literal() {
    assert_eq!(render("**open"), "<p>**open</p>");
}

#[test]
fn test_unclosed_emphasis_stays_literal() {
    assert_eq!(render("*open"), "<p>*open</p>");
}

#[test]
fn test_strong_does_not_cross_lines() {
    assert_eq!(render("a **b\nc** d"), "<p>a **b<br>c** d</p>");
}

// ============================================================================
// Code Tests
// ============================================================================

#[test]
fn test_inline_code() {
    assert_eq!(render("`code`"), "<p><code>code</code></p>");
}

#[test]
fn test_inline_code_content_is_literal() {
    assert_eq!(render("`**x**`"), "<p><code>**x**</code></p>");
}

#[test]
fn test_fenced_code_block() {
    assert_eq!(render("```\nblock\n```"), "<pre><code>block</code></pre>");
}

#[test]
fn test_fenced_block_suppresses_inline_code() {
    let html = render("```\n`a`\n```");
    assert_eq!(html, "<pre><code>`a`</code></pre>");
    assert!(!html.contains("<code>a</code>"));
}

#[test]
fn test_fenced_block_with_language() {
    assert_eq!(
        render("```rust\nfn main() {}\n```"),
        "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
    );
}

#[test]
fn test_unclosed_fence_runs_to_end() {
    assert_eq!(
        render("```\nfn x() {}\nlast line"),
        "<pre><code>fn x() {}\nlast line</code></pre>"
    );
}

#[test]
fn test_fenced_block_keeps_interior_lines() {
    assert_eq!(
        render("```\none\n\ntwo\n```"),
        "<pre><code>one\n\ntwo</code></pre>"
    );
}

// ============================================================================
// Link and Image Tests
// ============================================================================

#[test]
fn test_link() {
    assert_eq!(
        render("[x](http://a.com)"),
        "<p><a href=\"http://a.com\" target=\"_blank\">x</a></p>"
    );
}

#[test]
fn test_link_label_supports_formatting() {
    assert_eq!(
        render("[**x**](http://a.com)"),
        "<p><a href=\"http://a.com\" target=\"_blank\"><strong>x</strong></a></p>"
    );
}

#[test]
fn test_image() {
    assert_eq!(
        render("![alt](http://a.com/i.png)"),
        "<p><img src=\"http://a.com/i.png\" alt=\"alt\"></p>"
    );
}

#[test]
fn test_image_is_never_also_a_link() {
    let html = render("![alt](http://a.com/i.png)");
    assert!(!html.contains("<a "));
}

#[test]
fn test_image_with_empty_alt() {
    assert_eq!(
        render("![](http://a.com/i.png)"),
        "<p><img src=\"http://a.com/i.png\" alt=\"\"></p>"
    );
}

#[test]
fn test_unterminated_link_stays_literal() {
    assert_eq!(render("[x](http://a.com"), "<p>[x](http://a.com</p>");
}

#[test]
fn test_link_with_empty_label_stays_literal() {
    assert_eq!(render("[](http://a.com)"), "<p>[](http://a.com)</p>");
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_unordered_list_with_dash() {
    assert_eq!(
        render("- one\n- two\n- three"),
        "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
}

#[test]
fn test_unordered_list_with_star() {
    assert_eq!(render("* one\n* two"), "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        render("1. first\n2. second"),
        "<ol><li>first</li><li>second</li></ol>"
    );
}

#[test]
fn test_list_items_allow_indentation() {
    assert_eq!(render("  - indented"), "<ul><li>indented</li></ul>");
}

#[test]
fn test_separated_list_runs_get_separate_containers() {
    // Two runs with other content between them must not merge into one
    // container.
    let html = render("- a\n\nbetween\n\n- b");
    assert_eq!(
        html,
        "<ul><li>a</li></ul>\n<p>between</p>\n<ul><li>b</li></ul>"
    );
}

#[test]
fn test_kind_change_closes_list() {
    assert_eq!(
        render("- a\n1. b"),
        "<ul><li>a</li></ul>\n<ol><li>b</li></ol>"
    );
}

#[test]
fn test_list_items_get_inline_pass() {
    assert_eq!(
        render("- **bold** item"),
        "<ul><li><strong>bold</strong> item</li></ul>"
    );
}

#[test]
fn test_star_without_space_is_not_an_item() {
    assert_eq!(render("*emphasis*"), "<p><em>emphasis</em></p>");
}

// ============================================================================
// Blockquote and Rule Tests
// ============================================================================

#[test]
fn test_blockquote() {
    assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
}

#[test]
fn test_consecutive_quote_lines_stay_separate() {
    assert_eq!(
        render("> a\n> b"),
        "<blockquote>a</blockquote>\n<blockquote>b</blockquote>"
    );
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(render("---"), "<hr>");
    assert_eq!(render("------"), "<hr>");
}

#[test]
fn test_two_hyphens_are_not_a_rule() {
    assert_eq!(render("--"), "<p>--</p>");
}

#[test]
fn test_rule_between_paragraphs() {
    assert_eq!(render("a\n\n---\n\nb"), "<p>a</p>\n<hr>\n<p>b</p>");
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_source_html_is_escaped_by_default() {
    assert_eq!(
        render("<script>alert(1)</script>"),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

#[test]
fn test_raw_html_opt_in() {
    let html = Renderer::new().with_raw_html().render("<b>hi</b>");
    assert_eq!(html, "<p><b>hi</b></p>");
}

#[test]
fn test_code_block_content_is_escaped() {
    assert_eq!(
        render("```\n<b>&</b>\n```"),
        "<pre><code>&lt;b&gt;&amp;&lt;/b&gt;</code></pre>"
    );
}

#[test]
fn test_url_attribute_is_escaped() {
    assert_eq!(
        render("[x](http://a.com/?q=\"v\")"),
        "<p><a href=\"http://a.com/?q=&quot;v&quot;\" target=\"_blank\">x</a></p>"
    );
}

#[test]
fn test_escape_html_helper() {
    assert_eq!(
        inkdown_core::escape_html("<a href=\"x\">&'"),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
    );
}

// ============================================================================
// Known Non-Properties
// ============================================================================

#[test]
fn test_rendering_is_not_idempotent() {
    // Feeding produced HTML back through the renderer corrupts it: the
    // renderer does not distinguish source markup from literal HTML.
    // Documented behavior, not a bug to fix here.
    let once = render("**b**");
    let twice = render(&once);
    assert_eq!(once, "<p><strong>b</strong></p>");
    assert_ne!(twice, once);
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn test_render_is_total_on_malformed_input() {
    let inputs = [
        "**", "***", "*", "`", "``", "[", "![", "[x](", "![](", "```",
        "[x]", "!", "> ", "#", "1.", "- ",
    ];
    for input in inputs {
        // Must not panic; output content is best-effort.
        let _ = render(input);
    }
}

#[test]
fn test_render_is_pure() {
    let renderer = Renderer::new();
    let input = "# Same\n\nEvery *time*.";
    assert_eq!(renderer.render(input), renderer.render(input));
}

// ============================================================================
// Tree Inspection
// ============================================================================

#[test]
fn test_parse_block_kinds() {
    let doc = parse("# H\n\ntext\n\n- item\n\n> q\n\n---\n\n```\nc\n```");
    assert_eq!(doc.blocks.len(), 6);
    assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
    assert!(matches!(doc.blocks[1], Block::Paragraph { .. }));
    assert!(matches!(
        doc.blocks[2],
        Block::List {
            kind: ListKind::Unordered,
            ..
        }
    ));
    assert!(matches!(doc.blocks[3], Block::Quote { .. }));
    assert!(matches!(doc.blocks[4], Block::Rule));
    assert!(matches!(doc.blocks[5], Block::CodeBlock { .. }));
}

#[test]
fn test_parse_inline_kinds() {
    let doc = parse("a **b** *c* `d` [e](u) ![f](u)");
    let Block::Paragraph { content } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert!(content.iter().any(|i| matches!(i, Inline::Strong(_))));
    assert!(content.iter().any(|i| matches!(i, Inline::Emphasis(_))));
    assert!(content.iter().any(|i| matches!(i, Inline::Code(_))));
    assert!(content.iter().any(|i| matches!(i, Inline::Link { .. })));
    assert!(content.iter().any(|i| matches!(i, Inline::Image { .. })));
}

#[test]
fn test_parse_line_break_nodes() {
    let doc = parse("a\nb");
    let Block::Paragraph { content } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert!(content.iter().any(|i| matches!(i, Inline::LineBreak)));
}

// ============================================================================
// Complex Document Tests
// ============================================================================

#[test]
fn test_render_full_article() {
    let input = "\
# Introduction

This article covers **setup** and *usage* of the `inkdown` renderer.

## Steps

1. Install the tool
2. Run it on a file

Useful flags:

- verbose output
- JSON trees

> Rendering is total by contract.

```rust
let html = inkdown_core::render(\"# Hi\");
```

---

See [the docs](https://example.com) or the logo: ![logo](https://example.com/l.png)";

    let html = render(input);

    assert!(html.contains("<h1>Introduction</h1>"));
    assert!(html.contains("<h2>Steps</h2>"));
    assert!(html.contains("<strong>setup</strong>"));
    assert!(html.contains("<em>usage</em>"));
    assert!(html.contains("<code>inkdown</code>"));
    assert!(html.contains("<ol><li>Install the tool</li><li>Run it on a file</li></ol>"));
    assert!(html.contains("<ul><li>verbose output</li><li>JSON trees</li></ul>"));
    assert!(html.contains("<blockquote>Rendering is total by contract.</blockquote>"));
    assert!(html.contains("<pre><code class=\"language-rust\">"));
    assert!(html.contains("<hr>"));
    assert!(html.contains("<a href=\"https://example.com\" target=\"_blank\">the docs</a>"));
    assert!(html.contains("<img src=\"https://example.com/l.png\" alt=\"logo\">"));
}
