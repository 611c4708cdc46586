use super::*;

/// Tests each emphasis marker in isolation.
///
/// Expected: the matching HTML tag around the inner text
#[test]
fn renders_each_emphasis_marker() {
    let table = ReferenceTable::new();

    assert_eq!(transform("**bold**", &table), "<strong>bold</strong>");
    assert_eq!(transform("*italic*", &table), "<em>italic</em>");
    assert_eq!(transform("__under__", &table), "<u>under</u>");
    assert_eq!(transform("~~strike~~", &table), "<s>strike</s>");
    assert_eq!(
        transform("`code`", &table),
        r#"<code class="inline-code">code</code>"#
    );
}

/// Tests italic nested inside bold.
///
/// Bold runs first, so the single asterisks left inside are picked up by the
/// italic rule.
///
/// Expected: `<strong>` wrapping `<em>`
#[test]
fn nests_italic_inside_bold() {
    let markup = transform("**bold *italic* bold**", &ReferenceTable::new());

    assert_eq!(markup, "<strong>bold <em>italic</em> bold</strong>");
}

/// Tests that emphasis markers match lazily.
///
/// Expected: two separate bold spans rather than one greedy span
#[test]
fn emphasis_is_non_greedy() {
    let markup = transform("**a** and **b**", &ReferenceTable::new());

    assert_eq!(markup, "<strong>a</strong> and <strong>b</strong>");
}

/// Tests emphasis spanning a line break.
///
/// Expected: the bold span contains the `<br>` produced by the line break rule
#[test]
fn emphasis_spans_lines() {
    let markup = transform("**first\nsecond**", &ReferenceTable::new());

    assert_eq!(markup, "<strong>first<br>second</strong>");
}

/// Tests that unmatched markers are left as literal text.
///
/// Expected: input returned unchanged
#[test]
fn unmatched_markers_stay_literal() {
    let table = ReferenceTable::new();

    for text in ["*open", "**open", "__open", "~~open", "`open", "a * b"] {
        assert_eq!(transform(text, &table), text);
    }
}

/// Tests a fenced code block with a language tag.
///
/// Expected: code-block wrapper, language tag dropped, inner newline rendered
/// as `<br>`
#[test]
fn renders_fenced_code_block() {
    let markup = transform("```rust\nlet x = 1;\n```", &ReferenceTable::new());

    assert_eq!(
        markup,
        r#"<div class="code-block"><code>let x = 1;<br></code></div>"#
    );
}

/// Tests a fence that is never closed.
///
/// Expected: fence left as literal text, only the line break converted
#[test]
fn unterminated_fence_stays_literal() {
    let markup = transform("```rust\nfn main() {}", &ReferenceTable::new());

    assert_eq!(markup, "```rust<br>fn main() {}");
}

/// Tests that every newline becomes a hard line break.
///
/// Expected: one `<br>` per newline, including a trailing one
#[test]
fn converts_every_newline() {
    let markup = transform("a\nb\n\nc\n", &ReferenceTable::new());

    assert_eq!(markup, "a<br>b<br><br>c<br>");
}
