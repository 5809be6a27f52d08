//! Parameterised classification tests for `shipbot-extract`.
//!
//! Each `#[case]` feeds one content sample through the full
//! parse-then-classify path used by the deploy pipeline.

use std::path::PathBuf;

use rstest::rstest;
use shipbot_extract::{classify, parse_blocks};

// ---------------------------------------------------------------------------
// Rule table, one case per indicator
// ---------------------------------------------------------------------------

#[rstest]
#[case("import os", "src/module_1.py")]
#[case("def handler(event):\n    return event", "src/module_1.py")]
#[case("class Widget:\n    pass", "src/module_1.py")]
#[case("<!doctype html>\n<body></body>", "static/page_1.html")]
#[case("<!DOCTYPE  html>", "static/page_1.html")]
#[case("<html><head></head></html>", "static/page_1.html")]
#[case("function greet() { return 1; }", "static/script_1.js")]
#[case("console.log('hi')", "static/script_1.js")]
#[case("const f = (x) => x + 1", "static/script_1.js")]
#[case("body { color: red; }", "static/style_1.css")]
#[case(".nav-bar { margin-top: 4px; }", "static/style_1.css")]
#[case("SELECT * FROM users;", "misc/file_1.txt")]
#[case("plain prose with no code at all", "misc/file_1.txt")]
fn rule_table(#[case] content: &str, #[case] expected: &str) {
    assert_eq!(classify(content, 1), PathBuf::from(expected));
}

// ---------------------------------------------------------------------------
// Priority tie-breaks
// ---------------------------------------------------------------------------

#[rstest]
// Python indicators beat everything listed after them.
#[case("import x\nfunction y() {}", "src/module_1.py")]
#[case("def f(): pass\nconsole.log(1)", "src/module_1.py")]
// HTML beats JS even when the page embeds a script.
#[case("<html><script>console.log(1)</script></html>", "static/page_1.html")]
// JS beats CSS when an object literal looks like a declaration block.
#[case("const style = { color: 'red' }; f => f", "static/script_1.js")]
fn earliest_rule_wins(#[case] content: &str, #[case] expected: &str) {
    assert_eq!(classify(content, 1), PathBuf::from(expected));
}

// ---------------------------------------------------------------------------
// Parse + classify end to end
// ---------------------------------------------------------------------------

#[test]
fn keywordless_python_falls_through_to_text() {
    let raw = "```python\nprint(1)\n```\n```javascript\nconsole.log(1)\n```";
    let blocks = parse_blocks(raw);
    assert_eq!(blocks.len(), 2);

    let paths: Vec<PathBuf> = blocks
        .iter()
        .map(|b| classify(&b.content, b.index))
        .collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("misc/file_1.txt"),
            PathBuf::from("static/script_2.js"),
        ]
    );
}

#[test]
fn python_block_with_keyword_classifies_into_src() {
    let raw = "```python\nimport sys\nprint(sys.argv)\n```";
    let blocks = parse_blocks(raw);
    assert_eq!(
        classify(&blocks[0].content, blocks[0].index),
        PathBuf::from("src/module_1.py")
    );
}
