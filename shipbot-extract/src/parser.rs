//! Fenced code block extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use shipbot_core::types::CodeBlock;

/// A fence is three backticks, an optional language tag, then content up to
/// the next closing fence. Non-greedy so adjacent blocks split correctly.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:\w+)?\n(.*?)\n```").expect("fence regex"));

/// Extract fenced code blocks from `raw` in document order.
///
/// Block content is trimmed of surrounding whitespace. Blocks whose trimmed
/// content is empty are silently dropped and do not occupy an index slot, so
/// the returned indices always run 1..=N.
pub fn parse_blocks(raw: &str) -> Vec<CodeBlock> {
    FENCE
        .captures_iter(raw)
        .map(|c| c[1].trim().to_string())
        .filter(|content| !content.is_empty())
        .enumerate()
        .map(|(i, content)| CodeBlock {
            index: i + 1,
            content,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_with_language_tag() {
        let blocks = parse_blocks("```python\nprint(1)\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].index, 1);
        assert_eq!(blocks[0].content, "print(1)");
    }

    #[test]
    fn single_block_without_language_tag() {
        let blocks = parse_blocks("```\nhello\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "hello");
    }

    #[test]
    fn adjacent_blocks_split_correctly() {
        let raw = "```python\nprint(1)\n```\n```javascript\nconsole.log(1)\n```";
        let blocks = parse_blocks(raw);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "print(1)");
        assert_eq!(blocks[1].content, "console.log(1)");
    }

    #[test]
    fn indices_are_one_based_document_order() {
        let raw = "```\na\n```\ntext between\n```\nb\n```\n```\nc\n```";
        let blocks = parse_blocks(raw);
        let indices: Vec<usize> = blocks.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(blocks[2].content, "c");
    }

    #[test]
    fn empty_blocks_do_not_occupy_an_index_slot() {
        let raw = "```\n   \n```\n```\nreal\n```";
        let blocks = parse_blocks(raw);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].index, 1);
        assert_eq!(blocks[0].content, "real");
    }

    #[test]
    fn multiline_content_survives_trimmed() {
        let raw = "```python\n\ndef f():\n    return 1\n\n```";
        let blocks = parse_blocks(raw);
        assert_eq!(blocks[0].content, "def f():\n    return 1");
    }

    #[test]
    fn no_fences_yields_nothing() {
        assert!(parse_blocks("just prose, no code").is_empty());
    }
}
