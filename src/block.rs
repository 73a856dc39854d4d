use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::directive::{parse_directive, Directive};

/// Info string of the fenced blocks this crate renders.
pub const BLOCK_TAG: &str = "kenku";

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s{{0,3}}(`{{3,}}|~{{3,}})\s*{}\s*$", BLOCK_TAG)).unwrap()
});

pub fn is_valid_row(row: &str) -> bool {
    !row.is_empty() && !row.starts_with('#')
}

pub fn parse_block(source: &str) -> Vec<Directive> {
    source
        .split('\n')
        .map(str::trim)
        .filter(|row| is_valid_row(row))
        .map(|row| {
            let directive = parse_directive(row);
            debug!("Parsed directive: {:?}", directive);
            directive
        })
        .collect()
}

/// Returns the body of every fenced `kenku` block in `markdown`, in order.
///
/// Opening fences are three or more backticks or tildes followed by the tag;
/// the block closes at the first line holding a fence of the same character
/// at least as long. An unterminated block runs to the end of the input.
pub fn extract_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in markdown.lines() {
        match current.as_mut() {
            None => {
                if let Some(caps) = OPENING_FENCE.captures(line) {
                    current = Some((caps[1].to_string(), Vec::new()));
                }
            }
            Some((fence, body)) => {
                if is_closing_fence(line, fence) {
                    blocks.push(body.join("\n"));
                    current = None;
                } else {
                    body.push(line);
                }
            }
        }
    }

    if let Some((_, body)) = current {
        blocks.push(body.join("\n"));
    }

    blocks
}

fn is_closing_fence(line: &str, fence: &str) -> bool {
    let line = line.trim();
    let fence_char = match fence.chars().next() {
        Some(c) => c,
        None => return false,
    };

    line.len() >= fence.len() && line.chars().all(|c| c == fence_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{Action, MediaType};

    #[test]
    fn skips_blank_and_comment_rows() {
        let source = "\n# a comment\n   \n#another\n";
        assert!(parse_block(source).is_empty());
        assert!(parse_block("").is_empty());
    }

    #[test]
    fn keeps_rows_in_source_order() {
        let source = "action=play, type=soundboard, id=1234, label=My Sound\n\
                      # this is a comment, ignored\n\
                      action=stop, type=playlist, id=5678, label=Stop Playlist\r\n";
        let directives = parse_block(source);

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].label, "My Sound");
        assert_eq!(directives[0].kind, MediaType::Soundboard);
        assert_eq!(directives[1].label, "Stop Playlist");
        assert_eq!(directives[1].action, Action::Stop);
    }

    #[test]
    fn extracts_only_kenku_blocks() {
        let note = "# Session 3\n\
                    ```rust\nfn main() {}\n```\n\
                    ```kenku\nid=1, label=Tavern\n```\n\
                    Some text\n\
                    ~~~~ kenku\nid=2\n```\nid=3\n~~~~\n";
        let blocks = extract_blocks(note);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "id=1, label=Tavern");
        assert_eq!(blocks[1], "id=2\n```\nid=3");
    }

    #[test]
    fn fence_pattern_is_reused_across_notes() {
        let note = "  ```  kenku  \nid=1\n```\n";
        for _ in 0..3 {
            assert_eq!(extract_blocks(note), vec!["id=1".to_string()]);
        }
        assert!(extract_blocks("```kenkux\nid=1\n```").is_empty());
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let blocks = extract_blocks("```kenku\nid=1\nid=2");
        assert_eq!(blocks, vec!["id=1\nid=2".to_string()]);
    }

    #[test]
    fn note_without_blocks_yields_nothing() {
        assert!(extract_blocks("just some notes\n```\nkenku\n```").is_empty());
    }
}
