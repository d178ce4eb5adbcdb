use super::comments::strip_comments;
use crate::error::ParseIssue;
use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// Finds the `{` at or after `start` and returns the text up to its matching `}`.
///
/// The returned slice includes both braces; the index is the position just past the
/// closer. `None` if there is no opener or depth never returns to zero.
pub fn extract_balanced(text: &str, start: usize) -> Option<(&str, usize)> {
    let open = start + text.get(start..)?.find('{')?;
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let end = open + offset + 1;
                    return Some((&text[open..end], end));
                }
            }
            _ => {}
        }
    }
    None
}

/// Strips the outer braces from a balanced block.
pub fn block_inner(block: &str) -> &str {
    block
        .strip_prefix('{')
        .and_then(|b| b.strip_suffix('}'))
        .unwrap_or(block)
}

fn opener_regex(keyword: &str) -> Regex {
    Regex::new(&format!(r"\b{}\s+([^\s{{}}]+)\s*\{{", regex::escape(keyword)))
        .expect("block opener pattern is valid")
}

/// Defines the named block keywords of the script language, each with its own opener pattern.
macro_rules! define_block_kinds {
    ( $( ($variant:ident, $keyword:literal) ),* $(,)? ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BlockKind {
            $( $variant, )*
        }

        impl BlockKind {
            pub fn keyword(self) -> &'static str {
                match self {
                    $( BlockKind::$variant => $keyword, )*
                }
            }

            fn opener(self) -> &'static Regex {
                match self {
                    $(
                        BlockKind::$variant => {
                            static OPENER: LazyLock<Regex> = LazyLock::new(|| opener_regex($keyword));
                            LazyLock::force(&OPENER)
                        }
                    )*
                }
            }
        }
    };
}

define_block_kinds! {
    (CraftRecipe, "craftRecipe"),
    (Module, "module"),
    (XuiSkin, "xuiSkin"),
    (Entity, "entity"),
    (Component, "component"),
    (Face, "face"),
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `<keyword> <name> { ... }` region located inside some text.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBlock<'a> {
    pub name: &'a str,
    /// Text between the outer braces.
    pub body: &'a str,
    /// Byte range of the whole region, keyword through closing brace.
    pub span: Range<usize>,
}

/// Locates consecutive, non-overlapping blocks of one kind.
///
/// Blocks nested inside an earlier match are not reported. Scanning stops at the first
/// opener that never balances, which is recorded as a malformed block.
pub fn find_blocks<'a>(
    text: &'a str,
    kind: BlockKind,
    issues: &mut Vec<ParseIssue>,
) -> Vec<NamedBlock<'a>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = kind.opener().captures_at(text, cursor) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        // The opener pattern ends on the brace itself.
        let brace = whole.end() - 1;
        match extract_balanced(text, brace) {
            Some((block, end)) => {
                blocks.push(NamedBlock {
                    name: name.as_str(),
                    body: block_inner(block),
                    span: whole.start()..end,
                });
                cursor = end;
            }
            None => {
                tracing::warn!(kind = %kind, name = name.as_str(), "dropping unbalanced block");
                issues.push(ParseIssue::MalformedBlock {
                    kind: kind.to_string(),
                    name: name.as_str().to_string(),
                });
                break;
            }
        }
    }

    blocks
}

/// Returns `text` with the given byte ranges cut out. Ranges must be sorted and disjoint.
pub fn remove_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

static RECIPE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*craftRecipe\s+([^\s{}]+)").expect("valid regex"));

/// One complete `craftRecipe` region, comments removed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeBlock {
    pub name: String,
    pub text: String,
}

impl RecipeBlock {
    /// The text between the recipe's outermost braces.
    pub fn body(&self) -> Option<&str> {
        extract_balanced(&self.text, 0).map(|(block, _)| block_inner(block))
    }
}

struct PendingBlock {
    name: String,
    text: String,
    depth: i64,
    opened: bool,
}

impl PendingBlock {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
            depth: 0,
            opened: false,
        }
    }

    fn push_line(&mut self, line: &str) {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        self.opened |= opens > 0;
        self.depth += opens - closes;
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn is_complete(&self) -> bool {
        self.opened && self.depth <= 0
    }

    fn finish(self) -> RecipeBlock {
        RecipeBlock {
            name: self.name,
            text: strip_comments(&self.text),
        }
    }
}

enum ScanState {
    Scanning,
    InBlock(PendingBlock),
}

/// Pulls every `craftRecipe <name> { ... }` region out of line-oriented text, in order.
///
/// A block still open when the input ends is dropped and reported.
pub fn extract_recipe_blocks(text: &str, issues: &mut Vec<ParseIssue>) -> Vec<RecipeBlock> {
    let mut blocks = Vec::new();
    let mut state = ScanState::Scanning;

    for line in text.lines() {
        let mut pending = match state {
            ScanState::InBlock(pending) => pending,
            ScanState::Scanning => match RECIPE_HEADER.captures(line) {
                Some(caps) => PendingBlock::new(&caps[1]),
                None => {
                    state = ScanState::Scanning;
                    continue;
                }
            },
        };

        pending.push_line(line);
        state = if pending.is_complete() {
            let block = pending.finish();
            tracing::debug!(name = %block.name, "extracted recipe block");
            blocks.push(block);
            ScanState::Scanning
        } else {
            ScanState::InBlock(pending)
        };
    }

    if let ScanState::InBlock(pending) = state {
        tracing::warn!(name = %pending.name, "recipe block never closed, dropping it");
        issues.push(ParseIssue::MalformedBlock {
            kind: BlockKind::CraftRecipe.to_string(),
            name: pending.name,
        });
    }

    blocks
}
