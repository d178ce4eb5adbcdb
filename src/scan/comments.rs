/// Text with its block comments removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stripped {
    pub text: String,
    /// Byte offset of the outermost `/*` that never closed, if any.
    pub unterminated_at: Option<usize>,
}

/// Removes every `/* ... */` region, honouring nesting.
///
/// Everything outside a comment, newlines included, is kept verbatim. An unterminated
/// comment swallows the rest of the input.
///
/// Comments leave nothing in their place, so a `/` right before a comment and a `*` right
/// after it join into a new `/*`: `a//* x */*b*/c` becomes `a/*b*/c`. Stripping is only
/// idempotent for text without such adjacent pairs.
pub fn strip_comments(text: &str) -> String {
    strip_comments_detailed(text).text
}

/// Same as [`strip_comments`], but also reports where an unterminated comment began.
pub fn strip_comments_detailed(text: &str) -> Stripped {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut opened_at = 0usize;
    let mut copy_from = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*') {
            if depth == 0 {
                out.push_str(&text[copy_from..i]);
                opened_at = i;
            }
            depth += 1;
            i += 2;
        } else if depth > 0 && bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
            depth -= 1;
            i += 2;
            if depth == 0 {
                copy_from = i;
            }
        } else {
            i += 1;
        }
    }

    if depth == 0 {
        out.push_str(&text[copy_from..]);
        Stripped {
            text: out,
            unterminated_at: None,
        }
    } else {
        Stripped {
            text: out,
            unterminated_at: Some(opened_at),
        }
    }
}
