/// Reads `key = value` pairs from a block body, in order.
///
/// Pairs may sit one per line or share a line separated by commas. A comma-separated
/// piece without `=` continues the previous value. Lines whose key is not a single
/// token are ignored, as are `//` comments.
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for raw in text.lines() {
        let line = match raw.find("//") {
            Some(cut) => &raw[..cut],
            None => raw,
        };
        let mut line_has_pair = false;

        for piece in line.split(',') {
            let piece = piece.trim_matches(|c: char| c.is_whitespace() || c == '{' || c == '}');
            if piece.is_empty() {
                continue;
            }
            match piece.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    if key.is_empty() || key.contains(char::is_whitespace) {
                        line_has_pair = false;
                        continue;
                    }
                    pairs.push((key.to_string(), value.trim().to_string()));
                    line_has_pair = true;
                }
                None if line_has_pair => {
                    if let Some((_, value)) = pairs.last_mut() {
                        value.push(',');
                        value.push_str(piece);
                    }
                }
                None => {}
            }
        }
    }

    pairs
}

/// First value stored under `key`, compared case-insensitively.
pub fn find_property<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}
