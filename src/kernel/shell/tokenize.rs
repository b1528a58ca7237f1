/// Splits a command line into words.
///
/// Whitespace separates words. A single or double quote opens a group that runs to the matching
/// quote (or the end of the line) and may contain whitespace; the quotes themselves are dropped.
/// There are no escapes. Empty words are never produced, so `""` on its own yields nothing.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut quote: Option<char> = None;

    for ch in line.trim().chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => cur.push(ch),
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch.is_whitespace() => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            None => cur.push(ch),
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/shell/tokenize.rs"]
mod tests;
