use super::*;

fn words(line: &str) -> Vec<String> {
    tokenize(line)
}

#[test]
fn double_quotes_group_words() {
    assert_eq!(
        words(r#"write todo.txt "buy milk""#),
        vec!["write", "todo.txt", "buy milk"]
    );
}

#[test]
fn unterminated_quote_runs_to_end_of_line() {
    assert_eq!(words(r#"cat "abc"#), vec!["cat", "abc"]);
    assert_eq!(words("echo 'a b  c"), vec!["echo", "a b  c"]);
}

#[test]
fn collapses_runs_of_whitespace() {
    assert_eq!(words("  ls   \t -a  "), vec!["ls", "-a"]);
    assert!(words("   ").is_empty());
}

#[test]
fn quotes_join_with_adjacent_text() {
    assert_eq!(words(r#"a"b c"d"#), vec!["ab cd"]);
}

#[test]
fn other_quote_kind_is_literal_inside_group() {
    assert_eq!(words(r#"say "it's fine""#), vec!["say", "it's fine"]);
}

#[test]
fn empty_quotes_produce_no_word() {
    assert_eq!(words(r#"write a.txt """#), vec!["write", "a.txt"]);
}
