/// Capitalize the first letter of a word, leaving the rest alone
pub fn capitalize_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}

/// True when the word already closes a sentence
pub fn ends_with_terminal(word: &str) -> bool {
    word.ends_with(['.', '!', '?'])
}
