/// Normalize text into lowercase tokens.
///
/// Splits on any non-alphanumeric character and drops tokens of one or two
/// characters, which are almost always stopwords or punctuation noise.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 2)
        .map(String::from)
        .collect()
}
