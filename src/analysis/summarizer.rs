//! Extractive summarization
//!
//! The leading window of the document is split into sentences, each sentence
//! is scored by the average frequency of its tokens within the window, and
//! the top sentences are returned in original document order.

use crate::retrieval::tokenizer::tokenize;
use std::collections::HashMap;

/// Window considered for summarization (three 512-char chunks).
const MAX_INPUT_CHARS: usize = 512 * 3;
const MAX_SENTENCES: usize = 3;

/// Summarize text into at most three representative sentences.
///
/// Empty or whitespace-only input yields an empty summary.
pub fn summarize(text: &str) -> String {
    let window = truncate_chars(text, MAX_INPUT_CHARS);
    let sentences = split_sentences(window);
    if sentences.is_empty() {
        return String::new();
    }

    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();

    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        for token in tokens {
            *frequencies.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(usize, f32)> = tokenized
        .iter()
        .enumerate()
        .map(|(position, tokens)| {
            if tokens.is_empty() {
                return (position, 0.0);
            }
            let total: usize = tokens.iter().map(|t| frequencies[t.as_str()]).sum();
            (position, total as f32 / tokens.len() as f32)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut picked: Vec<usize> = scored
        .into_iter()
        .take(MAX_SENTENCES)
        .map(|(position, _)| position)
        .collect();
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|position| sentences[position].clone())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max` characters without splitting a UTF-8 char.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Split on sentence terminators, keeping the terminator with the sentence.
/// A trailing fragment without a terminator counts as a sentence too.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
