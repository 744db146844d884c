use serde::{Deserialize, Serialize};

/// Every rendering of the input the converter produces, computed in one pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseConversions {
    pub camel: String,
    pub pascal: String,
    pub snake: String,
    pub kebab: String,
    pub constant: String,
    pub title: String,
    pub sentence: String,
    pub lower: String,
    pub upper: String,
    pub alternating: String,
    pub inverse: String,
}

pub fn convert_all(input: &str) -> CaseConversions {
    let text = input.trim();
    let words = split_words(text);

    let snake = words.join("_");
    CaseConversions {
        camel: camel(&words),
        pascal: pascal(&words),
        kebab: words.join("-"),
        constant: snake.to_uppercase(),
        snake,
        title: title(text),
        sentence: sentence(text),
        lower: text.to_lowercase(),
        upper: text.to_uppercase(),
        alternating: alternating(text),
        inverse: inverse(text),
    }
}

/// Lower-cased words. Boundaries are runs of non-alphanumeric characters and
/// lower-to-upper transitions, so "helloWorld v2" gives hello, world, v2.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            flush(&mut words, &mut current);
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            flush(&mut words, &mut current);
        }
        current.extend(ch.to_lowercase());
        prev_lower = ch.is_lowercase();
    }
    flush(&mut words, &mut current);

    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn camel(words: &[String]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.clone() } else { capitalize(word) })
        .collect()
}

fn pascal(words: &[String]) -> String {
    words.iter().map(|word| capitalize(word)).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title(text: &str) -> String {
    text.split_whitespace()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// Position counting includes spaces and punctuation, matching the playful
// look people expect from this conversion.
fn alternating(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

fn inverse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}
