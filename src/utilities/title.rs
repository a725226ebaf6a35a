/// Words kept lowercase unless they open the title.
const SMALL_WORDS: [&str; 11] = ["ka", "ki", "ke", "se", "aur", "ya", "the", "of", "in", "a", "an"];

/// Normalizes a movie title to title case with single spaces.
///
/// Blank input yields an empty string.
pub fn fix_title(title: &str) -> String {
    title.split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            let word = word.to_lowercase();

            if index > 0 && SMALL_WORDS.contains(&word.as_str()) {
                word
            } else {
                capitalize(&word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
