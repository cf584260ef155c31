//! Text statistics provider
//!
//! Computes the readability and structural counts the feedback page reports:
//! Flesch-Kincaid grade level, sentence / word / unique-word / paragraph
//! counts. All functions are pure and total; degenerate input (empty text,
//! no sentence terminators) yields floored counts rather than errors, so the
//! readability formula never divides by zero.

/// Statistics for a span of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    /// Flesch-Kincaid grade-level estimate (can be negative or large for
    /// degenerate input)
    pub readability: f64,
    /// Non-blank blocks separated by a blank line
    pub paragraphs: usize,
    /// Sentence count (runs of `.`, `!`, `?` terminate a sentence)
    pub sentences: usize,
    /// Whitespace-split tokens containing at least one alphanumeric character
    pub words: usize,
    /// Case-insensitively deduplicated whitespace-split tokens
    pub unique_words: usize,
}

impl TextStats {
    /// Analyze a span of text
    pub fn analyze(text: &str) -> TextStats {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
            .collect();
        let word_count = words.len();
        let sentence_count = count_sentences(text);
        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

        TextStats {
            readability: flesch_kincaid_grade(word_count, sentence_count, syllable_count),
            paragraphs: count_paragraphs(text),
            sentences: sentence_count,
            words: word_count,
            unique_words: count_unique_words(text),
        }
    }
}

/// Flesch-Kincaid grade level:
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// Word and sentence counts are floored at 1 to keep the formula total.
fn flesch_kincaid_grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words = words.max(1) as f64;
    let sentences = sentences.max(1) as f64;
    0.39 * (words / sentences) + 11.8 * (syllables as f64 / words) - 15.59
}

/// Count sentences: each run of `.`, `!`, `?` terminates one sentence.
/// Non-empty text always counts as at least one sentence.
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_terminator {
                count += 1;
                in_terminator = true;
            }
        } else {
            in_terminator = false;
        }
    }
    if count == 0 && !text.trim().is_empty() {
        1
    } else {
        count
    }
}

/// Count non-blank paragraph blocks separated by a blank line
fn count_paragraphs(text: &str) -> usize {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).count()
}

/// Count case-insensitively deduplicated whitespace-split tokens
fn count_unique_words(text: &str) -> usize {
    let lowered = text.to_lowercase();
    let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();
    for token in lowered.split_whitespace() {
        seen.insert(token);
    }
    seen.len()
}

/// Heuristic syllable count: contiguous vowel groups (`aeiouy`), with a
/// trailing silent `e` discounted. Every word counts at least one syllable.
fn count_syllables(word: &str) -> usize {
    let lowered: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    if lowered.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &lowered {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    // Silent trailing 'e' ("make", "time") unless it is the only vowel group
    if count > 1 && lowered.ends_with(&['e']) && !lowered.ends_with(&['l', 'e']) {
        count -= 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_basic_sentences_and_words() {
        let stats = TextStats::analyze("The cat sat. The dog ran!");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn terminator_runs_count_once() {
        // "Wait... what?!" is two sentences, not five
        assert_eq!(count_sentences("Wait... what?!"), 2);
    }

    #[test]
    fn unique_words_are_case_insensitive() {
        let stats = TextStats::analyze("The the THE cat");
        assert_eq!(stats.unique_words, 2);
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First paragraph here.\n\nSecond one.\n\n\n\nThird.";
        assert_eq!(count_paragraphs(text), 3);
    }

    #[test]
    fn syllable_heuristic_on_common_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("water"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        // Silent trailing e
        assert_eq!(count_syllables("make"), 1);
        // -le endings keep their syllable
        assert_eq!(count_syllables("table"), 2);
        // Never zero
        assert_eq!(count_syllables("!"), 1);
    }

    #[test]
    fn readability_matches_formula_on_known_text() {
        // 6 words, 2 sentences, 6 syllables (all monosyllabic)
        let stats = TextStats::analyze("The cat sat. The dog ran.");
        let expected = 0.39 * (6.0 / 2.0) + 11.8 * (6.0 / 6.0) - 15.59;
        assert!((stats.readability - expected).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_never_panics() {
        let empty = TextStats::analyze("");
        assert_eq!(empty.words, 0);
        assert_eq!(empty.sentences, 0);
        assert_eq!(empty.paragraphs, 0);
        assert!(empty.readability.is_finite());

        let punct = TextStats::analyze("...");
        assert_eq!(punct.words, 0);
        assert!(punct.readability.is_finite());
    }

    #[test]
    fn unterminated_text_counts_one_sentence() {
        let stats = TextStats::analyze("no terminator here");
        assert_eq!(stats.sentences, 1);
    }
}
