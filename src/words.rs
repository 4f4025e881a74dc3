/*!
# Word Handling

The dictionary-side collaborators of the graph core: normalization of raw
input lines, the default word-adjacency predicate, and the word-stream loader.

Two words are adjacent if a single edit transforms one into the other:
- same length and exactly one substituted character, or
- lengths differing by one and a single inserted/deleted character.

A word is never adjacent to itself, and the relation is symmetric, so the
undirected-edge model is well-defined. Comparisons are per `char`, after
normalization (trimmed, lower-cased).
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

/// Trims and lower-cases a raw input line; `None` if nothing remains
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// Returns *true* if the two words differ by exactly one edit
/// (substitution, insertion or deletion). Symmetric and deterministic;
/// a word is not adjacent to itself.
pub fn are_adjacent(a: &str, b: &str) -> bool {
    let (la, lb) = (a.chars().count(), b.chars().count());

    match la.abs_diff(lb) {
        0 => one_substitution(a, b),
        1 if la < lb => one_insertion(a, b),
        1 => one_insertion(b, a),
        _ => false,
    }
}

/// Equal-length words differing in exactly one position
fn one_substitution(a: &str, b: &str) -> bool {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

/// `longer` equals `shorter` with exactly one additional character
fn one_insertion(shorter: &str, longer: &str) -> bool {
    let mut s = shorter.chars().peekable();
    let mut skipped = false;

    for c in longer.chars() {
        if s.peek() == Some(&c) {
            s.next();
        } else if skipped {
            return false;
        } else {
            skipped = true;
        }
    }

    s.peek().is_none()
}

/// Returns an iterator over the normalized words of a reader, one word per
/// line; blank lines are dropped, read failures are passed through.
pub fn word_stream<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => normalize(&line).map(Ok),
        Err(e) => Some(Err(e)),
    })
}

/// Reads all normalized words of a reader into a vector.
///
/// # Errors
/// Returns the first read failure; a partial word list is never returned.
pub fn try_read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    word_stream(reader).collect()
}

/// Reads all normalized words from a file, one word per line.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn try_read_words_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    try_read_words(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn normalization() {
        assert_eq!(normalize("  CaT \n"), Some("cat".to_string()));
        assert_eq!(normalize("wheat"), Some("wheat".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn substitutions() {
        assert!(are_adjacent("cat", "rat"));
        assert!(are_adjacent("cat", "cot"));
        assert!(are_adjacent("rat", "hat"));

        assert!(!are_adjacent("cat", "cat"));
        assert!(!are_adjacent("cat", "dog"));
        assert!(!are_adjacent("neat", "heap"));
    }

    #[test]
    fn insertions_and_deletions() {
        assert!(are_adjacent("cat", "cart"));
        assert!(are_adjacent("cart", "cat"));
        assert!(are_adjacent("at", "cat"));
        assert!(are_adjacent("cat", "cats"));
        assert!(are_adjacent("heat", "wheat"));

        assert!(!are_adjacent("hat", "neat"));
        assert!(!are_adjacent("neat", "wheat"));
        assert!(!are_adjacent("cat", "carts"));
        assert!(!are_adjacent("cast", "carts"));
    }

    #[test]
    fn symmetry() {
        for (a, b) in [
            ("cat", "rat"),
            ("cat", "cart"),
            ("wheat", "heat"),
            ("cat", "dog"),
            ("hat", "neat"),
        ] {
            assert_eq!(are_adjacent(a, b), are_adjacent(b, a), "({a},{b})");
        }
    }

    #[test]
    fn stream_normalizes_and_skips_blanks() {
        let input = Cursor::new("CAT\n\n  rat \nHat\n\n");
        let words = try_read_words(input).unwrap();
        assert_eq!(words, vec!["cat", "rat", "hat"]);
    }

    #[test]
    fn reads_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cat\nrat\n\nWHEAT").unwrap();

        let words = try_read_words_file(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "rat", "wheat"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(try_read_words_file("/no/such/dictionary.txt").is_err());
    }
}
