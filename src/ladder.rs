/*!
# Word Ladder

[`WordLadder`] is the ready-made query surface over the whole pipeline:
dictionary in, shortest-path queries out. It owns a `LabeledGraph<String>`
together with a [`PathEngine`] and keeps the two consistent: after every
(re-)population the engine is recomputed, so the facade is always `Ready`
and query methods never observe stale tables.

Query inputs go through the same [`normalize`](crate::words::normalize) as
dictionary words, so `"  CAT "` finds the vertex `"cat"`.
*/

use std::{io::BufRead, path::Path};

use tracing::debug;

use crate::{
    builder::GraphBuilder,
    edge::NumEdges,
    engine::PathEngine,
    error::{BuildError, QueryError},
    graph::LabeledGraph,
    node::*,
    ops::{GraphEdgeOrder, GraphNodeOrder},
    words,
};

/// A dictionary graph answering word-ladder queries.
///
/// Words are vertices; edges connect words that
/// [`words::are_adjacent`](crate::words::are_adjacent) accepts. Shortest paths
/// and distances come from a single all-pairs precomputation per population.
#[derive(Clone)]
pub struct WordLadder {
    graph: LabeledGraph<String>,
    engine: PathEngine,
}

impl Default for WordLadder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordLadder {
    /// Creates an empty, immediately queryable ladder
    pub fn new() -> Self {
        let graph = LabeledGraph::new();
        let mut engine = PathEngine::new();
        engine.recompute(&graph);
        Self { graph, engine }
    }

    /// Rebuilds the ladder from a dictionary file, one word per line, and
    /// returns the number of words added. Blank lines and duplicates are
    /// skipped.
    ///
    /// # Errors
    /// Returns [`BuildError::SourceUnavailable`] if the file cannot be opened
    /// or read; the ladder is left empty (and still queryable) in that case.
    pub fn populate<P: AsRef<Path>>(&mut self, path: P) -> Result<NumNodes, BuildError> {
        debug!(path = %path.as_ref().display(), "populating from dictionary file");
        match std::fs::File::open(path) {
            Ok(file) => self.populate_from_reader(std::io::BufReader::new(file)),
            Err(e) => {
                self.graph.clear();
                self.engine.recompute(&self.graph);
                Err(BuildError::SourceUnavailable(e))
            }
        }
    }

    /// Rebuilds the ladder from any buffered reader; see [`Self::populate`]
    pub fn populate_from_reader<R: BufRead>(&mut self, reader: R) -> Result<NumNodes, BuildError> {
        let builder = GraphBuilder::new(|a: &String, b: &String| words::are_adjacent(a, b));
        builder.try_build(
            &mut self.graph,
            &mut self.engine,
            words::word_stream(reader),
        )
    }

    /// Returns the number of words in the ladder
    pub fn word_count(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Returns the number of adjacency connections in the ladder
    pub fn connection_count(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Returns *true* if the (normalized) word is in the ladder
    pub fn contains(&self, word: &str) -> bool {
        words::normalize(word)
            .map(|w| self.graph.contains(&w))
            .unwrap_or(false)
    }

    /// Returns all words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.labels().map(String::as_str)
    }

    /// Returns the direct neighbors of a word in index order, or `None` if
    /// the word is not in the ladder
    pub fn neighbors(&self, word: &str) -> Option<Vec<&str>> {
        let word = words::normalize(word)?;
        Some(
            self.graph
                .neighbors(&word)?
                .map(String::as_str)
                .collect(),
        )
    }

    /// Returns the number of single-edit steps on a shortest ladder between
    /// the two words. A word has distance `0` to itself.
    pub fn shortest_distance(&self, a: &str, b: &str) -> Result<NumNodes, QueryError> {
        let (a, b) = Self::normalized_pair(a, b)?;
        self.engine.distance(&self.graph, &a, &b)
    }

    /// Returns a shortest ladder between the two words, both endpoints
    /// included. The ladder from a word to itself is the single-element
    /// sequence.
    pub fn shortest_path(&self, a: &str, b: &str) -> Result<Vec<String>, QueryError> {
        let (a, b) = Self::normalized_pair(a, b)?;
        self.engine.path(&self.graph, &a, &b)
    }

    /// Read access to the underlying graph
    pub fn graph(&self) -> &LabeledGraph<String> {
        &self.graph
    }

    fn normalized_pair(a: &str, b: &str) -> Result<(String, String), QueryError> {
        match (words::normalize(a), words::normalize(b)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(QueryError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::io::Cursor;

    const SIX_WORDS: &str = "cat\nrat\nhat\nneat\nwheat\nkit\n";

    fn six_word_ladder() -> WordLadder {
        let mut ladder = WordLadder::new();
        let count = ladder.populate_from_reader(Cursor::new(SIX_WORDS)).unwrap();
        assert_eq!(count, 6);
        ladder
    }

    #[test]
    fn six_word_scenario() {
        let ladder = six_word_ladder();

        // only cat-rat, cat-hat, rat-hat are single edits
        assert_eq!(ladder.connection_count(), 3);
        assert_eq!(ladder.shortest_distance("cat", "hat"), Ok(1));
        assert_eq!(ladder.shortest_path("cat", "rat"), Ok(vec![
            "cat".to_string(),
            "rat".to_string()
        ]));

        // no chain reaches wheat without intermediate words
        assert_eq!(
            ladder.shortest_distance("cat", "wheat"),
            Err(QueryError::Unreachable)
        );
        assert_eq!(
            ladder.shortest_path("cat", "wheat"),
            Err(QueryError::Unreachable)
        );

        assert_eq!(ladder.neighbors("cat"), Some(vec!["rat", "hat"]));
        assert_eq!(ladder.neighbors("wheat"), Some(vec![]));
        assert_eq!(ladder.neighbors("dog"), None);
    }

    #[test]
    fn self_queries() {
        let ladder = six_word_ladder();

        for word in ladder.words().collect_vec() {
            assert_eq!(ladder.shortest_distance(word, word), Ok(0));
            assert_eq!(ladder.shortest_path(word, word), Ok(vec![word.to_string()]));
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let ladder = six_word_ladder();

        for (a, b) in ladder.words().collect_vec().into_iter().tuple_combinations() {
            assert_eq!(ladder.shortest_distance(a, b), ladder.shortest_distance(b, a));
        }
    }

    #[test]
    fn path_length_matches_distance() {
        let mut ladder = WordLadder::new();
        ladder
            .populate_from_reader(Cursor::new("cat\ncot\ncog\ndog\nkit\n"))
            .unwrap();

        let path = ladder.shortest_path("cat", "dog").unwrap();
        assert_eq!(path, vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(
            ladder.shortest_distance("cat", "dog").unwrap() as usize,
            path.len() - 1
        );
    }

    #[test]
    fn queries_normalize_their_inputs() {
        let ladder = six_word_ladder();

        assert_eq!(ladder.shortest_distance("  CAT ", "Hat"), Ok(1));
        assert!(ladder.contains("WHEAT"));
        assert!(!ladder.contains("dog"));
        assert!(!ladder.contains("   "));
        assert_eq!(
            ladder.shortest_distance("", "cat"),
            Err(QueryError::NotFound)
        );
    }

    #[test]
    fn unknown_words_are_not_found() {
        let ladder = six_word_ladder();

        assert_eq!(
            ladder.shortest_distance("cat", "dog"),
            Err(QueryError::NotFound)
        );
        assert_eq!(
            ladder.shortest_path("dog", "cat"),
            Err(QueryError::NotFound)
        );
    }

    #[test]
    fn duplicate_dictionary_words_collapse() {
        let mut ladder = WordLadder::new();
        let count = ladder
            .populate_from_reader(Cursor::new("cat\nCat\n CAT \nrat\n"))
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(ladder.words().collect_vec(), vec!["cat", "rat"]);
    }

    #[test]
    fn unreadable_dictionary_leaves_ladder_empty() {
        let mut ladder = six_word_ladder();

        let result = ladder.populate("/no/such/dictionary.txt");
        assert!(matches!(result, Err(BuildError::SourceUnavailable(_))));

        assert_eq!(ladder.word_count(), 0);
        assert_eq!(
            ladder.shortest_distance("cat", "hat"),
            Err(QueryError::NotFound)
        );
    }

    #[test]
    fn repopulation_replaces_previous_dictionary() {
        let mut ladder = six_word_ladder();
        let count = ladder
            .populate_from_reader(Cursor::new("dog\ndot\n"))
            .unwrap();

        assert_eq!(count, 2);
        assert!(!ladder.contains("cat"));
        assert_eq!(ladder.shortest_distance("dog", "dot"), Ok(1));
    }

    #[test]
    fn populate_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SIX_WORDS}").unwrap();

        let mut ladder = WordLadder::new();
        assert_eq!(ladder.populate(file.path()).unwrap(), 6);
        assert_eq!(ladder.shortest_distance("cat", "hat"), Ok(1));
    }

    #[test]
    fn fresh_ladder_is_queryable() {
        let ladder = WordLadder::new();
        assert_eq!(ladder.word_count(), 0);
        assert_eq!(
            ladder.shortest_distance("cat", "hat"),
            Err(QueryError::NotFound)
        );
    }
}
