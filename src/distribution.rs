// src/distribution.rs
use std::collections::HashMap;

/// Occurrence count per distinct token. Keys match exactly and case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }
        FrequencyTable { counts }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens (types).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens aggregated.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Entries by descending count, ties broken by ascending token.
    pub fn sorted_entries(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

pub fn build_distribution(tokens: &[String]) -> FrequencyTable {
    FrequencyTable::from_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats() {
        let table = FrequencyTable::from_tokens(["a", "b", "a", "c", "b", "a"]);
        assert_eq!(table.get("a"), Some(3));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.get("d"), None);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn sorted_by_count_then_token() {
        let table = FrequencyTable::from_tokens(["a", "b", "a", "c", "b", "a"]);
        assert_eq!(
            table.sorted_entries(),
            vec![("a".to_string(), 3), ("b".to_string(), 2), ("c".to_string(), 1)]
        );

        let ties = FrequencyTable::from_tokens(["pear", "apple", "fig", "fig"]);
        let order: Vec<String> = ties.sorted_entries().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, ["fig", "apple", "pear"]);
    }

    #[test]
    fn case_sensitive() {
        let table = FrequencyTable::from_tokens(["The", "the", "THE"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("the"), Some(1));
    }

    #[test]
    fn empty_input() {
        let table = build_distribution(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.sorted_entries().is_empty());
    }
}
