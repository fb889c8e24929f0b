//! Ordered literal substitution tables applied before character folding.

use serde::{Deserialize, Serialize};

/// One literal replacement: every occurrence of `from` becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// Ordered list of literal replacements.
///
/// Pairs are applied in insertion order, each over the output of the
/// previous one. Matching is literal and left-to-right, never regex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pairs: Vec<Substitution>,
}

impl Substitutions {
    /// Empty table; `clean` applies no replacements with it.
    pub fn none() -> Self {
        Self::default()
    }

    /// German umlaut and sharp-s folding used when the caller supplies no table.
    pub fn default_table() -> Self {
        [
            ("Ä", "Ae"),
            ("Ö", "Oe"),
            ("Ü", "Ue"),
            ("ä", "ae"),
            ("ö", "oe"),
            ("ü", "ue"),
            ("ß", "ss"),
        ]
        .into_iter()
        .collect()
    }

    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.pairs.push(Substitution {
            from: from.into(),
            to: to.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.pairs.iter()
    }

    pub(crate) fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        // An empty key would match between every character.
        for pair in self.pairs.iter().filter(|p| !p.from.is_empty()) {
            if out.contains(pair.from.as_str()) {
                out = out.replace(pair.from.as_str(), &pair.to);
            }
        }
        out
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut table = Substitutions::none();
        for (from, to) in iter {
            table.push(from, to);
        }
        table
    }
}

impl From<Vec<Substitution>> for Substitutions {
    fn from(pairs: Vec<Substitution>) -> Self {
        Self { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_folds_umlauts() {
        let table = Substitutions::default_table();
        assert_eq!(table.len(), 7);
        assert_eq!(table.apply("Fußball Ärger über Öl"), "Fussball Aerger ueber Oel");
    }

    #[test]
    fn pairs_apply_in_order() {
        let table: Substitutions = [("a", "b"), ("b", "c")].into_iter().collect();
        assert_eq!(table.apply("ab"), "cc");

        let reversed: Substitutions = [("b", "c"), ("a", "b")].into_iter().collect();
        assert_eq!(reversed.apply("ab"), "bc");
    }

    #[test]
    fn matching_is_literal() {
        let table: Substitutions = [(".*", "x")].into_iter().collect();
        assert_eq!(table.apply("a.*b.c"), "axb.c");
    }

    #[test]
    fn empty_keys_are_skipped() {
        let table: Substitutions = [("", "x")].into_iter().collect();
        assert_eq!(table.apply("abc"), "abc");
        assert!(Substitutions::none().is_empty());
    }
}
