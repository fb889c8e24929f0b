//! Property tests for the `clean` transform and the entity invariants.

use fnorm_core::{clean, NormalizedFilename, Substitutions};
use proptest::prelude::*;

const FORBIDDEN: [&str; 4] = ["__", "--", "_-", "-_"];

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

fn assert_separator_invariants(s: &str) -> Result<(), TestCaseError> {
    for pattern in FORBIDDEN {
        prop_assert!(!s.contains(pattern), "{:?} contains {:?}", s, pattern);
    }
    prop_assert!(!s.starts_with(is_separator), "{:?} starts with a separator", s);
    prop_assert!(!s.ends_with(is_separator), "{:?} ends with a separator", s);
    Ok(())
}

// Biased towards the characters the folds care about.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 _\-.()/äöüÄÖÜßé*+,\t\n]{0,40}").unwrap()
}

proptest! {
    #[test]
    fn clean_is_idempotent(s in name_strategy()) {
        let table = Substitutions::default_table();
        let once = clean(&s, &table);
        prop_assert_eq!(clean(&once, &table), once.clone());
    }

    #[test]
    fn clean_output_has_no_separator_runs(s in name_strategy()) {
        let out = clean(&s, &Substitutions::default_table());
        assert_separator_invariants(&out)?;
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '(' | ')')));
    }

    #[test]
    fn clean_handles_arbitrary_unicode(s in any::<String>()) {
        let out = clean(&s, &Substitutions::default_table());
        assert_separator_invariants(&out)?;
        prop_assert!(out.is_ascii());
    }

    #[test]
    fn basename_is_lowercase_and_dotless(s in name_strategy()) {
        let f = NormalizedFilename::new(&s);
        assert_separator_invariants(f.basename())?;
        prop_assert!(!f.basename().contains('.'));
        prop_assert_eq!(f.basename().to_lowercase(), f.basename());
        if !f.has_extension() {
            prop_assert!(!f.assemble().contains('.'));
        }
    }

    #[test]
    fn limit_length_never_exceeds_max(s in name_strategy(), max in 1usize..30) {
        let mut f = NormalizedFilename::new(&s);
        let before = f.basename().to_string();
        f.limit_length(max).unwrap();
        prop_assert!(f.basename().len() <= max);
        prop_assert!(before.starts_with(f.basename()));
    }
}
