use formulate_lib::enumerate::{candidate_count, enumerate, enumerate_limited, format_single};
use formulate_lib::subscript::to_subscript;
use proptest::prelude::*;

// Short inputs keep the exponential enumeration cheap.
fn formula_like() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9() .+-]{0,10}"
}

proptest! {
    #[test]
    fn never_empty(s in formula_like()) {
        prop_assert!(!enumerate(&s).is_empty());
    }

    #[test]
    fn digits_pass_through(s in "[0-9]{1,12}") {
        prop_assert_eq!(enumerate(&s), vec![s.clone()]);
    }

    #[test]
    fn case_insensitive(s in formula_like()) {
        let base = enumerate(&s);
        prop_assert_eq!(&base, &enumerate(&s.to_uppercase()));
        prop_assert_eq!(&base, &enumerate(&s.to_lowercase()));
    }

    #[test]
    fn best_guess_is_first(s in formula_like()) {
        prop_assert_eq!(&format_single(&s), &enumerate(&s)[0]);
    }

    #[test]
    fn limited_is_prefix(s in formula_like(), limit in 0usize..8) {
        let all = enumerate(&s);
        let n = limit.min(all.len());
        prop_assert_eq!(enumerate_limited(&s, limit), all[..n].to_vec());
    }

    #[test]
    fn count_matches(s in formula_like()) {
        prop_assert_eq!(candidate_count(&s), enumerate(&s).len() as u128);
    }

    #[test]
    fn subscript_idempotent(s in "[0-9a-z]{0,12}") {
        let once = to_subscript(&s);
        prop_assert_eq!(to_subscript(&once), once);
    }

    #[test]
    fn never_starts_lowercase(s in formula_like()) {
        for c in enumerate(&s) {
            prop_assert!(!c.starts_with(|ch: char| ch.is_ascii_lowercase()));
        }
    }
}

#[test]
fn known_formulas() {
    assert_eq!(enumerate(""), vec![""]);
    assert_eq!(enumerate("x"), vec!["X"]);

    let co = enumerate("co");
    assert!(co.contains(&"Co".to_string()));
    assert!(co.contains(&"CO".to_string()));

    let water = enumerate("h2o");
    assert!(water.contains(&"H₂O".to_string()));
    assert!(water.iter().all(|c| !c.starts_with("H2")));

    assert!(enumerate("h2so4").contains(&"H₂SO₄".to_string()));

    let arsenite = enumerate("aso3");
    assert!(arsenite.contains(&"AsO₃".to_string()));
    assert!(arsenite.iter().all(|c| !c.starts_with("ASO3")));
}
