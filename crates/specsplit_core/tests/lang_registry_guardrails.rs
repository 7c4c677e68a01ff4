use std::collections::HashMap;

use specsplit_core::lang::declarations;
use specsplit_core::lang::keywords;
use specsplit_core::lang::operators;
use specsplit_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn restricted_keywords_are_exactly_the_jump_statements() {
    let restricted: Vec<&str> = keywords::KEYWORDS
        .iter()
        .filter(|k| k.restricted)
        .map(|k| k.canonical)
        .collect();
    assert_eq!(restricted, vec!["return", "throw", "break", "continue"]);
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn every_opening_delimiter_has_a_closing_partner() {
    for info in punctuation::PUNCTUATION {
        if let Some(close) = punctuation::closing(info.id) {
            assert!(punctuation::is_closing(close), "{:?} is not a closer", close);
            assert_eq!(punctuation::category(close), punctuation::PunctuationCategory::Delimiter);
        }
    }
}

#[test]
fn operator_spellings_unique_and_within_max_len() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(
            info.spelling.len() <= operators::MAX_LEN,
            "operator {:?} longer than MAX_LEN",
            info.spelling
        );
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn operators_and_punctuation_do_not_overlap() {
    for info in operators::OPERATORS {
        assert!(
            punctuation::from_str(info.spelling).is_none(),
            "{:?} is both an operator and punctuation",
            info.spelling
        );
    }
}

#[test]
fn declaration_keywords_are_lowercase_identifiers() {
    for info in declarations::DECLARATIONS {
        assert_eq!(info.canonical, info.canonical.to_lowercase());
        assert!(keywords::from_str(info.canonical).is_none());
        assert!(info.canonical.chars().all(|c| c.is_ascii_alphabetic()));
    }
}
