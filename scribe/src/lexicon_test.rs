use super::*;

#[test]
fn test_builtin_contains_terms_from_each_set() {
    let lexicon = Lexicon::builtin();
    assert!(lexicon.contains("sad")); // depression
    assert!(lexicon.contains("hopeless")); // hopelessness
    assert!(lexicon.contains("anxious")); // anxiety
    assert!(lexicon.contains("distracted")); // adhd
    assert!(lexicon.contains("um")); // filler
}

#[test]
fn test_membership_is_case_insensitive() {
    let lexicon = Lexicon::builtin();
    assert!(lexicon.contains("Sad"));
    assert!(lexicon.contains("ANXIOUS"));
}

#[test]
fn test_custom_terms_are_lowercased_on_build() {
    let lexicon = Lexicon::from_terms(["Rumination", "SLEEP"]);
    assert!(lexicon.contains("rumination"));
    assert!(lexicon.contains("Sleep"));
    assert!(!lexicon.contains("sad"));
}

#[test]
fn test_union_terms_are_deduplicated() {
    // "hopeless" and "restless" each appear in two source sets.
    let lexicon = Lexicon::builtin();
    assert!(lexicon.len() < DEPRESSION_TERMS.len()
        + HOPELESSNESS_TERMS.len()
        + ANXIETY_TERMS.len()
        + ADHD_TERMS.len()
        + FILLER_TERMS.len());
}

#[test]
fn test_empty_lexicon() {
    let lexicon = Lexicon::default();
    assert!(lexicon.is_empty());
    assert!(!lexicon.contains("anything"));
}
