use super::*;

#[test]
fn test_positive_text_scores_positive_compound() {
    let scorer = VaderScorer::new();
    let scores = scorer.score("I love this, it is wonderful and great");
    assert!(scores.compound > 0.0);
}

#[test]
fn test_negative_text_scores_negative_compound() {
    let scorer = VaderScorer::new();
    let scores = scorer.score("This is terrible, I hate everything and feel hopeless");
    assert!(scores.compound < 0.0);
}

#[test]
fn test_empty_text_is_neutral() {
    let scorer = VaderScorer::new();
    let scores = scorer.score("");
    assert!((scores.compound - 0.0).abs() < 1e-9);
}

#[test]
fn test_compound_stays_in_range() {
    let scorer = VaderScorer::new();
    for text in ["amazing wonderful fantastic!!!", "awful horrible disgusting!!!", "the chair"] {
        let scores = scorer.score(text);
        assert!((-1.0..=1.0).contains(&scores.compound));
    }
}
