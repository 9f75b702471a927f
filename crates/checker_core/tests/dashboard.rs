use checker_core::dashboard::{parse_score, KeywordKind, KeywordPanels, ScoreBand};

#[test]
fn score_bands_split_at_sixty_and_eighty() {
    assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
    assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
    assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
    assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);

    assert_eq!(
        ScoreBand::Fair.css_classes(),
        ["bg-warning-subtle", "text-warning", "border-warning"]
    );
}

#[test]
fn score_text_is_parsed_like_a_leading_integer() {
    assert_eq!(parse_score(" 87 "), Some(87));
    assert_eq!(parse_score("72%"), Some(72));
    assert_eq!(parse_score("-3"), Some(-3));
    assert_eq!(parse_score("n/a"), None);
    assert_eq!(parse_score(""), None);
}

#[test]
fn keyword_toggle_flips_visibility_and_label() {
    let mut panels = KeywordPanels::new(false, true);
    assert_eq!(panels.button_label(KeywordKind::Matched), "Show Matched Keywords");
    assert_eq!(panels.button_label(KeywordKind::Missing), "Hide Missing Keywords");

    assert!(panels.toggle(KeywordKind::Matched));
    assert_eq!(panels.button_label(KeywordKind::Matched), "Hide Matched Keywords");
    assert!(panels.is_visible(KeywordKind::Missing));

    assert!(!panels.toggle(KeywordKind::Missing));
    assert_eq!(panels.button_label(KeywordKind::Missing), "Show Missing Keywords");
}
