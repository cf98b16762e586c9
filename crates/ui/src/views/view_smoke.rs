use flashcards_core::model::{CardKind, Deck, FilterCriteria};

use super::test_harness::{ViewKind, sample_deck, setup_view_harness};
use crate::vm::SessionIntent;

fn study(criteria: FilterCriteria, intents: Vec<SessionIntent>) -> String {
    let mut harness = setup_view_harness(ViewKind::Study { criteria, intents }, sample_deck());
    harness.rebuild();
    harness.render()
}

#[test]
fn filter_view_lists_deck_chapters_and_pickers() {
    let mut harness = setup_view_harness(ViewKind::Filter, sample_deck());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("test-deck.csv (2 cards)"), "missing deck label in {html}");
    for expected in ["Derivation", "Concept", "Intermediate", "Advanced", "All"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("Randomize: No"), "missing toggle in {html}");
    assert!(html.contains("Start Flashcards"), "missing start button in {html}");
    assert!(!html.contains("No Match"), "unexpected notice in {html}");
}

#[test]
fn filter_view_renders_for_empty_deck() {
    let mut harness = setup_view_harness(ViewKind::Filter, Deck::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("(0 cards)"), "missing count in {html}");
}

#[test]
fn study_view_shows_question_with_answer_hidden() {
    let html = study(FilterCriteria::any(), Vec::new());

    assert!(html.contains("Flashcard 1/2"), "missing title in {html}");
    assert!(html.contains("What is X?"), "missing question in {html}");
    assert!(html.contains("Show Answer"), "missing reveal in {html}");
    assert!(!html.contains("X is Y"), "answer leaked in {html}");
}

#[test]
fn study_view_shows_answer_after_reveal() {
    let html = study(FilterCriteria::any(), vec![SessionIntent::Reveal]);

    assert!(html.contains("X is Y"), "missing answer in {html}");
    assert!(!html.contains("Show Answer"), "reveal still offered in {html}");
}

#[test]
fn study_view_wraps_on_previous() {
    let html = study(FilterCriteria::any(), vec![SessionIntent::Previous]);

    assert!(html.contains("Flashcard 2/2"), "missing title in {html}");
    assert!(html.contains("Derive Z"), "missing question in {html}");
}

#[test]
fn study_view_single_card_stays_put() {
    let criteria = FilterCriteria::any().with_kind(CardKind::Concept);
    let html = study(criteria, vec![SessionIntent::Next, SessionIntent::Next]);

    assert!(html.contains("Flashcard 1/1"), "missing title in {html}");
    assert!(html.contains("What is X?"), "missing question in {html}");
}

#[test]
fn study_view_without_session_explains() {
    let criteria = FilterCriteria::any().with_kind(CardKind::Concept).with_difficulty(
        flashcards_core::model::Difficulty::Advanced,
    );
    let html = study(criteria, Vec::new());

    assert!(html.contains("no active session"), "missing notice in {html}");
}
