/*!
 * Tests for the comparison session
 */

use tcdc::diff::{DiffConfig, DiffOption, GranularityMode, Segment};
use tcdc::session::{DiffSession, Side};
use crate::common;

/// Test that a fresh session compares nothing
#[test]
fn test_session_withEmptyTexts_shouldHaveNoSegments() {
    let session = DiffSession::new(DiffConfig::default());
    assert!(session.segments().is_empty());
    assert!(!session.summary().has_differences());
}

/// Test that edits are reflected on the next computation
#[test]
fn test_session_withTextEdits_shouldRecompute() {
    let mut session = DiffSession::with_texts("hello world", "hello world", DiffConfig::default());
    assert!(!session.summary().has_differences());

    session.set_text(Side::Right, "hello there");

    assert_eq!(
        session.segments(),
        vec![
            Segment::unchanged("hello "),
            Segment::removed("world"),
            Segment::added("there"),
        ]
    );
}

/// Test that toggling ignore punctuation changes the result
#[test]
fn test_session_withPunctuationToggle_shouldSuppressAndRestoreChanges() {
    let mut session = DiffSession::with_texts("Wait, what?", "Wait - what!", DiffConfig::default());
    assert!(common::change_count(&session.segments()) > 0);

    session.toggle(DiffOption::IgnorePunctuation);
    assert!(session.config().ignore_punctuation);
    assert_eq!(common::change_count(&session.segments()), 0);

    session.toggle(DiffOption::IgnorePunctuation);
    assert!(common::change_count(&session.segments()) > 0);
}

/// Test that break sentences switches the derived granularity
#[test]
fn test_session_withBreakSentencesToggle_shouldSwitchToLineMode() {
    let mut session = DiffSession::with_texts("One. Two.", "One. Three.", DiffConfig::default());
    assert_eq!(session.granularity(), GranularityMode::Word);

    session.toggle(DiffOption::BreakSentences);

    assert_eq!(session.granularity(), GranularityMode::Line);
    assert_eq!(
        session.segments(),
        vec![
            Segment::unchanged("One.\n"),
            Segment::removed("Two."),
            Segment::added("Three."),
        ]
    );
}

/// Test the explicit granularity override
#[test]
fn test_session_withGranularityOverride_shouldIgnoreDerivedMode() {
    let mut session = DiffSession::new(DiffConfig::default().with_break_sentences(true));
    session.set_granularity_override(Some(GranularityMode::Character));
    assert_eq!(session.granularity(), GranularityMode::Character);

    session.set_granularity_override(None);
    assert_eq!(session.granularity(), GranularityMode::Line);
}

/// Test the on-demand utilities replace only one side
#[test]
fn test_session_withUtilities_shouldRewriteOneSide() {
    let mut session = DiffSession::with_texts(common::SAMPLE_SRT, "untouched", DiffConfig::default());

    session.strip_srt(Side::Left);
    assert_eq!(
        session.text(Side::Left),
        "This is a test subtitle.\nIt contains multiple entries.\nFor testing purposes."
    );

    session.reformat(Side::Left);
    assert_eq!(
        session.text(Side::Left),
        "This is a test subtitle.\n\nIt contains multiple entries.\n\nFor testing purposes."
    );
    assert_eq!(session.text(Side::Right), "untouched");
}
