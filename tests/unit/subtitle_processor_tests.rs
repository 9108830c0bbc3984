/*!
 * Tests for SRT stripping and reformatting
 */

use tcdc::subtitle_processor::{reformat, strip_srt};
use crate::common;

/// Test the reference SRT snippet
#[test]
fn test_stripSrt_withTwoCues_shouldKeepOnlyText() {
    let input = "1\n00:00:01,000 --> 00:00:04,000\nHello world\n\n2\n00:00:05,000 --> 00:00:06,000\nBye";
    assert_eq!(strip_srt(input), "Hello world\nBye");
}

/// Test a full file with trailing newline
#[test]
fn test_stripSrt_withSampleFile_shouldJoinCaptionLines() {
    assert_eq!(
        strip_srt(common::SAMPLE_SRT),
        "This is a test subtitle.\nIt contains multiple entries.\nFor testing purposes."
    );
}

/// Test that plain text passes through apart from trimming
#[test]
fn test_stripSrt_withPlainText_shouldOnlyTrim() {
    assert_eq!(strip_srt("  Just a transcript line.  "), "Just a transcript line.");
    assert_eq!(strip_srt(""), "");
}

/// Test that numbers inside caption text are kept
#[test]
fn test_stripSrt_withNumbersInText_shouldKeepThem() {
    let input = "7\n00:01:00,000 --> 00:01:02,000\nWe counted 42 of them\n";
    assert_eq!(strip_srt(input), "We counted 42 of them");
}

/// Test idempotence on several inputs
#[test]
fn test_stripSrt_withRepeatedApplication_shouldBeIdempotent() {
    let inputs = [
        common::SAMPLE_SRT,
        "1\n00:00:01,000 --> 00:00:04,000\nHello\n\n\n\n2\n\nBye",
        "00:00:01,000 --> 00:00:02,0001\ntext",
        "  \n 12\n34\nfoo\n \n bar",
        "no subtitles here",
    ];

    for input in inputs {
        let once = strip_srt(input);
        assert_eq!(strip_srt(&once), once, "not idempotent for {:?}", input);
    }
}

/// Test the reference reformat sentence
#[test]
fn test_reformat_withThreeSentences_shouldUseDoubleLineBreaks() {
    assert_eq!(
        reformat("Hello world. How are you? Fine!"),
        "Hello world.\n\nHow are you?\n\nFine!"
    );
}

/// Test that caption lines are joined before splitting into sentences
#[test]
fn test_reformat_withStrippedCaptions_shouldProduceParagraphs() {
    let stripped = strip_srt(common::SAMPLE_SRT);
    assert_eq!(
        reformat(&stripped),
        "This is a test subtitle.\n\nIt contains multiple entries.\n\nFor testing purposes."
    );
}

/// Test that reformatting ordinary prose twice is stable
#[test]
fn test_reformat_withOrdinaryProse_shouldBeStable() {
    let once = reformat("First point.  Second point!\nThird point?");
    assert_eq!(once, "First point.\n\nSecond point!\n\nThird point?");
    assert_eq!(reformat(&once), once);
}
