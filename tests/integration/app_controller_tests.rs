/*!
 * Integration tests for the application controller
 */

use anyhow::Result;
use tcdc::app_config::Config;
use tcdc::app_controller::{Controller, TextUtility};
use tcdc::diff::{GranularityMode, ViewMode};
use tcdc::file_utils::FileManager;
use tcdc::render::NO_DIFFERENCES_MESSAGE;
use crate::common;

fn plain_config() -> Config {
    Config {
        color: false,
        ..Config::default()
    }
}

/// Test a diff of two files with summary and unified view
#[test]
fn test_run_diff_withTwoFiles_shouldRenderSummaryAndUnifiedView() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let left = common::create_test_file(temp_dir.path(), "left.txt", "hello world")?;
    let right = common::create_test_file(temp_dir.path(), "right.txt", "hello there")?;

    let controller = Controller::with_config(plain_config());
    let report = controller.run_diff(&left, &right)?;

    assert_eq!(
        report,
        "Original: 11 chars, 1 lines\nModified: 11 chars, 1 lines\n\n\
         Diff Summary (1 added, 1 removed)\n- world\n+ there\n\nhello [-world-]{+there+}\n"
    );
    Ok(())
}

/// Test the split view without summary
#[test]
fn test_run_diff_withSplitViewAndNoSummary_shouldRenderPanesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let left = common::create_test_file(temp_dir.path(), "left.txt", "hello world")?;
    let right = common::create_test_file(temp_dir.path(), "right.txt", "hello there")?;

    let config = Config {
        view: ViewMode::Split,
        show_summary: false,
        ..plain_config()
    };
    let report = Controller::with_config(config).run_diff(&left, &right)?;

    assert_eq!(
        report,
        "Original: 11 chars, 1 lines\nModified: 11 chars, 1 lines\n\n\
         --- Original\nhello [-world-]\n+++ Modified\nhello {+there+}\n"
    );
    Ok(())
}

/// Test that ignored punctuation yields the no-differences message
#[test]
fn test_run_diff_withIgnoredPunctuation_shouldReportNoDifferences() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let left = common::create_test_file(temp_dir.path(), "left.txt", "hello,")?;
    let right = common::create_test_file(temp_dir.path(), "right.txt", "hello-")?;

    let mut config = plain_config();
    config.diff.ignore_punctuation = true;
    let report = Controller::with_config(config).run_diff(&left, &right)?;

    assert!(report.contains(&format!("\n\n{}\n", NO_DIFFERENCES_MESSAGE)));
    Ok(())
}

/// Test that input sizes head the report
#[test]
fn test_run_diff_withMultilineInputs_shouldReportCharAndLineCounts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let left = common::create_test_file(temp_dir.path(), "left.txt", "one\ntwo\nthree")?;
    let right = common::create_test_file(temp_dir.path(), "right.txt", "caf\u{e9}\n")?;

    let report = Controller::with_config(plain_config()).run_diff(&left, &right)?;

    assert!(report.starts_with("Original: 13 chars, 3 lines\nModified: 5 chars, 2 lines\n\n"));
    Ok(())
}

/// Test the configured granularity override is used
#[test]
fn test_compare_texts_withCharacterOverride_shouldDiffCharacters() {
    let config = Config {
        granularity: Some(GranularityMode::Character),
        ..plain_config()
    };
    let controller = Controller::with_config(config);

    let segments = controller.compare_texts("color", "colour");

    assert_eq!(controller.granularity(), GranularityMode::Character);
    assert_eq!(common::change_count(&segments), 1);
    assert!(segments.iter().any(|s| s.is_added() && s.content == "u"));
}

/// Test that a missing input file is an error
#[test]
fn test_run_diff_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let left = common::create_test_file(temp_dir.path(), "left.txt", "text")?;
    let missing = temp_dir.path().join("missing.txt");

    let result = Controller::with_config(plain_config()).run_diff(&left, &missing);

    assert!(result.is_err());
    Ok(())
}

/// Test stripping an SRT file to stdout content
#[test]
fn test_run_utility_withStripSrt_shouldReturnCaptionText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "talk.srt")?;

    let output = Controller::with_config(plain_config()).run_utility(TextUtility::StripSrt, &input)?;

    assert_eq!(
        output,
        "This is a test subtitle.\nIt contains multiple entries.\nFor testing purposes."
    );
    Ok(())
}

/// Test writing utility output next to the input
#[test]
fn test_write_utility_output_withoutOutputPath_shouldWriteSiblingFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "talk.srt")?;

    let written = Controller::with_config(plain_config())
        .write_utility_output(TextUtility::StripSrt, &input, None)?;

    assert_eq!(written, temp_dir.path().join("talk.stripped.srt"));
    assert!(FileManager::read_to_string(&written)?.starts_with("This is a test subtitle."));
    Ok(())
}

/// Test writing utility output to an explicit path
#[test]
fn test_write_utility_output_withOutputPath_shouldWriteThere() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "notes.txt", "One. Two. Three.")?;
    let target = temp_dir.path().join("out").join("notes.txt");

    let written = Controller::with_config(plain_config())
        .write_utility_output(TextUtility::Reformat, &input, Some(target.clone()))?;

    assert_eq!(written, target);
    assert_eq!(FileManager::read_to_string(&target)?, "One.\n\nTwo.\n\nThree.");
    Ok(())
}
