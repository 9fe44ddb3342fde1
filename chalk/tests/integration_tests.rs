//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! End-to-end tests for style resolution and rendering

use termchalk::{
    RESET, RenderConfig, Style, StyleHandle, StyleSet, green, red, render, resolve,
    strip_ansi_codes, styled, text_bold, yellow_bg,
};

const TEXT: &str = "Test String";

#[test]
fn test_single_foreground_wraps_text() {
    for style in Style::ALL.iter().filter(|s| s.is_foreground()) {
        let output = render(&resolve(&[*style]), &[TEXT]);
        assert_eq!(output, format!("\x1b[{}m{}\x1b[0m", style.to_u8(), TEXT));
    }
}

#[test]
fn test_three_foregrounds_keep_the_last() {
    let resolved = resolve(&[Style::FgRed, Style::Bold, Style::FgGreen, Style::FgBlue]);
    assert_eq!(resolved.as_slice(), &[Style::Bold, Style::FgBlue]);

    let resolved = resolve(&[Style::BgRed, Style::BgGreen, Style::Italic, Style::BgBlue]);
    assert_eq!(resolved.as_slice(), &[Style::Italic, Style::BgBlue]);
}

#[test]
fn test_canonical_order_and_duplicates() {
    let resolved = resolve(&[
        Style::Bold,
        Style::Underline,
        Style::FgCyan,
        Style::BgWhite,
        Style::Bold,
    ]);
    assert_eq!(resolved.codes().collect::<Vec<_>>(), vec![1, 4, 36, 47]);
}

#[test]
fn test_handle_to_text_sorts_codes() {
    let styles = ["Bold", "FgRed", "BgWhite"].map(|name| name.parse::<Style>().unwrap());
    let handle = StyleHandle::new(&styles);
    assert_eq!(handle.to_text(&[TEXT]), "\x1b[1;31;47mTest String\x1b[0m");
}

#[test]
fn test_later_color_replaces_earlier() {
    let output = StyleHandle::new(&[Style::FgRed, Style::FgCyan]).to_text(&["X"]);
    assert_eq!(output, "\x1b[36mX\x1b[0m");
    assert!(!output.contains("\x1b[31"));
}

#[test]
fn test_newline_is_written_after_reset() {
    let output = styled("line\n", &[Style::FgYellow]);
    assert_eq!(output, "\x1b[33mline\x1b[0m\n");
    assert!(output.ends_with(&format!("{}\n", RESET)));
}

#[test]
fn test_add_and_remove_nothing_leave_handle_alone() {
    let handle = StyleHandle::new(&[Style::FgRed, Style::Bold]);
    let before = handle.styles().to_vec();

    assert_eq!(handle.add(&[]), handle);
    assert_eq!(handle.remove(&[]), handle);
    assert_eq!(handle.styles(), before.as_slice());
}

#[test]
fn test_clear_never_touches_receiver() {
    let handle = StyleHandle::new(&[Style::FgRed, Style::Bold, Style::BgWhite]);
    let before = handle.styles().to_vec();

    let cleared = handle.clear();

    assert!(cleared.styles().is_empty());
    assert_eq!(handle.styles(), before.as_slice());
}

#[test]
fn test_presets_derive_without_interference() {
    let error = StyleHandle::new(&[Style::FgRed]);
    let error_bold = error.add(&[Style::Bold]);
    let warning_bold = error_bold.add(&[Style::FgYellow]);
    let warning = warning_bold.remove(&[Style::Bold]);

    assert_eq!(error.to_text(&["e"]), "\x1b[31me\x1b[0m");
    assert_eq!(error_bold.to_text(&["e"]), "\x1b[1;31me\x1b[0m");
    assert_eq!(warning_bold.to_text(&["w"]), "\x1b[1;33mw\x1b[0m");
    assert_eq!(warning.to_text(&["w"]), "\x1b[33mw\x1b[0m");
}

#[test]
fn test_highlight_word_inside_sentence() {
    let word = green(&["world"]);
    let sentence = red(&["hello", word.as_str(), "again"]);

    assert_eq!(
        sentence,
        "\x1b[31mhello \x1b[32mworld\x1b[0m\x1b[31m again\x1b[0m"
    );
    assert_eq!(strip_ansi_codes(&sentence), "hello world again");
}

#[test]
fn test_handle_restyles_nested_fragments() {
    let label = text_bold(&["label"]);
    let handle = StyleHandle::new(&[Style::BgBlue, Style::Underline]);
    assert_eq!(
        handle.to_text(&[label.as_str(), "value"]),
        "\x1b[4;44m\x1b[1mlabel\x1b[0m\x1b[4;44m value\x1b[0m"
    );
}

#[test]
fn test_disabled_config_renders_plain_text() {
    let note = yellow_bg(&["note"]);
    let handle = StyleHandle::new(&[Style::FgRed]).with_config(RenderConfig::disabled());
    assert_eq!(handle.to_text(&[note.as_str(), "text\n"]), "note text\n");
}

#[test]
fn test_free_function_and_handle_agree() {
    let styles = [Style::Dim, Style::FgBrightGreen, Style::BgBrightBlack, Style::Dim];
    let handle = StyleHandle::new(&styles);
    for text in ["plain", "newline\n", "  padded\n  ", ""] {
        assert_eq!(styled(text, &styles), handle.to_text(&[text]), "{:?}", text);
    }
}

#[test]
fn test_unstyled_text_passes_through() {
    assert_eq!(styled(TEXT, &[]), TEXT);
    assert_eq!(render(&StyleSet::new(), &["a", "b"]), "a b");
}
