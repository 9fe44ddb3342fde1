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


//! Single-style convenience functions.
//!
//! Each function renders its fragments with exactly one style, e.g.
//! `red(&["failed"])` or `bright_cyan_bg(&["note"])`. They are all thin callers
//! of [`paint`], generated from one name-to-style table.

use crate::{Style, StyleSet, render};

/// Renders `fragments` with a single style.
///
/// Fragments are joined with single spaces. A non-final fragment that is already
/// styled gets `style` re-applied after it, so the outer style carries on past
/// the nested reset.
///
/// ```
/// use termchalk::{Style, green, paint};
///
/// let word = green(&["Green"]);
/// assert_eq!(
///     paint(Style::FgRed, &["a", word.as_str(), "word"]),
///     "\x1b[31ma \x1b[32mGreen\x1b[0m\x1b[31m word\x1b[0m"
/// );
/// ```
pub fn paint<S: AsRef<str>>(style: Style, fragments: &[S]) -> String {
    render(&StyleSet::from(vec![style]), fragments)
}

/// Looks up the style a convenience function applies, by function name.
pub fn painter_style(name: &str) -> Option<Style> {
    PAINTERS
        .iter()
        .find(|(painter, _)| *painter == name)
        .map(|(_, style)| *style)
}

macro_rules! define_painters {
    ($($label:literal $name:ident = $style:ident,)*) => {
        $(
            #[doc = concat!("Renders the fragments with ", $label, ".")]
            pub fn $name<S: AsRef<str>>(fragments: &[S]) -> String {
                paint(Style::$style, fragments)
            }
        )*

        /// Every convenience function name with the style it applies.
        pub const PAINTERS: &[(&str, Style)] = &[$((stringify!($name), Style::$style),)*];

        #[cfg(test)]
        fn painter_functions() -> Vec<(fn(&[&'static str]) -> String, Style)> {
            vec![$(($name::<&'static str> as fn(&[&'static str]) -> String, Style::$style),)*]
        }
    };
}

define_painters! {
    "black text" black = FgBlack,
    "red text" red = FgRed,
    "green text" green = FgGreen,
    "yellow text" yellow = FgYellow,
    "blue text" blue = FgBlue,
    "magenta text" magenta = FgMagenta,
    "cyan text" cyan = FgCyan,
    "white text" white = FgWhite,

    "bright black text" bright_black = FgBrightBlack,
    "bright red text" bright_red = FgBrightRed,
    "bright green text" bright_green = FgBrightGreen,
    "bright yellow text" bright_yellow = FgBrightYellow,
    "bright blue text" bright_blue = FgBrightBlue,
    "bright magenta text" bright_magenta = FgBrightMagenta,
    "bright cyan text" bright_cyan = FgBrightCyan,
    "bright white text" bright_white = FgBrightWhite,

    "a black background" black_bg = BgBlack,
    "a red background" red_bg = BgRed,
    "a green background" green_bg = BgGreen,
    "a yellow background" yellow_bg = BgYellow,
    "a blue background" blue_bg = BgBlue,
    "a magenta background" magenta_bg = BgMagenta,
    "a cyan background" cyan_bg = BgCyan,
    "a white background" white_bg = BgWhite,

    "a bright black background" bright_black_bg = BgBrightBlack,
    "a bright red background" bright_red_bg = BgBrightRed,
    "a bright green background" bright_green_bg = BgBrightGreen,
    "a bright yellow background" bright_yellow_bg = BgBrightYellow,
    "a bright blue background" bright_blue_bg = BgBrightBlue,
    "a bright magenta background" bright_magenta_bg = BgBrightMagenta,
    "a bright cyan background" bright_cyan_bg = BgBrightCyan,
    "a bright white background" bright_white_bg = BgBrightWhite,

    "bold text" text_bold = Bold,
    "dim text" text_dim = Dim,
    "italic text" text_italic = Italic,
    "underlined text" text_underline = Underline,
}
