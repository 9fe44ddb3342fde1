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


//! Rendering of styled text.
//!
//! The renderer wraps text in the escape sequence of an already resolved
//! [`StyleSet`] and closes it with a reset. Several fragments are joined with
//! single spaces. When a fragment was itself produced by a styling call, its
//! own reset would switch off the outer style for the rest of the line, so the
//! outer escape sequence is written again right after it:
//!
//! ```text
//! ESC[31m This is ESC[32m green ESC[0m ESC[31m  text ESC[0m
//!         └── outer ──┘└─ nested ───┘└ re-asserted outer ┘
//! ```
//!
//! A single trailing newline is kept outside the styled span, so the reset is
//! written before the line break.

use crate::consts::{FRAGMENT_SEPARATOR, RESET};
use crate::strip::{is_styled, strip_ansi_codes};
use crate::{RenderConfig, Style, StyleSet, resolve};
use std::fmt::Write;
use tracing::instrument;

/// Renders text fragments with a resolved style set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `fragments` styled with `styles` into a new string.
    ///
    /// `styles` is used as given; callers holding a request log should
    /// [`resolve`](StyleSet::resolve) it first.
    pub fn render<S: AsRef<str>>(&self, styles: &StyleSet, fragments: &[S]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_to(&mut output, styles, fragments);
        output
    }

    /// Renders `fragments` styled with `styles` into `writer`.
    ///
    /// - No fragments: nothing is written.
    /// - Empty style set: the fragments are written joined by spaces, unstyled.
    /// - Otherwise: escape sequence, joined text, reset. A trailing newline (after
    ///   trimming surrounding spaces) is moved behind the reset.
    #[instrument(level = "trace", skip_all)]
    pub fn render_to<W: Write, S: AsRef<str>>(
        &self,
        writer: &mut W,
        styles: &StyleSet,
        fragments: &[S],
    ) -> std::fmt::Result {
        if fragments.is_empty() {
            return Ok(());
        }

        if !self.config.is_enabled() {
            let text = join_fragments(fragments, "");
            return writer.write_str(&strip_ansi_codes(&text));
        }

        if styles.is_empty() {
            return writer.write_str(&join_fragments(fragments, ""));
        }

        let prefix = styles.escape_prefix();
        let text = join_fragments(fragments, &prefix);

        match split_trailing_newline(&text) {
            Some(body) => writeln!(writer, "{}{}{}", prefix, body, RESET),
            None => write!(writer, "{}{}{}", prefix, text, RESET),
        }
    }
}

/// Renders `fragments` with `styles` using the default configuration.
pub fn render<S: AsRef<str>>(styles: &StyleSet, fragments: &[S]) -> String {
    Renderer::default().render(styles, fragments)
}

/// Applies `styles` to `text`, resolving conflicts first.
///
/// With no styles the text is returned unchanged.
///
/// ```
/// use termchalk::{Style, styled};
///
/// assert_eq!(
///     styled("Hello World", &[Style::FgRed, Style::FgYellow, Style::Bold]),
///     "\x1b[1;33mHello World\x1b[0m"
/// );
/// assert_eq!(styled("done\n", &[Style::FgGreen]), "\x1b[32mdone\x1b[0m\n");
/// ```
pub fn styled(text: &str, styles: &[Style]) -> String {
    render(&resolve(styles), &[text])
}

/// Joins fragments with single spaces. Each non-final fragment that is already
/// styled is followed by `restyle` to restore the outer style.
fn join_fragments<S: AsRef<str>>(fragments: &[S], restyle: &str) -> String {
    let mut text = String::new();
    let last = fragments.len().saturating_sub(1);

    for (index, fragment) in fragments.iter().enumerate() {
        let fragment = fragment.as_ref();
        text.push_str(fragment);
        if index != last {
            if is_styled(fragment) {
                text.push_str(restyle);
            }
            text.push_str(FRAGMENT_SEPARATOR);
        }
    }

    text
}

fn split_trailing_newline(text: &str) -> Option<&str> {
    text.trim_matches(' ').strip_suffix('\n')
}
