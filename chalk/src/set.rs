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


//! Style sets and conflict resolution.
//!
//! A [`StyleSet`] starts life as a request log: styles in the order they were
//! asked for, possibly with duplicates and with several colors of the same
//! family. Resolving it applies three rules:
//!
//! - the last requested foreground color (normal or bright) wins,
//! - the last requested background color (normal or bright) wins,
//! - text attributes accumulate, and holding one twice is the same as once.
//!
//! The resolved set is sorted by SGR code so that the same request always
//! produces byte-identical escape sequences.

use crate::consts::{CSI, SGR_FINAL, SGR_SEPARATOR};
use crate::{ChalkResult, Style};
use bytes::BufMut;
use tracing::trace;

/// An ordered collection of [`Style`] values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    styles: Vec<Style>,
}

impl StyleSet {
    /// Creates an empty set.
    pub fn new() -> StyleSet {
        StyleSet { styles: Vec::new() }
    }

    /// Styles in their current order.
    pub fn as_slice(&self) -> &[Style] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    pub fn contains(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// The SGR parameters of the styles, in order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.styles.iter().map(Style::to_u8)
    }

    /// The last foreground-family style in the set, if any.
    pub fn last_foreground(&self) -> Option<Style> {
        last_matching(&self.styles, Style::is_foreground)
    }

    /// The last background-family style in the set, if any.
    pub fn last_background(&self) -> Option<Style> {
        last_matching(&self.styles, Style::is_background)
    }

    /// Appends `additions` and resolves color conflicts in place.
    ///
    /// The winning foreground takes the position of the first foreground in the
    /// combined list and every other foreground is dropped; backgrounds are
    /// treated the same way. Attributes are kept in order, duplicates included.
    /// The result is not sorted.
    ///
    /// ```
    /// use termchalk::{Style, StyleSet};
    ///
    /// let base = StyleSet::from(vec![Style::FgRed, Style::Bold, Style::BgWhite]);
    /// let merged = base.merge(&[Style::FgCyan, Style::BgGreen]);
    /// assert_eq!(merged.as_slice(), &[Style::FgCyan, Style::Bold, Style::BgGreen]);
    /// ```
    pub fn merge(&self, additions: &[Style]) -> StyleSet {
        let mut combined = Vec::with_capacity(self.styles.len() + additions.len());
        combined.extend_from_slice(&self.styles);
        combined.extend_from_slice(additions);
        StyleSet {
            styles: collapse_colors(&combined),
        }
    }

    /// Produces the canonical form of the set.
    ///
    /// Color conflicts are resolved as in [`StyleSet::merge`], then the styles
    /// are sorted by SGR code and duplicate attributes are collapsed. No color is
    /// ever added that was not requested.
    pub fn resolve(&self) -> StyleSet {
        let mut styles = collapse_colors(&self.styles);
        styles.sort_unstable();
        styles.dedup();
        StyleSet { styles }
    }

    /// Whether resolving this set would leave it unchanged.
    pub fn is_canonical(&self) -> bool {
        self.styles.windows(2).all(|pair| pair[0] < pair[1])
            && self.styles.iter().filter(|s| s.is_foreground()).count() <= 1
            && self.styles.iter().filter(|s| s.is_background()).count() <= 1
    }

    /// Removes every entry that exactly matches one of `removals`.
    ///
    /// The set is filtered as stored; it is not resolved first.
    pub fn without(&self, removals: &[Style]) -> StyleSet {
        StyleSet {
            styles: self
                .styles
                .iter()
                .copied()
                .filter(|style| !removals.contains(style))
                .collect(),
        }
    }

    /// The escape sequence that applies this set, e.g. `"\x1b[1;31m"`.
    ///
    /// An empty set has no escape sequence and yields an empty string.
    pub fn escape_prefix(&self) -> String {
        let mut prefix = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_str(&mut prefix);
        prefix
    }

    /// Writes the escape sequence for this set to a formatter or string.
    ///
    /// Nothing is written for an empty set.
    pub fn write_str<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        let mut codes = self.codes();
        let Some(first) = codes.next() else {
            return Ok(());
        };
        write!(writer, "{}{}", CSI, first)?;
        for code in codes {
            write!(writer, "{}{}", SGR_SEPARATOR, code)?;
        }
        writer.write_char(SGR_FINAL)
    }

    /// Writes the escape sequence for this set to a byte stream, returning the
    /// number of bytes written.
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        let prefix = self.escape_prefix();
        writer.write_all(prefix.as_bytes())?;
        Ok(prefix.len())
    }

    /// Encodes the escape sequence for this set into a byte buffer.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> ChalkResult<usize> {
        Ok(self.write(&mut dst.writer())?)
    }
}

impl From<Vec<Style>> for StyleSet {
    fn from(styles: Vec<Style>) -> StyleSet {
        StyleSet { styles }
    }
}

impl From<&[Style]> for StyleSet {
    fn from(styles: &[Style]) -> StyleSet {
        StyleSet {
            styles: styles.to_vec(),
        }
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> StyleSet {
        StyleSet {
            styles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

impl std::fmt::Display for StyleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f)
    }
}

/// Resolves a request log into its canonical [`StyleSet`].
///
/// ```
/// use termchalk::{Style, resolve};
///
/// let resolved = resolve(&[Style::FgRed, Style::Bold, Style::FgYellow]);
/// assert_eq!(resolved.as_slice(), &[Style::Bold, Style::FgYellow]);
/// ```
pub fn resolve(requests: &[Style]) -> StyleSet {
    StyleSet::from(requests).resolve()
}

fn last_matching(styles: &[Style], predicate: fn(&Style) -> bool) -> Option<Style> {
    styles.iter().rev().copied().find(|style| predicate(style))
}

/// Keeps a single foreground and a single background, each at the position of
/// the first request of its family and holding the value of the last one.
fn collapse_colors(requests: &[Style]) -> Vec<Style> {
    let foreground = last_matching(requests, Style::is_foreground);
    let background = last_matching(requests, Style::is_background);

    let mut collapsed = Vec::with_capacity(requests.len());
    let mut placed_foreground = false;
    let mut placed_background = false;

    for style in requests {
        if style.is_foreground() {
            if !placed_foreground {
                collapsed.extend(foreground);
                placed_foreground = true;
            }
        } else if style.is_background() {
            if !placed_background {
                collapsed.extend(background);
                placed_background = true;
            }
        } else {
            collapsed.push(*style);
        }
    }

    let superseded = requests.len() - collapsed.len();
    if superseded > 0 {
        trace!(
            superseded,
            ?foreground,
            ?background,
            "dropped superseded colors"
        );
    }

    collapsed
}
