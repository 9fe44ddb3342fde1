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


//! Reusable style presets.
//!
//! A [`StyleHandle`] accumulates styles and renders text with them. Handles are
//! values: `add`, `remove` and `clear` each return a new handle and leave the
//! receiver untouched, so a preset such as an "error" style can be derived from
//! and shared freely.
//!
//! ```
//! use termchalk::{Style, StyleHandle};
//!
//! let error = StyleHandle::new(&[Style::FgRed]);
//! let loud_error = error.add(&[Style::Bold]);
//! let warning = loud_error.add(&[Style::FgYellow]);
//!
//! assert_eq!(error.to_text(&["failed"]), "\x1b[31mfailed\x1b[0m");
//! assert_eq!(warning.to_text(&["careful"]), "\x1b[1;33mcareful\x1b[0m");
//! ```

use crate::{ChalkResult, RenderConfig, Renderer, Style, StyleSet};
use std::sync::Arc;
use tracing::debug;

/// An immutable, accumulated list of styles plus the renderer used to apply it.
///
/// The list is the raw accumulation of every `add`, with color conflicts already
/// settled at the time each `add` was made: adding a foreground replaces the
/// one held before instead of appending next to it. Attributes are appended as
/// given. The list is sorted and de-duplicated only when text is rendered.
///
/// Cloning is cheap; clones share storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleHandle {
    styles: Arc<[Style]>,
    renderer: Renderer,
}

impl StyleHandle {
    /// Creates a handle from an initial list of styles.
    ///
    /// Color conflicts inside `styles` are resolved the same way as for
    /// [`StyleHandle::add`].
    pub fn new(styles: &[Style]) -> StyleHandle {
        StyleHandle::empty().add(styles)
    }

    /// Creates a handle without styles. It renders text unchanged.
    pub fn empty() -> StyleHandle {
        StyleHandle::default()
    }

    /// Returns a handle with the same styles rendered through `config`.
    pub fn with_config(&self, config: RenderConfig) -> StyleHandle {
        StyleHandle {
            styles: Arc::clone(&self.styles),
            renderer: Renderer::new(config),
        }
    }

    /// The accumulated styles, in the order they were kept.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    /// The canonical style set this handle renders with.
    pub fn resolved(&self) -> StyleSet {
        StyleSet::from(self.styles()).resolve()
    }

    /// Whether both handles share the same style storage.
    pub fn ptr_eq(&self, other: &StyleHandle) -> bool {
        Arc::ptr_eq(&self.styles, &other.styles)
    }

    /// Returns a handle holding the current styles followed by `styles`.
    ///
    /// If `styles` carries a foreground color, the last one replaces any
    /// foreground already held; the same goes for backgrounds. With no styles
    /// the returned handle shares the receiver's storage.
    pub fn add(&self, styles: &[Style]) -> StyleHandle {
        if styles.is_empty() {
            return self.clone();
        }

        let merged = StyleSet::from(self.styles()).merge(styles);
        debug!(added = styles.len(), held = merged.len(), "added styles");
        self.derive(merged)
    }

    /// Returns a handle without any entry exactly matching one of `styles`.
    ///
    /// Styles that are not held are ignored. With no styles the returned handle
    /// shares the receiver's storage.
    pub fn remove(&self, styles: &[Style]) -> StyleHandle {
        if styles.is_empty() {
            return self.clone();
        }

        let filtered = StyleSet::from(self.styles()).without(styles);
        debug!(
            removed = self.styles.len() - filtered.len(),
            held = filtered.len(),
            "removed styles"
        );
        self.derive(filtered)
    }

    /// Returns a new handle without styles. The render configuration is kept.
    pub fn clear(&self) -> StyleHandle {
        debug!(held = self.styles.len(), "cleared styles");
        self.derive(StyleSet::new())
    }

    /// Renders `fragments` with this handle's styles.
    ///
    /// Fragments are joined by single spaces. No fragments yield an empty string
    /// and an empty handle yields the joined text unstyled.
    pub fn to_text<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        self.renderer.render(&self.resolved(), fragments)
    }

    /// Writes the rendered fragments and a newline to `writer`.
    pub fn write_line<W: std::io::Write, S: AsRef<str>>(
        &self,
        writer: &mut W,
        fragments: &[S],
    ) -> ChalkResult<()> {
        writeln!(writer, "{}", self.to_text(fragments))?;
        Ok(())
    }

    /// Writes the rendered fragments and a newline to standard output.
    pub fn print<S: AsRef<str>>(&self, fragments: &[S]) -> ChalkResult<()> {
        self.write_line(&mut std::io::stdout().lock(), fragments)
    }

    fn derive(&self, styles: StyleSet) -> StyleHandle {
        StyleHandle {
            styles: Arc::from(styles.as_slice()),
            renderer: self.renderer,
        }
    }
}

impl From<StyleSet> for StyleHandle {
    fn from(styles: StyleSet) -> StyleHandle {
        StyleHandle::new(styles.as_slice())
    }
}
