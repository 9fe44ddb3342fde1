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


/// Rendering settings shared by the free functions and [`StyleHandle`](crate::StyleHandle).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RenderConfig {
    /// Whether SGR sequences are emitted at all
    pub color_mode: ColorMode,
}

impl RenderConfig {
    /// Emit SGR sequences
    pub fn enabled() -> RenderConfig {
        RenderConfig {
            color_mode: ColorMode::Basic,
        }
    }
    /// Emit plain text, stripping escape sequences from nested fragments
    pub fn disabled() -> RenderConfig {
        RenderConfig {
            color_mode: ColorMode::None,
        }
    }

    /// Check if this configuration emits escape sequences
    pub fn is_enabled(&self) -> bool {
        self.color_mode.is_ansi()
    }
}

/// Whether rendered output carries ANSI styling.
///
/// Only the basic 16-color palette and the four text attributes exist in this
/// crate, so there is no level between "no escapes" and "basic escapes". The
/// choice is made by the caller; nothing here inspects the terminal.
///
/// # Examples
///
/// ```
/// use termchalk::{ColorMode, RenderConfig, Renderer, Style, StyleSet};
///
/// let styles = StyleSet::from(vec![Style::FgRed]);
///
/// let plain = Renderer::new(RenderConfig { color_mode: ColorMode::None });
/// assert_eq!(plain.render(&styles, &["error"]), "error");
///
/// let colored = Renderer::new(RenderConfig { color_mode: ColorMode::Basic });
/// assert_eq!(colored.render(&styles, &["error"]), "\x1b[31merror\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorMode {
    /// No ANSI codes are generated.
    None,
    /// 8 colors plus bright variants, and text attributes.
    #[default]
    Basic,
}

impl ColorMode {
    /// Check if ColorMode emits ANSI escape sequences
    pub fn is_ansi(&self) -> bool {
        !matches!(self, ColorMode::None)
    }
}
