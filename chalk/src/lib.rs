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


//! Terminal text styling with ANSI Select Graphic Rendition sequences.
//!
//! Styles are requested as an ordered list of [`Style`] values. Before text is
//! rendered the list is resolved: the last foreground color wins, the last
//! background color wins, and text attributes accumulate. The resolved codes are
//! sorted, joined into a single escape sequence, and the text is closed with a
//! reset so that the style does not leak into later output.
//!
//! ```
//! use termchalk::{Style, StyleHandle, red, styled};
//!
//! assert_eq!(red(&["oops"]), "\x1b[31moops\x1b[0m");
//! assert_eq!(
//!     styled("Test String", &[Style::Bold, Style::FgRed, Style::BgWhite]),
//!     "\x1b[1;31;47mTest String\x1b[0m"
//! );
//!
//! let error = StyleHandle::new(&[Style::FgRed, Style::Bold]);
//! assert_eq!(error.to_text(&["failed"]), "\x1b[1;31mfailed\x1b[0m");
//! ```

mod config;
mod consts;
mod handle;
pub mod paint;
mod render;
mod result;
mod set;
mod strip;
mod style;

pub use self::config::{ColorMode, RenderConfig};
pub use self::consts::{ESCAPE, RESET};
pub use self::handle::StyleHandle;
pub use self::paint::*;
pub use self::render::{Renderer, render, styled};
pub use self::result::{ChalkError, ChalkResult};
pub use self::set::{StyleSet, resolve};
pub use self::strip::{is_styled, strip_ansi_codes};
pub use self::style::{Style, StyleClass};
