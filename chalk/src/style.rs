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


//! The style catalog.
//!
//! Every style this crate knows about is a single ANSI Select Graphic Rendition
//! (SGR) parameter. The catalog is closed: colors come in eight hues, each
//! available as foreground or background and as a normal or bright variant,
//! plus four text attributes.
//!
//! | Class               | Codes     |
//! |---------------------|-----------|
//! | Text attribute      | `1`-`4`   |
//! | Foreground          | `30`-`37` |
//! | Background          | `40`-`47` |
//! | Bright foreground   | `90`-`97` |
//! | Bright background   | `100`-`107` |

use crate::{ChalkError, ChalkResult};
use std::ops::RangeInclusive;
use std::str::FromStr;

macro_rules! define_styles {
    ($($(#[$attr:meta])* $variant:ident = $code:literal,)*) => {
        /// A single SGR style from the catalog.
        ///
        /// The discriminant of each variant is its SGR parameter, so `style as u8`
        /// and [`Style::to_u8`] always agree. Ordering follows the numeric code,
        /// which is the order styles appear in once a [`StyleSet`](crate::StyleSet)
        /// has been resolved.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum Style {
            $($(#[$attr])* $variant = $code,)*
        }

        impl Style {
            /// Every style in the catalog, in ascending code order.
            pub const ALL: &'static [Style] = &[$(Style::$variant,)*];

            /// Canonical name of the style, e.g. `"FgRed"` or `"Bold"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Style::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

define_styles! {
    /// Bold or increased intensity (`1`).
    Bold = 1,
    /// Dim or decreased intensity (`2`).
    Dim = 2,
    /// Italic (`3`).
    Italic = 3,
    /// Single underline (`4`).
    Underline = 4,

    /// Black text (`30`).
    FgBlack = 30,
    /// Red text (`31`).
    FgRed = 31,
    /// Green text (`32`).
    FgGreen = 32,
    /// Yellow text (`33`).
    FgYellow = 33,
    /// Blue text (`34`).
    FgBlue = 34,
    /// Magenta text (`35`).
    FgMagenta = 35,
    /// Cyan text (`36`).
    FgCyan = 36,
    /// White text (`37`).
    FgWhite = 37,

    /// Black background (`40`).
    BgBlack = 40,
    /// Red background (`41`).
    BgRed = 41,
    /// Green background (`42`).
    BgGreen = 42,
    /// Yellow background (`43`).
    BgYellow = 43,
    /// Blue background (`44`).
    BgBlue = 44,
    /// Magenta background (`45`).
    BgMagenta = 45,
    /// Cyan background (`46`).
    BgCyan = 46,
    /// White background (`47`).
    BgWhite = 47,

    /// Bright black text (`90`).
    FgBrightBlack = 90,
    /// Bright red text (`91`).
    FgBrightRed = 91,
    /// Bright green text (`92`).
    FgBrightGreen = 92,
    /// Bright yellow text (`93`).
    FgBrightYellow = 93,
    /// Bright blue text (`94`).
    FgBrightBlue = 94,
    /// Bright magenta text (`95`).
    FgBrightMagenta = 95,
    /// Bright cyan text (`96`).
    FgBrightCyan = 96,
    /// Bright white text (`97`).
    FgBrightWhite = 97,

    /// Bright black background (`100`).
    BgBrightBlack = 100,
    /// Bright red background (`101`).
    BgBrightRed = 101,
    /// Bright green background (`102`).
    BgBrightGreen = 102,
    /// Bright yellow background (`103`).
    BgBrightYellow = 103,
    /// Bright blue background (`104`).
    BgBrightBlue = 104,
    /// Bright magenta background (`105`).
    BgBrightMagenta = 105,
    /// Bright cyan background (`106`).
    BgBrightCyan = 106,
    /// Bright white background (`107`).
    BgBrightWhite = 107,
}

impl Style {
    /// Converts the style to its ANSI SGR parameter.
    ///
    /// ```
    /// use termchalk::Style;
    ///
    /// assert_eq!(Style::Bold.to_u8(), 1);
    /// assert_eq!(Style::FgRed.to_u8(), 31);
    /// assert_eq!(Style::BgBrightWhite.to_u8(), 107);
    /// ```
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    /// Converts an ANSI SGR parameter to its catalog style.
    ///
    /// Returns `None` for any value outside the catalog, including SGR codes
    /// that exist but are not supported here (`0`, `5`, `38`, `39`, ...).
    pub fn from_u8(value: u8) -> Option<Style> {
        StyleClass::from_code(value)?;
        Style::ALL.iter().copied().find(|style| style.to_u8() == value)
    }

    /// The class this style belongs to.
    pub fn class(&self) -> StyleClass {
        match self.to_u8() {
            30..=37 => StyleClass::Foreground,
            40..=47 => StyleClass::Background,
            90..=97 => StyleClass::BrightForeground,
            100..=107 => StyleClass::BrightBackground,
            _ => StyleClass::Attribute,
        }
    }

    /// Whether this style sets the text color (normal or bright).
    pub fn is_foreground(&self) -> bool {
        self.class().is_foreground()
    }

    /// Whether this style sets the fill color (normal or bright).
    pub fn is_background(&self) -> bool {
        self.class().is_background()
    }

    /// Whether this style is a text attribute.
    pub fn is_attribute(&self) -> bool {
        self.class() == StyleClass::Attribute
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> u8 {
        style.to_u8()
    }
}

impl TryFrom<u8> for Style {
    type Error = ChalkError;

    fn try_from(value: u8) -> ChalkResult<Style> {
        Style::from_u8(value).ok_or(ChalkError::InvalidStyleCode(value))
    }
}

impl FromStr for Style {
    type Err = ChalkError;

    fn from_str(name: &str) -> ChalkResult<Style> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == name)
            .ok_or_else(|| ChalkError::UnknownStyleName(name.to_string()))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The disjoint classes a [`Style`] can belong to.
///
/// Foreground and bright foreground together form the foreground family; at
/// most one member of the family is active at a time. The same holds for the
/// background family. Attributes accumulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// `30`-`37`
    Foreground,
    /// `90`-`97`
    BrightForeground,
    /// `40`-`47`
    Background,
    /// `100`-`107`
    BrightBackground,
    /// `1`-`4`
    Attribute,
}

impl StyleClass {
    const ATTRIBUTE: RangeInclusive<u8> = 1..=4;
    const FOREGROUND: RangeInclusive<u8> = 30..=37;
    const BACKGROUND: RangeInclusive<u8> = 40..=47;
    const BRIGHT_FOREGROUND: RangeInclusive<u8> = 90..=97;
    const BRIGHT_BACKGROUND: RangeInclusive<u8> = 100..=107;

    /// Classifies a raw SGR parameter by numeric range.
    ///
    /// Every range is closed on both ends; values outside all of them have no
    /// class.
    pub fn from_code(code: u8) -> Option<StyleClass> {
        if Self::ATTRIBUTE.contains(&code) {
            Some(StyleClass::Attribute)
        } else if Self::FOREGROUND.contains(&code) {
            Some(StyleClass::Foreground)
        } else if Self::BACKGROUND.contains(&code) {
            Some(StyleClass::Background)
        } else if Self::BRIGHT_FOREGROUND.contains(&code) {
            Some(StyleClass::BrightForeground)
        } else if Self::BRIGHT_BACKGROUND.contains(&code) {
            Some(StyleClass::BrightBackground)
        } else {
            None
        }
    }

    /// Member of the foreground family.
    pub fn is_foreground(&self) -> bool {
        matches!(self, StyleClass::Foreground | StyleClass::BrightForeground)
    }

    /// Member of the background family.
    pub fn is_background(&self) -> bool {
        matches!(self, StyleClass::Background | StyleClass::BrightBackground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(Style::ALL.len(), 36);
    }

    #[test]
    fn test_catalog_is_sorted_by_code() {
        assert!(Style::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_to_u8_matches_discriminant() {
        for style in Style::ALL {
            assert_eq!(style.to_u8(), *style as u8);
            assert_eq!(u8::from(*style), style.to_u8());
        }
    }

    #[test]
    fn test_from_u8_known_codes() {
        assert_eq!(Style::from_u8(1), Some(Style::Bold));
        assert_eq!(Style::from_u8(4), Some(Style::Underline));
        assert_eq!(Style::from_u8(35), Some(Style::FgMagenta));
        assert_eq!(Style::from_u8(46), Some(Style::BgCyan));
        assert_eq!(Style::from_u8(95), Some(Style::FgBrightMagenta));
        assert_eq!(Style::from_u8(100), Some(Style::BgBrightBlack));
    }

    #[test]
    fn test_from_u8_unknown_codes() {
        for code in [0, 5, 22, 29, 38, 39, 48, 49, 89, 98, 99, 108, 255] {
            assert_eq!(Style::from_u8(code), None, "code {}", code);
        }
    }

    #[test]
    fn test_try_from_invalid_code() {
        let err = Style::try_from(38).unwrap_err();
        assert!(matches!(err, ChalkError::InvalidStyleCode(38)));
        assert_eq!(Style::try_from(31).unwrap(), Style::FgRed);
    }

    #[test]
    fn test_class_of_each_family() {
        assert_eq!(Style::Dim.class(), StyleClass::Attribute);
        assert_eq!(Style::FgWhite.class(), StyleClass::Foreground);
        assert_eq!(Style::BgBlack.class(), StyleClass::Background);
        assert_eq!(Style::FgBrightBlue.class(), StyleClass::BrightForeground);
        assert_eq!(Style::BgBrightYellow.class(), StyleClass::BrightBackground);
    }

    #[test]
    fn test_class_agrees_with_code_classification() {
        for style in Style::ALL {
            assert_eq!(StyleClass::from_code(style.to_u8()), Some(style.class()));
        }
    }

    #[test]
    fn test_every_style_has_exactly_one_family() {
        for style in Style::ALL {
            let families = [
                style.is_foreground(),
                style.is_background(),
                style.is_attribute(),
            ];
            assert_eq!(families.iter().filter(|f| **f).count(), 1, "{}", style);
        }
    }

    // A bright range written as `code >= 90 || code < 98` matches everything.
    // These guard the closed-range classification.
    #[test]
    fn test_bright_ranges_are_bounded() {
        assert_eq!(StyleClass::from_code(89), None);
        assert_eq!(StyleClass::from_code(98), None);
        assert_eq!(StyleClass::from_code(99), None);
        assert_eq!(StyleClass::from_code(108), None);
        assert_eq!(StyleClass::from_code(200), None);
        assert!(!Style::Bold.is_foreground());
        assert!(!Style::BgRed.is_foreground());
        assert!(!Style::FgRed.is_background());
        assert!(!Style::Underline.is_background());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>().unwrap(), *style);
        }
    }

    #[test]
    fn test_from_str_unknown_name() {
        let err = "FgPink".parse::<Style>().unwrap_err();
        assert!(matches!(err, ChalkError::UnknownStyleName(ref name) if name == "FgPink"));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Style::BgBrightCyan.to_string(), "BgBrightCyan");
        assert_eq!(format!("{}", Style::Italic), "Italic");
    }
}
