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


use crate::consts::ESCAPE;
use std::borrow::Cow;

/// Whether the text already carries an escape sequence, i.e. it was produced by
/// an earlier styling call.
pub fn is_styled(text: &str) -> bool {
    text.contains(ESCAPE)
}

/// Removes ANSI Control Sequence Introducer sequences from a string.
///
/// A sequence starts with `ESC [` and runs up to and including its final
/// letter (`m` for styling). An `ESC` that is not followed by `[` is dropped on
/// its own.
///
/// Text without any escape character is returned borrowed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use termchalk::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[1;31mRed Text\x1b[0m"), "Red Text");
/// assert!(matches!(strip_ansi_codes("Plain Text"), Cow::Borrowed(_)));
/// ```
pub fn strip_ansi_codes(text: &str) -> Cow<'_, str> {
    if !is_styled(text) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            result.push(ch);
            continue;
        }
        if chars.next_if_eq(&'[').is_some() {
            // Parameters and intermediates run until the final letter.
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }

    Cow::Owned(result)
}
