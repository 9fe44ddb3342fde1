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


//! Error types for the termchalk crate.
//!
//! Styling itself never fails: empty input renders as an empty string and an
//! empty style list renders the text untouched. Errors only arise when a raw
//! numeric code or a style name has to be turned into a [`Style`](crate::Style),
//! or when rendered text is written to an output stream.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`ChalkError`].
pub type ChalkResult<T> = Result<T, ChalkError>;

/// Errors that can occur when building or emitting styles.
#[derive(Debug, Error)]
pub enum ChalkError {
    /// The numeric value is not an SGR parameter in the style catalog.
    #[error("Invalid style code {0}")]
    InvalidStyleCode(u8),

    /// The name does not match any style in the catalog.
    #[error("Unknown style name '{0}'")]
    UnknownStyleName(String),

    /// Writing rendered text to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChalkError {
    /// Check if the error was caused by the caller's input rather than the output stream.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ChalkError::InvalidStyleCode(_) | ChalkError::UnknownStyleName(_)
        )
    }
}
