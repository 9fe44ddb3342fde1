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


//! Style Palette Demonstration
//!
//! Prints every style in the catalog, a few derived presets, and a sentence
//! with a nested highlight.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example palette
//! ```

use termchalk::{PAINTERS, Style, StyleHandle, green, paint, red};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    for (name, style) in PAINTERS {
        println!("{:>20} {}", name, paint(*style, &[style.name()]));
    }

    println!();

    let error = StyleHandle::new(&[Style::FgRed]);
    let error_bold = error.add(&[Style::Bold]);
    let warning = error_bold.add(&[Style::FgYellow]).remove(&[Style::Bold]);

    error.print(&["error:", "plain red"])?;
    error_bold.print(&["error:", "bold red"])?;
    warning.print(&["warning:", "yellow after removing bold"])?;
    error_bold.clear().print(&["cleared:", "no style left"])?;

    println!();

    let word = green(&["green"]);
    println!("{}", red(&["a red sentence with a", word.as_str(), "word inside"]));

    Ok(())
}
