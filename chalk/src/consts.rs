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


/// The ASCII escape control character that opens every SGR sequence.
pub const ESCAPE: char = '\x1b';

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_FINAL: char = 'm';

/// Separator between SGR parameters inside one sequence.
pub const SGR_SEPARATOR: char = ';';

/// Sequence that resets every display attribute back to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Separator placed between text fragments when they are joined.
pub const FRAGMENT_SEPARATOR: &str = " ";
