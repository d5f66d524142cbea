// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  `cargo fmt` spreads every `if`
/// over five lines, which buries the border rules of the energy
/// function (left edge, right edge, top edge, bottom edge) in
/// whitespace.  With this they read as a table.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $when_true: expr, $otherwise: expr) => {
        if $condition {
            $when_true
        } else {
            $otherwise
        }
    };
}
