// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_desk_persistence::DEFAULT_STORAGE_KEY;

/// Store policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the snapshot document is stored under.
    pub storage_key: String,
    /// Reject commands whose references do not resolve.
    pub strict_references: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            strict_references: false,
        }
    }
}

impl StoreConfig {
    /// Returns a config that rejects dangling references.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_references: true,
            ..Self::default()
        }
    }
}
