// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod document_tests;

use fixture_desk::{Command, Snapshot, apply, default_snapshot};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// The default snapshot with its first fixture deleted.
pub fn create_modified_snapshot() -> Snapshot {
    let snapshot: Snapshot = default_snapshot();
    let fixture_id: String = snapshot.fixtures[0].id.clone();
    apply(&snapshot, Command::DeleteFixture { fixture_id })
}
