// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod close_tests;
mod intent_file_tests;

use fixture_desk_api::{Store, StoreConfig};
use fixture_desk_domain::FixedClock;
use fixture_desk_persistence::Persistence;
use time::macros::datetime;

pub fn create_test_store(config: StoreConfig) -> Store {
    Store::open(
        Persistence::new_in_memory().unwrap(),
        config,
        Box::new(FixedClock(datetime!(2024-09-01 12:00 UTC))),
    )
    .unwrap()
}
