// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_desk_api::{StoreConfig, StoreError};
use fixture_desk_persistence::Persistence;

use crate::finish;
use crate::tests::create_test_store;

fn closed_store() -> Result<Persistence, StoreError> {
    create_test_store(StoreConfig::default()).close()
}

#[test]
fn test_finish_succeeds_when_command_and_close_succeed() {
    assert!(finish(Ok(()), closed_store()).is_ok());
}

#[test]
fn test_finish_reports_close_failure_after_successful_command() {
    let err = finish(Ok(()), Err(StoreError::WriterPanicked)).unwrap_err();

    assert_eq!(err.to_string(), StoreError::WriterPanicked.to_string());
}

#[test]
fn test_finish_keeps_command_error_when_close_also_fails() {
    let err = finish(
        Err("Fixture 'fix-missing' not found".into()),
        Err(StoreError::WriterPanicked),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Fixture 'fix-missing' not found");
}

#[test]
fn test_finish_keeps_command_error_when_close_succeeds() {
    let err = finish(Err("Fixture 'fix-missing' not found".into()), closed_store()).unwrap_err();

    assert_eq!(err.to_string(), "Fixture 'fix-missing' not found");
}
