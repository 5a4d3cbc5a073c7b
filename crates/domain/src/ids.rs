// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mints a record identifier of the form `{prefix}-{millis}-{random}`.
///
/// Both components are base 36. The millisecond timestamp keeps ids roughly
/// ordered by creation; the random suffix separates ids minted in the same
/// millisecond.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let millis: u128 = u128::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000)
        .unwrap_or_default();
    let suffix: u64 = rand::random::<u64>();
    format!("{prefix}-{}-{}", to_base36(millis), to_base36(u128::from(suffix)))
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return String::from("0");
    }
    let mut digits: Vec<u8> = Vec::new();
    while value > 0 {
        let index: usize = usize::try_from(value % 36).unwrap_or_default();
        digits.push(ALPHABET[index]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
