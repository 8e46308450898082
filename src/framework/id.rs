//! Identifier generation for resource actors.
//!
//! [`generate_id`] is the production generator: a millisecond timestamp followed by a
//! random `u64`, both in base 36. Nothing is remembered between calls, so uniqueness is
//! statistical rather than guaranteed. [`sequential`] hands out predictable
//! `<prefix>_<n>` ids for tests and demos.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes `value` in lowercase base 36.
pub fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Every byte comes from BASE36_DIGITS, which is ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Generates a new identifier: `<millis since epoch><random u64>`, both base 36.
///
/// A clock set before the epoch contributes `"0"` as its time part.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let entropy: u64 = rand::rng().random();
    format!("{}{}", to_base36(millis), to_base36(u128::from(entropy)))
}

/// Returns a generator yielding `<prefix>_1`, `<prefix>_2`, ...
///
/// The output is anything constructible from a `String`, so it plugs straight into
/// [`ResourceActor::new`](crate::framework::ResourceActor::new) for typed ids.
pub fn sequential<I: From<String>>(
    prefix: impl Into<String>,
) -> impl Fn() -> I + Send + Sync + 'static {
    let prefix = prefix.into();
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        I::from(format!("{}_{}", prefix, n))
    }
}
