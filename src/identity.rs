//! Identifier derivation and generation.

/// Deterministic short identifier for `input`.
///
/// 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over the UTF-16 code
/// units of `input`, absolute value, lowercase base 36. Stable across process
/// restarts and platforms; not collision resistant.
pub fn derive_id(input: &str) -> String {
    let hash = input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    to_base36(u64::from(hash.unsigned_abs()))
}

/// Fresh identifier for a newly created letter or collection: nine random
/// base-36 characters followed by the creation time in base-36 milliseconds.
pub fn generate_id() -> String {
    let random = uuid::Uuid::new_v4().as_u128();
    let mut prefix = to_base36_u128(random);
    prefix.truncate(9);
    let now = chrono::Utc::now().timestamp_millis();
    format!("{prefix}{}", to_base36(now.unsigned_abs()))
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(n: u64) -> String {
    to_base36_u128(u128::from(n))
}

fn to_base36_u128(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.iter().rev().map(|&d| char::from(d)).collect()
}
