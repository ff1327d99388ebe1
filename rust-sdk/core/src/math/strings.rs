/// Compare two byte strings the way C `strcmp` does.
///
/// Either the end of a slice or a NUL byte terminates a string. The result is
/// the difference between the first pair of bytes that differ (read as
/// unsigned), so only its sign is meaningful for ordering.
///
/// # Parameters
/// - `lhs` - The first string
/// - `rhs` - The second string
///
/// # Returns
/// - `0` if both strings are equal up to their terminators
/// - a negative value if `lhs` orders before `rhs`
/// - a positive value if `lhs` orders after `rhs`
pub fn compare_bytes(lhs: &[u8], rhs: &[u8]) -> i32 {
    let mut index = 0;
    loop {
        let left = lhs.get(index).copied().unwrap_or(0);
        let right = rhs.get(index).copied().unwrap_or(0);
        if left != right || left == 0 {
            return i32::from(left) - i32::from(right);
        }
        index += 1;
    }
}

/// Compare two strings byte by byte, see [`compare_bytes`].
pub fn compare_strings(lhs: &str, rhs: &str) -> i32 {
    compare_bytes(lhs.as_bytes(), rhs.as_bytes())
}

pub fn strings_equal(lhs: &str, rhs: &str) -> bool {
    compare_strings(lhs, rhs) == 0
}
