//! Key format functions.
//!
//! Period-scoped keys start with `academic_year \0 semester \0`. Periods
//! never contain NUL, so the prefix is unambiguous and all rows of one
//! period are contiguous. Numeric ids are big-endian so byte order equals
//! numeric order.
//!
//! Parsing functions return `None` on malformed keys; callers turn that
//! into `StorageError::KeyCorrupted`.

use rapor_core::types::{Period, StudentId, SubjectId};

/// Prefix shared by every key of `period`.
pub fn period_prefix(period: &Period) -> Vec<u8> {
    let mut key = Vec::with_capacity(period.academic_year.len() + period.semester.len() + 2);
    key.extend_from_slice(period.academic_year.as_bytes());
    key.push(0);
    key.extend_from_slice(period.semester.as_bytes());
    key.push(0);
    key
}

/// Exclusive upper bound of the keys of `period`.
///
/// Same as the prefix with its trailing `\0` raised to `\x01`, so
/// `[period_prefix, period_prefix_end)` covers exactly one period.
pub fn period_prefix_end(period: &Period) -> Vec<u8> {
    let mut end = period_prefix(period);
    if let Some(last) = end.last_mut() {
        *last = 1;
    }
    end
}

/// Key for cluster_results CF: period prefix + student (8 bytes BE).
pub fn cluster_result_key(period: &Period, student: StudentId) -> Vec<u8> {
    let mut key = period_prefix(period);
    key.extend_from_slice(&student.0.to_be_bytes());
    key
}

/// Key for grades CF: period prefix + student (8 bytes BE) + subject (8 bytes BE).
pub fn grade_key(period: &Period, student: StudentId, subject: SubjectId) -> Vec<u8> {
    let mut key = cluster_result_key(period, student);
    key.extend_from_slice(&subject.0.to_be_bytes());
    key
}

/// Key for subjects CF: position (8 bytes BE).
#[inline]
pub fn subject_key(position: u64) -> [u8; 8] {
    position.to_be_bytes()
}

/// Parse a subjects key back to its position.
pub fn parse_subject_key(key: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = key.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}

/// Split a period-scoped key into its period and the remaining bytes.
pub fn parse_period_prefix(key: &[u8]) -> Option<(Period, &[u8])> {
    let year_end = key.iter().position(|b| *b == 0)?;
    let rest = &key[year_end + 1..];
    let semester_end = rest.iter().position(|b| *b == 0)?;

    let academic_year = std::str::from_utf8(&key[..year_end]).ok()?;
    let semester = std::str::from_utf8(&rest[..semester_end]).ok()?;
    let period = Period::new(semester, academic_year).ok()?;

    Some((period, &rest[semester_end + 1..]))
}

/// Parse a cluster_results key to (period, student).
pub fn parse_cluster_result_key(key: &[u8]) -> Option<(Period, StudentId)> {
    let (period, rest) = parse_period_prefix(key)?;
    let bytes: [u8; 8] = rest.try_into().ok()?;
    Some((period, StudentId(u64::from_be_bytes(bytes))))
}
