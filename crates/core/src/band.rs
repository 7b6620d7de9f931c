//! The two scoring conventions: the exact raw-to-band lookup table and the
//! approximate per-part heuristic. They intentionally diverge for the same
//! input and must never be merged.

/// Convert a raw correct count to a band score via the standard lookup table.
///
/// Input is clamped to `[0, 40]` before lookup, so there is no error path:
/// negative counts score like 0 and anything above 40 scores like 40. A
/// count of 0 maps to the 0.0 sentinel (below the minimum scored threshold).
#[must_use]
pub fn band_score(correct: i64) -> f64 {
    match correct.clamp(0, 40) {
        1 => 1.0,
        2..=3 => 2.0,
        4..=5 => 2.5,
        6..=7 => 3.0,
        8..=10 => 3.5,
        11..=12 => 4.0,
        13..=15 => 4.5,
        16..=19 => 5.0,
        20..=22 => 5.5,
        23..=26 => 6.0,
        27..=29 => 6.5,
        30..=32 => 7.0,
        33..=34 => 7.5,
        35..=36 => 8.0,
        37..=38 => 8.5,
        39..=40 => 9.0,
        _ => 0.0,
    }
}

/// Approximate band score for one Listening part.
///
/// Linear map of percentage correct onto the 5.0-9.0 display range:
/// `5 + 4 * percent`. This is a visual approximation for per-part trend
/// lines, not the real conversion table; `band_score` gives different
/// numbers for the same raw input.
///
/// Zero-total groups are filtered before scoring; should one slip through,
/// the 0 % end of the range (5.0) is returned rather than dividing by zero.
#[must_use]
pub fn part_score(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 5.0;
    }
    let percent = f64::from(correct) / f64::from(total);
    let scaled = percent * 10.0;
    5.0 + (4.0 * scaled / 10.0)
}

/// Percentage of questions answered correctly.
///
/// Returns 0.0 for a zero total. Does not cap at 100: a stored row that
/// violates correct ≤ total reports an accuracy above 100 % instead of
/// failing.
#[must_use]
pub fn accuracy(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(correct) / f64::from(total)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
