//! Small aggregation helpers shared by the report sections.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Most frequent value. Ties go to the lowest value in sort order, so the
/// result is stable for a fixed input regardless of row order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

pub fn count_distinct<T, I>(values: I) -> usize
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<HashSet<_>>().len()
}

/// Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Formats with `,` between thousands groups of the integer part; the
/// fractional part keeps the shortest exact representation (`600`, `1,234.5`).
pub fn format_thousands(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() {
        return text;
    }

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
