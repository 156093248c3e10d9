use std::collections::BTreeMap;

use super::model::LaunchRecord;

/// Mean outcome class per booster version category.
///
/// Groups come from existing rows, so every mean is over at least one launch.
pub fn success_rates(records: &[LaunchRecord]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for rec in records {
        let entry = totals.entry(rec.booster_version_category.as_str()).or_default();
        entry.0 += u32::from(rec.class);
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(cat, (sum, n))| (cat.to_string(), f64::from(sum) / f64::from(n)))
        .collect()
}

/// Every finite f64 has at most this many digits after the decimal point.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Display label `"{category}-({pct}%)"`, `pct` rounded to one decimal.
pub fn success_label(category: &str, rate: f64) -> String {
    format!("{category}-({}%)", round_one_decimal(rate * 100.0))
}

/// Round a non-negative value to one decimal, ties to even, deciding on the
/// exact binary value (6.25 → "6.2", 6.35 → "6.3" since 6.35 is stored as 6.3499…).
fn round_one_decimal(x: f64) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, x);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), "0"));
    let int_part: u64 = int_part.parse().unwrap_or(0);
    let digits = frac.as_bytes();
    let first = u64::from(digits[0] - b'0');

    let mut tenths = int_part * 10 + first;
    let round_up = match digits.get(1).copied().unwrap_or(b'0') {
        b'6'..=b'9' => true,
        b'5' => digits[2..].iter().any(|&d| d != b'0') || tenths % 2 == 1,
        _ => false,
    };
    if round_up {
        tenths += 1;
    }
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Rewrite each row's booster category to its success-rate label.
///
/// Takes the working copy by value; the base dataset is never touched.
/// Running this twice regroups by the labels from the first pass.
pub fn add_success_rate(mut records: Vec<LaunchRecord>) -> Vec<LaunchRecord> {
    let labels: BTreeMap<String, String> = success_rates(&records)
        .into_iter()
        .map(|(cat, rate)| {
            let label = success_label(&cat, rate);
            (cat, label)
        })
        .collect();

    for rec in &mut records {
        if let Some(label) = labels.get(&rec.booster_version_category) {
            rec.booster_version_category = label.clone();
        }
    }
    records
}
