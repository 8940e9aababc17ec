//! Severity label vocabulary keyed by k.

const LABELS_2: [&str; 2] = ["Tinggi", "Rendah"];
const LABELS_3: [&str; 3] = ["Tinggi", "Sedang", "Rendah"];
const LABELS_4: [&str; 4] = ["Sangat Tinggi", "Tinggi", "Sedang", "Rendah"];
const LABELS_5: [&str; 5] = ["Sangat Tinggi", "Tinggi", "Sedang", "Rendah", "Sangat Rendah"];

/// Ordered labels for ranks `1..=k`.
///
/// k values without a table entry fall back to `"Cluster {rank}"`.
pub fn labels_for_k(k: usize) -> Vec<String> {
    let table: &[&str] = match k {
        2 => &LABELS_2,
        3 => &LABELS_3,
        4 => &LABELS_4,
        5 => &LABELS_5,
        _ => return (1..=k).map(|rank| format!("Cluster {}", rank)).collect(),
    };
    table.iter().map(|s| s.to_string()).collect()
}

/// Label of one 1-based `rank` for a run with `k` clusters.
pub fn label_for_rank(k: usize, rank: usize) -> String {
    labels_for_k(k)
        .into_iter()
        .nth(rank.saturating_sub(1))
        .unwrap_or_else(|| format!("Cluster {}", rank))
}
