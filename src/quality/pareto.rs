//! Pareto analysis of defect categories.

/// Percentage below which an item still belongs to the vital few.
const VITAL_FEW_THRESHOLD: f64 = 80.0;

/// One category in a Pareto chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoItem {
    /// Category label.
    pub category: String,
    /// Occurrences of the category.
    pub count: u64,
    /// Share of the total, in percent.
    pub percentage: f64,
    /// Running share up to and including this item, in percent.
    pub cumulative_percentage: f64,
}

/// Sorts categories by count, largest first, with their shares.
///
/// Ties keep their input order. The last item's cumulative percentage is
/// exactly 100.
///
/// # Returns
///
/// An empty list if the slices differ in length, are empty, or all counts
/// are zero.
///
/// # Examples
///
/// ```
/// use u_quality::quality::{pareto, vital_few};
///
/// let items = pareto(&["scratch", "dent", "stain", "crack"], &[10, 50, 25, 15]);
/// assert_eq!(items[0].category, "dent");
/// assert!((items[3].cumulative_percentage - 100.0).abs() < 1e-9);
/// assert_eq!(vital_few(&items).len(), 3);
/// ```
pub fn pareto<S: AsRef<str>>(categories: &[S], counts: &[u64]) -> Vec<ParetoItem> {
    if categories.len() != counts.len() || categories.is_empty() {
        return Vec::new();
    }
    let total = counts.iter().fold(0_u64, |acc, &c| acc.saturating_add(c));
    if total == 0 {
        return Vec::new();
    }

    let mut paired: Vec<(&S, u64)> = categories.iter().zip(counts.iter().copied()).collect();
    paired.sort_by(|a, b| b.1.cmp(&a.1));

    let total = total as f64;
    let mut running = 0_u64;
    paired
        .into_iter()
        .map(|(category, count)| {
            running = running.saturating_add(count);
            ParetoItem {
                category: category.as_ref().to_string(),
                count,
                percentage: count as f64 / total * 100.0,
                cumulative_percentage: running as f64 / total * 100.0,
            }
        })
        .collect()
}

/// Leading items up to and including the first whose cumulative
/// percentage reaches 80.
pub fn vital_few(items: &[ParetoItem]) -> &[ParetoItem] {
    let end = items
        .iter()
        .position(|item| item.cumulative_percentage >= VITAL_FEW_THRESHOLD)
        .map_or(items.len(), |i| i + 1);
    &items[..end]
}
