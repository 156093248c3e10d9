use serde::Serialize;

use crate::data::filter::{filter_by_site, SiteSelection};
use crate::data::model::LaunchDataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    /// Share of the whole pie, 0 when the pie is empty.
    pub fn fraction(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Resolve the pie chart for the current site selection.
///
/// * `All`: one slice per site, valued by the sum of the 0/1 class column,
///   i.e. the number of successful launches from that site.
/// * `Site(s)`: one slice per outcome class at `s`, valued by the number of
///   launches with that outcome, largest first.
pub fn resolve_pie(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|s| PieSlice {
                    label: s.clone(),
                    value: dataset
                        .records
                        .iter()
                        .filter(|r| r.launch_site == *s)
                        .map(|r| f64::from(r.class))
                        .sum(),
                })
                .collect();
            PieChart {
                title: "Each Launch Site Chart".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let filtered = filter_by_site(&dataset.records, site);

            let mut counts: Vec<(u8, usize)> = Vec::new();
            for rec in &filtered {
                match counts.iter_mut().find(|(class, _)| *class == rec.class) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((rec.class, 1)),
                }
            }
            // Stable sort keeps first-appearance order for ties.
            counts.sort_by(|a, b| b.1.cmp(&a.1));

            PieChart {
                title: format!("{name} Pie Chart"),
                slices: counts
                    .into_iter()
                    .map(|(class, n)| PieSlice {
                        label: class.to_string(),
                        value: n as f64,
                    })
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMap;
    use crate::data::model::record;

    /// Site A: 2 successes, 1 failure. Site B: 2 failures.
    fn two_sites() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 1000.0, 1, "FT"),
            record("A", 2000.0, 0, "v1.1"),
            record("B", 3000.0, 0, "v1.1"),
            record("A", 4000.0, 1, "FT"),
            record("B", 5000.0, 0, "B4"),
        ])
    }

    fn values(chart: &PieChart) -> Vec<(&str, f64)> {
        chart
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }

    #[test]
    fn all_sites_sums_success_counts() {
        let chart = resolve_pie(&two_sites(), &SiteSelection::All);
        assert_eq!(chart.title, "Each Launch Site Chart");
        assert_eq!(values(&chart), vec![("A", 2.0), ("B", 0.0)]);
    }

    #[test]
    fn single_site_counts_outcomes() {
        let chart = resolve_pie(&two_sites(), &SiteSelection::Site("A".into()));
        assert_eq!(chart.title, "A Pie Chart");
        assert_eq!(values(&chart), vec![("1", 2.0), ("0", 1.0)]);
        assert_eq!(chart.total(), 3.0);
    }

    #[test]
    fn slice_count_matches_distinct_values() {
        let ds = two_sites();
        assert_eq!(resolve_pie(&ds, &SiteSelection::All).slices.len(), ds.sites.len());
        // B only ever failed: a single outcome class.
        assert_eq!(
            resolve_pie(&ds, &SiteSelection::Site("B".into())).slices.len(),
            1
        );
    }

    #[test]
    fn legend_follows_slice_order() {
        let chart = resolve_pie(&two_sites(), &SiteSelection::Site("A".into()));
        let colors = ColorMap::new(chart.slices.iter().map(|s| s.label.as_str()));
        let legend: Vec<String> = colors.legend_entries().into_iter().map(|(l, _)| l).collect();
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(legend, labels);
    }

    #[test]
    fn unknown_site_is_empty_not_an_error() {
        let chart = resolve_pie(&two_sites(), &SiteSelection::from_value("Boca Chica"));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0.0);
    }

    #[test]
    fn fraction_of_empty_pie_is_zero() {
        let slice = PieSlice {
            label: "A".into(),
            value: 0.0,
        };
        assert_eq!(slice.fraction(0.0), 0.0);
        assert_eq!(
            PieSlice {
                label: "A".into(),
                value: 1.0
            }
            .fraction(4.0),
            0.25
        );
    }
}
