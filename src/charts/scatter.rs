use serde::Serialize;

use crate::data::annotate::add_success_rate;
use crate::data::filter::{filter_by_payload, filter_by_site, PayloadRange, SiteSelection};
use crate::data::model::{LaunchDataset, LaunchRecord, COL_CLASS, COL_PAYLOAD_MASS};

/// Points sharing one annotated booster label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub label: String,
    /// `[payload kg, class]` pairs.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
    /// Filtered rows with their booster category replaced by the label.
    #[serde(skip)]
    pub records: Vec<LaunchRecord>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }
}

/// Resolve the payload-vs-outcome scatter chart.
///
/// Filters by payload (inclusive), then by site, annotates the booster
/// categories with their success rate and groups the points by that label.
pub fn resolve_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let in_range = filter_by_payload(&dataset.records, range);
    let filtered = match site {
        SiteSelection::All => in_range,
        SiteSelection::Site(_) => filter_by_site(&in_range, site),
    };
    let records = add_success_rate(filtered);

    log::debug!(
        "scatter [{site}] {}..={} kg: {} launches",
        range.low,
        range.high,
        records.len()
    );

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in &records {
        let point = [rec.payload_mass_kg, f64::from(rec.class)];
        match series
            .iter_mut()
            .find(|s| s.label == rec.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                label: rec.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }
    for s in &series {
        log::debug!("  {}: {} points", s.label, s.points.len());
    }

    let title = match site {
        SiteSelection::All => {
            "Correlation Between PayLoad and Success for all Sites".to_string()
        }
        SiteSelection::Site(name) => format!("Correlation Between PayLoad and Success for {name}"),
    };

    ScatterChart {
        title,
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        series,
        records,
    }
}
