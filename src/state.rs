use crate::charts::{resolve_pie, resolve_scatter, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::data::filter::{PayloadRange, SiteSelection, ALL_SITES};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Startup configuration (slider domain and step).
    pub config: AppConfig,

    /// Launch-site dropdown value.
    pub site: SiteSelection,

    /// Text typed into the dropdown's search box.
    pub site_query: String,

    /// Payload slider values.
    pub payload_range: PayloadRange,

    /// Resolved pie chart for `site`.
    pub pie: Option<PieChart>,

    /// Resolved scatter chart for `site` and `payload_range`.
    pub scatter: Option<ScatterChart>,

    /// Colours of the scatter series.
    pub scatter_colors: ColorMap,

    /// Whether the annotated records table is shown.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (low, high) = config.payload_domain;
        Self {
            dataset: None,
            config,
            site: SiteSelection::All,
            site_query: String::new(),
            payload_range: PayloadRange::new(low, high),
            pie: None,
            scatter: None,
            scatter_colors: ColorMap::default(),
            show_table: false,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, reset the selectors and resolve both charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        let (low, high) = dataset
            .payload_bounds()
            .unwrap_or(self.config.payload_domain);
        self.site = SiteSelection::All;
        self.site_query.clear();
        self.payload_range = PayloadRange::new(low, high);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Dropdown changed: both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("site selection → {}", site.value());
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider moved: only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = self
            .dataset
            .as_ref()
            .map(|ds| resolve_pie(ds, &self.site));
    }

    fn refresh_scatter(&mut self) {
        self.scatter = self
            .dataset
            .as_ref()
            .map(|ds| resolve_scatter(ds, &self.site, self.payload_range));
        self.scatter_colors = self
            .scatter
            .as_ref()
            .map(|chart| ColorMap::new(chart.labels()))
            .unwrap_or_default();
    }

    /// Dropdown values: `"ALL"` followed by each site whose name contains
    /// the search text (case-insensitive).
    pub fn site_options(&self) -> Vec<String> {
        let query = self.site_query.to_lowercase();
        let mut options = vec![ALL_SITES.to_string()];
        if let Some(ds) = &self.dataset {
            options.extend(
                ds.sites
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&query))
                    .cloned(),
            );
        }
        options
    }

    /// Number of launches currently shown in the scatter chart.
    pub fn visible_count(&self) -> usize {
        self.scatter.as_ref().map_or(0, ScatterChart::point_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn loaded() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_dataset(LaunchDataset::from_records(vec![
            record("A", 1000.0, 1, "FT"),
            record("A", 2000.0, 0, "v1.1"),
            record("B", 3000.0, 0, "v1.1"),
            record("A", 4000.0, 1, "FT"),
            record("B", 5000.0, 0, "B4"),
        ]));
        state
    }

    #[test]
    fn empty_until_loaded() {
        let state = AppState::new(AppConfig::default());
        assert!(state.pie.is_none());
        assert!(state.scatter.is_none());
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 10_000.0));
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn loading_resets_selectors_to_observed_bounds() {
        let state = loaded();
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(1000.0, 5000.0));
        assert_eq!(state.visible_count(), 5);
        assert_eq!(state.pie.as_ref().unwrap().slices.len(), 2);
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let mut state = loaded();
        state.set_site(SiteSelection::Site("A".into()));
        assert_eq!(state.pie.as_ref().unwrap().title, "A Pie Chart");
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn range_change_refreshes_scatter_only() {
        let mut state = loaded();
        let pie_before = state.pie.clone();
        state.set_payload_range(PayloadRange::new(2000.0, 3000.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.visible_count(), 2);
        let legend: Vec<String> = state
            .scatter_colors
            .legend_entries()
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert_eq!(legend, vec!["v1.1-(0.0%)"]);
    }

    #[test]
    fn dropdown_options_filtered_by_search() {
        let mut state = loaded();
        assert_eq!(state.site_options().len(), 3);
        state.site_query = "b".into();
        assert_eq!(state.site_options(), vec!["ALL", "B"]);
        let picked: Vec<SiteSelection> = state
            .site_options()
            .iter()
            .map(|v| SiteSelection::from_value(v))
            .collect();
        assert_eq!(picked, vec![SiteSelection::All, SiteSelection::Site("B".into())]);
    }

    #[test]
    fn empty_dataset_falls_back_to_slider_domain() {
        let mut state = AppState::new(AppConfig::default());
        state.set_dataset(LaunchDataset::from_records(Vec::new()));
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 10_000.0));
        assert!(state.pie.as_ref().unwrap().slices.is_empty());
        assert!(state.scatter.as_ref().unwrap().series.is_empty());
    }
}
