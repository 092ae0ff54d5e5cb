//! Configuration loading and typed config structures for the analysis.
//!
//! [`AnalysisConfig`] is the one immutable configuration value handed to
//! every pipeline stage. Its [`Default`] reproduces the built-in 2025 run:
//! seed 42, the full calendar year, the 50/20/20/10 category split, the
//! bimodal Crisis score table, and the recorded ground-truth observations.
//!
//! The same structure deserializes from YAML so alternate seeds, ranges,
//! and override lists can be injected without touching code.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use volatility_types::{Category, Override, UtilityScore};

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible run.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
    /// Seed for the random generator driving category and score draws.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Inclusive date range of the generated calendar.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Category probabilities as integer weights.
    #[serde(default)]
    pub weights: CategoryWeights,

    /// Weighted score table for [`Category::Crisis`] days.
    #[serde(default = "default_crisis_scores")]
    pub crisis_scores: Vec<WeightedScore>,

    /// Ground-truth observations applied over the simulated table, in
    /// application order.
    #[serde(default = "default_overrides")]
    pub overrides: Vec<Override>,

    /// Output file locations.
    #[serde(default)]
    pub output: OutputConfig,

    /// Chart labels, size, and palette.
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            calendar: CalendarConfig::default(),
            weights: CategoryWeights::default(),
            crisis_scores: default_crisis_scores(),
            overrides: default_overrides(),
            output: OutputConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Missing keys fall back to their defaults. The result is validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable analysis.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the calendar ends before it
    /// starts, or if either weight table has no positive weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar.end < self.calendar.start {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "calendar end {} is before start {}",
                    self.calendar.end, self.calendar.start
                ),
            });
        }

        match self.weights.total() {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    reason: "category weights must not all be zero".to_owned(),
                });
            }
            None => {
                return Err(ConfigError::Invalid {
                    reason: "category weights overflow u32".to_owned(),
                });
            }
            Some(_) => {}
        }

        let mut crisis_total: u32 = 0;
        for entry in &self.crisis_scores {
            crisis_total =
                crisis_total
                    .checked_add(entry.weight)
                    .ok_or_else(|| ConfigError::Invalid {
                        reason: "crisis score weights overflow u32".to_owned(),
                    })?;
        }
        if crisis_total == 0 {
            return Err(ConfigError::Invalid {
                reason: "crisis score table needs at least one positive weight".to_owned(),
            });
        }

        Ok(())
    }
}

/// Inclusive calendar range, one record per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// First day of the calendar.
    #[serde(default = "default_start")]
    pub start: NaiveDate,

    /// Last day of the calendar (included).
    #[serde(default = "default_end")]
    pub end: NaiveDate,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

/// Relative weights of the four categories.
///
/// Weights are integers so the draw is exact: the default `50/20/20/10`
/// is the `0.50/0.20/0.20/0.10` distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CategoryWeights {
    /// Weight of [`Category::Stable`].
    #[serde(default = "default_stable_weight")]
    pub stable: u32,

    /// Weight of [`Category::Peak`].
    #[serde(default = "default_peak_weight")]
    pub peak: u32,

    /// Weight of [`Category::LowPerf`].
    #[serde(default = "default_low_perf_weight")]
    pub low_perf: u32,

    /// Weight of [`Category::Crisis`].
    #[serde(default = "default_crisis_weight")]
    pub crisis: u32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            stable: default_stable_weight(),
            peak: default_peak_weight(),
            low_perf: default_low_perf_weight(),
            crisis: default_crisis_weight(),
        }
    }
}

impl CategoryWeights {
    /// Return the weight of one category.
    pub const fn weight(&self, category: Category) -> u32 {
        match category {
            Category::Stable => self.stable,
            Category::Peak => self.peak,
            Category::LowPerf => self.low_perf,
            Category::Crisis => self.crisis,
        }
    }

    /// Return the sum of all weights, or `None` on overflow.
    pub fn total(&self) -> Option<u32> {
        Category::ALL
            .into_iter()
            .try_fold(0_u32, |acc, category| acc.checked_add(self.weight(category)))
    }
}

/// One entry of a non-uniform score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WeightedScore {
    /// The score this entry produces.
    pub score: UtilityScore,
    /// Relative weight of the entry.
    pub weight: u32,
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Path of the exported delimited table.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Path of the rendered box-plot image.
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            chart_path: default_chart_path(),
        }
    }
}

/// Presentation settings for the box plot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChartConfig {
    /// Chart caption.
    #[serde(default = "default_chart_title")]
    pub title: String,

    /// Horizontal axis description.
    #[serde(default = "default_x_label")]
    pub x_label: String,

    /// Vertical axis description.
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Image width in pixels.
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Image height in pixels.
    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// Fill color per category.
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_chart_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            width: default_chart_width(),
            height: default_chart_height(),
            palette: PaletteConfig::default(),
        }
    }
}

/// Hex color (`#RRGGBB`) per category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteConfig {
    /// Color of [`Category::Stable`] (light blue).
    #[serde(default = "default_stable_color")]
    pub stable: String,

    /// Color of [`Category::Peak`] (dark blue).
    #[serde(default = "default_peak_color")]
    pub peak: String,

    /// Color of [`Category::LowPerf`] (light red).
    #[serde(default = "default_low_perf_color")]
    pub low_perf: String,

    /// Color of [`Category::Crisis`] (navy).
    #[serde(default = "default_crisis_color")]
    pub crisis: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            stable: default_stable_color(),
            peak: default_peak_color(),
            low_perf: default_low_perf_color(),
            crisis: default_crisis_color(),
        }
    }
}

impl PaletteConfig {
    /// Return the configured color of one category.
    pub fn color_for(&self, category: Category) -> &str {
        match category {
            Category::Stable => &self.stable,
            Category::Peak => &self.peak,
            Category::LowPerf => &self.low_perf,
            Category::Crisis => &self.crisis,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()
}

const fn default_stable_weight() -> u32 {
    50
}

const fn default_peak_weight() -> u32 {
    20
}

const fn default_low_perf_weight() -> u32 {
    20
}

const fn default_crisis_weight() -> u32 {
    10
}

fn default_crisis_scores() -> Vec<WeightedScore> {
    [(0, 30), (1, 20), (4, 20), (5, 30)]
        .into_iter()
        .map(|(score, weight)| WeightedScore {
            score: UtilityScore::clamped(score),
            weight,
        })
        .collect()
}

/// Remembered real-world days, in entry order.
///
/// `2025-06-01` is recorded twice; the later entry wins.
const OBSERVATIONS: [(&str, Category, u8); 51] = [
    ("2025-01-01", Category::Peak, 3),
    ("2025-01-09", Category::Crisis, 1),
    ("2025-01-10", Category::Peak, 3),
    ("2025-01-11", Category::LowPerf, 1),
    ("2025-01-13", Category::LowPerf, 1),
    ("2025-01-14", Category::LowPerf, 1),
    ("2025-01-16", Category::LowPerf, 1),
    ("2025-01-18", Category::Crisis, 1),
    ("2025-01-19", Category::Crisis, 1),
    ("2025-01-20", Category::Crisis, 1),
    ("2025-01-21", Category::Crisis, 1),
    ("2025-01-22", Category::LowPerf, 1),
    ("2025-01-27", Category::Peak, 3),
    ("2025-01-28", Category::Peak, 5),
    ("2025-01-30", Category::Crisis, 1),
    ("2025-02-26", Category::Crisis, 1),
    ("2025-03-01", Category::Peak, 5),
    ("2025-03-08", Category::Peak, 5),
    ("2025-03-11", Category::Peak, 1),
    ("2025-03-12", Category::Crisis, 5),
    ("2025-03-19", Category::Crisis, 1),
    ("2025-03-22", Category::Crisis, 5),
    ("2025-05-31", Category::Peak, 5),
    ("2025-06-01", Category::Peak, 5),
    ("2025-06-01", Category::Peak, 5),
    ("2025-06-25", Category::Crisis, 5),
    ("2025-07-01", Category::Crisis, 4),
    ("2025-07-02", Category::Peak, 3),
    ("2025-07-04", Category::Crisis, 5),
    ("2025-07-16", Category::LowPerf, 2),
    ("2025-07-17", Category::LowPerf, 2),
    ("2025-07-18", Category::Peak, 3),
    ("2025-07-19", Category::Crisis, 1),
    ("2025-07-20", Category::LowPerf, 4),
    ("2025-07-21", Category::Crisis, 5),
    ("2025-08-14", Category::Peak, 3),
    ("2025-08-15", Category::Peak, 3),
    ("2025-08-28", Category::Crisis, 5),
    ("2025-09-20", Category::Peak, 3),
    ("2025-09-21", Category::Peak, 3),
    ("2025-10-06", Category::Peak, 5),
    ("2025-10-14", Category::Peak, 5),
    ("2025-10-17", Category::Crisis, 1),
    ("2025-10-24", Category::Peak, 5),
    ("2025-11-19", Category::Crisis, 1),
    ("2025-11-20", Category::Crisis, 5),
    ("2025-11-24", Category::LowPerf, 1),
    ("2025-11-25", Category::LowPerf, 1),
    ("2025-11-26", Category::LowPerf, 2),
    ("2025-11-27", Category::Peak, 5),
    ("2025-12-01", Category::Peak, 4),
];

fn default_overrides() -> Vec<Override> {
    OBSERVATIONS
        .into_iter()
        .map(|(date, category, score)| {
            Override::new(date, category, UtilityScore::clamped(score))
        })
        .collect()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("utility_analysis_2025.csv")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("utility_boxplot_2025.svg")
}

fn default_chart_title() -> String {
    "Volatility Analysis: Impact of High-Variance Events on Utility".to_owned()
}

fn default_x_label() -> String {
    "Daily Category".to_owned()
}

fn default_y_label() -> String {
    "Utility Score (0-5)".to_owned()
}

const fn default_chart_width() -> u32 {
    1200
}

const fn default_chart_height() -> u32 {
    700
}

fn default_stable_color() -> String {
    "#A8D0E6".to_owned()
}

fn default_peak_color() -> String {
    "#374785".to_owned()
}

fn default_low_perf_color() -> String {
    "#F76C6C".to_owned()
}

fn default_crisis_color() -> String {
    "#24305E".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 42);
        assert_eq!(config.calendar.start.to_string(), "2025-01-01");
        assert_eq!(config.calendar.end.to_string(), "2025-12-31");
        assert_eq!(config.weights.total(), Some(100));
        assert_eq!(config.crisis_scores.len(), 4);
        assert_eq!(config.overrides.len(), 51);
        assert_eq!(
            config.output.csv_path,
            PathBuf::from("utility_analysis_2025.csv")
        );
    }

    #[test]
    fn default_overrides_keep_entry_order() {
        let config = AnalysisConfig::default();
        let first = config.overrides.first().unwrap();
        assert_eq!(first.date, "2025-01-01");
        assert_eq!(first.category, Category::Peak);
        assert_eq!(first.score.value(), 3);
        let last = config.overrides.last().unwrap();
        assert_eq!(last.date, "2025-12-01");
        assert_eq!(last.score.value(), 4);
    }

    #[test]
    fn default_palette_matches_categories() {
        let palette = PaletteConfig::default();
        assert_eq!(palette.color_for(Category::Stable), "#A8D0E6");
        assert_eq!(palette.color_for(Category::Peak), "#374785");
        assert_eq!(palette.color_for(Category::LowPerf), "#F76C6C");
        assert_eq!(palette.color_for(Category::Crisis), "#24305E");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r##"
seed: 7
calendar:
  start: 2024-02-01
  end: 2024-02-29
weights:
  stable: 1
  peak: 1
  low_perf: 1
  crisis: 1
crisis_scores:
  - score: 0
    weight: 1
  - score: 5
    weight: 1
overrides:
  - date: "2024-02-10"
    category: Low_Perf
    score: 2
output:
  csv_path: out.csv
  chart_path: out.svg
chart:
  title: "Leap month"
  width: 640
  height: 480
  palette:
    crisis: "#000000"
"##;
        let config = AnalysisConfig::parse(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.calendar.end.to_string(), "2024-02-29");
        assert_eq!(config.weights.total(), Some(4));
        assert_eq!(config.crisis_scores.len(), 2);
        assert_eq!(config.overrides.len(), 1);
        assert_eq!(
            config.overrides.first().unwrap().category,
            Category::LowPerf
        );
        assert_eq!(config.output.chart_path, PathBuf::from("out.svg"));
        assert_eq!(config.chart.title, "Leap month");
        assert_eq!(config.chart.palette.crisis, "#000000");
        // Unset palette entries keep their defaults
        assert_eq!(config.chart.palette.stable, "#A8D0E6");
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = AnalysisConfig::parse("seed: 99\n").unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.overrides.len(), 51);
        assert_eq!(config.weights, CategoryWeights::default());
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(AnalysisConfig::parse("").is_ok());
    }

    #[test]
    fn unknown_override_category_is_rejected() {
        let yaml = "overrides:\n  - date: \"2025-01-01\"\n    category: Calm\n    score: 3\n";
        let err = AnalysisConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn out_of_range_override_score_is_rejected() {
        let yaml = "overrides:\n  - date: \"2025-01-01\"\n    category: Peak\n    score: 6\n";
        assert!(AnalysisConfig::parse(yaml).is_err());
    }

    #[test]
    fn reversed_calendar_is_invalid() {
        let yaml = "calendar:\n  start: 2025-12-31\n  end: 2025-01-01\n";
        let err = AnalysisConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn zero_weights_are_invalid() {
        let config = AnalysisConfig {
            weights: CategoryWeights {
                stable: 0,
                peak: 0,
                low_perf: 0,
                crisis: 0,
            },
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn empty_crisis_table_is_invalid() {
        let mut config = AnalysisConfig::default();
        config.crisis_scores.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: 1234").unwrap();
        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed, 1234);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AnalysisConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
