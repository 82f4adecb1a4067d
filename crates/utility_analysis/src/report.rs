//! Rendering expanded configurations
//!
//! [`ExpansionReport`] flattens an [`AnalysisOptions`] into one row per
//! configuration, the form printed by the `expand` command.

use serde::Serialize;
use utility_analysis_core::model::{BoundPair, NoiseKind, PartitionSelectionStrategy};
use utility_analysis_core::{AnalysisOptions, Configuration};

/// Output format for the expansion report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// One expanded configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationRow {
    pub index: usize,
    pub max_partitions_contributed: u32,
    pub max_contributions_per_partition: u32,
    pub noise_kind: NoiseKind,
    pub partition_selection_strategy: PartitionSelectionStrategy,
    pub bounds: Vec<BoundPair>,
}

impl ConfigurationRow {
    fn new(
        index: usize,
        configuration: Configuration,
        strategy: PartitionSelectionStrategy,
    ) -> Self {
        Self {
            index,
            max_partitions_contributed: configuration.params.max_partitions_contributed,
            max_contributions_per_partition: configuration.params.max_contributions_per_partition,
            noise_kind: configuration.params.noise_kind,
            partition_selection_strategy: strategy,
            bounds: configuration.bounds,
        }
    }
}

/// Everything the `expand` command prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionReport {
    pub epsilon: f64,
    pub delta: f64,
    pub partitions_sampling_prob: f64,
    pub pre_aggregated_data: bool,
    pub n_configurations: usize,
    pub configurations: Vec<ConfigurationRow>,
}

impl ExpansionReport {
    pub fn new(options: &AnalysisOptions) -> Self {
        let configurations = options
            .configurations()
            .zip(options.partition_selection_strategies())
            .enumerate()
            .map(|(index, (configuration, strategy))| {
                ConfigurationRow::new(index, configuration, strategy)
            })
            .collect();

        Self {
            epsilon: options.epsilon(),
            delta: options.delta(),
            partitions_sampling_prob: options.partitions_sampling_prob(),
            pre_aggregated_data: options.pre_aggregated_data(),
            n_configurations: options.n_configurations(),
            configurations,
        }
    }

    pub fn render(&self, format: OutputFormat) -> color_eyre::Result<String> {
        Ok(match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Yaml => serde_saphyr::to_string(self)?,
            OutputFormat::Json => serde_json::to_string_pretty(self)? + "\n",
        })
    }

    /// Plain text table
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "epsilon={} delta={} sampling={} pre_aggregated={}\n",
            self.epsilon, self.delta, self.partitions_sampling_prob, self.pre_aggregated_data
        );
        out.push_str(&format!("{} configuration(s)\n", self.n_configurations));
        out.push_str(&format!(
            "{:>5}  {:>10}  {:>13}  {:<8}  {:<22}  bounds\n",
            "index", "partitions", "per_partition", "noise", "selection"
        ));
        for row in &self.configurations {
            out.push_str(&format!(
                "{:>5}  {:>10}  {:>13}  {:<8}  {:<22}  {}\n",
                row.index,
                row.max_partitions_contributed,
                row.max_contributions_per_partition,
                row.noise_kind,
                row.partition_selection_strategy,
                format_bounds(&row.bounds)
            ));
        }
        out
    }
}

fn format_end(end: Option<f64>) -> String {
    end.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Format bound pairs as `[(min, max), ...]`, unset ends as `-`
pub fn format_bounds(bounds: &[BoundPair]) -> String {
    let pairs: Vec<String> = bounds
        .iter()
        .map(|pair| format!("({}, {})", format_end(pair.min), format_end(pair.max)))
        .collect();
    format!("[{}]", pairs.join(", "))
}
