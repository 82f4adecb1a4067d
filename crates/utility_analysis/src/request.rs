//! Loading analysis requests from disk
//!
//! A request file is a serialised [`AnalysisOptions`]. The format follows the
//! extension: `.yaml`/`.yml` or `.json`. Parsing validates the request, so
//! a file that loads is ready to expand.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use utility_analysis_core::AnalysisOptions;

/// Supported request file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
}

impl RequestFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(RequestFormat::Yaml),
            "json" => Some(RequestFormat::Json),
            _ => None,
        }
    }
}

/// Parse a request from YAML
pub fn from_yaml(yaml: &str) -> Result<AnalysisOptions, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Parse a request from JSON
pub fn from_json(json: &str) -> Result<AnalysisOptions, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and validate the request at `path`
pub fn load_request(path: &Path) -> color_eyre::Result<AnalysisOptions> {
    let Some(format) = RequestFormat::from_path(path) else {
        bail!(
            "unsupported request file {} (expected .yaml, .yml or .json)",
            path.display()
        );
    };

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read request {}", path.display()))?;

    let invalid = || format!("invalid request {}", path.display());
    let options = match format {
        RequestFormat::Yaml => from_yaml(&content).wrap_err_with(invalid)?,
        RequestFormat::Json => from_json(&content).wrap_err_with(invalid)?,
    };

    tracing::info!(
        path = %path.display(),
        n_configurations = options.n_configurations(),
        "loaded analysis request"
    );
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const REQUEST_YAML: &str = "\
epsilon: 1.0
delta: 0.000001
aggregate_params:
  metrics: [sum]
  noise_kind: laplace
  max_partitions_contributed: 1
  max_contributions_per_partition: 1
  min_sum_per_partition: 0.0
  max_sum_per_partition: 10.0
  partition_selection_strategy: truncated_geometric
parameter_set:
  max_partitions_contributed: [1, 2]
  min_sum_per_partition: [0.0, 0.0]
  max_sum_per_partition: [5.0, 10.0]
partitions_sampling_prob: 0.5
";

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            RequestFormat::from_path(Path::new("a.yaml")),
            Some(RequestFormat::Yaml)
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("a.YML")),
            Some(RequestFormat::Yaml)
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("a.json")),
            Some(RequestFormat::Json)
        );
        assert_eq!(RequestFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(RequestFormat::from_path(Path::new("request")), None);
    }

    #[test]
    fn test_load_yaml_request() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        fs::write(&path, REQUEST_YAML).unwrap();

        let options = load_request(&path).unwrap();
        assert_eq!(options.n_configurations(), 2);
        assert_eq!(options.partitions_sampling_prob(), 0.5);
        assert_eq!(options.aggregate_params().max_sum_per_partition, Some(10.0));
    }

    #[test]
    fn test_load_json_request() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{"epsilon": 2.0, "delta": 0.0, "aggregate_params": {"noise_kind": "gaussian"}}"#,
        )
        .unwrap();

        let options = load_request(&path).unwrap();
        assert_eq!(options.n_configurations(), 1);
        assert_eq!(options.epsilon(), 2.0);
    }

    #[test]
    fn test_load_rejects_invalid_request() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{"epsilon": -1.0, "delta": 0.0, "aggregate_params": {}}"#,
        )
        .unwrap();

        let err = load_request(&path).unwrap_err();
        let message = format!("{err:?}");
        assert!(message.contains("epsilon must be positive"));
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.toml");
        fs::write(&path, "epsilon = 1.0").unwrap();

        assert!(load_request(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_request(&dir.path().join("missing.yaml")).is_err());
    }
}
