//! YAML-configurable description of one search.

use std::fs;
use std::path::{Path, PathBuf};

use lnb_core::{ErrorInfo, LnbError, SearchFamily};
use serde::{Deserialize, Serialize};

/// Executable invoked when the configuration does not name one.
pub const DEFAULT_EXECUTABLE: &str = "latnetbuilder";
/// File the executable writes generating matrices to.
pub const DEFAULT_SIDE_FILE: &str = "output_latnet.txt";

/// Top-level search configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Path or name of the search executable.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Side file receiving generating matrices.
    #[serde(default = "default_side_file")]
    pub side_file: PathBuf,
    /// The search itself.
    pub search: Search,
}

fn default_executable() -> String {
    DEFAULT_EXECUTABLE.to_string()
}

fn default_side_file() -> PathBuf {
    PathBuf::from(DEFAULT_SIDE_FILE)
}

/// Lattice or net search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "set_type", rename_all = "kebab-case")]
pub enum Search {
    /// Search for a lattice rule.
    Lattice(LatticeSearch),
    /// Search for a digital net.
    Net(NetSearch),
}

/// Kind of lattice rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatticeType {
    /// Integer generating vectors.
    Ordinary,
    /// Polynomial generating vectors.
    Polynomial,
}

/// Construction method of a digital net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetConstruction {
    /// Sobol direction numbers.
    Sobol,
    /// Explicit generating matrices.
    Explicit,
    /// Polynomial lattice construction.
    Polynomial,
}

/// Parameters of a lattice search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeSearch {
    /// Ordinary or polynomial lattice.
    pub lattice_type: LatticeType,
    /// Search embedded (multilevel) lattices.
    #[serde(default)]
    pub embedded: bool,
    /// Size token: `N`, `B^P`, or a polynomial modulus.
    pub modulus: String,
    /// Figure of merit, e.g. `CU:P2`.
    pub figure_of_merit: String,
    /// Norm applied to the figure of merit.
    #[serde(default = "default_norm")]
    pub norm_type: String,
    /// Exploration method such as `CBC` or `random-CBC:70`.
    pub exploration_method: String,
    /// Number of coordinates.
    pub dimension: usize,
    /// Weight descriptors such as `product:0.1`.
    #[serde(default)]
    pub weights: Vec<String>,
    /// Power applied to the weights.
    #[serde(default = "default_weights_power")]
    pub weights_power: f64,
    /// Merit filters.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Filters applied to multilevel merit values.
    #[serde(default)]
    pub multilevel_filters: Vec<String>,
    /// Combiner for multilevel merit values.
    #[serde(default)]
    pub combiner: Option<String>,
}

/// Parameters of a digital net search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSearch {
    /// Construction method.
    pub construction: NetConstruction,
    /// Size token passed to `--size`.
    pub size: String,
    /// Exploration method.
    pub exploration_method: String,
    /// Number of coordinates.
    pub dimension: usize,
    /// Figure of merit name.
    pub figure_of_merit: String,
    /// Norm of the figure of merit.
    #[serde(default = "default_norm")]
    pub figure_power: String,
    /// Weight descriptors such as `product:0.1`.
    #[serde(default)]
    pub weights: Vec<String>,
    /// Power applied to the weights.
    #[serde(default = "default_weights_power")]
    pub weights_power: f64,
    /// Additional figures combined with the main one.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Combiner for the figures.
    #[serde(default)]
    pub combiner: Option<String>,
}

fn default_norm() -> String {
    "2".to_string()
}

fn default_weights_power() -> f64 {
    2.0
}

fn config_error(code: &str, message: impl Into<String>) -> LnbError {
    LnbError::Config(ErrorInfo::new(code, message))
}

impl Search {
    /// Family tag of the transcripts this search produces.
    pub fn family(&self) -> SearchFamily {
        match self {
            Search::Lattice(lattice) => match lattice.lattice_type {
                LatticeType::Ordinary => SearchFamily::Ordinary,
                LatticeType::Polynomial => SearchFamily::Polynomial,
            },
            Search::Net(net) => match net.construction {
                NetConstruction::Sobol => SearchFamily::DigitalSobol,
                NetConstruction::Explicit => SearchFamily::DigitalExplicit,
                NetConstruction::Polynomial => SearchFamily::DigitalPolynomial,
            },
        }
    }

    fn validate(&self) -> Result<(), LnbError> {
        let (dimension, size, figure, exploration) = match self {
            Search::Lattice(lattice) => (
                lattice.dimension,
                &lattice.modulus,
                &lattice.figure_of_merit,
                &lattice.exploration_method,
            ),
            Search::Net(net) => (
                net.dimension,
                &net.size,
                &net.figure_of_merit,
                &net.exploration_method,
            ),
        };
        if dimension == 0 {
            return Err(config_error("dimension", "dimension must be positive"));
        }
        for (name, value) in [
            ("size", size),
            ("figure_of_merit", figure),
            ("exploration_method", exploration),
        ] {
            if value.trim().is_empty() {
                return Err(LnbError::Config(
                    ErrorInfo::new("empty-field", "required field is empty").with_context("field", name),
                ));
            }
        }
        Ok(())
    }
}

impl SearchConfig {
    /// Wraps a search with the default executable and side file.
    pub fn new(search: Search) -> Self {
        Self {
            executable: default_executable(),
            side_file: default_side_file(),
            search,
        }
    }

    /// Family tag of the transcripts this configuration produces.
    pub fn family(&self) -> SearchFamily {
        self.search.family()
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml_str(data: &str) -> Result<Self, LnbError> {
        let config: SearchConfig = serde_yaml::from_str(data)
            .map_err(|err| config_error("yaml-deserialize", err.to_string()))?;
        config.search.validate()?;
        Ok(config)
    }

    /// Loads a YAML configuration from disk.
    pub fn load(path: &Path) -> Result<Self, LnbError> {
        let data = fs::read_to_string(path).map_err(|err| {
            LnbError::Config(
                ErrorInfo::new("io", err.to_string()).with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&data)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String, LnbError> {
        serde_yaml::to_string(self).map_err(|err| config_error("yaml-serialize", err.to_string()))
    }
}
