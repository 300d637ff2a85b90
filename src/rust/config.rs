use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default artifact file, shared by the trainer (writer) and the server (reader)
pub const DEFAULT_MODEL_PATH: &str = "model.bin";
/// Default training data file
pub const DEFAULT_TRAINING_DATA: &str = "training.csv";
/// Default listen address of the prediction server
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Settings for fitting a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Inclusive range of character n-gram lengths
    pub ngram_range: (usize, usize),
    /// Maximum number of optimizer iterations for the logistic regression
    pub max_iterations: u64,
    /// L2 regularization strength
    pub alpha: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            ngram_range: (2, 4),
            max_iterations: 200,
            alpha: 1.0,
        }
    }
}

impl TrainerConfig {
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Settings for the prediction server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ServerConfig {
    /// Builds a config from the defaults, overridden by `TYPIFIER_ADDR` and `TYPIFIER_MODEL`.
    /// An unparsable `TYPIFIER_ADDR` is reported rather than silently ignored.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        let mut config = Self::default();
        if let Ok(addr) = env::var("TYPIFIER_ADDR") {
            config.addr = addr.parse()?;
        }
        if let Ok(path) = env::var("TYPIFIER_MODEL") {
            config.model_path = PathBuf::from(path);
        }
        Ok(config)
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }
}
