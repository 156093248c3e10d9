use std::path::{Path, PathBuf};

/// Environment variable naming the dataset to open at startup.
pub const DATA_ENV_VAR: &str = "LAUNCH_DASH_DATA";

/// File picked up from the working directory when nothing else is given.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dataset to load before the window opens. A file that is given but
    /// fails to load aborts startup.
    pub data_path: Option<PathBuf>,
    /// Domain of the payload range sliders, in kg.
    pub payload_domain: (f64, f64),
    /// Slider step, in kg.
    pub payload_step: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            payload_domain: (0.0, 10_000.0),
            payload_step: 1_000.0,
        }
    }
}

impl AppConfig {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Self {
        let arg = std::env::args_os().nth(1).map(PathBuf::from);
        let env = std::env::var_os(DATA_ENV_VAR).map(PathBuf::from);
        Self::resolve(arg, env, Path::new(DEFAULT_DATA_FILE))
    }

    /// Argument wins over the environment variable; the default file is
    /// only used when it exists.
    pub fn resolve(arg: Option<PathBuf>, env: Option<PathBuf>, default_file: &Path) -> Self {
        let data_path = arg.or(env).or_else(|| {
            default_file
                .is_file()
                .then(|| default_file.to_path_buf())
        });
        Self {
            data_path,
            ..Self::default()
        }
    }
}
