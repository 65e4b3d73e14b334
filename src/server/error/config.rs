use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// # Fields
    /// - Variable name and the value that failed to parse
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    /// A configured URL (OAuth endpoint or redirect) failed to parse.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
