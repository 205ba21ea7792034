use crate::error::config::ConfigError;

/// Base URL used when no mock override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in";

/// Credentials supplied through the environment for the scripted login
/// flow.
#[derive(Clone, Debug)]
pub struct LoginCredentials {
    /// Value submitted as the username.
    pub username: String,
    /// Value submitted as the password.
    pub password: String,
}

/// Process configuration resolved from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL every API request is routed to.
    pub api_base_url: String,
    /// Credentials for the scripted login flow, when the environment
    /// provides them.
    pub login: Option<LoginCredentials>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `USE_MOCK_API` set to `true`/`1` redirects requests to the URL in
    /// `API_BASE_URL`, which must then be present. Any other value than
    /// `true`/`1`/`false`/`0` is rejected. `LOGIN_USERNAME` and
    /// `LOGIN_PASSWORD` are only accepted as a pair.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = match std::env::var("USE_MOCK_API") {
            Ok(value) => match value.as_str() {
                "true" | "1" => std::env::var("API_BASE_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("API_BASE_URL".to_string()))?,
                "false" | "0" => DEFAULT_API_BASE_URL.to_string(),
                other => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "USE_MOCK_API".to_string(),
                        reason: format!("expected true or false, got {other:?}"),
                    })
                }
            },
            Err(_) => DEFAULT_API_BASE_URL.to_string(),
        };

        let login = match (
            std::env::var("LOGIN_USERNAME"),
            std::env::var("LOGIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(LoginCredentials { username, password }),
            (Ok(_), Err(_)) => {
                return Err(ConfigError::MissingEnvVar("LOGIN_PASSWORD".to_string()))
            }
            (Err(_), Ok(_)) => {
                return Err(ConfigError::MissingEnvVar("LOGIN_USERNAME".to_string()))
            }
            (Err(_), Err(_)) => None,
        };

        Ok(Self {
            api_base_url,
            login,
        })
    }
}
