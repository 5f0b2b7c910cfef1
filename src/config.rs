use std::env;
use std::path::PathBuf;

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct Config {
    pub openweather_api_key: String,
    pub openweather_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub gadget_config_path: PathBuf,
    pub geocoding_result_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            openweather_api_key: env::var("OPENWEATHER_API_KEY")?,
            openweather_base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENWEATHER_BASE_URL.to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gadget_config_path: env::var("GADGET_CONFIG_PATH")
                .unwrap_or_else(|_| "gadget_config.json".to_string())
                .into(),
            geocoding_result_limit: env::var("GEOCODING_RESULT_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "OPENWEATHER_API_KEY",
            "OPENWEATHER_BASE_URL",
            "SERVER_HOST",
            "SERVER_PORT",
            "GADGET_CONFIG_PATH",
            "GEOCODING_RESULT_LIMIT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("OPENWEATHER_API_KEY", "test-key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.openweather_api_key, "test-key");
        assert_eq!(config.openweather_base_url, DEFAULT_OPENWEATHER_BASE_URL);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.gadget_config_path, PathBuf::from("gadget_config.json"));
        assert_eq!(config.geocoding_result_limit, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_bad_port_falls_back() {
        clear_env();
        env::set_var("OPENWEATHER_API_KEY", "test-key");
        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("GEOCODING_RESULT_LIMIT", "3");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.geocoding_result_limit, 3);

        clear_env();
    }
}
