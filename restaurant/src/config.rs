use crate::errors::ConfigError;
use chrono::Duration;
use common::constants::{
    API_TOKEN_ENV, API_URL_ENV, DEFAULT_API_URL, REVERT_WINDOW_ENV, REVERT_WINDOW_MINUTES,
};
use common::policy::OrderTransitionPolicy;

pub const USAGE: &str = "Uso: restaurant <restaurant_id> [--offline]";

/// Un día.
const MAX_REVERT_WINDOW_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerConfig {
    /// Restaurante cuyas órdenes se muestran.
    pub restaurant_id: u64,
    /// URL base del backend.
    pub api_url: String,
    /// Token del dueño logueado.
    pub api_token: Option<String>,
    /// Minutos para poder volver al estado anterior.
    pub revert_window_minutes: i64,
    /// Usa el backend en memoria en vez del real.
    pub offline: bool,
}

impl OwnerConfig {
    /// Arma la configuración a partir de los argumentos (sin el nombre del
    /// programa) y de una función de lectura de variables de entorno.
    pub fn from_parts<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut restaurant_id = None;
        let mut offline = false;
        for arg in args {
            if arg == "--offline" {
                offline = true;
            } else if arg.starts_with("--") || restaurant_id.is_some() {
                return Err(ConfigError::UnknownArgument(arg));
            } else {
                let id = arg
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidRestaurantId(arg.clone()))?;
                restaurant_id = Some(id);
            }
        }
        let restaurant_id = restaurant_id.ok_or(ConfigError::MissingRestaurantId)?;

        let revert_window_minutes = match env(REVERT_WINDOW_ENV) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(minutes) if (0..=MAX_REVERT_WINDOW_MINUTES).contains(&minutes) => minutes,
                _ => return Err(ConfigError::InvalidRevertWindow(raw)),
            },
            None => REVERT_WINDOW_MINUTES,
        };

        Ok(Self {
            restaurant_id,
            api_url: env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: env(API_TOKEN_ENV).filter(|t| !t.is_empty()),
            revert_window_minutes,
            offline,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    pub fn policy(&self) -> OrderTransitionPolicy {
        OrderTransitionPolicy::new(Duration::minutes(self.revert_window_minutes))
    }
}
