use std::env;
use std::path::PathBuf;

pub const ENV_ROSTER_PATH: &str = "RECOMENDADOR_ROSTER_PATH";
pub const ENV_LOG: &str = "RECOMENDADOR_LOG";

/// Configuración leída del entorno (y de `.env` si existe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Roster por defecto para solicitudes sin `candidatos`.
    pub roster_path: Option<PathBuf>,
    /// Filtro de logs cuando `RUST_LOG` no está definido.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_path: None,
            log_filter: "info".to_string(),
        }
    }
}

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas (sin tocar el entorno del proceso).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(p) = lookup(ENV_ROSTER_PATH).filter(|s| !s.trim().is_empty()) {
            cfg.roster_path = Some(PathBuf::from(p));
        }
        if let Some(f) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            cfg.log_filter = f;
        }
        cfg
    }
}
