use std::path::PathBuf;

/// Errores en los bordes de E/S (lectura de ficheros JSON de entrada).
/// El motor de recomendación en sí no falla.
#[derive(Debug, thiserror::Error)]
pub enum RecomendadorError {
    #[error("no se pudo leer '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("la solicitud no trae candidatos y no hay roster configurado (RECOMENDADOR_ROSTER_PATH)")]
    SinCandidatos,
}

/// Errores al manipular la selección manual del equipo.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeleccionError {
    #[error("el miembro '{0}' no está seleccionado")]
    MiembroNoSeleccionado(String),

    #[error("asignación {0}% fuera de rango (0-100)")]
    PorcentajeFueraDeRango(u32),
}
