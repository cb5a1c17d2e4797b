use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::RecomendadorError;
use crate::models::{MiembroCandidato, MiembroRecomendado, Tarea, TecnologiasRequeridas};

/// Parámetros de entrada para calcular recomendaciones de equipo
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "requisitos": {
///     "frontend": ["React"],
///     "backend": ["Node.js"],
///     "database": ["MongoDB"]
///   },
///   "candidatos": [
///     {
///       "id": "1",
///       "name": "Ana Martínez",
///       "role": "Desarrolladora Frontend",
///       "technologies": ["React", "TypeScript"],
///       "availability": 70,
///       "currentProjects": 2
///     }
///   ]
/// }
/// ```
///
/// # Campos:
/// - `requisitos`: tecnologías requeridas por capa (las ausentes cuentan como vacías)
/// - `candidatos`: roster a evaluar (opcional). Si falta se usa el roster configurado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolicitudRecomendacion {
    #[serde(default)]
    pub requisitos: TecnologiasRequeridas,
    #[serde(default)]
    pub candidatos: Option<Vec<MiembroCandidato>>,
}

#[derive(Debug, Serialize)]
pub struct RespuestaRecomendacion {
    pub total_candidatos: usize,
    pub recomendaciones: Vec<MiembroRecomendado>,
}

pub fn parse_json_input(json_str: &str) -> Result<SolicitudRecomendacion, serde_json::Error> {
    serde_json::from_str::<SolicitudRecomendacion>(json_str)
}

fn leer<P: AsRef<Path>>(p: P) -> Result<String, RecomendadorError> {
    let path = p.as_ref();
    fs::read_to_string(path).map_err(|source| RecomendadorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn cargar_solicitud<P: AsRef<Path>>(p: P) -> Result<SolicitudRecomendacion, RecomendadorError> {
    let s = leer(p)?;
    Ok(parse_json_input(&s)?)
}

/// Lee un roster: un array JSON de miembros.
pub fn cargar_candidatos<P: AsRef<Path>>(p: P) -> Result<Vec<MiembroCandidato>, RecomendadorError> {
    let s = leer(&p)?;
    let v: Vec<MiembroCandidato> = serde_json::from_str(&s)?;
    debug!(path = %p.as_ref().display(), miembros = v.len(), "roster cargado");
    Ok(v)
}

/// Lee un array JSON de tareas.
pub fn cargar_tareas<P: AsRef<Path>>(p: P) -> Result<Vec<Tarea>, RecomendadorError> {
    let s = leer(p)?;
    Ok(serde_json::from_str(&s)?)
}

/// Candidatos a evaluar: los de la solicitud si vienen, si no los del roster.
pub fn resolver_candidatos<P: AsRef<Path>>(
    solicitud: SolicitudRecomendacion,
    roster: Option<P>,
) -> Result<(TecnologiasRequeridas, Vec<MiembroCandidato>), RecomendadorError> {
    let SolicitudRecomendacion { requisitos, candidatos } = solicitud;
    match (candidatos, roster) {
        (Some(c), _) => Ok((requisitos, c)),
        (None, Some(r)) => {
            warn!(roster = %r.as_ref().display(), "solicitud sin candidatos, usando roster configurado");
            Ok((requisitos, cargar_candidatos(r)?))
        }
        (None, None) => Err(RecomendadorError::SinCandidatos),
    }
}
