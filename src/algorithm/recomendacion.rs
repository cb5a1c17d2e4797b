//! recomendacion.rs - Puntuación lineal de miembros del equipo frente a las
//! tecnologías requeridas por un proyecto.
//!
//! Por cada candidato:
//!   +10 por cada tecnología requerida (frontend, luego backend, luego database)
//!       que domina; una etiqueta repetida en varias categorías suma cada vez
//!   + disponibilidad / 10
//!   - proyectos_actuales * 5
//!
//! Después se descartan los que no coinciden en ninguna tecnología, se ordena
//! por puntuación descendente (orden estable: en empate gana el que venía antes)
//! y se devuelven como máximo `MAX_RECOMENDACIONES`.
use crate::models::{MiembroCandidato, MiembroRecomendado, TecnologiasRequeridas};
use tracing::debug;

pub const PUNTOS_POR_TECNOLOGIA: f64 = 10.0;
pub const DIVISOR_DISPONIBILIDAD: f64 = 10.0;
pub const PENALIZACION_POR_PROYECTO: f64 = 5.0;
pub const MAX_RECOMENDACIONES: usize = 5;

/// Puntúa un único candidato sin aplicar el filtro de coincidencias.
pub fn puntuar_miembro(requisitos: &TecnologiasRequeridas, miembro: &MiembroCandidato) -> MiembroRecomendado {
    let mut puntuacion = 0.0;
    let mut coincidentes = Vec::new();

    for (_categoria, tecnologia) in requisitos.iter_en_orden() {
        if miembro.domina(tecnologia) {
            puntuacion += PUNTOS_POR_TECNOLOGIA;
            coincidentes.push(tecnologia.clone());
        }
    }

    puntuacion += f64::from(miembro.disponibilidad) / DIVISOR_DISPONIBILIDAD;
    puntuacion -= f64::from(miembro.proyectos_actuales) * PENALIZACION_POR_PROYECTO;

    MiembroRecomendado {
        miembro: miembro.clone(),
        puntuacion,
        tecnologias_coincidentes: coincidentes,
    }
}

/// Devuelve los mejores candidatos (máx. 5) para los requisitos dados.
///
/// Función pura: no modifica los candidatos ni guarda estado entre llamadas.
pub fn recomendar(requisitos: &TecnologiasRequeridas, candidatos: &[MiembroCandidato]) -> Vec<MiembroRecomendado> {
    let mut puntuados: Vec<MiembroRecomendado> = candidatos
        .iter()
        .map(|m| puntuar_miembro(requisitos, m))
        .filter(|r| !r.tecnologias_coincidentes.is_empty())
        .collect();

    let con_coincidencias = puntuados.len();

    // sort_by es estable
    puntuados.sort_by(|a, b| b.puntuacion.total_cmp(&a.puntuacion));
    puntuados.truncate(MAX_RECOMENDACIONES);

    debug!(
        candidatos = candidatos.len(),
        requisitos = requisitos.total(),
        con_coincidencias,
        devueltos = puntuados.len(),
        "recomendación calculada"
    );

    puntuados
}

/// Igual que `recomendar`, pero sin puntuar nada cuando el proyecto todavía no
/// declara tecnologías (el formulario muestra un aviso en ese caso).
pub fn recomendar_si_hay_requisitos(
    requisitos: &TecnologiasRequeridas,
    candidatos: &[MiembroCandidato],
) -> Vec<MiembroRecomendado> {
    if requisitos.esta_vacia() {
        debug!("sin tecnologías requeridas, no se calculan recomendaciones");
        return Vec::new();
    }
    recomendar(requisitos, candidatos)
}
