//! Cálculos derivados de progreso que muestran las vistas de proyectos y tareas.
//! Todas las funciones reciben `ahora` explícitamente.
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{EstadoTarea, Tarea};

/// Porcentaje de horas consumidas respecto a las estimadas, con tope en 100.
/// Sin estimación (o estimación 0) el progreso es 0.
pub fn progreso_horas(horas_estimadas: Option<f64>, horas_reales: Option<f64>) -> f64 {
    match horas_estimadas {
        Some(est) if est != 0.0 => (horas_reales.unwrap_or(0.0) / est * 100.0).min(100.0),
        _ => 0.0,
    }
}

/// Progreso temporal de un proyecto entre sus fechas de inicio y fin.
pub fn progreso_por_fechas(
    inicio: Option<DateTime<Utc>>,
    fin: Option<DateTime<Utc>>,
    ahora: DateTime<Utc>,
) -> u8 {
    let (inicio, fin) = match (inicio, fin) {
        (Some(i), Some(f)) => (i, f),
        _ => return 0,
    };

    if ahora < inicio {
        return 0;
    }
    if ahora > fin {
        return 100;
    }

    let total = (fin - inicio).num_milliseconds();
    if total <= 0 {
        // inicio == fin == ahora
        return 100;
    }
    let transcurrido = (ahora - inicio).num_milliseconds();
    let pct = (transcurrido as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Una tarea está vencida si su fecha límite ya pasó y no está completada.
pub fn tarea_vencida(tarea: &Tarea, ahora: DateTime<Utc>) -> bool {
    match tarea.fecha_limite {
        Some(limite) => limite < ahora && tarea.estado != EstadoTarea::Completed,
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstadisticasTareas {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Conteos por estado. Las tareas en revisión y las canceladas sólo cuentan
/// en `total` (y en `overdue` si su fecha límite pasó).
pub fn estadisticas_tareas(tareas: &[Tarea], ahora: DateTime<Utc>) -> EstadisticasTareas {
    let mut stats = EstadisticasTareas {
        total: tareas.len(),
        ..Default::default()
    };
    for t in tareas {
        match t.estado {
            EstadoTarea::Pending => stats.pending += 1,
            EstadoTarea::InProgress => stats.in_progress += 1,
            EstadoTarea::Completed => stats.completed += 1,
            EstadoTarea::Review | EstadoTarea::Cancelled => {}
        }
        if tarea_vencida(t, ahora) {
            stats.overdue += 1;
        }
    }
    stats
}

/// Resumen por tarea para la salida JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenTarea {
    pub id: i64,
    pub title: String,
    pub progress: f64,
    pub overdue: bool,
}

pub fn resumir_tarea(tarea: &Tarea, ahora: DateTime<Utc>) -> ResumenTarea {
    ResumenTarea {
        id: tarea.id,
        title: tarea.titulo.clone(),
        progress: progreso_horas(tarea.horas_estimadas, tarea.horas_reales),
        overdue: tarea_vencida(tarea, ahora),
    }
}
