use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoTarea {
    #[default]
    Pending,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

/// Tarea de un proyecto, con la forma que expone el backend
/// (`estimated_hours`, `actual_hours`, `due_date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarea {
    pub id: i64,
    #[serde(rename = "title")]
    pub titulo: String,
    #[serde(rename = "status", default)]
    pub estado: EstadoTarea,
    #[serde(rename = "estimated_hours", default)]
    pub horas_estimadas: Option<f64>,
    #[serde(rename = "actual_hours", default)]
    pub horas_reales: Option<f64>,
    #[serde(rename = "due_date", default)]
    pub fecha_limite: Option<DateTime<Utc>>,
}
