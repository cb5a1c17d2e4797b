// Módulo de alto nivel: recomendación de equipo y cálculos derivados
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod recomendacion;
pub mod filters;
pub mod seleccion;
pub mod progreso;

// Reexportar solo la API pública que se usa desde fuera
pub use recomendacion::{
    recomendar, recomendar_si_hay_requisitos, puntuar_miembro, MAX_RECOMENDACIONES,
};
pub use filters::filtrar_miembros;
pub use seleccion::SeleccionEquipo;
pub use progreso::{
    estadisticas_tareas, progreso_horas, progreso_por_fechas, resumir_tarea, tarea_vencida,
    EstadisticasTareas, ResumenTarea,
};
