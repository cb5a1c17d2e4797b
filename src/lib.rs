// Biblioteca raíz del crate `recomendador_equipo`.
// Reexporta los módulos principales y el motor de recomendación de equipo
// (`recomendar`) que usa el formulario de nuevo proyecto.
pub mod algorithm;
pub mod api_json;
pub mod catalogo;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use algorithm::{recomendar, recomendar_si_hay_requisitos};
pub use error::{RecomendadorError, SeleccionError};
pub use models::{
    CategoriaTecnologia, MiembroCandidato, MiembroRecomendado, Tecnologia, TecnologiasRequeridas,
};
