// --- Recomendador de Equipo - CLI ---

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

use recomendador_equipo::algorithm::{estadisticas_tareas, filtrar_miembros, recomendar_si_hay_requisitos, resumir_tarea};
use recomendador_equipo::api_json::{cargar_candidatos, cargar_solicitud, cargar_tareas, resolver_candidatos, RespuestaRecomendacion};
use recomendador_equipo::catalogo::catalogo_por_defecto;
use recomendador_equipo::config::Config;
use recomendador_equipo::logging::init_tracing_subscriber;
use recomendador_equipo::{CategoriaTecnologia, RecomendadorError};

#[derive(Parser)]
#[command(name = "recomendador")]
#[command(about = "Recomendación de miembros del equipo según las tecnologías del proyecto")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calcula los 5 mejores candidatos para una solicitud JSON
    Recomendar {
        solicitud: PathBuf,
        /// Roster a usar si la solicitud no trae `candidatos` (por defecto RECOMENDADOR_ROSTER_PATH)
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Lista el catálogo de tecnologías
    Tecnologias {
        #[arg(long, value_enum)]
        categoria: Option<CategoriaCli>,
    },
    /// Busca miembros por nombre, rol o tecnología
    Buscar { roster: PathBuf, termino: String },
    /// Progreso y tareas vencidas de un listado de tareas
    Tareas { tareas: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoriaCli {
    Frontend,
    Backend,
    Database,
}

impl From<CategoriaCli> for CategoriaTecnologia {
    fn from(c: CategoriaCli) -> Self {
        match c {
            CategoriaCli::Frontend => CategoriaTecnologia::Frontend,
            CategoriaCli::Backend => CategoriaTecnologia::Backend,
            CategoriaCli::Database => CategoriaTecnologia::Database,
        }
    }
}

fn a_json<T: Serialize>(valor: &T) -> Result<Value, RecomendadorError> {
    Ok(serde_json::to_value(valor)?)
}

/// Ejecuta el subcomando y devuelve la salida JSON sin imprimirla.
fn ejecutar(cli: Cli, config: Config, ahora: DateTime<Utc>) -> Result<Value, RecomendadorError> {
    match cli.command {
        Commands::Recomendar { solicitud, roster } => {
            let sol = cargar_solicitud(&solicitud)?;
            // --roster tiene prioridad sobre RECOMENDADOR_ROSTER_PATH
            let roster = roster.or(config.roster_path);
            let (requisitos, candidatos) = resolver_candidatos(sol, roster)?;
            let recomendaciones = recomendar_si_hay_requisitos(&requisitos, &candidatos);
            info!(
                candidatos = candidatos.len(),
                recomendados = recomendaciones.len(),
                "recomendación lista"
            );
            a_json(&RespuestaRecomendacion {
                total_candidatos: candidatos.len(),
                recomendaciones,
            })
        }
        Commands::Tecnologias { categoria } => {
            let catalogo = catalogo_por_defecto();
            match categoria {
                Some(c) => a_json(&catalogo.categoria(c.into())),
                None => a_json(&catalogo),
            }
        }
        Commands::Buscar { roster, termino } => {
            let miembros = cargar_candidatos(&roster)?;
            a_json(&filtrar_miembros(&miembros, &termino))
        }
        Commands::Tareas { tareas } => {
            let tareas = cargar_tareas(&tareas)?;
            let resumen: Vec<_> = tareas.iter().map(|t| resumir_tarea(t, ahora)).collect();
            Ok(json!({
                "estadisticas": estadisticas_tareas(&tareas, ahora),
                "tareas": resumen,
            }))
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing_subscriber(&config.log_filter);
    let cli = Cli::parse();

    let salida = ejecutar(cli, config, Utc::now())
        .and_then(|v| serde_json::to_string_pretty(&v).map_err(RecomendadorError::from));
    match salida {
        Ok(texto) => {
            println!("{}", texto);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "falló la ejecución");
            ExitCode::FAILURE
        }
    }
}
