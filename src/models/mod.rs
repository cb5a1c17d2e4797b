// Estructuras de datos principales
use serde::{Deserialize, Serialize};
use std::fmt;

mod tarea;

pub use tarea::{EstadoTarea, Tarea};

/// Etiqueta de tecnología ("React", "Docker", ...). La comparación es exacta y
/// sensible a mayúsculas: no hay normalización ni sinónimos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tecnologia(String);

impl Tecnologia {
    pub fn new(nombre: impl Into<String>) -> Self {
        Tecnologia(nombre.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tecnologia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tecnologia {
    fn from(s: &str) -> Self {
        Tecnologia(s.to_string())
    }
}

impl From<String> for Tecnologia {
    fn from(s: String) -> Self {
        Tecnologia(s)
    }
}

/// Capa del proyecto a la que pertenece una tecnología requerida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoriaTecnologia {
    Frontend,
    Backend,
    Database,
}

impl CategoriaTecnologia {
    /// Orden fijo de recorrido: frontend, backend, database.
    pub const TODAS: [CategoriaTecnologia; 3] = [
        CategoriaTecnologia::Frontend,
        CategoriaTecnologia::Backend,
        CategoriaTecnologia::Database,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaTecnologia::Frontend => "frontend",
            CategoriaTecnologia::Backend => "backend",
            CategoriaTecnologia::Database => "database",
        }
    }
}

impl fmt::Display for CategoriaTecnologia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tecnologías que declara un proyecto, agrupadas por capa.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "frontend": ["React", "TypeScript"],
///   "backend": ["Node.js"],
///   "database": []
/// }
/// ```
///
/// Las categorías ausentes se interpretan como vacías.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TecnologiasRequeridas {
    #[serde(default)]
    pub frontend: Vec<Tecnologia>,
    #[serde(default)]
    pub backend: Vec<Tecnologia>,
    #[serde(default)]
    pub database: Vec<Tecnologia>,
}

impl TecnologiasRequeridas {
    pub fn categoria(&self, categoria: CategoriaTecnologia) -> &[Tecnologia] {
        match categoria {
            CategoriaTecnologia::Frontend => &self.frontend,
            CategoriaTecnologia::Backend => &self.backend,
            CategoriaTecnologia::Database => &self.database,
        }
    }

    fn categoria_mut(&mut self, categoria: CategoriaTecnologia) -> &mut Vec<Tecnologia> {
        match categoria {
            CategoriaTecnologia::Frontend => &mut self.frontend,
            CategoriaTecnologia::Backend => &mut self.backend,
            CategoriaTecnologia::Database => &mut self.database,
        }
    }

    /// Agrega la tecnología a la categoría si todavía no estaba ahí.
    /// Devuelve `true` si se agregó.
    pub fn agregar(&mut self, categoria: CategoriaTecnologia, tecnologia: impl Into<Tecnologia>) -> bool {
        let tecnologia = tecnologia.into();
        let lista = self.categoria_mut(categoria);
        if lista.contains(&tecnologia) {
            return false;
        }
        lista.push(tecnologia);
        true
    }

    /// Quita todas las apariciones de la tecnología en la categoría.
    /// Devuelve `true` si había algo que quitar.
    pub fn quitar(&mut self, categoria: CategoriaTecnologia, tecnologia: &Tecnologia) -> bool {
        let lista = self.categoria_mut(categoria);
        let antes = lista.len();
        lista.retain(|t| t != tecnologia);
        lista.len() != antes
    }

    pub fn esta_vacia(&self) -> bool {
        self.frontend.is_empty() && self.backend.is_empty() && self.database.is_empty()
    }

    /// Recorre los requisitos en orden frontend -> backend -> database.
    /// Una misma etiqueta aparece una vez por cada categoría que la declare.
    pub fn iter_en_orden(&self) -> impl Iterator<Item = (CategoriaTecnologia, &Tecnologia)> + '_ {
        CategoriaTecnologia::TODAS
            .into_iter()
            .flat_map(move |c| self.categoria(c).iter().map(move |t| (c, t)))
    }

    pub fn total(&self) -> usize {
        self.frontend.len() + self.backend.len() + self.database.len()
    }
}

/// Miembro del equipo evaluado para un proyecto.
///
/// `disponibilidad` (porcentaje libre) y `proyectos_actuales` se guardan con
/// signo: valores fuera de rango no se validan, pasan tal cual a la puntuación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiembroCandidato {
    pub id: String,
    #[serde(rename = "name")]
    pub nombre: String,
    #[serde(rename = "role", default)]
    pub rol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(rename = "technologies", default)]
    pub tecnologias: Vec<Tecnologia>,
    #[serde(rename = "availability")]
    pub disponibilidad: i32,
    #[serde(rename = "currentProjects")]
    pub proyectos_actuales: i32,
}

impl MiembroCandidato {
    pub fn domina(&self, tecnologia: &Tecnologia) -> bool {
        self.tecnologias.contains(tecnologia)
    }
}

/// Resultado de puntuar un candidato: el miembro original más su puntuación y
/// las tecnologías requeridas que domina (en orden de categoría).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiembroRecomendado {
    #[serde(flatten)]
    pub miembro: MiembroCandidato,
    #[serde(rename = "score")]
    pub puntuacion: f64,
    #[serde(rename = "matchedTechnologies")]
    pub tecnologias_coincidentes: Vec<Tecnologia>,
}

impl MiembroRecomendado {
    pub fn id(&self) -> &str {
        &self.miembro.id
    }
}
