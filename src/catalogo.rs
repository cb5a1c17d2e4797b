// Catálogo de tecnologías que ofrece el formulario de nuevo proyecto.
use serde::Serialize;

use crate::models::{CategoriaTecnologia, Tecnologia, TecnologiasRequeridas};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogoTecnologias {
    pub frontend: Vec<Tecnologia>,
    pub backend: Vec<Tecnologia>,
    pub database: Vec<Tecnologia>,
}

fn lista(nombres: &[&str]) -> Vec<Tecnologia> {
    nombres.iter().map(|n| Tecnologia::from(*n)).collect()
}

pub fn catalogo_por_defecto() -> CatalogoTecnologias {
    CatalogoTecnologias {
        frontend: lista(&[
            "React", "Angular", "Vue.js", "React Native", "TypeScript", "JavaScript", "Tailwind CSS", "SCSS",
        ]),
        backend: lista(&[
            "Node.js", "Python", "Java", "PHP", "Ruby", "Go", "Express", "Django", "Spring Boot", "Laravel",
        ]),
        database: lista(&["MongoDB", "PostgreSQL", "MySQL", "Oracle", "SQLite", "Redis", "Firebase"]),
    }
}

impl CatalogoTecnologias {
    pub fn categoria(&self, categoria: CategoriaTecnologia) -> &[Tecnologia] {
        match categoria {
            CategoriaTecnologia::Frontend => &self.frontend,
            CategoriaTecnologia::Backend => &self.backend,
            CategoriaTecnologia::Database => &self.database,
        }
    }

    /// Tecnologías de la categoría que todavía se pueden agregar a los requisitos.
    pub fn disponibles(&self, categoria: CategoriaTecnologia, requisitos: &TecnologiasRequeridas) -> Vec<Tecnologia> {
        let ya = requisitos.categoria(categoria);
        self.categoria(categoria)
            .iter()
            .filter(|t| !ya.contains(t))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disponibles_excluye_requeridas() {
        let cat = catalogo_por_defecto();
        let mut req = TecnologiasRequeridas::default();
        req.agregar(CategoriaTecnologia::Database, "Redis");
        let disp = cat.disponibles(CategoriaTecnologia::Database, &req);
        assert_eq!(disp.len(), cat.database.len() - 1);
        assert!(!disp.contains(&"Redis".into()));
        // otras categorías no se ven afectadas
        assert_eq!(cat.disponibles(CategoriaTecnologia::Backend, &req).len(), 10);
    }
}
