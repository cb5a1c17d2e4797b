//! Módulo de filtros sobre el listado del equipo.
//!
//! Búsqueda libre del formulario de proyecto: un miembro pasa el filtro si el
//! término aparece (sin distinguir mayúsculas) en su nombre, su rol o alguna
//! de sus tecnologías.
use crate::models::MiembroCandidato;

/// Devuelve los miembros que coinciden con `termino`, conservando el orden.
/// Un término vacío devuelve a todos.
pub fn filtrar_miembros<'a>(miembros: &'a [MiembroCandidato], termino: &str) -> Vec<&'a MiembroCandidato> {
    let termino = termino.to_lowercase();
    miembros
        .iter()
        .filter(|m| coincide_busqueda(m, &termino))
        .collect()
}

/// `termino` debe venir ya en minúsculas.
fn coincide_busqueda(miembro: &MiembroCandidato, termino: &str) -> bool {
    miembro.nombre.to_lowercase().contains(termino)
        || miembro.rol.to_lowercase().contains(termino)
        || miembro
            .tecnologias
            .iter()
            .any(|t| t.as_str().to_lowercase().contains(termino))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miembro(nombre: &str, rol: &str, tecs: &[&str]) -> MiembroCandidato {
        MiembroCandidato {
            id: nombre.to_string(),
            nombre: nombre.to_string(),
            rol: rol.to_string(),
            avatar: None,
            tecnologias: tecs.iter().map(|t| (*t).into()).collect(),
            disponibilidad: 50,
            proyectos_actuales: 1,
        }
    }

    #[test]
    fn test_busca_en_nombre_rol_y_tecnologias() {
        let equipo = vec![
            miembro("Ana Martínez", "Desarrolladora Frontend", &["React"]),
            miembro("Javier López", "DevOps", &["Docker", "Kubernetes"]),
            miembro("Laura Sánchez", "QA Tester", &["Cypress"]),
        ];
        assert_eq!(filtrar_miembros(&equipo, "ana").len(), 1);
        assert_eq!(filtrar_miembros(&equipo, "DEVOPS")[0].nombre, "Javier López");
        assert_eq!(filtrar_miembros(&equipo, "kube")[0].nombre, "Javier López");
        assert!(filtrar_miembros(&equipo, "cobol").is_empty());
    }

    #[test]
    fn test_termino_vacio_devuelve_todos() {
        let equipo = vec![miembro("A", "", &[]), miembro("B", "", &[])];
        assert_eq!(filtrar_miembros(&equipo, "").len(), 2);
    }
}
