//! Selección manual de miembros para el proyecto y porcentaje de dedicación de cada uno.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SeleccionError;
use crate::models::MiembroRecomendado;

pub const ASIGNACION_INICIAL: u8 = 100;

/// Miembros elegidos para el proyecto y su porcentaje de dedicación.
/// La posee quien llama; el motor de recomendación nunca la toca.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeleccionEquipo {
    miembros: Vec<String>,
    asignacion: BTreeMap<String, u8>,
}

impl SeleccionEquipo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega el miembro con asignación del 100%. No hace nada si ya estaba.
    pub fn agregar(&mut self, id: &str) -> bool {
        if self.contiene(id) {
            return false;
        }
        self.miembros.push(id.to_string());
        self.asignacion.insert(id.to_string(), ASIGNACION_INICIAL);
        debug!(miembro = id, "miembro agregado al equipo");
        true
    }

    pub fn agregar_recomendado(&mut self, recomendado: &MiembroRecomendado) -> bool {
        self.agregar(recomendado.id())
    }

    pub fn quitar(&mut self, id: &str) -> bool {
        let antes = self.miembros.len();
        self.miembros.retain(|m| m != id);
        self.asignacion.remove(id);
        self.miembros.len() != antes
    }

    pub fn cambiar_asignacion(&mut self, id: &str, porcentaje: u32) -> Result<(), SeleccionError> {
        if porcentaje > 100 {
            return Err(SeleccionError::PorcentajeFueraDeRango(porcentaje));
        }
        match self.asignacion.get_mut(id) {
            Some(valor) => {
                *valor = porcentaje as u8;
                Ok(())
            }
            None => Err(SeleccionError::MiembroNoSeleccionado(id.to_string())),
        }
    }

    pub fn contiene(&self, id: &str) -> bool {
        self.miembros.iter().any(|m| m == id)
    }

    pub fn asignacion(&self, id: &str) -> Option<u8> {
        self.asignacion.get(id).copied()
    }

    /// Ids en el orden en que se agregaron.
    pub fn miembros(&self) -> &[String] {
        &self.miembros
    }

    pub fn len(&self) -> usize {
        self.miembros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.miembros.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agregar_y_quitar() {
        let mut sel = SeleccionEquipo::new();
        assert!(sel.agregar("1"));
        assert!(!sel.agregar("1"));
        assert_eq!(sel.asignacion("1"), Some(100));
        assert!(sel.quitar("1"));
        assert!(sel.is_empty());
        assert_eq!(sel.asignacion("1"), None);
    }

    #[test]
    fn test_cambiar_asignacion() {
        let mut sel = SeleccionEquipo::new();
        sel.agregar("7");
        sel.cambiar_asignacion("7", 40).unwrap();
        assert_eq!(sel.asignacion("7"), Some(40));
        assert_eq!(sel.cambiar_asignacion("7", 120), Err(SeleccionError::PorcentajeFueraDeRango(120)));
        assert_eq!(
            sel.cambiar_asignacion("9", 10),
            Err(SeleccionError::MiembroNoSeleccionado("9".to_string()))
        );
    }

    #[test]
    fn test_orden_de_seleccion() {
        let mut sel = SeleccionEquipo::new();
        sel.agregar("3");
        sel.agregar("1");
        sel.agregar("2");
        sel.quitar("1");
        assert_eq!(sel.miembros(), &["3".to_string(), "2".to_string()]);
    }
}
