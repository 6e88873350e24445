//! Representacion de un ingrediente de la maquina
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Un ingrediente con su nombre y costo unitario. Es inmutable una vez creado.
/// La identidad del ingrediente es su nombre: la igualdad, el hash y el orden
/// se calculan unicamente sobre el nombre.
#[derive(Debug, Clone)]
pub struct Ingredient {
    name: String,
    cost: f64,
}

impl Ingredient {
    pub fn new(name: &str, cost: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Ingredient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
