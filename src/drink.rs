//! Representacion de una bebida del menu
use std::collections::HashMap;

use crate::errors::MachineError;
use crate::ingredient::Ingredient;

/// Una bebida que la maquina puede despachar. Tiene un nombre, una receta
/// (ingrediente -> cantidad requerida) y una marca de disponibilidad.
/// La marca la actualiza solamente la maquina al recalcular el stock.
#[derive(Debug)]
pub struct Drink {
    name: String,
    recipe: HashMap<Ingredient, i64>,
    in_stock: bool,
}

impl Drink {
    pub fn new(name: &str) -> Drink {
        Drink {
            name: name.to_string(),
            recipe: HashMap::new(),
            in_stock: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agrega un ingrediente a la receta con la cantidad requerida.
    /// Si el ingrediente ya estaba, la cantidad se sobreescribe.
    /// No se valida el signo de la cantidad.
    pub fn add_ingredient(&mut self, ingredient: Ingredient, quantity: i64) {
        self.recipe.insert(ingredient, quantity);
    }

    /// Ingredientes de la receta, sin orden particular.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.recipe.keys()
    }

    /// Cantidad requerida del ingrediente. Es un error pedir la cantidad de
    /// un ingrediente que no forma parte de la receta.
    pub fn required_quantity(&self, ingredient: &Ingredient) -> Result<i64, MachineError> {
        self.recipe
            .get(ingredient)
            .copied()
            .ok_or(MachineError::IngredientNotInRecipe)
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }

    /// Costo total de la bebida segun los costos y cantidades de la receta.
    pub fn total_cost(&self) -> f64 {
        self.recipe
            .iter()
            .map(|(ingredient, quantity)| ingredient.cost() * *quantity as f64)
            .sum()
    }

    /// Linea del menu para la bebida: numero, nombre, costo y disponibilidad.
    pub fn output(&self, drink_number: usize) -> String {
        format!(
            "{},{},${:.2},{}\n",
            drink_number,
            self.name,
            self.total_cost(),
            self.in_stock
        )
    }
}
