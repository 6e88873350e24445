//! Logica interna de la maquina expendedora. Maneja el inventario de
//! ingredientes, el catalogo de bebidas y las operaciones de compra y reposicion.
use std::collections::BTreeMap;

use log::{debug, info};

use crate::constants::MAX_QUANTITY;
use crate::drink::Drink;
use crate::errors::MachineError;
use crate::ingredient::Ingredient;

/// La maquina expendedora. Es duenia del inventario (ingrediente -> cantidad
/// disponible, ordenado por nombre) y de la lista de bebidas (ordenada por nombre).
/// Despues de cada mutacion del inventario se recalcula el stock de todas las
/// bebidas, para que la marca de disponibilidad nunca quede desactualizada.
pub struct Machine {
    inventory: BTreeMap<Ingredient, i64>,
    drinks: Vec<Drink>,
}

impl Machine {
    pub fn new() -> Machine {
        Machine {
            inventory: BTreeMap::new(),
            drinks: Vec::new(),
        }
    }

    /// Cantidad de bebidas distintas en el menu, incluyendo las que no tienen stock.
    pub fn number_of_drinks(&self) -> usize {
        self.drinks.len()
    }

    /// Agrega un ingrediente al inventario con la cantidad maxima.
    /// Si el ingrediente ya estaba, se sobreescribe su cantidad.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.inventory.insert(ingredient, MAX_QUANTITY);
    }

    /// Agrega una bebida al menu, manteniendo la lista ordenada por nombre.
    /// No recalcula el stock: el armado del catalogo repone una sola vez al final.
    pub fn add_drink(&mut self, drink: Drink) {
        self.drinks.push(drink);
        self.drinks.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Nombre de la bebida con el numero dado, donde 1 es la primera del menu.
    pub fn drink_name(&self, drink_number: usize) -> Result<&str, MachineError> {
        let drink = self.drink_at(drink_number)?;
        Ok(drink.name())
    }

    /// Compra la bebida con el numero dado, donde 1 es la primera del menu.
    /// Devuelve si la bebida pudo ser despachada. Si no hay stock no se
    /// modifica nada. Un numero fuera de rango es una violacion de contrato.
    pub fn buy_drink(&mut self, drink_number: usize) -> Result<bool, MachineError> {
        let drink = self.drink_at(drink_number)?;
        if !drink.is_in_stock() {
            debug!("[MACHINE] No stock of {}", drink.name());
            return Ok(false);
        }

        // Se validan todas las busquedas antes de descontar, para que una
        // compra no pueda quedar aplicada a medias.
        let mut updates = Vec::new();
        for ingredient in drink.ingredients() {
            let available = *self
                .inventory
                .get(ingredient)
                .ok_or(MachineError::IngredientNotInInventory)?;
            let required = drink.required_quantity(ingredient)?;
            updates.push((ingredient.clone(), available - required));
        }
        debug!("[MACHINE] Dispensing {}", drink.name());

        for (ingredient, new_quantity) in updates {
            self.inventory.insert(ingredient, new_quantity);
        }
        self.update_drink_stocks()?;
        Ok(true)
    }

    /// Repone el inventario, volviendo todos los ingredientes a la cantidad maxima.
    pub fn restock_inventory(&mut self) -> Result<(), MachineError> {
        for quantity in self.inventory.values_mut() {
            *quantity = MAX_QUANTITY;
        }
        info!("[MACHINE] Inventory restocked");
        self.update_drink_stocks()
    }

    /// Inventario actual de la maquina, un ingrediente por linea con su
    /// cantidad disponible, en orden alfabetico.
    pub fn output_inventory(&self) -> String {
        let mut output = String::from("Inventory:\n");
        for (ingredient, quantity) in self.inventory.iter() {
            output.push_str(&format!("{},{}\n", ingredient.name(), quantity));
        }
        output
    }

    /// Menu de la maquina, una bebida por linea con su numero, nombre,
    /// costo y disponibilidad.
    pub fn output_menu(&self) -> String {
        let mut output = String::from("Menu:\n");
        for (index, drink) in self.drinks.iter().enumerate() {
            output.push_str(&drink.output(index + 1));
        }
        output
    }

    fn drink_at(&self, drink_number: usize) -> Result<&Drink, MachineError> {
        let index = drink_number
            .checked_sub(1)
            .ok_or(MachineError::InvalidDrinkNumber)?;
        self.drinks
            .get(index)
            .ok_or(MachineError::InvalidDrinkNumber)
    }

    /// Recalcula la disponibilidad de todas las bebidas a partir del
    /// inventario actual. Es un recalculo completo despues de cada mutacion.
    fn update_drink_stocks(&mut self) -> Result<(), MachineError> {
        for i in 0..self.drinks.len() {
            let in_stock = Self::can_be_prepared(&self.inventory, &self.drinks[i])?;
            self.drinks[i].set_in_stock(in_stock);
        }
        Ok(())
    }

    fn can_be_prepared(
        inventory: &BTreeMap<Ingredient, i64>,
        drink: &Drink,
    ) -> Result<bool, MachineError> {
        for ingredient in drink.ingredients() {
            let available = inventory
                .get(ingredient)
                .ok_or(MachineError::IngredientNotInInventory)?;
            if drink.required_quantity(ingredient)? > *available {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
