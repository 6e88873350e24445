//! Carga del catalogo de la maquina. El catalogo puede leerse de un archivo
//! JSON o usarse el catalogo por defecto, y con el se arma una maquina lista
//! para usar.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, error, info};
use serde::Deserialize;

use crate::drink::Drink;
use crate::errors::MachineError;
use crate::ingredient::Ingredient;
use crate::machine::Machine;

#[derive(Deserialize, Debug)]
pub struct IngredientSpec {
    pub name: String,
    pub cost: f64,
}

#[derive(Deserialize, Debug)]
pub struct DrinkSpec {
    pub name: String,
    pub recipe: HashMap<String, i64>,
}

/// Configuracion inicial de la maquina: los ingredientes con sus costos
/// y las bebidas con sus recetas.
#[derive(Deserialize, Debug)]
pub struct Catalog {
    pub ingredients: Vec<IngredientSpec>,
    pub drinks: Vec<DrinkSpec>,
}

/// Lee el catalogo desde un archivo JSON.
pub fn read_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, MachineError> {
    let file = File::open(path).map_err(|_| MachineError::FileReaderError)?;
    let reader = BufReader::new(file);
    let catalog: Catalog =
        serde_json::from_reader(reader).map_err(|_| MachineError::FileReaderError)?;
    info!(
        "[CATALOG] Read {} ingredients and {} drinks",
        catalog.ingredients.len(),
        catalog.drinks.len()
    );
    Ok(catalog)
}

/// Arma una maquina a partir del catalogo, registrando los ingredientes,
/// agregando las bebidas y reponiendo el inventario una vez al final.
/// Es un error que una receta use un ingrediente que no esta en el catalogo.
pub fn build_machine(catalog: &Catalog) -> Result<Machine, MachineError> {
    let mut machine = Machine::new();
    let mut costs_by_name = HashMap::new();
    for spec in &catalog.ingredients {
        costs_by_name.insert(spec.name.as_str(), spec.cost);
        machine.add_ingredient(Ingredient::new(&spec.name, spec.cost));
    }

    for spec in &catalog.drinks {
        let mut drink = Drink::new(&spec.name);
        for (ingredient_name, quantity) in &spec.recipe {
            let cost = costs_by_name.get(ingredient_name.as_str()).ok_or_else(|| {
                error!(
                    "[CATALOG] Drink {} uses unknown ingredient {}",
                    spec.name, ingredient_name
                );
                MachineError::IngredientNotInInventory
            })?;
            drink.add_ingredient(Ingredient::new(ingredient_name, *cost), *quantity);
        }
        debug!("[CATALOG] Added drink {}", spec.name);
        machine.add_drink(drink);
    }

    machine.restock_inventory()?;
    Ok(machine)
}

/// Catalogo por defecto de la maquina, con el menu clasico de cafeteria.
pub fn default_catalog() -> Catalog {
    let ingredients = vec![
        ingredient_spec("Coffee", 0.75),
        ingredient_spec("Decaf Coffee", 0.75),
        ingredient_spec("Sugar", 0.25),
        ingredient_spec("Cream", 0.25),
        ingredient_spec("Steamed Milk", 0.35),
        ingredient_spec("Foamed Milk", 0.35),
        ingredient_spec("Espresso", 1.10),
        ingredient_spec("Cocoa", 0.90),
        ingredient_spec("Whipped Cream", 1.00),
    ];
    let drinks = vec![
        drink_spec("Coffee", &[("Coffee", 3), ("Sugar", 1), ("Cream", 1)]),
        drink_spec(
            "Decaf Coffee",
            &[("Decaf Coffee", 3), ("Sugar", 1), ("Cream", 1)],
        ),
        drink_spec("Caffe Latte", &[("Espresso", 2), ("Steamed Milk", 1)]),
        drink_spec("Caffe Americano", &[("Espresso", 3)]),
        drink_spec(
            "Caffe Mocha",
            &[
                ("Espresso", 1),
                ("Cocoa", 1),
                ("Steamed Milk", 1),
                ("Whipped Cream", 1),
            ],
        ),
        drink_spec(
            "Cappuccino",
            &[("Espresso", 2), ("Steamed Milk", 1), ("Foamed Milk", 1)],
        ),
    ];
    Catalog {
        ingredients,
        drinks,
    }
}

fn ingredient_spec(name: &str, cost: f64) -> IngredientSpec {
    IngredientSpec {
        name: name.to_string(),
        cost,
    }
}

fn drink_spec(name: &str, recipe: &[(&str, i64)]) -> DrinkSpec {
    DrinkSpec {
        name: name.to_string(),
        recipe: recipe
            .iter()
            .map(|(ingredient, quantity)| (ingredient.to_string(), *quantity))
            .collect(),
    }
}
