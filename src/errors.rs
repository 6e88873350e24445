//! Errores de la maquina expendedora.
//! Representan violaciones de contrato por parte del llamador o fallas de E/S,
//! no resultados esperados como una bebida sin stock.

#[derive(Debug, PartialEq, Eq)]
pub enum MachineError {
    InvalidDrinkNumber,
    IngredientNotInRecipe,
    IngredientNotInInventory,
    FileReaderError,
    IoError,
}

impl From<std::io::Error> for MachineError {
    fn from(_: std::io::Error) -> Self {
        MachineError::IoError
    }
}
