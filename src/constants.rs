//! Parametros de configuracion de la maquina expendedora

/// Cantidad maxima de unidades de cada ingrediente en el inventario.
/// Al reponer, todos los ingredientes vuelven a esta cantidad.
pub const MAX_QUANTITY: i64 = 10;

/// Comando para reponer el inventario de la maquina
pub const RESTOCK_COMMAND: &str = "r";

/// Comando para apagar la maquina
pub const QUIT_COMMAND: &str = "q";
