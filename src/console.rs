//! Consola de la maquina. Toma la entrada del usuario, la manda a la maquina,
//! y devuelve la salida de la maquina al usuario.
use std::io::{BufRead, Write};

use log::debug;

use crate::constants::{QUIT_COMMAND, RESTOCK_COMMAND};
use crate::errors::MachineError;
use crate::machine::Machine;

/// Corre el ciclo de comandos de la maquina, leyendo lineas de `input` y
/// escribiendo los reportes en `output`. Despues de cada comando no vacio
/// (salvo el de apagado) se vuelve a imprimir el inventario y el menu.
/// El ciclo termina con el comando de apagado o al agotarse la entrada.
pub fn run_machine<R: BufRead, W: Write>(
    machine: &mut Machine,
    input: R,
    output: &mut W,
) -> Result<(), MachineError> {
    let mut lines = input.lines();
    let mut print_report = true;
    loop {
        if print_report {
            print_inventory_and_menu(machine, output)?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if line.is_empty() {
            print_report = false;
            continue;
        }
        print_report = true;

        if !parse_input(machine, output, &line)? {
            return Ok(());
        }
    }
}

fn print_inventory_and_menu<W: Write>(
    machine: &Machine,
    output: &mut W,
) -> Result<(), MachineError> {
    write!(output, "{}", machine.output_inventory())?;
    write!(output, "{}", machine.output_menu())?;
    Ok(())
}

/// Procesa una linea de entrada del usuario. El comando de reposicion vuelve
/// a llenar el inventario, el de apagado corta el ciclo, y un numero de
/// bebida valido compra esa bebida. Devuelve si hay que seguir corriendo.
fn parse_input<W: Write>(
    machine: &mut Machine,
    output: &mut W,
    line: &str,
) -> Result<bool, MachineError> {
    let command = line.to_lowercase();
    if command == RESTOCK_COMMAND {
        machine.restock_inventory()?;
    } else if command == QUIT_COMMAND {
        return Ok(false);
    } else {
        match parse_selection(line, machine.number_of_drinks()) {
            Some(selection) => select_drink(machine, output, selection)?,
            None => {
                debug!("[CONSOLE] Invalid input: {}", line);
                writeln!(output, "Invalid selection: {}", line)?;
            }
        }
    }
    Ok(true)
}

/// Interpreta la linea como un numero de bebida del menu, si lo es.
fn parse_selection(line: &str, number_of_drinks: usize) -> Option<usize> {
    line.parse::<usize>()
        .ok()
        .filter(|&selection| selection >= 1 && selection <= number_of_drinks)
}

fn select_drink<W: Write>(
    machine: &mut Machine,
    output: &mut W,
    selection: usize,
) -> Result<(), MachineError> {
    let dispensed = machine.buy_drink(selection)?;
    let drink_name = machine.drink_name(selection)?;
    if dispensed {
        writeln!(output, "Dispensing: {}", drink_name)?;
    } else {
        writeln!(output, "Out of stock: {}", drink_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::Drink;
    use crate::ingredient::Ingredient;

    const REPORT_FULL: &str = "Inventory:\nCoffee,10\nDecaf,10\nSugar,10\n\
        Menu:\n1,Decaf Coffee,$4.50,true\n2,Normal Coffee,$5.00,true\n";

    fn test_machine() -> Machine {
        let mut machine = Machine::new();

        let coffee = Ingredient::new("Coffee", 0.5);
        let sugar = Ingredient::new("Sugar", 1.5);
        let decaf = Ingredient::new("Decaf", 0.75);
        machine.add_ingredient(coffee.clone());
        machine.add_ingredient(sugar.clone());
        machine.add_ingredient(decaf.clone());

        let mut normal_coffee = Drink::new("Normal Coffee");
        normal_coffee.add_ingredient(coffee, 1);
        normal_coffee.add_ingredient(sugar.clone(), 3);
        let mut decaf_coffee = Drink::new("Decaf Coffee");
        decaf_coffee.add_ingredient(decaf, 2);
        decaf_coffee.add_ingredient(sugar, 2);
        machine.add_drink(normal_coffee);
        machine.add_drink(decaf_coffee);

        machine
            .restock_inventory()
            .expect("test machine should restock");
        machine
    }

    fn run_with_input(input: &str) -> String {
        let mut machine = test_machine();
        let mut output = Vec::new();
        run_machine(&mut machine, input.as_bytes(), &mut output)
            .expect("the loop should not fail");
        String::from_utf8(output).expect("output should be valid utf8")
    }

    #[test]
    fn should_print_the_report_once_when_quitting() {
        assert_eq!(REPORT_FULL, run_with_input("q\n"));
    }

    #[test]
    fn should_quit_with_an_uppercase_command() {
        assert_eq!(REPORT_FULL, run_with_input("Q\n"));
    }

    #[test]
    fn should_stop_cleanly_when_the_input_ends() {
        assert_eq!(REPORT_FULL, run_with_input(""));
    }

    #[test]
    fn should_dispense_a_drink_and_reprint_the_report() {
        let expected = format!(
            "{}Dispensing: Normal Coffee\n\
             Inventory:\nCoffee,9\nDecaf,10\nSugar,7\n\
             Menu:\n1,Decaf Coffee,$4.50,true\n2,Normal Coffee,$5.00,true\n",
            REPORT_FULL
        );
        assert_eq!(expected, run_with_input("2\nq\n"));
    }

    #[test]
    fn should_report_invalid_selections_without_changing_the_machine() {
        let expected = format!(
            "{r}Invalid selection: 0\n\
             {r}Invalid selection: 3\n\
             {r}Invalid selection: -1\n\
             {r}Invalid selection: foijsf\n\
             {r}Invalid selection:  \n\
             {r}",
            r = REPORT_FULL
        );
        assert_eq!(expected, run_with_input("\n\n0\n3\n-1\n\n\nfoijsf\n \nq\n"));
    }

    #[test]
    fn should_report_out_of_stock_and_recover_after_restocking() {
        let actual = run_with_input("2\n2\n1\n2\nr\n2\nq\n");

        let after_first = "Inventory:\nCoffee,9\nDecaf,10\nSugar,7\n\
            Menu:\n1,Decaf Coffee,$4.50,true\n2,Normal Coffee,$5.00,true\n";
        let after_second = "Inventory:\nCoffee,8\nDecaf,10\nSugar,4\n\
            Menu:\n1,Decaf Coffee,$4.50,true\n2,Normal Coffee,$5.00,true\n";
        let after_third = "Inventory:\nCoffee,8\nDecaf,8\nSugar,2\n\
            Menu:\n1,Decaf Coffee,$4.50,true\n2,Normal Coffee,$5.00,false\n";
        let expected = format!(
            "{report}Dispensing: Normal Coffee\n{after_first}\
             Dispensing: Normal Coffee\n{after_second}\
             Dispensing: Decaf Coffee\n{after_third}\
             Out of stock: Normal Coffee\n{after_third}\
             {report}Dispensing: Normal Coffee\n{after_first}",
            report = REPORT_FULL
        );
        assert_eq!(expected, actual);
    }
}
