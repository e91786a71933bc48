use std::io::{BufRead, Write};

use color_eyre::Result;
use registro_core::{
    format::{format_grouped, NumberFormat},
    registry::StudentRepository,
    student::Student,
    table,
};
use tracing::{debug, info};

use crate::prompt::{Console, InputError};

/// Menu banner, printed before every selection prompt.
pub const MENU_TEXT: &str = "\n===== MENÚ ESTUDIANTES =====\n\
1. Ingresar estudiante\n\
2. Mostrar estudiantes\n\
3. Cálculo general (promedio de calificaciones)\n\
4. Consulta por nombre\n\
5. Salir\n\
============================\n";

const SELECTION_PROMPT: &str = "Seleccione una opción: ";
const NO_STUDENTS: &str = "No hay estudiantes registrados.";

/// Actions reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    List,
    Average,
    Search,
    Exit,
}

impl MenuOption {
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Average),
            4 => Some(Self::Search),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive menu session owning the registry for its whole lifetime.
pub struct Session<S, R, W> {
    registry: S,
    console: Console<R, W>,
    number_format: NumberFormat,
}

impl<S, R, W> Session<S, R, W>
where
    S: StudentRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(registry: S, console: Console<R, W>, number_format: NumberFormat) -> Self {
        Self {
            registry,
            console,
            number_format,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, Console<R, W>) {
        (self.registry, self.console)
    }

    /// Loop over the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(InputError::Closed) => {
                    info!("input closed, leaving menu");
                    break;
                }
                Err(InputError::Io(err)) => return Err(err.into()),
            }
        }
        self.console.output().flush()?;
        Ok(())
    }

    /// One menu round. Returns `false` once the user chose to exit.
    fn step(&mut self) -> Result<bool, InputError> {
        write!(self.console.output(), "{MENU_TEXT}")?;
        let selection = self.console.read_int(SELECTION_PROMPT)?;
        debug!(selection, "menu selection");

        match MenuOption::from_selection(selection) {
            Some(MenuOption::Add) => self.add_student()?,
            Some(MenuOption::List) => self.list_students()?,
            Some(MenuOption::Average) => self.print_average()?,
            Some(MenuOption::Search) => self.search_by_name()?,
            Some(MenuOption::Exit) => {
                writeln!(self.console.output(), "Saliendo del programa...")?;
                return Ok(false);
            }
            None => writeln!(
                self.console.output(),
                "Opción no válida. Intente nuevamente."
            )?,
        }
        Ok(true)
    }

    fn add_student(&mut self) -> Result<(), InputError> {
        writeln!(self.console.output(), "\n--- Registro de estudiante ---")?;
        let name = self.console.read_line("Nombre: ")?;
        let age = self.console.read_int("Edad: ")?;
        let grade = self.console.read_float("Calificación: ")?;

        self.registry.add(Student::new(name, age, grade));
        writeln!(self.console.output(), "Estudiante registrado correctamente.")?;
        Ok(())
    }

    fn list_students(&mut self) -> Result<(), InputError> {
        writeln!(self.console.output(), "\n--- Lista de estudiantes ---")?;
        if self.registry.is_empty() {
            writeln!(self.console.output(), "{NO_STUDENTS}")?;
            return Ok(());
        }
        for line in table::render(self.registry.list()) {
            writeln!(self.console.output(), "{line}")?;
        }
        Ok(())
    }

    fn print_average(&mut self) -> Result<(), InputError> {
        writeln!(
            self.console.output(),
            "\n--- Promedio general de calificaciones ---"
        )?;
        match self.registry.average_grade() {
            Ok(average) => writeln!(
                self.console.output(),
                "Promedio general de calificaciones: {}",
                format_grouped(average, 2, &self.number_format)
            )?,
            Err(_) => writeln!(self.console.output(), "{NO_STUDENTS}")?,
        }
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<(), InputError> {
        writeln!(
            self.console.output(),
            "\n--- Búsqueda de estudiante por nombre ---"
        )?;
        if self.registry.is_empty() {
            writeln!(self.console.output(), "{NO_STUDENTS}")?;
            return Ok(());
        }

        let term = self.console.read_line("Ingrese el nombre a buscar: ")?;
        let lines = table::render(self.registry.search_by_name(&term));
        if lines.is_empty() {
            writeln!(
                self.console.output(),
                "No se encontraron estudiantes con ese nombre."
            )?;
            return Ok(());
        }
        for line in lines {
            writeln!(self.console.output(), "{line}")?;
        }
        Ok(())
    }
}
