use tracing::{debug, instrument};

use crate::{error::RegistryError, student::Student};

/// Repository contract for the students known to a session.
pub trait StudentRepository {
    /// Append a student at the end of the registry.
    fn add(&mut self, student: Student) -> &Student;

    /// All students in insertion order.
    fn list(&self) -> &[Student];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Arithmetic mean of every grade. Fails with [`RegistryError::Empty`]
    /// rather than dividing by zero.
    fn average_grade(&self) -> Result<f64, RegistryError>;

    /// Students whose name contains `term`, ignoring case, in insertion order.
    fn search_by_name(&self, term: &str) -> Vec<&Student>;
}

/// Registry held in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    students: Vec<Student>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentRepository for InMemoryRegistry {
    #[instrument(skip(self, student), fields(name = student.name()))]
    fn add(&mut self, student: Student) -> &Student {
        self.students.push(student);
        debug!(count = self.students.len(), "student registered");
        &self.students[self.students.len() - 1]
    }

    fn list(&self) -> &[Student] {
        &self.students
    }

    #[instrument(skip(self))]
    fn average_grade(&self) -> Result<f64, RegistryError> {
        if self.students.is_empty() {
            return Err(RegistryError::Empty);
        }
        let sum: f64 = self.students.iter().map(Student::grade).sum();
        Ok(sum / self.students.len() as f64)
    }

    #[instrument(skip(self))]
    fn search_by_name(&self, term: &str) -> Vec<&Student> {
        let needle = term.to_lowercase();
        let matches: Vec<&Student> = self
            .students
            .iter()
            .filter(|student| student.name().to_lowercase().contains(&needle))
            .collect();
        debug!(matches = matches.len(), "search finished");
        matches
    }
}
