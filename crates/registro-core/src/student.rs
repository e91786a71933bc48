use std::fmt;

use crate::format::format_fixed;

/// A registered student. Position in the registry is its only identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: i32,
    grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, age: i32, grade: f64) -> Self {
        Self {
            name: name.into(),
            age,
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }

    /// Fixed-width table row: name in 20 columns (left aligned, never cut),
    /// age in 5 and grade in 10 with two decimals rounded half-up.
    pub fn render_row(&self) -> String {
        format!(
            "{:<20} {:>5} {:>10}",
            self.name,
            self.age,
            format_fixed(self.grade, 2)
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_row())
    }
}
