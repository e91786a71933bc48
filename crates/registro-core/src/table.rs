use crate::student::Student;

/// Column titles of the student table.
pub const HEADER_TITLES: [&str; 3] = ["Nombre", "Edad", "Calificación"];

/// Underline row printed below the titles.
pub const HEADER_SEPARATORS: [&str; 3] = ["------", "----", "-----------"];

fn header_line(cells: [&str; 3]) -> String {
    format!("{:<20} {:>5} {:>10}", cells[0], cells[1], cells[2])
}

/// The two header lines: titles, then separators.
pub fn header_lines() -> [String; 2] {
    [header_line(HEADER_TITLES), header_line(HEADER_SEPARATORS)]
}

/// Header followed by one row per student. An empty slice renders no lines,
/// not even the header.
pub fn render<'a, I>(students: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut lines = Vec::new();
    for student in students {
        if lines.is_empty() {
            lines.extend(header_lines());
        }
        lines.push(student.render_row());
    }
    lines
}
