use assert_cmd::cargo::cargo_bin_cmd;

const HEADER: &str = "Nombre                Edad Calificación\n------                ---- -----------\n";

fn run_menu(stdin: &str) -> String {
    let mut cmd = cargo_bin_cmd!("registro");
    cmd.env_remove("RUST_LOG").write_stdin(stdin);
    let out = cmd.assert().success();
    String::from_utf8(out.get_output().stdout.clone()).expect("utf8")
}

#[test]
fn exit_option_prints_banner_and_farewell() {
    let stdout = run_menu("5\n");
    assert_eq!(
        stdout,
        "\n===== MENÚ ESTUDIANTES =====\n\
         1. Ingresar estudiante\n\
         2. Mostrar estudiantes\n\
         3. Cálculo general (promedio de calificaciones)\n\
         4. Consulta por nombre\n\
         5. Salir\n\
         ============================\n\
         Seleccione una opción: Saliendo del programa...\n"
    );
}

#[test]
fn scenario_average_and_search() {
    let stdout = run_menu("1\nAna\n20\n4.5\n1\nJuan\n22\n3.0\n3\n4\nan\n5\n");
    assert!(stdout.contains("Promedio general de calificaciones: 3.75\n"));
    let rows = format!(
        "Ingrese el nombre a buscar: {HEADER}\
         Ana                     20       4.50\n\
         Juan                    22       3.00\n"
    );
    assert!(stdout.contains(&rows), "stdout was:\n{stdout}");
}

#[test]
fn malformed_age_is_retried() {
    let stdout = run_menu("1\nEli\nabc\n20\n5\n2\n5\n");
    assert!(stdout.contains("Edad: Error: Ingrese un número entero válido.\nEdad: "));
    assert!(stdout.contains("Eli                     20       5.00\n"));
}

#[test]
fn empty_registry_lists_nothing() {
    let stdout = run_menu("2\n4\n5\n");
    assert_eq!(stdout.matches("No hay estudiantes registrados.").count(), 2);
    assert!(!stdout.contains(HEADER));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let stdout = run_menu("1\nAna\n");
    assert!(stdout.contains("Edad: "));
    assert!(!stdout.contains("Saliendo del programa..."));
}

#[test]
fn config_files_do_not_affect_startup() {
    let config_home = tempfile::tempdir().expect("tempdir");
    let dir = config_home.path().join("registro");
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(dir.join("config.toml"), "[number_format\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("registro");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG")
        .write_stdin("1\nRica\n30\n1234.5\n3\n5\n");
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("Promedio general de calificaciones: 1,234.50\n"));
}

#[test]
fn grades_round_half_up_in_rows_and_average() {
    let stdout = run_menu("1\nAna\n20\n2.675\n2\n3\n5\n");
    assert!(stdout.contains("Ana                     20       2.68\n"));
    assert!(stdout.contains("Promedio general de calificaciones: 2.68\n"));
}

#[test]
fn grade_input_follows_jvm_spellings() {
    let stdout = run_menu("1\nAna\n20\ninf\nInfinity\n1\nJuan\n22\n4.5d\n2\n5\n");
    assert_eq!(stdout.matches("Error: Ingrese un número decimal válido.").count(), 1);
    assert!(stdout.contains("Ana                     20   Infinity\n"));
    assert!(stdout.contains("Juan                    22       4.50\n"));
}

#[test]
fn version_subcommand_prints_package_version() {
    let mut cmd = cargo_bin_cmd!("registro");
    cmd.arg("version");
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout, format!("registro {}\n", env!("CARGO_PKG_VERSION")));
}
