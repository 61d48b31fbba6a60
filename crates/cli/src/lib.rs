//! rovers CLI -- run rover descriptions and generate test scenarios.

use std::borrow::Cow;
use std::fmt::Write;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rovers_core::display::format_report;
use rovers_core::{Catalog, CatalogError, Error, ErrorKind, RoverState};
use rovers_testgen::generator::Scenario;

/// Process exit status for a malformed description.
pub const EXIT_INPUT_ERROR: i32 = 1;
/// Process exit status for a rover that would leave the grid.
pub const EXIT_MOVEMENT_ERROR: i32 = 2;
/// Process exit status for catalog and I/O problems.
pub const EXIT_CONFIG_ERROR: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "rovers", about = "Drive rovers across a bounded grid")]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a rover description and print the final positions
    Run(RunArgs),
    /// Validate and print the error message catalog
    Catalog(CatalogArgs),
    /// Generate random valid rover descriptions with known outcomes
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct CatalogSource {
    /// Message catalog file (`CODE=template` lines); the bundled one is used if absent
    #[arg(long, env = "ROVERS_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Input file; reads standard input when absent or `-`
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub source: CatalogSource,
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
    /// Print the error location or the rover's last position on failure
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: CatalogSource,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of scenarios to generate
    #[arg(long)]
    pub n_scenario: u64,
    /// Grid width
    #[arg(long)]
    pub width: u32,
    /// Grid height
    #[arg(long)]
    pub height: u32,
    /// Number of rovers per scenario
    #[arg(long)]
    pub n_rover: usize,
    /// Number of commands per rover
    #[arg(long)]
    pub n_command: usize,
    /// Output directory for generated scenario files
    #[arg(long)]
    pub output_dir: PathBuf,
    /// Re-run every generated input and fail on any mismatch
    #[arg(long)]
    pub verify: bool,
}

#[must_use]
pub const fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Input => EXIT_INPUT_ERROR,
        ErrorKind::Movement => EXIT_MOVEMENT_ERROR,
    }
}

/// The catalog at `path`, or the bundled one when `path` is `None`.
///
/// A catalog read from a file must cover every error code.
///
/// # Errors
///
/// Any [`CatalogError`] from loading, parsing or the completeness check.
pub fn select_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>, CatalogError> {
    match path {
        Some(path) => {
            let catalog = rovers_parser::load_catalog(path)?;
            catalog.ensure_complete()?;
            Ok(Cow::Owned(catalog))
        }
        None => rovers_parser::bundled_catalog().map(Cow::Borrowed),
    }
}

/// Text for standard output and standard error plus the exit status of one
/// `run`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// Render the result of processing a description.
///
/// Success prints the report (or `{"ok":true,"rovers":[..]}` with `json`)
/// and exits 0. Failure renders the error through `catalog` and exits with
/// [`exit_code`] of its kind; in text mode the message goes to standard
/// error, and `verbose` adds the input location or the rover's last state.
/// A code the catalog cannot render exits with [`EXIT_CONFIG_ERROR`].
#[must_use]
pub fn render_outcome(
    result: &Result<Vec<RoverState>, Error>,
    catalog: &Catalog,
    json: bool,
    verbose: bool,
) -> Outcome {
    let error = match result {
        Ok(states) if json => {
            let value = serde_json::json!({ "ok": true, "rovers": states });
            return Outcome {
                stdout: format!("{value}\n"),
                ..Outcome::default()
            };
        }
        Ok(states) => {
            return Outcome {
                stdout: format_report(states),
                ..Outcome::default()
            };
        }
        Err(error) => error,
    };

    let record = error.record();
    let message = match catalog.render_error(error) {
        Ok(message) => message,
        Err(e) => {
            return Outcome {
                stderr: format!("Failed to render error {record}: {e}\n"),
                status: EXIT_CONFIG_ERROR,
                ..Outcome::default()
            };
        }
    };

    let mut outcome = Outcome {
        status: exit_code(error.kind()),
        ..Outcome::default()
    };
    if json {
        let value = serde_json::json!({
            "ok": false,
            "kind": error.kind().to_string(),
            "code": record.code.key(),
            "arguments": record.arguments,
            "message": message,
        });
        outcome.stdout = format!("{value}\n");
        return outcome;
    }

    let _ = writeln!(outcome.stderr, "{message}");
    if verbose {
        let _ = match error {
            Error::Input(e) => writeln!(
                outcome.stderr,
                "  at line {}, column {}",
                e.location.line, e.location.column
            ),
            Error::Movement(e) => writeln!(
                outcome.stderr,
                "  rover {} stopped at {}",
                e.last_state.id, e.last_state
            ),
        };
    }
    outcome
}

/// Re-run a generated scenario and compare with its recorded final states.
///
/// # Errors
///
/// A description of the mismatch or of the unexpected processing error.
pub fn verify_scenario(scenario: &Scenario) -> Result<(), String> {
    match rovers_parser::process(scenario.get_input()) {
        Ok(states) if states == scenario.get_expected() => Ok(()),
        Ok(states) => Err(format!(
            "MISMATCH\n  expected:\n{}  got:\n{}",
            format_report(scenario.get_expected()),
            format_report(&states)
        )),
        Err(e) => Err(format!("FAIL ({e})")),
    }
}

/// Read the whole input before any validation starts.
///
/// # Errors
///
/// Propagates I/O errors from the file or standard input.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let app = App::try_parse_from(["rovers", "run", "input.txt", "--json"]).unwrap();
        let Command::Run(args) = app.command else {
            panic!("expected run");
        };
        assert_eq!(args.input, Some(PathBuf::from("input.txt")));
        assert!(args.json);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_generate_args() {
        let app = App::try_parse_from([
            "rovers",
            "generate",
            "--n-scenario",
            "3",
            "--width",
            "5",
            "--height",
            "4",
            "--n-rover",
            "2",
            "--n-command",
            "10",
            "--output-dir",
            "out",
        ])
        .unwrap();
        let Command::Generate(args) = app.command else {
            panic!("expected generate");
        };
        assert_eq!(args.n_scenario, 3);
        assert_eq!(args.height, 4);
        assert!(!args.verify);
    }

    #[test]
    fn test_exit_codes_differ_by_kind() {
        assert_eq!(exit_code(ErrorKind::Input), EXIT_INPUT_ERROR);
        assert_eq!(exit_code(ErrorKind::Movement), EXIT_MOVEMENT_ERROR);
    }

    #[test]
    fn test_select_bundled_catalog() {
        let catalog = select_catalog(None).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        catalog.ensure_complete().unwrap();
    }

    #[test]
    fn test_select_missing_catalog_file() {
        let err = select_catalog(Some(Path::new("/no/such/catalog.properties"))).unwrap_err();
        assert!(matches!(err, CatalogError::MissingResource { .. }));
    }

    fn bundled() -> &'static Catalog {
        rovers_parser::bundled_catalog().unwrap()
    }

    fn json(text: &str) -> serde_json::Value {
        serde_json::from_str(text.trim_end()).unwrap()
    }

    #[test]
    fn test_render_report() {
        let result = rovers_parser::process("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");
        let outcome = render_outcome(&result, bundled(), false, false);
        assert_eq!(outcome.stdout, "1 3 N\n5 1 E\n");
        assert!(outcome.stderr.is_empty());
        assert_eq!(outcome.status, 0);
    }

    #[test]
    fn test_render_json_success() {
        let result = rovers_parser::process("5 5\n1 2 N\nM\n");
        let outcome = render_outcome(&result, bundled(), true, false);
        assert_eq!(outcome.status, 0);
        let value = json(&outcome.stdout);
        assert_eq!(value["ok"], true);
        assert_eq!(value["rovers"].as_array().unwrap().len(), 1);
        assert_eq!(value["rovers"][0]["id"], 1);
    }

    #[test]
    fn test_render_json_invalid_orientation() {
        let result = rovers_parser::process("5 5\n1 2 M\n");
        let outcome = render_outcome(&result, bundled(), true, false);
        assert_eq!(outcome.status, EXIT_INPUT_ERROR);
        let value = json(&outcome.stdout);
        assert_eq!(value["ok"], false);
        assert_eq!(value["kind"], "input");
        assert_eq!(value["code"], "ROV_INPUT_002");
        assert_eq!(value["arguments"], serde_json::json!(["M", "1"]));
        let expected = bundled().resolve("ROV_INPUT_002", &["M", "1"]).unwrap();
        assert_eq!(value["message"], expected.as_str());
    }

    #[test]
    fn test_render_movement_error_text() {
        let result = rovers_parser::process("5 5\n0 0 N\nMMMMMM\n");
        let outcome = render_outcome(&result, bundled(), false, false);
        assert_eq!(outcome.status, EXIT_MOVEMENT_ERROR);
        assert!(outcome.stdout.is_empty());
        assert_eq!(outcome.stderr.lines().count(), 1);

        let verbose = render_outcome(&result, bundled(), false, true);
        assert!(verbose.stderr.starts_with(&outcome.stderr));
        assert!(verbose.stderr.contains("rover 1 stopped at 0 5 N"), "{}", verbose.stderr);
    }

    #[test]
    fn test_render_verbose_input_location() {
        let result = rovers_parser::process("5 5\n1 2 M\n");
        let outcome = render_outcome(&result, bundled(), false, true);
        assert_eq!(outcome.status, EXIT_INPUT_ERROR);
        assert!(outcome.stderr.contains("at line 2, column 5"), "{}", outcome.stderr);
    }

    #[test]
    fn test_render_without_template_is_config_error() {
        let result = rovers_parser::process("5 5\n1 2 M\n");
        let outcome = render_outcome(&result, &Catalog::new(), true, false);
        assert_eq!(outcome.status, EXIT_CONFIG_ERROR);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.contains("ROV_INPUT_002"), "{}", outcome.stderr);
    }

    #[test]
    fn test_catalog_file_overrides_messages() {
        let mut text = String::new();
        for (code, template) in bundled().entries() {
            if code == "ROV_INPUT_002" {
                writeln!(text, "{code}=orientation {{0}} refused for rover {{1}}").unwrap();
            } else {
                writeln!(text, "{code}={template}").unwrap();
            }
        }
        let path = std::env::temp_dir().join(format!(
            "rovers-override-{}.properties",
            std::process::id()
        ));
        std::fs::write(&path, text).unwrap();

        let app = App::try_parse_from(["rovers", "run", "--catalog", path.to_str().unwrap()]).unwrap();
        let Command::Run(args) = app.command else {
            panic!("expected run");
        };
        let catalog = select_catalog(args.source.catalog.as_deref());
        std::fs::remove_file(&path).unwrap();
        let catalog = catalog.unwrap();
        assert!(matches!(catalog, Cow::Owned(_)));

        let result = rovers_parser::process("5 5\n1 2 M\n");
        let outcome = render_outcome(&result, &catalog, false, false);
        assert_eq!(outcome.stderr, "orientation M refused for rover 1\n");
    }

    #[test]
    fn test_catalog_path_from_environment() {
        let path = "/tmp/rovers-from-env.properties";
        std::env::set_var("ROVERS_CATALOG", path);
        let app = App::try_parse_from(["rovers", "catalog"]);
        std::env::remove_var("ROVERS_CATALOG");
        let Command::Catalog(args) = app.unwrap().command else {
            panic!("expected catalog");
        };
        assert_eq!(args.source.catalog, Some(PathBuf::from(path)));
    }

    #[test]
    fn test_verify_generated_scenarios() {
        for scenario in rovers_testgen::generator::generate_mult_scenarios(4, 3, 3, 2, 15) {
            verify_scenario(&scenario).unwrap();
        }
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let scenario = Scenario::new(
            rovers_testgen::generator::ScenarioParams::default(),
            "5 5\n1 2 N\nM\n".to_string(),
            Vec::new(),
        );
        let err = verify_scenario(&scenario).unwrap_err();
        assert!(err.starts_with("MISMATCH"), "{err}");

        let broken = Scenario::new(
            rovers_testgen::generator::ScenarioParams::default(),
            "5 5\n0 0 S\nM\n".to_string(),
            Vec::new(),
        );
        assert!(verify_scenario(&broken).unwrap_err().starts_with("FAIL"));
    }

    #[test]
    fn test_incomplete_catalog_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("rovers-catalog-{}.properties", std::process::id()));
        std::fs::write(&path, "ROV_INPUT_002=bad {0}\n").unwrap();
        let err = select_catalog(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, CatalogError::Incomplete { .. }), "{err:?}");
    }
}
