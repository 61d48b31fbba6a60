use std::{fs, process};

use clap::Parser;
use rovers_cli::{
    read_input, render_outcome, select_catalog, verify_scenario, App, Command, EXIT_CONFIG_ERROR,
    EXIT_INPUT_ERROR,
};
use rovers_core::Catalog;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();
    match &app.command {
        Command::Run(args) => run(args),
        Command::Catalog(args) => catalog(args),
        Command::Generate(args) => generate(args),
    }
}

fn load_catalog_or_exit(args: &rovers_cli::CatalogSource) -> std::borrow::Cow<'static, Catalog> {
    select_catalog(args.catalog.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load message catalog: {e}");
        process::exit(EXIT_CONFIG_ERROR);
    })
}

fn run(args: &rovers_cli::RunArgs) {
    let catalog = load_catalog_or_exit(&args.source);
    let input = read_input(args.input.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to read input: {e}");
        process::exit(EXIT_CONFIG_ERROR);
    });

    let result = rovers_parser::process(&input);
    let outcome = render_outcome(&result, &catalog, args.json, args.verbose);
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    if outcome.status != 0 {
        process::exit(outcome.status);
    }
}

fn catalog(args: &rovers_cli::CatalogArgs) {
    let catalog = load_catalog_or_exit(&args.source);
    for (code, template) in catalog.entries() {
        println!("{code}={template}");
    }
}

fn generate(args: &rovers_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(EXIT_CONFIG_ERROR);
    });

    let scenarios = rovers_testgen::generator::generate_mult_scenarios(
        args.n_scenario,
        args.width,
        args.height,
        args.n_rover,
        args.n_command,
    );

    let mut any_failed = false;
    for scenario in &scenarios {
        let input_path = args.output_dir.join(format!("{}.txt", scenario.get_id()));
        fs::write(&input_path, scenario.get_input()).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", input_path.display());
            process::exit(EXIT_CONFIG_ERROR);
        });

        let json_path = args.output_dir.join(format!("{}.json", scenario.get_id()));
        let file = fs::File::create(&json_path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", json_path.display());
            process::exit(EXIT_CONFIG_ERROR);
        });
        serde_json::to_writer_pretty(file, scenario).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", json_path.display());
            process::exit(EXIT_CONFIG_ERROR);
        });

        if args.verify {
            if let Err(reason) = verify_scenario(scenario) {
                any_failed = true;
                eprintln!("{}: {reason}", input_path.display());
            }
        }
    }

    println!(
        "Generated {} scenarios to {}",
        scenarios.len(),
        args.output_dir.display()
    );

    if any_failed {
        process::exit(EXIT_INPUT_ERROR);
    }
}
