//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;

use fabrica_export::write_feb;

use crate::scenarios::ScenarioKind;

/// Build a scenario and export it to `output`.
pub fn export(
    scenario_name: &str,
    output: &str,
    report_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(kind) = ScenarioKind::from_name(scenario_name) else {
        eprintln!("Unknown scenario: {scenario_name}");
        eprintln!(
            "Available: {}",
            ScenarioKind::all()
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        return Err("Unknown scenario".into());
    };

    println!("Fabrica Export");
    println!("──────────────");
    println!("Scenario: {} ({})", kind.name(), kind.description());

    let problem = kind.build();
    println!(
        "Model:    {} nodes, {} elements, {} materials",
        problem.node_count(),
        problem.element_count(),
        problem.material_count(),
    );

    let file = File::create(output)?;
    let warnings = write_feb(&problem, BufWriter::new(file))?;
    println!("Written:  {output}");

    if warnings.is_empty() {
        println!("Warnings: none");
    } else {
        println!("Warnings: {}", warnings.len());
        for warning in &warnings {
            println!("  - {warning}");
        }
    }

    if let Some(path) = report_path {
        std::fs::write(path, serde_json::to_string_pretty(&warnings)?)?;
        println!("Report:   {path}");
    }

    Ok(())
}

/// List the available demo scenarios.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available scenarios:");
    for kind in ScenarioKind::all() {
        println!("  {:<10} {}", kind.name(), kind.description());
    }
    Ok(())
}
