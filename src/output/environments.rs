//! Environment output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::flatfile::Environment;

/// Output environments in the specified format
pub fn output_environments(environments: &[Environment], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&environments),
        OutputFormat::Yaml => print_yaml(&environments),
        OutputFormat::Table => output_table(environments, no_header),
        OutputFormat::Csv => output_csv(environments, no_header),
    }
}

fn output_table(environments: &[Environment], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "Name", "Prod"]);
    }

    for env in environments {
        let prod = if env.is_prod.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        };
        table.add_row(vec![env.id.as_str(), env.name.as_str(), prod]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} environments", environments.len());
    }
}

fn output_csv(environments: &[Environment], no_header: bool) {
    if !no_header {
        println!("id,name,is_prod");
    }
    for env in environments {
        println!(
            "{},{},{}",
            escape_csv(&env.id),
            escape_csv(&env.name),
            env.is_prod.unwrap_or(false)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_all_formats() {
        let environments = vec![Environment {
            id: "env-dev".to_string(),
            name: "Development".to_string(),
            is_prod: Some(false),
        }];
        // Should not panic
        output_environments(&environments, OutputFormat::Json, false);
        output_environments(&environments, OutputFormat::Yaml, false);
        output_environments(&environments, OutputFormat::Table, false);
        output_environments(&environments, OutputFormat::Csv, true);
    }
}
