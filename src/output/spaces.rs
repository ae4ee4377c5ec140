//! Space output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::flatfile::Space;

/// Output spaces in the specified format
pub fn output_spaces(spaces: &[Space], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&spaces),
        OutputFormat::Yaml => print_yaml(&spaces),
        OutputFormat::Table => output_table(spaces, no_header),
        OutputFormat::Csv => output_csv(spaces, no_header),
    }
}

fn output_table(spaces: &[Space], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "Name", "Environment"]);
    }

    for space in spaces {
        table.add_row(vec![
            space.id.as_str(),
            space.display_name(),
            space.environment_id.as_deref().unwrap_or(""),
        ]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} spaces", spaces.len());
    }
}

fn output_csv(spaces: &[Space], no_header: bool) {
    if !no_header {
        println!("id,name,environment_id");
    }
    for space in spaces {
        println!(
            "{},{},{}",
            escape_csv(&space.id),
            escape_csv(space.display_name()),
            escape_csv(space.environment_id.as_deref().unwrap_or(""))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_all_formats() {
        let spaces = vec![Space {
            id: "dev_sp_1".to_string(),
            name: Some("Onboarding".to_string()),
            environment_id: Some("env-dev".to_string()),
        }];
        // Should not panic
        output_spaces(&spaces, OutputFormat::Json, false);
        output_spaces(&spaces, OutputFormat::Yaml, false);
        output_spaces(&spaces, OutputFormat::Table, false);
        output_spaces(&spaces, OutputFormat::Csv, true);
    }
}
