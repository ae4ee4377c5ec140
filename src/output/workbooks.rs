//! Workbook output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, format_timestamp, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::flatfile::Workbook;

/// Output workbooks in the specified format
pub fn output_workbooks(workbooks: &[Workbook], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&workbooks),
        OutputFormat::Yaml => print_yaml(&workbooks),
        OutputFormat::Table => output_table(workbooks, no_header),
        OutputFormat::Csv => output_csv(workbooks, no_header),
    }
}

fn output_table(workbooks: &[Workbook], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "Name", "Space", "Records", "Created At"]);
    }

    for wb in workbooks {
        let records = wb.records.len().to_string();
        let created = wb
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default();
        table.add_row(vec![
            wb.id.as_str(),
            wb.name.as_str(),
            wb.space_id.as_deref().unwrap_or(""),
            &records,
            &created,
        ]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} workbooks", workbooks.len());
    }
}

fn output_csv(workbooks: &[Workbook], no_header: bool) {
    if !no_header {
        println!("id,name,space_id,records,created_at");
    }
    for wb in workbooks {
        println!(
            "{},{},{},{},{}",
            escape_csv(&wb.id),
            escape_csv(&wb.name),
            escape_csv(wb.space_id.as_deref().unwrap_or("")),
            wb.records.len(),
            escape_csv(wb.created_at.as_deref().unwrap_or(""))
        );
    }
}
