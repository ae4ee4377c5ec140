//! User output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::flatfile::User;

/// Output users in the specified format
pub fn output_users(users: &[User], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&users),
        OutputFormat::Yaml => print_yaml(&users),
        OutputFormat::Table => output_table(users, no_header),
        OutputFormat::Csv => output_csv(users, no_header),
    }
}

fn output_table(users: &[User], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "Name", "Email"]);
    }

    for user in users {
        table.add_row(vec![user.id.as_str(), user.display_name(), &user.email]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} users", users.len());
    }
}

fn output_csv(users: &[User], no_header: bool) {
    if !no_header {
        println!("id,name,email");
    }
    for user in users {
        println!(
            "{},{},{}",
            escape_csv(&user.id),
            escape_csv(user.display_name()),
            escape_csv(&user.email)
        );
    }
}
