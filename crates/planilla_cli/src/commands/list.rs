//! Employee and user listing commands.

use super::OutputFormat;
use planilla_core::codec::format_date;
use planilla_core::{Employee, PayrollType, User};
use std::path::Path;

/// Lists employees, optionally filtered by pay frequency.
pub fn employees(
    data_dir: &Path,
    payroll_type: Option<PayrollType>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::open(data_dir)?.employees();
    let employees = match payroll_type {
        Some(payroll_type) => table.by_payroll_type(payroll_type)?,
        None => table.list()?,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&employees)?);
        }
        OutputFormat::Text => print_employees(&employees),
    }
    Ok(())
}

/// Lists users. Passwords are never printed.
pub fn users(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let users = super::open(data_dir)?.users().list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        OutputFormat::Text => print_users(&users),
    }
    Ok(())
}

fn print_employees(employees: &[Employee]) {
    for e in employees {
        let hired = e
            .hire_date
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<32} {:<20} {:>14.2} {:<10} {}",
            e.id,
            e.full_name(),
            e.position,
            e.gross_salary,
            e.payroll_type,
            hired
        );
    }
    println!();
    println!("{} employees", employees.len());
}

fn print_users(users: &[User]) {
    for u in users {
        println!(
            "{:>5}  {:<16} {} {} {} <{}>",
            u.id, u.username, u.first_name, u.first_surname, u.second_surname, u.email
        );
    }
    println!();
    println!("{} users", users.len());
}
