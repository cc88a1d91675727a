use colored::*;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::model::Customer;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub fn print_customers<W: Write>(out: &mut W, customers: &[Customer]) -> io::Result<()> {
    if customers.is_empty() {
        return Ok(());
    }

    let name_width = column_width(customers.iter().map(|c| c.name.as_str()), "Name");
    let email_width = column_width(customers.iter().map(|c| c.email.as_str()), "Email");
    let idx_width = customers.len().to_string().len();

    writeln!(out)?;
    writeln!(
        out,
        "{}  {}  {}  {}",
        " ".repeat(idx_width + 1),
        pad("Name", name_width).bold(),
        pad("Email", email_width).bold(),
        "Phone".bold()
    )?;
    for (i, customer) in customers.iter().enumerate() {
        let idx = format!("{:>width$}.", i + 1, width = idx_width);
        writeln!(
            out,
            "{}  {}  {}  {}",
            idx.yellow(),
            pad(&customer.name, name_width),
            pad(&customer.email, email_width),
            customer.phone
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_customer<W: Write>(out: &mut W, customer: &Customer) -> io::Result<()> {
    writeln!(out, "  {}", customer.name.bold())?;
    writeln!(out, "    Email: {}", customer.email)?;
    writeln!(out, "    Phone: {}", customer.phone)?;
    Ok(())
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0).max(header.width())
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
