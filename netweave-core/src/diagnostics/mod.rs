pub mod diagnostic_report;
pub mod message;

use colored::*;
use diagnostic_report::{Diagnostic, Severity};

pub fn render(diag: &Diagnostic) {
  print_header(diag);

  println!(
    "{:2}{} {}",
    "",
    "-->".blue().bold(),
    diag.context.to_string().bold()
  );

  for note in &diag.notes {
    println!("  {} {}", "note:".cyan().bold(), note);
  }

  println!();
}

pub fn render_batch(diagnostics: &[Diagnostic]) {
  for diag in diagnostics {
    render(diag);
  }
}

fn print_header(diag: &Diagnostic) {
  let message = diag.message.bold();
  let code = diag.error_code.bold();

  match diag.severity {
    Severity::Info => {
      println!("{}[{}]: {}", "Info".blue().bold(), code.blue(), message)
    },
    Severity::Warning => {
      println!("{}[{}]: {}", "Warning".yellow().bold(), code.yellow(), message)
    },
    Severity::Error => {
      println!("{}[{}]: {}", "Error".red().bold(), code.red().bold(), message)
    },
    Severity::Hint => {
      println!("{}[{}]: {}", "Hint".cyan().bold(), code.cyan(), message)
    },
  }
}
