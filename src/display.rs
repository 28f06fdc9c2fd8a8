use crate::converter::ConversionSummary;
use colored::Colorize;

/// Plain-text confirmation line for a finished conversion
pub fn confirmation_message(summary: &ConversionSummary) -> String {
    format!(
        "Conversion complete! Generated file: {}",
        summary.output_path.display()
    )
}

pub fn print_confirmation(summary: &ConversionSummary) {
    println!("{}", confirmation_message(summary).bright_green());
}
