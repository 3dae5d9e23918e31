//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output so that styling stays
//! consistent between dry runs and real runs.

use crate::file_organizer::OrganizePlan;
use colored::*;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message to stderr in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::error("Path '/tmp/missing' does not exist");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints one line per file in the plan, then one per failure.
    pub fn plan_lines(plan: &OrganizePlan, dry_run: bool) {
        for (label, files) in plan.iter() {
            for file in files {
                if dry_run {
                    Self::dry_run_notice(&format!("Would move {} to {}", file, label));
                } else {
                    Self::success(&format!("Moved {} to {}", file, label));
                }
            }
        }
        for failure in plan.failures() {
            Self::error(&format!("Error moving {}: {}", failure.file, failure.error));
        }
    }

    /// Prints the closing summary line.
    pub fn summary(plan: &OrganizePlan, dry_run: bool) {
        if plan.is_empty() {
            Self::plain("No files to organize.");
            return;
        }
        let verb = if dry_run {
            "would be organized"
        } else {
            "organized"
        };
        let total = plan.total_files();
        let destinations = plan.destination_count();
        println!(
            "\n{} {} {} {} into {} {}",
            "Summary:".bold(),
            total.to_string().green().bold(),
            if total == 1 { "file" } else { "files" },
            verb,
            destinations.to_string().green().bold(),
            if destinations == 1 {
                "category"
            } else {
                "categories"
            }
        );
    }
}
