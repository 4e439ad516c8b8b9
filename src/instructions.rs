//! Onboarding Instructions
//!
//! Prints the manual next steps to the invoking terminal once provisioning
//! is done. Human-readable only; the format is not machine-parseable and
//! not guaranteed stable.

use colored::Colorize;

/// Print the colored next-steps block for the freshly generated project.
pub fn print_instructions(project_slug: &str) {
    println!();
    println!("{}", "\tNext steps:".yellow());
    println!();
    println!("{}", "\t1. Navigate to your project directory:".blue());
    println!("{}", format!("\t   cd {}", project_slug).cyan());
    println!();
    println!("{}", "\t2. Put project under version control".blue());
    println!("{}", "\t   git init".cyan());
    println!("{}", "\t   git add --all".cyan());
    println!(
        "{}",
        "\t   git commit -m \"Initial setup from django project template\"".cyan()
    );
    println!();
    println!("{}", "\t3. Follow instructions in project README:".blue());
    println!("{}", "\t   code .".cyan());
    println!();
}
