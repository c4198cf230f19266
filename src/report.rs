use std::path::Path;
use std::sync::Arc;

use crate::colors::Colors;
use crate::manifest::ManifestStatus;
use crate::{Prepared, Project};

/// Terminal output for the CLI. Advisory messages go to stderr, results to
/// stdout.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    pub colors: Colors,
    pub quiet: bool,
    pub verbose: bool,
}

impl Reporter {
    pub fn new(use_colors: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: Colors::new(use_colors),
            quiet,
            verbose,
        }
    }

    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} {message}", self.colors.paint(self.colors.warning, "Warning:"));
    }

    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} {message}", self.colors.paint(self.colors.info, "Info:"));
    }

    /// Errors are printed even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", self.colors.paint(self.colors.error, "Error:"));
    }
}

/// Say which config file is in use, or that there is none, and whether the
/// output location was defaulted.
pub fn print_advisories(project: &Project, reporter: &Reporter) {
    match &project.options.config {
        Some(path) => reporter.info(&format!("Using config: {}", path.display())),
        None => reporter.warn(&format!(
            "No configuration file found in {}. Using defaults and command-line options.",
            project.options.project_root.display()
        )),
    }

    if project.output.defaulted {
        reporter.warn(&format!(
            "No output location given. Generated files will go to {}.",
            project.output.fonts.display()
        ));
    }
}

/// Print the resolved options and paths on stdout.
pub fn print_project(project: &Project, reporter: &Reporter) {
    let options = &project.options;
    let c = &reporter.colors;

    println!("{} {}", c.paint(c.success, "font_name:"), options.font_name);
    println!("{} {}", c.paint(c.success, "css_prefix:"), options.css_prefix);
    println!("{} {}", c.paint(c.success, "hash:"), options.hash);
    if let Some(path) = &options.preprocessor_path {
        println!("{} {path}", c.paint(c.success, "preprocessor_path:"));
    }

    println!("{}", c.paint(c.success, "input:"));
    print_role("vectors", &project.input.vectors, None, c);
    print_role(
        "templates",
        &project.input.templates,
        Some(&project.input.vectors),
        c,
    );

    println!("{}", c.paint(c.success, "output:"));
    for (role, path) in project.output.iter() {
        let default = (role != "fonts").then_some(&project.output.fonts);
        print_role(role, path, default, c);
    }

    println!("{}", c.paint(c.success, "templates:"));
    for template in &project.templates {
        println!("  - {}", template.display());
    }

    if reporter.verbose {
        if let Ok(vectors) = crate::list_vectors(&project.input.vectors) {
            println!("{} {}", c.paint(c.success, "vectors found:"), vectors.len());
            for vector in vectors {
                println!("  - {}", file_name(&vector));
            }
        }
    }
}

fn print_role(role: &str, path: &Arc<Path>, default: Option<&Arc<Path>>, c: &Colors) {
    // Roles sharing the default's Arc were never set separately.
    let shared = default.is_some_and(|d| Arc::ptr_eq(d, path));
    if shared {
        println!(
            "  {role}: {} {}",
            path.display(),
            c.paint(c.info, "(default)")
        );
    } else {
        println!("  {role}: {}", path.display());
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_prepared(prepared: &Prepared, reporter: &Reporter) {
    if reporter.quiet {
        return;
    }
    let c = &reporter.colors;
    let path = prepared.project.manifest_path();
    match prepared.manifest {
        ManifestStatus::Created => {
            println!("{} {}", c.paint(c.success, "Created:"), path.display())
        }
        ManifestStatus::Updated => {
            println!("{} {}", c.paint(c.success, "Updated:"), path.display())
        }
        ManifestStatus::Unchanged => {
            println!("{} {}", c.paint(c.info, "Unchanged:"), path.display())
        }
    }
}
