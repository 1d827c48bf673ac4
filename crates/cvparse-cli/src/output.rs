use std::collections::BTreeMap;
use std::io::Write;

use cvparse_core::ExtractedProfile;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the extracted profile as a human-readable report.
pub fn print_profile(
    w: &mut dyn Write,
    file_name: &str,
    profile: &ExtractedProfile,
    color: ColorMode,
) -> std::io::Result<()> {
    let sep = "=".repeat(60);
    if color.enabled() {
        writeln!(w, "{}", sep.bold())?;
        writeln!(w, "{} {}", "PROFILE".bold(), file_name)?;
        writeln!(w, "{}", sep.bold())?;
    } else {
        writeln!(w, "{}", sep)?;
        writeln!(w, "PROFILE {}", file_name)?;
        writeln!(w, "{}", sep)?;
    }
    writeln!(w)?;

    print_scalar(w, "Name", profile.name.as_deref(), color)?;
    print_scalar(w, "Email", profile.email.as_deref(), color)?;

    if profile.skills.is_empty() {
        print_scalar(w, "Skills", None, color)?;
    } else if color.enabled() {
        writeln!(w, "{}: {}", "Skills".bold(), profile.skills.join(", ").cyan())?;
    } else {
        writeln!(w, "Skills: {}", profile.skills.join(", "))?;
    }

    print_list(w, "Education", profile.education.as_deref(), color)?;
    print_list(w, "Qualification", profile.qualification.as_deref(), color)?;
    print_list(w, "Profile", profile.profile.as_deref(), color)?;
    print_list(
        w,
        "Previous associations",
        profile.previous_associations.as_deref(),
        color,
    )?;

    let years = format!("{:.2} years", profile.total_experience);
    if color.enabled() {
        writeln!(w, "{}: {}", "Total experience".bold(), years.green())?;
    } else {
        writeln!(w, "Total experience: {}", years)?;
    }
    writeln!(w)?;
    Ok(())
}

fn print_scalar(
    w: &mut dyn Write,
    label: &str,
    value: Option<&str>,
    color: ColorMode,
) -> std::io::Result<()> {
    match value {
        Some(v) if color.enabled() => writeln!(w, "{}: {}", label.bold(), v.cyan()),
        Some(v) => writeln!(w, "{}: {}", label, v),
        None if color.enabled() => writeln!(w, "{}: {}", label.bold(), "(not found)".dimmed()),
        None => writeln!(w, "{}: (not found)", label),
    }
}

fn print_list(
    w: &mut dyn Write,
    label: &str,
    values: Option<&[String]>,
    color: ColorMode,
) -> std::io::Result<()> {
    match values {
        Some(values) if !values.is_empty() => {
            if color.enabled() {
                writeln!(w, "{}:", label.bold())?;
            } else {
                writeln!(w, "{}:", label)?;
            }
            for value in values {
                writeln!(w, "  • {}", value)?;
            }
            Ok(())
        }
        _ => print_scalar(w, label, None, color),
    }
}

/// Print the section segmentation of a document (debug view).
pub fn print_sections(
    w: &mut dyn Write,
    sections: &BTreeMap<String, Vec<String>>,
    color: ColorMode,
) -> std::io::Result<()> {
    if sections.is_empty() {
        writeln!(w, "No recognizable sections.")?;
        return Ok(());
    }
    for (name, lines) in sections {
        if color.enabled() {
            writeln!(w, "{} ({} lines)", name.bold(), lines.len())?;
        } else {
            writeln!(w, "{} ({} lines)", name, lines.len())?;
        }
        for line in lines {
            writeln!(w, "  {}", line)?;
        }
        writeln!(w)?;
    }
    Ok(())
}
