#![forbid(unsafe_code)]

//! Plain-text resume export.
//!
//! The terminal cannot print, so "download resume" writes a text rendition
//! of the full document next to the working directory instead.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::content;

/// File name the export lands in.
pub const RESUME_FILE: &str = "folio-resume.txt";

fn heading(out: &mut String, text: &str) {
    let _ = writeln!(out, "\n{text}");
    let _ = writeln!(out, "{}", "=".repeat(text.width()));
}

/// Render the resume as plain text.
#[must_use]
pub fn render_resume() -> String {
    let profile = content::PROFILE;
    let mut out = String::new();

    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", profile.role);
    let _ = writeln!(out, "{} | {} | {}", profile.location, profile.email, profile.phone);
    let _ = writeln!(out, "{}", profile.github);
    let _ = writeln!(out, "{}", profile.linkedin);

    heading(&mut out, "Summary");
    let _ = writeln!(out, "{}", profile.summary);

    heading(&mut out, "Technical Strengths");
    for strength in profile.strengths {
        let _ = writeln!(out, "- {strength}");
    }

    heading(&mut out, "Skills");
    for category in content::SKILL_CATEGORIES {
        let _ = writeln!(out, "{}: {}", category.category, category.skills.join(", "));
    }

    heading(&mut out, "Projects");
    for project in content::PROJECTS {
        let _ = writeln!(out, "\n{} ({})", project.title, project.subtitle);
        let _ = writeln!(out, "Tech: {}", project.tech.join(", "));
        for point in project.points {
            let _ = writeln!(out, "- {point}");
        }
    }

    heading(&mut out, "Education");
    let edu = content::EDUCATION;
    let _ = writeln!(out, "{} in {} ({})", edu.degree, edu.field, edu.years);
    let _ = writeln!(out, "{}, {}", edu.institution, edu.location);
    let _ = writeln!(out, "{}", edu.graduation);

    heading(&mut out, "Relevant Coursework");
    let _ = writeln!(out, "{}", content::COURSEWORK.join(", "));

    heading(&mut out, "Self-Learning");
    for item in content::SELF_LEARNING {
        let _ = writeln!(out, "- {item}");
    }

    out
}

/// Write the resume into `dir`, returning the file's path.
pub fn write_resume(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(RESUME_FILE);
    fs::write(&path, render_resume())?;
    info!(path = %path.display(), "resume exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendition_covers_every_section() {
        let text = render_resume();
        for needle in [
            "Prajapati Jayesh R.",
            "Summary",
            "Technical Strengths",
            "Skills",
            "TSLA Stock Time-Series Forecasting",
            "Education",
            "Sigma Institute of Technology",
            "Relevant Coursework",
            "Self-Learning",
        ] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn headings_are_underlined_to_width() {
        let text = render_resume();
        let mut lines = text.lines();
        while let Some(line) = lines.next() {
            if line == "Summary" {
                assert_eq!(lines.next(), Some("======="));
                return;
            }
        }
        panic!("no Summary heading");
    }

    #[test]
    fn export_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_resume(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), RESUME_FILE);
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, render_resume());
    }
}
