use chrono::NaiveDateTime;

use crate::models::tech_spec::TechSpec;

pub const REPORT_TITLE: &str = "ZOROASTERVERS ANDROID E-BOOK READER";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One printed section of the specification sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub icon: &'static str,
    pub title: &'static str,
    /// Top-level JSON key the section is drawn from
    pub key: &'static str,
    pub lines: Vec<String>,
}

impl ReportSection {
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// Human-readable listing of a [`TechSpec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReport {
    pub title: &'static str,
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

impl SpecReport {
    pub fn build(spec: &TechSpec, generated_at: NaiveDateTime) -> Self {
        let stack = &spec.technology_stack;
        let room = &spec.data_architecture.local_storage.room_database;

        let sections = vec![
            ReportSection {
                icon: "📱",
                title: "PROJECT OVERVIEW",
                key: "project_info",
                lines: key_values(&spec.project_info.entries()),
            },
            ReportSection {
                icon: "🚀",
                title: "CORE FEATURES",
                key: "core_features",
                lines: spec.core_features
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| format!("{}. {}", i + 1, feature))
                    .collect(),
            },
            ReportSection {
                icon: "⚙️",
                title: "TECHNOLOGY STACK",
                key: "technology_stack",
                lines: [
                    format!("Language: {}", stack.language),
                    format!("UI Framework: {}", stack.ui_framework),
                    format!("Dependency Injection: {}", stack.dependency_injection),
                    "Architecture Components:".to_string(),
                ]
                    .into_iter()
                    .chain(bullets(&stack.architecture_components))
                    .collect(),
            },
            ReportSection {
                icon: "💾",
                title: "DATA ARCHITECTURE",
                key: "data_architecture",
                lines: vec![
                    "Local Storage (Room Database):".to_string(),
                    format!("  Entities: {}", room.entities.join(", ")),
                    format!("  DAOs: {}", room.daos.join(", "))
                ],
            },
            ReportSection {
                icon: "📱",
                title: "UI STRUCTURE",
                key: "ui_structure",
                lines: std::iter::once("Screens:".to_string())
                    .chain(bullets(&spec.ui_structure.screens))
                    .collect(),
            },
            ReportSection {
                icon: "📡",
                title: "OFFLINE CAPABILITIES",
                key: "offline_capabilities",
                lines: key_values(&spec.offline_capabilities.entries()),
            }
        ];

        Self {
            title: REPORT_TITLE,
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            sections,
        }
    }

    /// The report as plain text, one line per entry, no colors
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');
        out.push_str(&"=".repeat(50));
        out.push('\n');
        out.push_str(&format!("Generated: {}\n", self.generated_at));
        for section in &self.sections {
            out.push_str(&format!("\n{}\n", section.heading()));
            out.push_str(&"-".repeat(20));
            out.push('\n');
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

/// Lines to print for one report entry.
///
/// With no terminal width (output redirected) the entry stays on one line.
pub fn wrap_entry(line: &str, width: Option<usize>) -> Vec<String> {
    let Some(width) = width else {
        return vec![line.to_string()];
    };
    let indent = " ".repeat(line.len() - line.trim_start().len() + 2);
    let options = textwrap::Options::new(width).subsequent_indent(&indent);
    textwrap::wrap(line, options)
        .into_iter()
        .map(|wrapped| wrapped.into_owned())
        .collect()
}

/// `target_android_version` -> `Target Android Version`
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn key_values(entries: &[(&str, &str)]) -> Vec<String> {
    entries
        .iter()
        .map(|(key, value)| format!("{}: {}", title_case_key(key), value))
        .collect()
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("  • {}", item))
}
