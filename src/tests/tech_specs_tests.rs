#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use log::{ debug, info };

    use crate::errors::DocsError;
    use crate::implementations::checks::check_spec;
    use crate::implementations::report::{ title_case_key, wrap_entry, SpecReport };
    use crate::implementations::tech_specs::{ tech_specs, to_json_string, write_spec_json };
    use crate::models::tech_spec::TechSpec;

    fn setup() {
        // Logger may already be initialized by another test
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn fixed_report(spec: &TechSpec) -> SpecReport {
        let generated_at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid timestamp");
        SpecReport::build(spec, generated_at)
    }

    #[test]
    fn test_json_round_trip() {
        setup();
        let spec = tech_specs();
        let json = to_json_string(&spec).expect("serialize");
        let parsed: TechSpec = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_json_is_deterministic() {
        let first = to_json_string(&tech_specs()).unwrap();
        let second = to_json_string(&tech_specs()).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_json_layout() {
        let json = to_json_string(&tech_specs()).unwrap();
        assert!(
            json.starts_with(
                "{\n  \"project_info\": {\n    \"name\": \"Zoroastervers Android E-book Reader\","
            )
        );
        assert!(json.ends_with("\n}"), "no trailing newline after the closing brace");
        assert!(json.contains("\"/chapters/{issue_slug}/{chapter_identifier}\""));
    }

    #[test]
    fn test_section_keys_in_authored_order() {
        let json = to_json_string(&tech_specs()).unwrap();
        let positions = TechSpec::SECTION_KEYS.iter()
            .map(|key| json.find(&format!("\n  \"{}\":", key)).expect(key))
            .collect::<Vec<_>>();
        debug!("Section key positions: {:?}", positions);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        let mut spec = tech_specs();
        spec.project_info.name = "Zoroastervers Édition 📖".to_string();
        let json = to_json_string(&spec).unwrap();
        assert!(json.contains("Zoroastervers Édition 📖"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_literal_contents() {
        let spec = tech_specs();
        assert_eq!(spec.core_features.len(), 10);
        assert_eq!(spec.technology_stack.architecture_components.len(), 6);
        assert_eq!(spec.data_architecture.local_storage.room_database.entities.len(), 8);
        assert_eq!(spec.data_architecture.local_storage.room_database.daos.len(), 6);
        assert_eq!(spec.data_architecture.remote_integration.endpoints.len(), 8);
        assert_eq!(spec.ui_structure.screens.len(), 8);
        assert_eq!(spec.project_info.version, "1.0.0");
    }

    #[test]
    fn test_report_sections_match_json_keys() {
        let spec = tech_specs();
        let report = fixed_report(&spec);
        let keys = report.sections.iter().map(|s| s.key).collect::<Vec<_>>();
        assert_eq!(keys, TechSpec::SECTION_KEYS.to_vec());

        let json = to_json_string(&spec).unwrap();
        for key in keys {
            assert!(json.contains(&format!("\"{}\":", key)), "missing {}", key);
        }
    }

    #[test]
    fn test_report_text() {
        setup();
        let report = fixed_report(&tech_specs());
        let text = report.render_plain();
        info!("Rendered report with {} lines", text.lines().count());

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "ZOROASTERVERS ANDROID E-BOOK READER");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "Generated: 2024-01-02 03:04:05");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "📱 PROJECT OVERVIEW");
        assert_eq!(lines[5], "-".repeat(20));
        assert_eq!(lines[6], "Name: Zoroastervers Android E-book Reader");

        assert!(text.contains("\nTarget Android Version: API 24+ (Android 7.0+)\n"));
        assert!(text.contains("\n1. Chapter-based reading with progress tracking\n"));
        assert!(text.contains("\n10. Search functionality\n"));
        assert!(text.contains("\nDependency Injection: Hilt\nArchitecture Components:\n  • Room Database\n"));
        assert!(
            text.contains(
                "\n  Entities: Chapter, ReadingProgress, User, Subscription, Character, TimelineEvent, Bookmark, Note\n"
            )
        );
        assert!(text.contains("\nScreens:\n  • SplashScreen\n"));
        assert!(text.ends_with("Background Sync: WorkManager periodic sync every 15 minutes\n"));
    }

    #[test]
    fn test_entries_stay_whole_without_terminal() {
        let report = fixed_report(&tech_specs());
        let entities = report.sections
            .iter()
            .flat_map(|section| section.lines.iter())
            .find(|line| line.starts_with("  Entities:"))
            .expect("entities line");
        assert!(entities.len() > 80);

        assert_eq!(wrap_entry(entities, None), vec![entities.clone()]);

        let printed = report.sections
            .iter()
            .flat_map(|section| section.lines.iter())
            .flat_map(|line| wrap_entry(line, None))
            .collect::<Vec<_>>();
        let listed = report.sections
            .iter()
            .flat_map(|section| section.lines.iter().cloned())
            .collect::<Vec<_>>();
        assert_eq!(printed, listed);
    }

    #[test]
    fn test_entries_wrap_on_narrow_terminal() {
        let line = "  Entities: Chapter, ReadingProgress, User, Subscription, Character, TimelineEvent";
        let wrapped = wrap_entry(line, Some(40));
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|part| part.len() <= 40));
        assert!(wrapped[1].starts_with("    "));
        assert_eq!(wrap_entry("Language: Kotlin", Some(40)), vec!["Language: Kotlin".to_string()]);
    }

    #[test]
    fn test_title_case_key() {
        assert_eq!(title_case_key("target_android_version"), "Target Android Version");
        assert_eq!(title_case_key("name"), "Name");
        assert_eq!(title_case_key("conflict_resolution"), "Conflict Resolution");
    }

    #[test]
    fn test_write_spec_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("android_app_specs.json");
        let spec = tech_specs();

        write_spec_json(&spec, &path).expect("write");

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_string(&spec).unwrap());
    }

    #[test]
    fn test_write_spec_json_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = write_spec_json(&tech_specs(), &blocker.join("specs.json"));
        assert!(matches!(result, Err(DocsError::Io(_))));
    }

    #[test]
    fn test_check_spec_passes() {
        let spec = tech_specs();
        let check = check_spec(&spec, &fixed_report(&spec)).unwrap();
        assert!(check.round_trips);
        assert!(check.deterministic);
        assert!(check.missing_keys.is_empty());
        assert!(check.is_ok());
    }

    #[test]
    fn test_check_spec_reports_unknown_section() {
        let spec = tech_specs();
        let mut report = fixed_report(&spec);
        report.sections[0].key = "project_overview";
        let check = check_spec(&spec, &report).unwrap();
        assert_eq!(check.missing_keys, vec!["project_overview"]);
        assert!(!check.is_ok());
    }
}
