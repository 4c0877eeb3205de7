//! Property-based tests for unresolved-placeholder aggregation across a
//! whole generation run.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use groundwork_config::ProjectConfig;
use groundwork_generation::ProjectGenerator;
use groundwork_templates::DefaultTable;

fn config() -> ProjectConfig {
    ProjectConfig {
        project_name: "fixture-project".to_string(),
        description: "Fixture project for property tests".to_string(),
        ..Default::default()
    }
}

/// Strategy for placeholder names outside the context's namespace: the
/// render context only ever holds SCREAMING_SNAKE keys, so lowercase names
/// with a marker prefix can never collide with it.
fn foreign_name_strategy() -> impl Strategy<Value = String> {
    "zz_[a-z]{1,8}".prop_map(|s| s.to_string())
}

proptest! {
    /// Property: the report's unresolved set is exactly the union of the
    /// per-file unresolved sets.
    #[test]
    fn prop_report_unresolved_is_union_of_files(
        names in prop::collection::btree_set(foreign_name_strategy(), 1..4),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let template_dir = temp_dir.path().join("templates");
        fs::create_dir(&template_dir).unwrap();

        for (index, name) in names.iter().enumerate() {
            fs::write(
                template_dir.join(format!("file{index}.txt.tpl")),
                format!("value: ${name}\n"),
            )
            .unwrap();
        }

        let destination = temp_dir.path().join("out");
        let generator = ProjectGenerator::new(&template_dir, DefaultTable::standard());
        let report = generator.generate(&config(), &destination).unwrap();

        let union: BTreeSet<String> = report
            .files
            .iter()
            .flat_map(|file| file.unresolved.iter().cloned())
            .collect();
        prop_assert_eq!(&report.unresolved, &union);
        prop_assert_eq!(&report.unresolved, &names);
    }

    /// Property: names satisfied by the default table never reach the
    /// report, names satisfied by nothing always do.
    #[test]
    fn prop_default_table_names_never_surface(
        missing in foreign_name_strategy(),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let template_dir = temp_dir.path().join("templates");
        fs::create_dir(&template_dir).unwrap();
        fs::write(
            template_dir.join("notes.md.tpl"),
            format!("author: $AUTHOR\nmissing: ${missing}\n"),
        )
        .unwrap();

        let destination = temp_dir.path().join("out");
        let generator = ProjectGenerator::new(&template_dir, DefaultTable::standard());
        let report = generator.generate(&config(), &destination).unwrap();

        prop_assert!(!report.unresolved.contains("AUTHOR"));
        prop_assert!(report.unresolved.contains(&missing));

        let notes = fs::read_to_string(destination.join("notes.md")).unwrap();
        prop_assert!(notes.contains("author: Developer"));
        let missing_token = format!("${}", missing);
        prop_assert!(notes.contains(&missing_token));
    }
}
