//! Integration test: team list on disk → signatures in an output directory.

mod common;

use sigsmith_core::batch::{self, BatchError};
use sigsmith_core::config::Configuration;
use sigsmith_core::error::GenerationError;
use sigsmith_core::storage::{temp_path, DirectorySink};
use sigsmith_core::team::{self, TeamListError};
use std::fs;

use common::{member, Workspace, TEMPLATE};

#[test]
fn team_file_produces_one_signature_per_member() {
    let ws = Workspace::new();
    let team_path = ws.write_team(&format!(
        "[{},{}]",
        member("Jane Doe", "jane@x.com", "jane.jpg"),
        member("John Roe", "john@x.com", "john.jpg")
    ));

    let entries = team::load_team(&team_path).unwrap();
    let cfg = Configuration::new("https://cdn.example.com/assets/").unwrap();
    let mut sink = DirectorySink::create(&ws.output_dir()).unwrap();
    let report = batch::generate_all(&entries, TEMPLATE, &cfg, &mut sink).unwrap();

    assert_eq!(report.succeeded(), 2);
    let jane = fs::read_to_string(ws.output_dir().join("signature-jane-doe.html")).unwrap();
    assert!(jane.contains("<strong>Jane Doe</strong>"));
    assert!(jane.contains(r#"href="tel:+15551234567">+1 (555) 123-4567</a>"#));
    assert!(jane.contains(r#"src="https://cdn.example.com/assets/jane.jpg""#));
    assert!(jane.contains(r#"src="https://cdn.example.com/assets/spendrule-logo.png""#));
    assert!(!jane.contains("{{"));
    assert!(ws.output_dir().join("signature-john-roe.html").exists());
}

#[test]
fn unwritable_target_skips_only_that_member() {
    let ws = Workspace::new();
    let team_path = ws.write_team(&format!(
        "[{},{},{}]",
        member("Ann Lee", "ann@x.com", "ann.jpg"),
        member("Bob Stone", "bob@x.com", "bob.jpg"),
        member("Cy Young", "cy@x.com", "cy.jpg")
    ));
    // A directory squatting on Bob's output name makes the final rename fail.
    fs::create_dir_all(ws.output_dir().join("signature-bob-stone.html")).unwrap();

    let entries = team::load_team(&team_path).unwrap();
    let cfg = Configuration::new("https://x").unwrap();
    let mut sink = DirectorySink::create(&ws.output_dir()).unwrap();
    let report = batch::generate_all(&entries, TEMPLATE, &cfg, &mut sink).unwrap();

    assert_eq!(report.succeeded(), 2);
    let (label, err) = report.failures().next().unwrap();
    assert_eq!(label, "Bob Stone");
    assert!(matches!(err, GenerationError::Write { .. }));
    assert!(ws.output_dir().join("signature-ann-lee.html").is_file());
    assert!(ws.output_dir().join("signature-cy-young.html").is_file());
    assert!(!temp_path(&ws.output_dir().join("signature-bob-stone.html")).exists());
}

#[test]
fn invalid_member_reported_by_name() {
    let ws = Workspace::new();
    let team_path = ws.write_team(&format!(
        "[{},{}]",
        member("Jane Doe", "jane@x.com", "jane.jpg"),
        member("Bad Email", "nobody", "bad.jpg")
    ));

    let entries = team::load_team(&team_path).unwrap();
    let cfg = Configuration::new("https://x").unwrap();
    let mut sink = DirectorySink::create(&ws.output_dir()).unwrap();
    let report = batch::generate_all(&entries, TEMPLATE, &cfg, &mut sink).unwrap();

    assert_eq!(report.succeeded(), 1);
    let (label, err) = report.failures().next().unwrap();
    assert_eq!(label, "Bad Email");
    assert!(matches!(err, GenerationError::Validation(_)));
    assert!(!ws.output_dir().join("signature-bad-email.html").exists());
}

#[test]
fn empty_team_list_is_fatal_and_writes_nothing() {
    let ws = Workspace::new();
    let team_path = ws.write_team("[]");
    let err = team::load_team(&team_path).unwrap_err();
    assert!(matches!(err, TeamListError::Invalid { .. }));

    let cfg = Configuration::new("https://x").unwrap();
    let mut sink = DirectorySink::create(&ws.output_dir()).unwrap();
    let err = batch::generate_all(&[], TEMPLATE, &cfg, &mut sink).unwrap_err();
    assert_eq!(err, BatchError::EmptyTeamList);
    assert_eq!(fs::read_dir(ws.output_dir()).unwrap().count(), 0);
}

#[test]
fn missing_team_file_is_fatal() {
    let ws = Workspace::new();
    let err = team::load_team(&ws.path().join("team.json")).unwrap_err();
    assert!(matches!(err, TeamListError::Missing { .. }));
}
