//! Library integration tests.

use reqaudit::audit::{AuditConfig, AuditEngine, DiagnosticKind, RuleRegistry};
use reqaudit::manifest::{parse_line, Manifest, ManifestPaths};
use reqaudit::report::{HumanFormatter, ReportFormatter};
use reqaudit::AuditError;

#[test]
fn error_types_are_public() {
    let err = AuditError::ManifestRead {
        path: "reqs.txt".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("reqs.txt"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> reqaudit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use reqaudit::cli::Cli;
    use reqaudit::report::OutputFormat;

    let cli = Cli::parse_from(["reqaudit", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn parse_line_is_public() {
    assert_eq!(parse_line("torch>=2.0"), Some("torch"));
    assert_eq!(parse_line("# comment"), None);
}

#[test]
fn manifest_paths_follow_project_layout() {
    let paths = ManifestPaths::discover(std::path::Path::new("proj"));
    assert!(paths.primary.ends_with("python-requirements.txt"));
    assert!(paths.supplementary.ends_with("scripts/python-requirements-ml.txt"));
}

#[test]
fn duplicate_precedes_later_diagnostics() {
    let primary = Manifest::parse("python-requirements.txt", "flask\nflask\ntorch\n");
    let extras = Manifest::parse("scripts/python-requirements-ml.txt", "");

    let report = AuditEngine::default().run(&primary, &extras);

    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::Duplicate);
    assert_eq!(report.diagnostics[1].kind, DiagnosticKind::HeavyInMain);
}

#[test]
fn known_sets_can_be_extended_in_code() {
    let mut config = AuditConfig::default();
    config.stdlib_names.insert("json".to_string());
    let engine = AuditEngine::with_registry(RuleRegistry::with_builtins(), config);

    let primary = Manifest::parse("python-requirements.txt", "json\n");
    let extras = Manifest::parse("scripts/python-requirements-ml.txt", "");
    let report = engine.run(&primary, &extras);

    let mut output = Vec::new();
    HumanFormatter::new().format(&report, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "STDLIB_AS_DEP: json\n");
}
