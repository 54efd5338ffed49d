use std::fs;
use std::path::Path;

use keyshift::cli::run::run_with;
use keyshift::{Config, ValidationResult};

const FORM: &str = r#"export function FormCompositionItem() {
  const { t } = useTranslation();
  toast.error(t("compositionItem.loadError"));
  return (
    <form>
      <Label>{t("compositionItem.quantity")}</Label>
      <Select placeholder={t("compositionItem.select")} />
      <span>{t(`compositionItem.costTypes.${type}`)}</span>
      <Button>{t("composition.save")}</Button>
      <Button>{t("composition.cancel")}</Button>
      <p>{t("common.unrelated")}</p>
    </form>
  );
}
"#;

const MIGRATED: &str = r#"export function FormCompositionItem() {
  const { t } = useTranslation();
  toast.error(t("compositions.compositionItem.loadError"));
  return (
    <form>
      <Label>{t("compositions.compositionItem.quantity")}</Label>
      <Select placeholder={t("compositions.compositionItem.select")} />
      <span>{t(`compositions.compositionItem.costTypes.${type}`)}</span>
      <Button>{t("compositions.compositionDetails.save")}</Button>
      <Button>{t("compositions.compositionDetails.cancel")}</Button>
      <p>{t("common.unrelated")}</p>
    </form>
  );
}
"#;

fn config_in(dir: &Path, locale_json: &str) -> Config {
    let mut config = Config::default();
    config.paths.source = dir.join("FormCompositionItem.tsx");
    config.paths.locale = dir.join("principal.json");
    fs::write(&config.paths.source, FORM).unwrap();
    fs::write(&config.paths.locale, locale_json).unwrap();
    config
}

#[test]
fn run_migrates_source_and_accepts_valid_locale() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), r#"{"a": 1}"#);

    let (outcome, validation) = run_with(&config, false).unwrap();

    assert_eq!(validation, ValidationResult::Valid);
    assert_eq!(outcome.report.total(), 6);
    assert_eq!(fs::read_to_string(&config.paths.source).unwrap(), MIGRATED);
}

#[test]
fn invalid_locale_does_not_undo_migration() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), r#"{"a": 1"#);

    let (_, validation) = run_with(&config, false).unwrap();

    assert!(!validation.is_valid());
    assert_eq!(fs::read_to_string(&config.paths.source).unwrap(), MIGRATED);
}

#[test]
fn rerun_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "{}");

    run_with(&config, false).unwrap();
    let (outcome, _) = run_with(&config, false).unwrap();

    assert!(!outcome.report.changed());
    assert_eq!(fs::read_to_string(&config.paths.source).unwrap(), MIGRATED);
}

#[test]
fn missing_source_stops_before_validation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), "{}");
    config.paths.source = dir.path().join("missing.tsx");

    let err = run_with(&config, false).unwrap_err();
    assert!(err.to_string().contains("missing.tsx"));
}

#[test]
fn missing_locale_propagates_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), "{}");
    config.paths.locale = dir.path().join("missing.json");

    assert!(run_with(&config, false).is_err());
    assert_eq!(fs::read_to_string(&config.paths.source).unwrap(), MIGRATED);
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "{}");

    let (outcome, _) = run_with(&config, true).unwrap();

    assert!(!outcome.written);
    assert_eq!(outcome.content, MIGRATED);
    assert_eq!(fs::read_to_string(&config.paths.source).unwrap(), FORM);
}

#[test]
fn configured_table_replaces_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), "{}");
    config.replacements = vec![keyshift::Replacement::new(
        r#"t("common.unrelated")"#,
        r#"t("shared.unrelated")"#,
    )];

    let (outcome, _) = run_with(&config, false).unwrap();

    assert_eq!(outcome.report.total(), 1);
    let written = fs::read_to_string(&config.paths.source).unwrap();
    assert!(written.contains(r#"t("shared.unrelated")"#));
    assert!(written.contains(r#"t("compositionItem.select")"#));
}
