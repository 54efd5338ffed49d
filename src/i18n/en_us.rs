// ============================================================================
// KeyShift - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Migration related
    ("migrate.start", "Migrating translation keys in {}"),
    ("migrate.success", "{} translations updated successfully!"),
    ("migrate.dry_run", "Dry run: {} would receive {} replacements"),
    ("migrate.total", "{} replacements across {} patterns"),
    ("migrate.hit", "{} x{} -> {}"),
    (
        "migrate.chained_warning",
        "Replacement #{} output contains pattern #{} ({}), it will be rewritten again",
    ),
    // Validation related
    ("validate.start", "Validating locale file {}"),
    ("validate.valid", "JSON file is valid!"),
    ("validate.invalid", "JSON validation error: {}"),
    // Error messages
    ("error.failed", "{}"),
    // Init related
    ("init.config_exists", "Config file already exists: {}"),
    ("init.existing_invalid", "Existing config cannot be parsed: {}"),
    (
        "init.use_force_hint",
        "Use --force to replace it with the built-in template",
    ),
    (
        "init.replaced_invalid",
        "Replaced a config file that could not be parsed: {}",
    ),
    (
        "init.config_created",
        "Config file created: {} ({} [[replacements]] entries)",
    ),
    ("init.create_failed", "Failed to create config file: {}"),
    (
        "init.next_steps",
        "Edit the [[replacements]] entries to describe your own key moves",
    ),
];
