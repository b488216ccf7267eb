use std::collections::HashSet;

use sea_orm_migration::MigratorTrait;

/// Guard test to ensure all migrations have unique, well-formed
/// timestamped names: mYYYYMMDD_HHMMSS_description
///
/// Migrations are applied in the order the Migrator lists them, so the
/// timestamps must also be strictly increasing.
#[test]
fn migration_names_are_unique_and_well_formed() {
    use tuner_lineup::database::migrations::Migrator;

    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut problems: Vec<String> = Vec::new();

    for name in &names {
        if !is_valid_migration_name(name) {
            problems.push(format!("invalid name format: {name}"));
        }
        if !seen.insert(name.as_str()) {
            problems.push(format!("duplicate name: {name}"));
        }
    }

    for pair in names.windows(2) {
        if pair[0] >= pair[1] {
            problems.push(format!("out of order: {} before {}", pair[0], pair[1]));
        }
    }

    if !problems.is_empty() {
        panic!("Migration naming guard failed:\n  {}", problems.join("\n  "));
    }
}

/// m + 8 digits + '_' + 6 digits + '_' + [a-z0-9_]+
fn is_valid_migration_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('m') else {
        return false;
    };
    let parts: Vec<&str> = rest.split('_').collect();
    if parts.len() < 3 {
        return false;
    }

    let date = parts[0];
    let time = parts[1];
    let desc = parts[2..].join("_");

    date.len() == 8
        && date.chars().all(|c| c.is_ascii_digit())
        && time.len() == 6
        && time.chars().all(|c| c.is_ascii_digit())
        && !desc.is_empty()
        && desc
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
