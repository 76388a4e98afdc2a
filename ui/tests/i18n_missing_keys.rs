use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Locale completeness checks for `fasttrack-ui.ftl`.
///
/// Keys are found with a line heuristic: `id = ...` at the start of a line,
/// ignoring comments, attributes, terms and selector variants.
const EN_US: &str = include_str!("../i18n/en-US/fasttrack-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/fasttrack-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn every_source_lookup_has_a_fallback_message() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let used = keys_used_in_sources(&src_root);
    assert!(!used.is_empty(), "no t!(..) lookups found under {src_root:?}");

    let missing: BTreeSet<_> = used.difference(&fallback_keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "t!(..) keys missing from en-US: {missing:?}"
    );
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-', '*', '[']))
        .filter_map(|line| line.split_once('='))
        .map(|(left, _)| left.trim())
        .filter(|key| !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')))
        .map(str::to_string)
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = src
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-', '*', '[']))
        .filter_map(|line| line.split_once('=').map(|(left, _)| left.trim().to_string()))
        .filter(|key| !key.is_empty() && !seen.insert(key.clone()))
        .collect();

    assert!(dups.is_empty(), "Duplicate key definitions in {locale}: {dups:?}");
}

fn keys_used_in_sources(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, needle) in content.match_indices("t!(\"") {
            // Skip `format!(`, `print!(` and friends.
            let standalone = content[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_');
            if !standalone {
                continue;
            }
            let rest = &content[idx + needle.len()..];
            if let Some(end) = rest.find('"') {
                found.insert(rest[..end].to_string());
            }
        }
    }

    found
}
