use std::sync::OnceLock;

use regex::Regex;

/// Literal replacements applied in order. Later entries see the output of
/// earlier ones, so the order matters.
const REPLACEMENTS: &[(&str, &str)] = &[
    (" ", "_"),
    ("'", ""),
    ("\"", ""),
    (",", ""),
    (":", ""),
    ("/", "_"),
    ("(`", ""),
    (")", ""),
    ("(", ""),
    ("-", "_"),
];

fn underscore_runs() -> &'static Regex {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    RUNS.get_or_init(|| Regex::new("_{2,}").expect("underscore run pattern is valid"))
}

/// Converts a free-form item name into the marketplace url slug,
/// e.g. `Mirage Prime (Blueprint)` becomes `mirage_prime_blueprint`.
///
/// Characters outside the replacement table are passed through untouched.
pub fn normalize(raw: &str) -> String {
    let mut slug = raw.trim().to_lowercase();

    for (pattern, replacement) in REPLACEMENTS {
        slug = slug.replace(pattern, replacement);
    }

    underscore_runs().replace_all(&slug, "_").into_owned()
}
