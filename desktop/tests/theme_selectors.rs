#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The reader markup in `ui` relies on these classes being defined in the shared
theme (`ui/assets/theme/main.css`). Desktop builds embed the theme, so a renamed
selector would silently unstyle the packaged app. A substring check is enough
as an early warning.

When a component's class names change, update REQUIRED_SELECTORS alongside it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    ":root.dark",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Reader shell & toolbar
    ".reader {",
    ".reader.theme-dark",
    ".reader-toolbar",
    ".reader-toolbar__actions",
    ".reader-field__label",
    ".reader-field__input",
    ".reader-field--range",
    // Verse card
    ".reader-card",
    ".reader-card__placeholder",
    ".reader-card__error",
    ".reader-verse__header",
    ".reader-verse__arabic",
    ".reader-verse__image",
    ".reader-verse__translation",
    ".reader-verse__counter",
    ".reader-verse--stale",
    ".reader-pager",
    // Search
    ".reader-search__form",
    ".reader-search__input",
    ".reader-search__results",
    ".reader-search__result",
    ".reader-search__reference",
    ".reader-search__preview",
    // Toast & footer
    ".toast {",
    ".toast__dismiss",
    ".footer {",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars); \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn dark_palette_overrides_base_tokens() {
    let dark = THEME_CSS
        .split(":root.dark {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect(":root.dark block present");
    for token in ["--color-bg", "--color-text", "--color-surface"] {
        assert!(dark.contains(token), "dark palette does not override {token}");
    }
}
