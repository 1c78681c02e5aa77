//! Renders palettes as CSS custom properties for a styling layer.

use crate::scale::Palette;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid custom property prefix '{0}'")]
    InvalidPrefix(String),
    #[error("selector must not be empty")]
    EmptySelector,
}

fn validate_prefix(prefix: &str) -> Result<(), TokenError> {
    let valid = !prefix.is_empty()
        && prefix
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');

    if valid {
        Ok(())
    } else {
        Err(TokenError::InvalidPrefix(prefix.to_string()))
    }
}

/// One `--{prefix}-{step}: {color};` declaration per line, lightest first.
///
/// A base color supplied without its `#` gets one here so the value stays
/// valid CSS; its case is left alone.
pub fn css_custom_properties(prefix: &str, palette: &Palette) -> Result<String, TokenError> {
    validate_prefix(prefix)?;

    let mut out = String::new();
    for (step, color) in palette.iter() {
        let hash = if color.starts_with('#') { "" } else { "#" };
        out.push_str(&format!("--{prefix}-{step}: {hash}{color};\n"));
    }
    Ok(out)
}

/// Wraps the custom properties of `palette` in a `selector { ... }` block.
pub fn css_rule(selector: &str, prefix: &str, palette: &Palette) -> Result<String, TokenError> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(TokenError::EmptySelector);
    }

    let declarations = css_custom_properties(prefix, palette)?;

    let mut out = String::with_capacity(declarations.len() + selector.len() + 64);
    out.push_str(&format!("{selector} {{\n"));
    for line in declarations.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::generate_palette;

    #[test]
    fn emits_one_declaration_per_step() {
        let css = css_custom_properties("brand", &Palette::fallback()).expect("render css");
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "--brand-50: #f8fafc;");
        assert_eq!(lines[5], "--brand-500: #64748b;");
        assert_eq!(lines[10], "--brand-950: #020617;");
    }

    #[test]
    fn base_step_keeps_case_and_gains_hash() {
        let css = css_custom_properties("accent", &generate_palette("3B82F6")).expect("render css");
        assert!(css.contains("--accent-500: #3B82F6;"));
    }

    #[test]
    fn rule_wraps_declarations() {
        let rule = css_rule(":root", "brand", &Palette::fallback()).expect("render rule");
        assert!(rule.starts_with(":root {\n  --brand-50: #f8fafc;\n"));
        assert!(rule.ends_with("  --brand-950: #020617;\n}\n"));
    }

    #[test]
    fn rejects_bad_prefix_and_selector() {
        let palette = Palette::fallback();
        assert_eq!(
            css_custom_properties("", &palette),
            Err(TokenError::InvalidPrefix(String::new()))
        );
        assert_eq!(
            css_custom_properties("brand color", &palette),
            Err(TokenError::InvalidPrefix("brand color".into()))
        );
        assert_eq!(
            css_rule("  ", "brand", &palette),
            Err(TokenError::EmptySelector)
        );
    }
}
