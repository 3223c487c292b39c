//! Utility-class composition shared by every widget.
//!
//! Widgets build their `class` attribute from an ordered fragment list: the
//! widget's base classes, the fragments selected by variant properties, and
//! the caller-supplied class string, in that order. When two classes target
//! the same CSS concern (same conflict group under the same modifier chain)
//! the later one wins, so caller classes override variant defaults.

use std::collections::HashSet;

/// Merges ordered class fragments into a final class string.
///
/// Later classes win over earlier classes in the same conflict group.
/// Classes without a recognized group are deduplicated verbatim. Surviving
/// classes keep the position of their last occurrence.
pub fn merge_class(fragments: &[&str]) -> String {
    let tokens: Vec<&str> = fragments
        .iter()
        .flat_map(|fragment| fragment.split_whitespace())
        .collect();
    let keys: Vec<String> = tokens.iter().map(|token| conflict_key(token)).collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(keys.len());
    let mut keep = vec![false; tokens.len()];
    for index in (0..tokens.len()).rev() {
        if seen.insert(keys[index].as_str()) {
            keep[index] = true;
        }
    }

    let mut merged = String::new();
    for (index, token) in tokens.iter().enumerate() {
        if !keep[index] {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(token);
    }
    merged
}

/// Conflict identity of one class token: modifier chain plus utility group.
///
/// Tokens without a recognized utility group conflict only with themselves.
fn conflict_key(class: &str) -> String {
    let (modifiers, utility) = match class.rfind(':') {
        Some(index) => class.split_at(index + 1),
        None => ("", class),
    };
    let bare = utility.strip_prefix('-').unwrap_or(utility);
    match utility_group(bare) {
        Some(group) => format!("{modifiers}{group}"),
        None => class.to_string(),
    }
}

const DISPLAY_KEYWORDS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "inline-table",
    "flow-root",
    "contents",
    "hidden",
];

const POSITION_KEYWORDS: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const DECORATION_KEYWORDS: &[&str] = &["underline", "overline", "line-through", "no-underline"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const BORDER_SIDES: &[&str] = &["t", "r", "b", "l", "x", "y", "s", "e"];

const CORNER_SIDES: &[&str] = &[
    "t", "r", "b", "l", "tl", "tr", "br", "bl", "ss", "se", "es", "ee", "s", "e",
];

/// Prefix-keyed groups. A class belongs to a group when it equals the prefix
/// or starts with `prefix-`; the longest matching prefix wins.
const PREFIX_GROUPS: &[&str] = &[
    "bg",
    "h",
    "w",
    "size",
    "min-h",
    "min-w",
    "max-h",
    "max-w",
    "p",
    "px",
    "py",
    "pt",
    "pr",
    "pb",
    "pl",
    "m",
    "mx",
    "my",
    "mt",
    "mr",
    "mb",
    "ml",
    "gap",
    "gap-x",
    "gap-y",
    "space-x",
    "space-y",
    "items",
    "justify",
    "content",
    "self",
    "place-items",
    "place-content",
    "z",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "inset-x",
    "inset-y",
    "opacity",
    "cursor",
    "select",
    "pointer-events",
    "touch",
    "whitespace",
    "overflow",
    "overflow-x",
    "overflow-y",
    "tracking",
    "leading",
    "underline-offset",
    "translate-x",
    "translate-y",
    "rotate",
    "scale",
    "transform",
    "transition",
    "duration",
    "ease",
    "delay",
    "animate",
    "outline",
    "shadow",
    "aspect",
    "object",
    "grid-cols",
    "grid-rows",
    "col",
    "row",
    "order",
    "basis",
    "fill",
    "stroke",
];

fn utility_group(bare: &str) -> Option<String> {
    if DISPLAY_KEYWORDS.contains(&bare) {
        return Some("display".to_string());
    }
    if POSITION_KEYWORDS.contains(&bare) {
        return Some("position".to_string());
    }
    if DECORATION_KEYWORDS.contains(&bare) {
        return Some("text-decoration".to_string());
    }
    if bare == "truncate" {
        return Some("text-overflow".to_string());
    }
    if bare == "visible" || bare == "invisible" || bare == "collapse" {
        return Some("visibility".to_string());
    }
    if bare == "grow" || bare == "grow-0" {
        return Some("grow".to_string());
    }
    if bare == "shrink" || bare == "shrink-0" {
        return Some("shrink".to_string());
    }

    if let Some(rest) = bare.strip_prefix("text-") {
        let base_value = rest.split('/').next().unwrap_or(rest);
        if FONT_SIZES.contains(&base_value) {
            return Some("font-size".to_string());
        }
        if TEXT_ALIGNMENTS.contains(&base_value) {
            return Some("text-align".to_string());
        }
        return Some("text-color".to_string());
    }

    if let Some(rest) = bare.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return Some("font-weight".to_string());
        }
        return Some("font-family".to_string());
    }

    if let Some(rest) = bare.strip_prefix("flex-") {
        return Some(match rest {
            "row" | "col" | "row-reverse" | "col-reverse" => "flex-direction".to_string(),
            "wrap" | "nowrap" | "wrap-reverse" => "flex-wrap".to_string(),
            _ => "flex".to_string(),
        });
    }

    if bare == "border" {
        return Some("border-w".to_string());
    }
    if let Some(rest) = bare.strip_prefix("border-") {
        if rest.chars().all(|ch| ch.is_ascii_digit()) {
            return Some("border-w".to_string());
        }
        let mut segments = rest.splitn(2, '-');
        let head = segments.next().unwrap_or(rest);
        let tail = segments.next();
        if BORDER_SIDES.contains(&head)
            && tail.map_or(true, |tail| tail.chars().all(|ch| ch.is_ascii_digit()))
        {
            return Some(format!("border-w-{head}"));
        }
        return Some("border-color".to_string());
    }

    if bare == "rounded" {
        return Some("rounded".to_string());
    }
    if let Some(rest) = bare.strip_prefix("rounded-") {
        let head = rest.splitn(2, '-').next().unwrap_or(rest);
        if CORNER_SIDES.contains(&head) {
            return Some(format!("rounded-{head}"));
        }
        return Some("rounded".to_string());
    }

    if bare == "ring" {
        return Some("ring-w".to_string());
    }
    if let Some(rest) = bare.strip_prefix("ring-offset-") {
        if rest.chars().all(|ch| ch.is_ascii_digit()) {
            return Some("ring-offset-w".to_string());
        }
        return Some("ring-offset-color".to_string());
    }
    if let Some(rest) = bare.strip_prefix("ring-") {
        if rest == "inset" || rest.chars().all(|ch| ch.is_ascii_digit()) {
            return Some("ring-w".to_string());
        }
        return Some("ring-color".to_string());
    }

    let mut best: Option<&str> = None;
    for prefix in PREFIX_GROUPS {
        let matches = bare == *prefix
            || (bare.len() > prefix.len()
                && bare.starts_with(prefix)
                && bare.as_bytes()[prefix.len()] == b'-');
        if matches && best.map_or(true, |current| prefix.len() > current.len()) {
            best = Some(prefix);
        }
    }
    best.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_fragment_wins_within_a_group() {
        assert_eq!(merge_class(&["p-4", "p-2"]), "p-2");
        assert_eq!(merge_class(&["bg-primary text-sm", "bg-muted"]), "text-sm bg-muted");
    }

    #[test]
    fn caller_classes_override_variant_defaults() {
        let merged = merge_class(&[
            "inline-flex rounded-md bg-primary text-primary-foreground",
            "custom-class bg-destructive",
        ]);
        assert_eq!(
            merged,
            "inline-flex rounded-md text-primary-foreground custom-class bg-destructive"
        );
    }

    #[test]
    fn modifier_chains_conflict_independently() {
        assert_eq!(
            merge_class(&["hover:bg-primary bg-muted", "hover:bg-accent"]),
            "bg-muted hover:bg-accent"
        );
    }

    #[test]
    fn unknown_classes_deduplicate_verbatim() {
        assert_eq!(merge_class(&["custom-class", "custom-class other"]), "custom-class other");
    }

    #[test]
    fn border_width_and_color_do_not_conflict() {
        assert_eq!(merge_class(&["border border-input"]), "border border-input");
        assert_eq!(
            merge_class(&["border-input", "border-destructive"]),
            "border-destructive"
        );
    }

    #[test]
    fn font_size_and_text_color_do_not_conflict() {
        assert_eq!(merge_class(&["text-sm text-primary"]), "text-sm text-primary");
        assert_eq!(merge_class(&["text-xs", "text-sm"]), "text-sm");
        assert_eq!(merge_class(&["text-primary/90", "text-xs"]), "text-primary/90 text-xs");
    }

    #[test]
    fn display_keywords_share_one_group() {
        assert_eq!(merge_class(&["inline-flex", "flex"]), "flex");
        assert_eq!(merge_class(&["flex", "flex-col"]), "flex flex-col");
    }

    #[test]
    fn negative_values_conflict_with_positive_values() {
        assert_eq!(merge_class(&["-translate-x-2", "translate-x-0"]), "translate-x-0");
    }

    #[test]
    fn sided_radii_and_widths_stay_separate() {
        assert_eq!(merge_class(&["rounded-md rounded-t-none"]), "rounded-md rounded-t-none");
        assert_eq!(merge_class(&["border-t border-t-2"]), "border-t-2");
    }

    #[test]
    fn empty_fragments_are_ignored() {
        assert_eq!(merge_class(&["", "px-3", ""]), "px-3");
        assert_eq!(merge_class(&[]), "");
    }

    #[test]
    fn data_state_variants_conflict_within_their_modifier() {
        assert_eq!(
            merge_class(&[
                "data-[state=checked]:bg-primary",
                "data-[state=checked]:bg-destructive"
            ]),
            "data-[state=checked]:bg-destructive"
        );
    }
}
