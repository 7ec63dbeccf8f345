// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona shared by every environmental prompt.
pub const CONSULTANT_PERSONA: &str =
    "You are an expert AI environmental consultant specializing in corporate carbon footprints.";

/// Builds a system prompt from the consultant persona and the JSON-only rules.
pub fn consultant_system() -> String {
    format!("{CONSULTANT_PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Substitutes every `{key}` placeholder in `template`.
///
/// Unknown placeholders are left untouched so literal JSON braces in a
/// template survive rendering.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Formats a metric without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_occurrences() {
        let out = render("{a} and {a} but {b}", &[("a", "x".to_string())]);
        assert_eq!(out, "x and x but {b}");
    }

    #[test]
    fn test_render_keeps_json_braces() {
        let out = render(r#"{ "monthName": "{month}" }"#, &[("month", "July".to_string())]);
        assert_eq!(out, r#"{ "monthName": "July" }"#);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10000.0), "10000");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn test_consultant_system_demands_json() {
        assert!(consultant_system().contains("valid JSON only"));
    }
}
