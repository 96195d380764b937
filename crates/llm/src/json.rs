/// Extract JSON from an LLM response, handling markdown code blocks.
///
/// Models regularly ignore "no markdown" instructions, so ```` ```json ````
/// and bare ```` ``` ```` fences (with any language tag) are stripped, as is
/// prose around a bare object.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    // Handle ```json ... ``` blocks
    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            return trimmed[json_start..json_start + end].trim();
        }
    }

    // Handle ``` ... ``` blocks
    if let Some(start) = trimmed.find("```") {
        let json_start = start + 3;
        // Skip past any language identifier on the same line
        let after_tick = &trimmed[json_start..];
        let content_start = after_tick.find('\n').map_or(0, |n| n + 1);
        if let Some(end) = after_tick[content_start..].find("```") {
            return after_tick[content_start..content_start + end].trim();
        }
    }

    // Try raw JSON (starts with {)
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if end > start {
                return &trimmed[start..=end];
            }
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_raw() {
        let input = r#"{"trends": []}"#;
        assert_eq!(extract_json(input), r#"{"trends": []}"#);
    }

    #[test]
    fn extract_json_code_block() {
        let input = "```json\n{\"trends\": []}\n```";
        assert_eq!(extract_json(input), r#"{"trends": []}"#);
    }

    #[test]
    fn extract_json_bare_fence_with_other_tag() {
        let input = "```JSON\n{\"trends\": []}\n```\n";
        assert_eq!(extract_json(input), r#"{"trends": []}"#);
    }

    #[test]
    fn extract_json_bare_fence_no_tag() {
        let input = "  ```\n{\"trends\": [\"a\"]}\n```  ";
        assert_eq!(extract_json(input), r#"{"trends": ["a"]}"#);
    }

    #[test]
    fn extract_json_unterminated_fence() {
        let input = "```json\n{\"trends\": []}";
        assert_eq!(extract_json(input), r#"{"trends": []}"#);
    }

    #[test]
    fn extract_json_with_prefix() {
        let input = "Sure! Here's the analysis: {\"trends\": []} Hope it helps.";
        assert_eq!(extract_json(input), r#"{"trends": []}"#);
    }

    #[test]
    fn extract_json_plain_text_passthrough() {
        assert_eq!(extract_json("  no json here \n"), "no json here");
    }
}
