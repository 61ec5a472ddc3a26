//! System prompt template for the analyst agent.

use crate::tools::ToolRegistry;

/// Build the system prompt with the answer format contract and tool list.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .list_tools()
        .iter()
        .map(|t| format!("- **{}**: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You're an expert analyst. Respond ONLY in this exact format. Do NOT show any thinking process, reasoning steps, or <think> tags.

**Verdict:**
[4 lines - clear conclusion]

**Explanation:**
[4-5 lines - brief reasoning]

**References:**
[Maximum 1-2 lines - sources/citations]

**Why consider this:**
[2 lines - practical advice]

STRICT RULES:
- Keep the reasoning precise and matched to the question's context (use simple words a layman understands)
- NO <think> tags or verbose explanations
- ONLY the 4 sections above
- Be direct and concise
- Start immediately with **Verdict:**

You have access to the following tools:
{tool_descriptions}

If the search results already provided with the question are sufficient, answer directly. Search again only when you need different or fresher information."#,
        tool_descriptions = tool_descriptions
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::search::LangSearchClient;
    use crate::tools::WebSearchTool;

    #[test]
    fn test_prompt_names_the_four_sections() {
        let prompt = build_system_prompt(&ToolRegistry::new());
        for section in [
            "**Verdict:**",
            "**Explanation:**",
            "**References:**",
            "**Why consider this:**",
        ] {
            assert!(prompt.contains(section), "missing {}", section);
        }
    }

    #[test]
    fn test_prompt_lists_registered_tools() {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(WebSearchTool::new(
            Arc::new(LangSearchClient::new("k".to_string())),
            5,
        )));

        let prompt = build_system_prompt(&tools);
        assert!(prompt.contains("**web_search**"));
    }
}
