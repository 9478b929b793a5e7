use async_trait::async_trait;

use super::{Converter, Strategy};
use crate::engine::Dialect;
use crate::ollama::OllamaClient;
use crate::types::{Error, Result};

/// Prompt contract for the text-generation backend. Mirrors the rule table
/// in prose: keep the two in step when mappings change.
pub const SYSTEM_PROMPT: &str = "\
You are an expert Automation Engineer specializing in Selenium Java and Playwright.
Your mission is to convert Selenium Java test scripts into high-quality Playwright TypeScript/JavaScript.

STRICT CONVERSION RULES:
1. REMOVE ALL JAVA BOILERPLATE: Strip out 'package', 'import', 'public class', and 'public static void main'.
2. WRAP IN TEST BLOCK: Always wrap the converted logic in 'test(\"Converted Test\", async ({ page }) => { ... });'.
3. ASYNC/AWAIT: Ensure every Playwright action (goto, click, fill, title, url) is prefixed with 'await'.
4. LOCATORS: Use 'page.locator()' for all element interactions.
5. CONSOLE LOGS: Map 'System.out.println' to 'console.log'.
6. NO EXPLANATIONS: Return ONLY the raw code. Do NOT use markdown code blocks or conversational text.
7. PARAMETER MAPPING: Use 'page' as the primary interaction object.
";

/// Marker the backend contract uses to flag a failed generation.
const ERROR_MARKER: &str = "Error:";

/// Strategy that delegates the conversion to an Ollama model.
#[derive(Debug, Clone)]
pub struct LlmConverter {
    client: OllamaClient,
}

impl LlmConverter {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    pub fn user_prompt(source: &str, dialect: Dialect) -> String {
        format!(
            "Convert the following Selenium Java code to Playwright {}:\n\n{}",
            dialect.language(),
            source
        )
    }
}

/// Drop markdown fence lines the model emits despite being told not to.
pub fn strip_code_fences(text: &str) -> String {
    if !text.contains("```") {
        return text.trim().to_string();
    }
    text.lines()
        .filter(|line| !line.trim().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[async_trait]
impl Converter for LlmConverter {
    fn strategy(&self) -> Strategy {
        Strategy::Llm
    }

    async fn convert(&self, source: &str, dialect: Dialect) -> Result<String> {
        let prompt = Self::user_prompt(source, dialect);
        let raw = self.client.generate(&prompt, Some(SYSTEM_PROMPT)).await?;
        let code = strip_code_fences(&raw);

        if code.is_empty() {
            return Err(Error::llm("empty response"));
        }
        if code.starts_with(ERROR_MARKER) {
            return Err(Error::llm(code));
        }
        Ok(code)
    }
}
