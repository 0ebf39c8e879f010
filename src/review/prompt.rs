//! Review prompt templates
//!
//! The prompt sent upstream is always the template text immediately followed
//! by the submitted code, verbatim.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

const VARIABLE_NAMES_TEMPLATE: &str = "\
You are an AI Code Reviewer. Your task is to analyze the following code snippet for readability issues related to variable names.

Rules:
1.  Analyze the code to find variable names that are 1 or 2 characters long (e.g., 'x', 'd', 'a').
2.  Ignore common loop variables like 'i' or 'j'.
3.  For each unclear variable you find, analyze the code to understand its purpose.
4.  Suggest a new, descriptive variable name that reflects its context or usage.

Output Format:
Provide your feedback as a list. For each issue, first state the problem, then provide a specific suggestion.

Example:
- Issue: Variable 'x' is unclear.
  Suggestion: Rename 'x' to 'sum' because it stores the result of 'a + b'.
---
Here is the code to review:
---
";

const SECTIONS_TEMPLATE: &str = "\
You are an AI Code Reviewer. Review the following code snippet and report your findings in exactly three labeled sections.

Sections:
Readability: naming, structure, comments and formatting.
Best Practices: idioms, error handling and maintainability.
Optimization: unnecessary work, complexity and resource usage.

Rules:
1.  Under each section, list between 1 and 3 bullets.
2.  Every bullet is an issue followed by a concrete suggestion.
3.  If a section has nothing worth changing, say so in a single bullet.

Output Format:
Readability:
- Issue: Variable 'x' is unclear.
  Suggestion: Rename 'x' to 'sum' because it stores the result of 'a + b'.
Best Practices:
- Issue: ...
  Suggestion: ...
Optimization:
- Issue: ...
  Suggestion: ...
---
Here is the code to review:
---
";

/// Instruction template prepended to the submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptTemplate {
    /// Short variable-name review as an Issue / Suggestion list
    #[default]
    VariableNames,
    /// Readability, Best Practices and Optimization sections
    Sections,
}

impl PromptTemplate {
    /// Fixed instruction text of this template
    pub fn text(&self) -> &'static str {
        match self {
            PromptTemplate::VariableNames => VARIABLE_NAMES_TEMPLATE,
            PromptTemplate::Sections => SECTIONS_TEMPLATE,
        }
    }

    /// Name used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            PromptTemplate::VariableNames => "variable-names",
            PromptTemplate::Sections => "sections",
        }
    }

    /// Build the full prompt for `code`
    pub fn build(&self, code: &str) -> String {
        let template = self.text();
        let mut prompt = String::with_capacity(template.len() + code.len());
        prompt.push_str(template);
        prompt.push_str(code);
        prompt
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptTemplate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "variable-names" | "variables" => Ok(PromptTemplate::VariableNames),
            "sections" => Ok(PromptTemplate::Sections),
            other => Err(anyhow!(
                "unknown prompt template '{}' (expected 'variable-names' or 'sections')",
                other
            )),
        }
    }
}
