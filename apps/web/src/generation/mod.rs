// Description rewriting: per-category instructions and prompt assembly.
// All Gemini calls go through llm_client — no direct HTTP calls here.

pub mod instructions;
pub mod prompts;

pub use instructions::Instructions;
pub use prompts::build_rewrite_prompt;
