/// Instruction for property listings.
pub const PROPERTY_INSTRUCTION: &str = "Create an improved home listing description \
    that's seven sentences long and oriented towards a person with these preferences:";

/// Instruction for store items.
pub const STORE_INSTRUCTION: &str = "Create an updated paragraph-long summary of this \
    store item that's colored by these preferences:";

/// Instruction for restaurant menu items.
pub const RESTAURANT_INSTRUCTION: &str = "Create a two sentence summary for this menu item \
    that factors in one or two of these preferences:";

/// Assembles the rewrite prompt: `<instruction> <preferences>. <description>`.
///
/// An empty instruction is kept as-is, so the prompt then starts with a space.
pub fn build_rewrite_prompt(instruction: &str, preferences: &str, description: &str) -> String {
    format!("{instruction} {preferences}. {description}")
}
