use std::collections::HashMap;

use crate::generation::prompts::{PROPERTY_INSTRUCTION, RESTAURANT_INSTRUCTION, STORE_INSTRUCTION};
use crate::models::Category;

/// Category → rewrite instruction mapping, held in application state.
#[derive(Debug, Clone)]
pub struct Instructions {
    by_category: HashMap<Category, String>,
}

impl Instructions {
    pub fn new(by_category: HashMap<Category, String>) -> Self {
        Self { by_category }
    }

    /// Instruction for `category`; empty when none is configured.
    pub fn for_category(&self, category: Category) -> &str {
        self.by_category
            .get(&category)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new(HashMap::from([
            (Category::Property, PROPERTY_INSTRUCTION.to_string()),
            (Category::Store, STORE_INSTRUCTION.to_string()),
            (Category::Restaurant, RESTAURANT_INSTRUCTION.to_string()),
        ]))
    }
}
