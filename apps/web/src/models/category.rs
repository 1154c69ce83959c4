use std::fmt;
use std::str::FromStr;

/// The closed set of record categories. Each one owns a data file and an
/// instruction in the rewrite prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Property,
    Store,
    Restaurant,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Property, Category::Store, Category::Restaurant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Property => "property",
            Category::Store => "store",
            Category::Restaurant => "restaurant",
        }
    }

    /// File name of this category's record collection inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Property => "property.json",
            Category::Store => "store.json",
            Category::Restaurant => "restaurant.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown record type '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "property" => Ok(Category::Property),
            "store" => Ok(Category::Store),
            "restaurant" => Ok(Category::Restaurant),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
