use std::path::Path;

use crate::models::{Category, Record};
use crate::store::{read_json, StoreError};

/// Loads the full record collection for `category`, in file order.
pub async fn load_records(data_dir: &Path, category: Category) -> Result<Vec<Record>, StoreError> {
    read_json(&data_dir.join(category.file_name())).await
}
