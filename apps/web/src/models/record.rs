use serde::{Deserialize, Serialize};

/// One listing entry as stored in `data/<category>.json`.
///
/// Keys are written in the capitalised form the data files use; lower-camel
/// spellings are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID", alias = "id", alias = "Id")]
    pub id: i64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Description", alias = "description")]
    pub description: String,
    #[serde(rename = "ImageURL", alias = "imageURL", alias = "imageUrl", alias = "image_url")]
    pub image_url: String,
}

/// Returns the first record carrying `id`, in file order.
pub fn find_record(records: &[Record], id: i64) -> Option<&Record> {
    records.iter().find(|r| r.id == id)
}
