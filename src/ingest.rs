//! CSV payload encoding for bulk preference upload.

use crate::models::Preference;

/// Renders preference records as the line-oriented body the ingest
/// endpoint accepts: `userId,itemId[,value]`, one record per line.
/// The value field is left out entirely when the record has none.
pub fn encode(records: &[Preference]) -> String {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.user_id.to_string());
        body.push(',');
        body.push_str(&record.item_id.to_string());
        if let Some(value) = record.value {
            body.push(',');
            body.push_str(&value.to_string());
        }
        body.push('\n');
    }
    body
}
