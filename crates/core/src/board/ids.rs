//! Identifier generation for new lists and cards

pub const LIST_ID_PREFIX: &str = "list";
pub const CARD_ID_PREFIX: &str = "card";

/// Generate `<prefix>-<unix millis>-<uuid fragment>`, retrying while `is_taken`
/// reports a collision.
pub fn generate_id(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = format!(
            "{}-{}-{}",
            prefix,
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4()
                .to_string()
                .split('-')
                .next()
                .unwrap_or("0000")
        );
        if !is_taken(&id) {
            return id;
        }
        tracing::trace!("Generated id {} already in use, retrying", id);
    }
}
