use uuid::Uuid;

/// Creates a fresh order identifier (32 lowercase hex characters).
pub fn new_order_id() -> String {
    Uuid::new_v4().simple().to_string()
}
