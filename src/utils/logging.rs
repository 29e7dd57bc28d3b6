use tracing::{debug, error, info, warn};

/// Logs a menu action with consistent format
pub fn log_menu_start(action: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "MENU_START: {} by {}({}) in chat {} - {}",
            action, user, user_id, chat_id, d
        ),
        None => info!(
            "MENU_START: {} by {}({}) in chat {}",
            action, user, user_id, chat_id
        ),
    }
}

/// Logs a completed menu action with consistent format
pub fn log_menu_success(action: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("MENU_SUCCESS: {} in chat {} - {}", action, chat_id, d),
        None => info!("MENU_SUCCESS: {} in chat {}", action, chat_id),
    }
}

/// Logs a failed menu action with consistent format
pub fn log_menu_error(action: &str, chat_id: i64, error: &str) {
    error!("MENU_ERROR: {} in chat {} - {}", action, chat_id, error);
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str, user_id: i64, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: field '{}' value '{}' invalid: {} - user {} in chat {}",
        field, value, error, user_id, chat_id
    );
}

/// Logs an upstream API request
pub fn log_upstream_request(endpoint: &str, group: &str) {
    debug!("UPSTREAM: GET {} for group {}", endpoint, group);
}

/// Logs upstream API failures with consistent format
pub fn log_upstream_error(endpoint: &str, group: &str, error: &str) {
    error!("UPSTREAM_ERROR: GET {} for group {} failed: {}", endpoint, group, error);
}

/// Logs timeout events with consistent format
pub fn log_timeout(operation: &str, duration_secs: u64, details: Option<&str>) {
    match details {
        Some(d) => warn!("TIMEOUT: {} after {}s - {}", operation, duration_secs, d),
        None => warn!("TIMEOUT: {} after {}s", operation, duration_secs),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
