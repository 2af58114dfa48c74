use notify_rust::Notification;
use std::path::Path;

pub fn notify_config_fallback(path: &Path) {
    let _ = Notification::new()
        .summary("Config Error")
        .body(&format!("Could not open {}. Using defaults.", path.display()))
        .timeout(5000)
        .show();
}

pub fn notify_limit_reached(display: &str) {
    let _ = Notification::new()
        .summary("Time Limit Reached")
        .body(&format!("Timer stopped at {}.", display))
        .timeout(5000)
        .show();
}
