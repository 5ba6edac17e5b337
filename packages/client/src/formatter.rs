//! Message formatting utilities for client display.

use bilingo_shared::time::iso8601_to_clock_time;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a chat message
    ///
    /// # Arguments
    ///
    /// * `username` - Display name of the author
    /// * `message` - The message text
    /// * `timestamp` - ISO-8601 timestamp assigned by the server
    /// * `is_me` - Whether the message was sent by this client
    pub fn format_chat_message(
        username: &str,
        message: &str,
        timestamp: &str,
        is_me: bool,
    ) -> String {
        let me_suffix = if is_me { " (me)" } else { "" };
        format!(
            "\n[{}] @{}{}: {}\n",
            iso8601_to_clock_time(timestamp),
            username,
            me_suffix,
            message
        )
    }

    /// Format the translation of a message, printed after the message itself
    pub fn format_translation(username: &str, translated: &str) -> String {
        format!("    ↳ @{}: {}\n", username, translated)
    }

    /// Format a join / leave notice
    pub fn format_notice(message: &str, timestamp: &str) -> String {
        format!("\n* {} ({})\n", message, iso8601_to_clock_time(timestamp))
    }

    /// Format the roster with a participant count
    ///
    /// # Arguments
    ///
    /// * `names` - Display names in join order
    /// * `local_name` - This client's display name (to mark as "me")
    pub fn format_user_list(names: &[String], local_name: &str) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str(&format!("Online ({}):\n", names.len()));

        if names.is_empty() {
            output.push_str("(No participants)\n");
        } else {
            for name in names {
                let me_suffix = if name == local_name { " (me)" } else { "" };
                output.push_str(&format!("  {}{}\n", name, me_suffix));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format the typing indicator line
    pub fn format_typing(indicator: &str) -> String {
        format!("\n... {}\n", indicator)
    }

    /// Format the state of auto-translation after `/translate`
    pub fn format_translate_status(enabled: bool) -> String {
        format!("Auto-translate: {}\n", if enabled { "on" } else { "off" })
    }

    /// Format a message that could not be parsed
    pub fn format_raw_message(text: &str) -> String {
        format!("\n{}\n", text)
    }
}
