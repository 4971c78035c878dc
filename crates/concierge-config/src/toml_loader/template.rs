//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Concierge Configuration
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# url = "http://127.0.0.1:8080/chat/"
# timeout_secs = 30          # 1-300
# connect_timeout_secs = 10  # 1-60

[history]
# max_length = 3000          # 100-100000 characters

[widget]
# greeting = "Hi there! Would you like to book a hotel room? When do you arrive?"
# error_message = "An error occurred generating the response."
# pending_indicator = "..."
# restart_label = "Restart"

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
