use crate::core::KapError;

/// Provides helpful suggestions for common errors
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for KapError {
    fn help(&self) -> Option<String> {
        match self {
            KapError::CorruptManifest(_) => Some(
                "💡 Suggestion: Check the JSON syntax in kapack.json, or delete it and run 'kap init' to start fresh"
                    .to_string(),
            ),
            KapError::NameCollision(_) => Some(
                "💡 Suggestion: Two repository URLs map to the same module directory. Uninstall the existing one first"
                    .to_string(),
            ),
            KapError::CloneFailed(msg) => {
                if msg.contains("not found in PATH") {
                    Some(
                        "💡 Suggestion: Install git and make sure it is on your PATH"
                            .to_string(),
                    )
                } else {
                    Some(
                        "💡 Suggestion: Check the repository URL and your internet connection"
                            .to_string(),
                    )
                }
            }
            KapError::RemovalFailed(_) => Some(
                "💡 Suggestion: Check directory permissions under kakao_modules/. The manifest is already updated; re-run the command after fixing permissions"
                    .to_string(),
            ),
            KapError::Io(e) => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    Some(
                        "💡 Suggestion: Check file permissions, or try running with appropriate permissions"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Format an error with helpful suggestions
pub fn format_error_with_help(error: &KapError) -> String {
    let mut output = format!("❌ Error: {}", error);

    if let Some(help) = error.help() {
        output.push_str("\n\n");
        output.push_str(&help);
    }

    output
}
