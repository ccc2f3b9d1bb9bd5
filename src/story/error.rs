use std::fmt;

/// Everything that can go wrong while talking to the story backend.
///
/// `EmptyIdea` and `NothingToExport` are caught before any request is built,
/// the rest are terminal outcomes of an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    EmptyIdea,
    NothingToExport,
    Timeout,
    Unreachable { base_url: String },
    Server { detail: String },
    Unknown { detail: String },
}

impl StoryError {
    /// Message shown under the generate button.
    pub fn generation_message(&self) -> String {
        match self {
            StoryError::EmptyIdea => "Please enter a story idea".to_string(),
            StoryError::NothingToExport => "No story to download".to_string(),
            StoryError::Timeout => {
                "Request timed out. The story is taking longer than expected. \
                 Please try with a simpler idea or try again later."
                    .to_string()
            }
            StoryError::Unreachable { base_url } => format!(
                "Cannot connect to server at {}. Make sure the backend is running.",
                base_url
            ),
            StoryError::Server { detail } => detail.clone(),
            StoryError::Unknown { detail } => {
                if detail.is_empty() {
                    "An unexpected error occurred.".to_string()
                } else {
                    detail.clone()
                }
            }
        }
    }

    /// Message shown next to the download button. Same taxonomy, export
    /// specific wording.
    pub fn export_message(&self) -> String {
        match self {
            StoryError::EmptyIdea => "Please enter a story idea".to_string(),
            StoryError::NothingToExport => "No story to download".to_string(),
            StoryError::Timeout => "PDF generation timed out. Please try again.".to_string(),
            StoryError::Unreachable { .. } => {
                "Cannot connect to server. Make sure the backend is running.".to_string()
            }
            StoryError::Server { detail } => detail.clone(),
            StoryError::Unknown { detail } => {
                if detail.is_empty() {
                    "Failed to generate PDF. Please try again.".to_string()
                } else {
                    detail.clone()
                }
            }
        }
    }
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryError::EmptyIdea => write!(f, "story idea is empty"),
            StoryError::NothingToExport => write!(f, "no story to export"),
            StoryError::Timeout => write!(f, "request timed out"),
            StoryError::Unreachable { base_url } => write!(f, "{} unreachable", base_url),
            StoryError::Server { detail } => write!(f, "server error: {}", detail),
            StoryError::Unknown { detail } => write!(f, "unexpected error: {}", detail),
        }
    }
}

/// Maps a rejected fetch to the taxonomy from the name/message pair of the
/// underlying JS error. An abort is always our own cancellation timer firing,
/// a TypeError is the browser's way of reporting an unreachable host.
pub fn classify_js_error(name: &str, message: &str, base_url: &str) -> StoryError {
    if name == "AbortError" {
        StoryError::Timeout
    } else if name == "TypeError"
        || message.contains("Failed to fetch")
        || message.contains("NetworkError")
    {
        StoryError::Unreachable {
            base_url: base_url.to_string(),
        }
    } else {
        StoryError::Unknown {
            detail: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    #[test]
    fn abort_is_a_timeout() {
        let err = classify_js_error("AbortError", "The user aborted a request.", BASE);
        assert_eq!(err, StoryError::Timeout);
    }

    #[test]
    fn fetch_failures_are_unreachable() {
        let chrome = classify_js_error("TypeError", "Failed to fetch", BASE);
        let firefox = classify_js_error(
            "TypeError",
            "NetworkError when attempting to fetch resource.",
            BASE,
        );
        for err in [chrome, firefox] {
            assert_eq!(
                err,
                StoryError::Unreachable {
                    base_url: BASE.to_string()
                }
            );
        }
    }

    #[test]
    fn anything_else_is_unknown() {
        let err = classify_js_error("SyntaxError", "unexpected token", BASE);
        assert_eq!(
            err,
            StoryError::Unknown {
                detail: "unexpected token".to_string()
            }
        );
    }

    #[test]
    fn unreachable_message_names_the_backend() {
        let err = StoryError::Unreachable {
            base_url: BASE.to_string(),
        };
        assert!(err.generation_message().contains(BASE));
        // The export wording deliberately stays short.
        assert!(!err.export_message().contains(BASE));
    }

    #[test]
    fn timeout_messages_differ_per_action() {
        assert_ne!(
            StoryError::Timeout.generation_message(),
            StoryError::Timeout.export_message()
        );
    }

    #[test]
    fn empty_unknown_detail_falls_back_to_generic_text() {
        let err = StoryError::Unknown {
            detail: String::new(),
        };
        assert_eq!(err.generation_message(), "An unexpected error occurred.");
    }
}
