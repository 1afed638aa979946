//! Splitting a chat completion into the answer and suggested next questions

/// Marker the chat prompt asks the model to put before its suggestions
pub const FOLLOW_UP_MARKER: &str = "Follow-Up Prompts:";

/// Maximum number of suggestions returned to the client
pub const MAX_FOLLOWUPS: usize = 3;

/// Split model output at the first [`FOLLOW_UP_MARKER`].
///
/// Returns the trimmed text before the marker and at most three trimmed,
/// non-empty lines after it. Without a marker the whole text is the reply.
pub fn split_followups(text: &str) -> (String, Vec<String>) {
    match text.split_once(FOLLOW_UP_MARKER) {
        Some((reply, rest)) => {
            let followups = rest
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(MAX_FOLLOWUPS)
                .map(str::to_string)
                .collect();
            (reply.trim().to_string(), followups)
        }
        None => (text.trim().to_string(), Vec::new()),
    }
}
