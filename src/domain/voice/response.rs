//! Response built by the dispatcher.

/// Text to speak back plus whether the platform should close the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    segments: Vec<String>,
    should_end_session: bool,
}

impl OutgoingResponse {
    /// Creates an empty response that ends the session.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            should_end_session: true,
        }
    }

    /// Creates a response with a single text segment.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().with_text(text)
    }

    /// Appends a text segment.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(text.into());
        self
    }

    /// Keeps the session open so the user can speak again.
    pub fn keep_session_open(mut self) -> Self {
        self.should_end_session = false;
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn should_end_session(&self) -> bool {
        self.should_end_session
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for OutgoingResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_response_ends_session() {
        let response = OutgoingResponse::default();
        assert!(response.should_end_session());
        assert!(response.is_empty());
    }

    #[test]
    fn segments_keep_insertion_order() {
        let response = OutgoingResponse::text("first").with_text("second");
        assert_eq!(response.segments(), ["first", "second"]);
    }

    #[test]
    fn keep_session_open_clears_end_flag() {
        let response = OutgoingResponse::text("hi").keep_session_open();
        assert!(!response.should_end_session());
    }
}
