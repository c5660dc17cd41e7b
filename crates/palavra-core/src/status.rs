/// Fetch cycle status as the UI sees it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error_message: Option<String>,
}

impl FetchStatus {
    /// A cycle started: loading, prior error cleared
    pub fn begin(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// The active cycle resolved with a word batch
    pub fn succeed(&mut self) {
        self.loading = false;
        self.error_message = None;
    }

    /// The active cycle resolved with a user-facing message
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_prior_error() {
        let mut status = FetchStatus::default();
        status.fail("boom".into());
        status.begin();
        assert!(status.loading);
        assert_eq!(status.error_message, None);
    }

    #[test]
    fn fail_stops_loading_and_keeps_message() {
        let mut status = FetchStatus::default();
        status.begin();
        status.fail("Algo inesperado aconteceu.".into());
        assert!(!status.loading);
        assert_eq!(
            status.error_message.as_deref(),
            Some("Algo inesperado aconteceu.")
        );
    }
}
