/// Casing style of the raw input, classified before trimming.
///
/// Classification looks at the untrimmed buffer: a space typed before an
/// uppercase letter downgrades `LeadingUpper` to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// First character of the raw input is an uppercase letter.
    LeadingUpper,
    /// No uppercase letters anywhere in the raw input.
    AllLower,
    /// Anything else: candidates keep their stored case.
    Mixed,
}

impl CaseStyle {
    pub fn classify(raw_input: &str) -> Self {
        if raw_input.chars().next().is_some_and(char::is_uppercase) {
            CaseStyle::LeadingUpper
        } else if !raw_input.chars().any(char::is_uppercase) {
            CaseStyle::AllLower
        } else {
            CaseStyle::Mixed
        }
    }

    /// Produce the (primary, shifted) forms for one candidate word.
    ///
    /// The shifted form is always forced uppercase; the primary form follows
    /// the input's style. Applied per candidate, never once globally.
    pub fn adapt(self, word: &str) -> (String, String) {
        let shifted = word.to_uppercase();
        let primary = match self {
            CaseStyle::LeadingUpper => shifted.clone(),
            CaseStyle::AllLower => word.to_lowercase(),
            CaseStyle::Mixed => word.to_string(),
        };
        (primary, shifted)
    }
}
