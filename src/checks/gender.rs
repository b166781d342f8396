//! Free-text gender normalization.
//!
//! HR systems record gender in many spellings. The gender gap check only needs
//! a three-way split, so labels are matched against closed token sets; anything
//! unrecognized is `Unknown` and excluded from gap statistics.

/// Normalized gender used by the gender gap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Recognized as female.
    Female,
    /// Recognized as male.
    Male,
    /// Missing or unrecognized.
    Unknown,
}

const FEMALE_TOKENS: &[&str] = &["f", "female", "woman", "w", "weiblich", "frau"];
const MALE_TOKENS: &[&str] = &["m", "male", "man", "männlich", "mann"];

impl Gender {
    /// Classifies a free-text gender label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::checks::Gender;
    ///
    /// assert_eq!(Gender::classify(Some(" Female ")), Gender::Female);
    /// assert_eq!(Gender::classify(Some("M")), Gender::Male);
    /// assert_eq!(Gender::classify(Some("non-binary")), Gender::Unknown);
    /// assert_eq!(Gender::classify(None), Gender::Unknown);
    /// ```
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Gender::Unknown;
        };

        let token = label.trim().to_lowercase();
        if FEMALE_TOKENS.contains(&token.as_str()) {
            Gender::Female
        } else if MALE_TOKENS.contains(&token.as_str()) {
            Gender::Male
        } else {
            Gender::Unknown
        }
    }
}
