//! Fuzzy matching configuration types.

use serde::{Deserialize, Serialize};

/// Score adjustments applied according to how far apart two release years are.
///
/// With the default table a gap of four or more years always fails,
/// whatever the name tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearScores {
    /// Both years present and equal.
    #[serde(default = "default_year_exact")]
    pub exact: i32,
    /// Years differ by one.
    #[serde(default = "default_year_off_by_one")]
    pub off_by_one: i32,
    /// At least one side has no year.
    #[serde(default = "default_year_missing")]
    pub missing: i32,
    /// Years differ by two.
    #[serde(default = "default_year_off_by_two")]
    pub off_by_two: i32,
    /// Years differ by three.
    #[serde(default = "default_year_off_by_three")]
    pub off_by_three: i32,
    /// Years differ by four or more.
    #[serde(default = "default_year_far")]
    pub far: i32,
}

fn default_year_exact() -> i32 {
    50
}

fn default_year_off_by_one() -> i32 {
    40
}

fn default_year_missing() -> i32 {
    0
}

fn default_year_off_by_two() -> i32 {
    -50
}

fn default_year_off_by_three() -> i32 {
    -100
}

fn default_year_far() -> i32 {
    -1000
}

impl Default for YearScores {
    fn default() -> Self {
        Self {
            exact: default_year_exact(),
            off_by_one: default_year_off_by_one(),
            missing: default_year_missing(),
            off_by_two: default_year_off_by_two(),
            off_by_three: default_year_off_by_three(),
            far: default_year_far(),
        }
    }
}

impl YearScores {
    /// Adjustment for a pair of optional years.
    pub fn adjustment(&self, a: Option<u32>, b: Option<u32>) -> i32 {
        match (a, b) {
            (Some(a), Some(b)) => match a.abs_diff(b) {
                0 => self.exact,
                1 => self.off_by_one,
                2 => self.off_by_two,
                3 => self.off_by_three,
                _ => self.far,
            },
            _ => self.missing,
        }
    }
}

/// Thresholds and weights used by the name normalizer and similarity scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum net score for a tiered match to count as a success.
    #[serde(default = "default_success_threshold")]
    pub success_threshold: i32,
    /// Base score when the whitespace-free keys are equal.
    #[serde(default = "default_exact_base")]
    pub exact_base: i32,
    /// Base score for prefix/substring matches that satisfy their length floor.
    #[serde(default = "default_partial_base")]
    pub partial_base: i32,
    /// Diagnostic base score for prefix/substring matches below their length floor.
    /// Such matches never succeed, the score is only reported.
    #[serde(default = "default_short_partial_base")]
    pub short_partial_base: i32,
    /// Minimum length (chars) of the shorter title for a prefix match.
    #[serde(default = "default_prefix_min_len")]
    pub prefix_min_len: usize,
    /// Minimum length (chars) of the shorter title for a substring match.
    #[serde(default = "default_substring_min_len")]
    pub substring_min_len: usize,
    /// Subtracted when both sides name a manufacturer and they differ.
    #[serde(default)]
    pub manufacturer_mismatch_penalty: i32,
    /// Whole words dropped from titles before comparison (case-insensitive).
    #[serde(default = "default_filler_words")]
    pub filler_words: Vec<String>,
    /// Year proximity adjustments.
    #[serde(default)]
    pub year: YearScores,
}

fn default_success_threshold() -> i32 {
    100
}

fn default_exact_base() -> i32 {
    150
}

fn default_partial_base() -> i32 {
    100
}

fn default_short_partial_base() -> i32 {
    60
}

fn default_prefix_min_len() -> usize {
    15
}

fn default_substring_min_len() -> usize {
    20
}

fn default_filler_words() -> Vec<String> {
    vec!["vpx".to_string(), "premium".to_string()]
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            success_threshold: default_success_threshold(),
            exact_base: default_exact_base(),
            partial_base: default_partial_base(),
            short_partial_base: default_short_partial_base(),
            prefix_min_len: default_prefix_min_len(),
            substring_min_len: default_substring_min_len(),
            manufacturer_mismatch_penalty: 0,
            filler_words: default_filler_words(),
            year: YearScores::default(),
        }
    }
}

impl MatchConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.success_threshold <= 0 {
            return Err(format!(
                "success_threshold must be positive, got {}",
                self.success_threshold
            ));
        }
        if self.prefix_min_len == 0 || self.substring_min_len == 0 {
            return Err("prefix_min_len and substring_min_len must be at least 1".to_string());
        }
        if self.exact_base < self.partial_base {
            return Err(format!(
                "exact_base ({}) must not be lower than partial_base ({})",
                self.exact_base, self.partial_base
            ));
        }
        if self.manufacturer_mismatch_penalty < 0 {
            return Err("manufacturer_mismatch_penalty cannot be negative".to_string());
        }

        let y = &self.year;
        let ordered = [y.exact, y.off_by_one, y.off_by_two, y.off_by_three, y.far];
        if ordered.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(format!(
                "year scores must not increase with the year gap, got {:?}",
                ordered
            ));
        }
        if y.missing > y.exact || y.missing < y.off_by_two {
            return Err(format!(
                "year.missing ({}) must lie between year.off_by_two ({}) and year.exact ({})",
                y.missing, y.off_by_two, y.exact
            ));
        }

        for word in &self.filler_words {
            if word.trim().is_empty() || word.split_whitespace().count() != 1 {
                return Err(format!("filler word must be a single word, got {:?}", word));
            }
        }

        Ok(())
    }
}
