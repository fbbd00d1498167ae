//! Fixed content-filter configuration sent with every generation call.

use serde::Serialize;

/// Harm categories the filter is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    /// Harassment
    HarmCategoryHarassment,
    /// Hate speech
    HarmCategoryHateSpeech,
    /// Sexually explicit content
    HarmCategorySexuallyExplicit,
    /// Dangerous content
    HarmCategoryDangerousContent,
}

/// Blocking threshold for a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Block medium and high probability content
    BlockMediumAndAbove,
}

/// One category/threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SafetySetting {
    /// Category
    pub category: HarmCategory,
    /// Threshold
    pub threshold: HarmBlockThreshold,
}

/// Block medium-and-above for all four categories. Not user-configurable.
pub const SAFETY_SETTINGS: [SafetySetting; 4] = [
    SafetySetting {
        category: HarmCategory::HarmCategoryHarassment,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategoryHateSpeech,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategorySexuallyExplicit,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategoryDangerousContent,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
];
