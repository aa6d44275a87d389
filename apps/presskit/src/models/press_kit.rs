use serde::{Deserialize, Serialize};

/// Company facts as confirmed by the operator. Blank fields are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub product: String,
    pub achievements: String,
    pub brand_attributes: String,
}

/// What the press kit is about and who it is for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressKitRequest {
    pub topic: String,
    pub target_media: String,
    pub tone: String,
}

/// A news snippet appended to the kit when the operator opts in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryItem {
    pub title: String,
    pub source: String,
}

/// Everything collected from the operator for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressKitData {
    pub company_info: CompanyInfo,
    pub press_kit_info: PressKitRequest,
    pub supplementary_data: Vec<SupplementaryItem>,
}

impl PressKitData {
    pub fn has_supplementary_data(&self) -> bool {
        !self.supplementary_data.is_empty()
    }
}
