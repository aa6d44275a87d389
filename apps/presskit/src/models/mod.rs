pub mod press_kit;

pub use press_kit::{CompanyInfo, PressKitData, PressKitRequest, SupplementaryItem};
