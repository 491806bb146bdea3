use chrono::NaiveDate;

use crate::pdf::PageGeometry;

pub const DEFAULT_TITLE: &str = "APPLICATION FOR FLORIDA \"NO FAULT\" BENEFITS";
pub const DEFAULT_BRAND: &str = "ClaimSaver+";

/// Presentation settings for one export.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Text in the header band of every page.
    pub title: String,
    /// Name in the "Generated on ... by ..." footer.
    pub brand: String,
    pub generated_on: NaiveDate,
    pub geometry: PageGeometry,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: DEFAULT_TITLE.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            generated_on: chrono::Local::now().date_naive(),
            geometry: PageGeometry::default(),
        }
    }
}

impl RenderOptions {
    /// Defaults with `NOFAULT_PDF_TITLE` / `NOFAULT_PDF_BRAND` applied.
    pub fn from_env() -> Self {
        let mut options = RenderOptions::default();
        if let Ok(title) = std::env::var("NOFAULT_PDF_TITLE") {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                options.title = trimmed.to_string();
            }
        }
        if let Ok(brand) = std::env::var("NOFAULT_PDF_BRAND") {
            let trimmed = brand.trim();
            if !trimmed.is_empty() {
                options.brand = trimmed.to_string();
            }
        }
        options
    }

    /// Footer byline, e.g. "Generated on 3/15/2024 by ClaimSaver+".
    pub fn byline(&self) -> String {
        format!(
            "Generated on {} by {}",
            self.generated_on.format("%-m/%-d/%Y"),
            self.brand
        )
    }
}
