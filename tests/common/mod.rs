#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use nofault_pdf::{
    Authorization, Claim, ClaimDocument, PlacedItem, RenderOptions, Signature, SignatureImage,
    Witness, load_claims,
};

pub fn fixture(name: &str) -> Claim {
    let path = Path::new("tests/fixtures").join(format!("{name}.json"));
    let mut claims = load_claims(&path).expect("load fixture");
    assert_eq!(claims.len(), 1, "{name} holds a single claim");
    claims.remove(0)
}

/// Options with a fixed "Generated on" date so output is deterministic.
pub fn options() -> RenderOptions {
    RenderOptions {
        generated_on: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        ..RenderOptions::default()
    }
}

/// CLM002 with every optional section switched off.
pub fn bare_claim() -> Claim {
    let mut claim = fixture("CLM002");
    claim.injury = None;
    claim.employment.was_at_work = false;
    claim.employment.wage_loss = None;
    claim.employment.workers_comp = None;
    claim.other_expenses = None;
    claim.witness = Witness::default();
    claim.medical_authorization = Authorization::new(false, None);
    claim.wage_authorization = Authorization::new(false, None);
    claim
}

/// A small PNG with a transparent background, as a signature pad produces.
pub fn signature_png() -> Vec<u8> {
    let mut img = image::RgbaImage::new(40, 16);
    for x in 4..36 {
        img.put_pixel(x, 8, image::Rgba([0, 0, 0, 255]));
    }
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    bytes
}

pub fn signature_data_url() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(signature_png()))
}

pub fn signature(date: &str) -> Signature {
    Signature::new(SignatureImage::from_png(signature_png()), Some(date.to_string()))
}

/// The placed item with `label` inside section `section`.
pub fn find_item<'a>(doc: &'a ClaimDocument, section: &str, label: &str) -> Option<&'a PlacedItem> {
    doc.pages
        .iter()
        .flat_map(|p| p.items.iter())
        .find(|item| item.section == section && item.label == label)
}

pub fn item_value(doc: &ClaimDocument, section: &str, label: &str) -> String {
    find_item(doc, section, label)
        .unwrap_or_else(|| panic!("no item {label} in {section}"))
        .lines
        .join(" ")
}

/// Output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    PathBuf::from("tests/output").join(case)
}
