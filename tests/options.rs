use chrono::NaiveDate;
use nofault_pdf::{DEFAULT_BRAND, DEFAULT_TITLE, PageGeometry, RenderOptions};

#[test]
fn defaults() {
    let opts = RenderOptions::default();
    assert_eq!(opts.title, DEFAULT_TITLE);
    assert_eq!(opts.brand, "ClaimSaver+");
    assert_eq!(opts.geometry, PageGeometry::A4);
    assert_eq!(opts.geometry.content_width(), 170.0);
    assert_eq!(opts.geometry.body_limit(), 267.0);
}

#[test]
fn byline_date_has_no_leading_zeros() {
    let opts = RenderOptions {
        generated_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        ..RenderOptions::default()
    };
    assert_eq!(opts.byline(), "Generated on 3/5/2024 by ClaimSaver+");
}

// The only test in this binary that touches the environment.
#[test]
fn environment_overrides_title_and_brand() {
    unsafe {
        std::env::set_var("NOFAULT_PDF_BRAND", "  Acme Claims ");
        std::env::set_var("NOFAULT_PDF_TITLE", "");
    }
    let opts = RenderOptions::from_env();
    assert_eq!(opts.brand, "Acme Claims");
    assert_eq!(opts.title, DEFAULT_TITLE);
    assert_ne!(opts.brand, DEFAULT_BRAND);

    unsafe {
        std::env::remove_var("NOFAULT_PDF_BRAND");
        std::env::remove_var("NOFAULT_PDF_TITLE");
    }
}
