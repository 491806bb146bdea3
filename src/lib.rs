mod error;
mod fonts;
mod model;
mod options;
mod pdf;
mod progress;
mod signature;

pub use error::Error;
pub use fonts::{FontMetrics, FontStyle, PT_PER_MM, TextMeasure};
pub use model::{
    Accident, Authorization, Claim, ClaimStatus, Employer, Employment, Injury, Insurance,
    OtherExpenses, Personal, Treatment, Vehicle, WageLoss, Witness, WorkersComp, parse_claims,
};
pub use options::{DEFAULT_BRAND, DEFAULT_TITLE, RenderOptions};
pub use pdf::{
    AuthorizationKind, ClaimDocument, DrawOp, PLACEHOLDER, Page, PageGeometry, PlacedItem,
    SectionKind, layout_claim, section_plan, wrap_text,
};
pub use progress::{ActionRequirement, default_action_requirements, progress, toggle_requirement};
pub use signature::{DecodedImage, Signature, SignatureImage};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Render `claim` to PDF bytes.
pub fn render_claim(claim: &Claim, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    pdf::render(claim, options)
}

/// Render `claim` and write it to `out_dir/claim-{id}.pdf`. Nothing is
/// written unless the render succeeds.
pub fn export_claim(claim: &Claim, out_dir: &Path, options: &RenderOptions) -> Result<PathBuf, Error> {
    let t0 = Instant::now();

    let bytes = pdf::render(claim, options)?;
    let t_render = t0.elapsed();

    std::fs::create_dir_all(out_dir).map_err(Error::Io)?;
    let output = out_dir.join(claim.file_name());
    std::fs::write(&output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms ({} bytes -> {})",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        output.display(),
    );

    Ok(output)
}

/// Load claims from a JSON file holding one claim or an array of claims.
pub fn load_claims(path: &Path) -> Result<Vec<Claim>, Error> {
    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })?;
    let claims = parse_claims(&json)?;
    log::debug!("loaded {} claim(s) from {}", claims.len(), path.display());
    Ok(claims)
}
