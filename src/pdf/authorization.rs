use crate::fonts::{FontMetrics, FontStyle};
use crate::model::{Authorization, Claim};

use super::layout::Layout;
use super::sections::PLACEHOLDER;
use super::wrap::wrap_text;

const TITLE_SIZE: f32 = 14.0;
const NOTICE_SIZE: f32 = 10.0;
const DISCLAIMER_SIZE: f32 = 11.0;
const LABEL_SIZE: f32 = 10.0;
const DISCLAIMER_LINE_HEIGHT: f32 = 10.0;
const SIGNATURE_BLOCK_SPACE: f32 = 35.0;
/// Offset of signature image, date and SSN values from the margin.
const VALUE_OFFSET: f32 = 60.0;
const SIGNATURE_WIDTH: f32 = 50.0;
const SIGNATURE_HEIGHT: f32 = 20.0;
const ROW_STEP: f32 = 15.0;

const MEDICAL_DISCLAIMER: &[&str] = &[
    "THIS AUTHORIZATION OR PHOTOCOPY HEREOF, WILL AUTHORIZE YOU TO",
    "FURNISH ALL INFORMATION YOU MAY HAVE REGARDING MY CONDITION WHILE",
    "UNDER YOUR OBSERVATION OR TREATMENT, INCLUDING THE HISTORY",
    "OBTAINED, X-RAY AND PHYSICAL FINDINGS DIAGNOSIS AND PROGNOSIS. YOU",
    "ARE AUTHORIZED TO PROVIDE THIS INFORMATION IN ACCORDANCE WITH THE",
    "FLORIDA \"NO FAULT\" AUTO INSURANCE LAW (CHAPTER 71-252 F.S.)",
];

const WAGE_DISCLAIMER: &[&str] = &[
    "THIS AUTHORIZATION OR PHOTOCOPY HEREOF, WILL AUTHORIZE YOU TO",
    "FURNISH ALL INFORMATION YOU MAY HAVE REGARDING MY WAGES OR SALARY",
    "WHILE EMPLOYED BY YOU. YOU ARE AUTHORIZED TO PROVIDE THIS",
    "INFORMATION IN ACCORDANCE WITH THE FLORIDA \"NO FAULT\" AUTO",
    "INSURANCE LAW (CHAPTER 71-252 F.S.)",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationKind {
    Medical,
    Wage,
}

impl AuthorizationKind {
    pub const ALL: [AuthorizationKind; 2] = [AuthorizationKind::Medical, AuthorizationKind::Wage];

    pub fn title(self) -> &'static str {
        match self {
            AuthorizationKind::Medical => "Medical Authorization",
            AuthorizationKind::Wage => "Wage Authorization",
        }
    }

    fn disclaimer(self) -> &'static [&'static str] {
        match self {
            AuthorizationKind::Medical => MEDICAL_DISCLAIMER,
            AuthorizationKind::Wage => WAGE_DISCLAIMER,
        }
    }

    pub fn block(self, claim: &Claim) -> &Authorization {
        match self {
            AuthorizationKind::Medical => &claim.medical_authorization,
            AuthorizationKind::Wage => &claim.wage_authorization,
        }
    }
}

/// Starts a new page and draws one authorization form on it.
///
/// `image` is the index of the already-decoded signature image, present only
/// when the block is signed.
pub(crate) fn add_authorization_page(
    layout: &mut Layout<'_>,
    kind: AuthorizationKind,
    claim: &Claim,
    image: Option<usize>,
) {
    layout.add_new_page();

    let margin = layout.geometry().margin;
    let page_width = layout.geometry().width;
    let content_width = layout.geometry().content_width();

    layout.mark_section(kind.title());
    layout.text(margin, layout.y(), kind.title(), FontStyle::Bold, TITLE_SIZE);
    layout.advance(10.0);
    layout.text(margin, layout.y(), "DO NOT DETACH", FontStyle::Regular, NOTICE_SIZE);
    layout.advance(10.0);

    let metrics = FontMetrics::new(FontStyle::Regular, DISCLAIMER_SIZE);
    for paragraph in kind.disclaimer() {
        let lines = wrap_text(paragraph, content_width, &metrics);
        layout.check_new_page(DISCLAIMER_LINE_HEIGHT * lines.len() as f32);
        for line in lines {
            layout.text(margin, layout.y(), line, FontStyle::Regular, DISCLAIMER_SIZE);
            layout.advance(DISCLAIMER_LINE_HEIGHT);
        }
    }
    layout.advance(20.0);

    layout.check_new_page(SIGNATURE_BLOCK_SPACE);
    layout.rule(margin, page_width - margin, layout.y());
    layout.advance(ROW_STEP);

    let y = layout.y();
    let value_x = margin + VALUE_OFFSET;
    let signature = kind.block(claim).signature();

    let mut labels = vec!["SIGNATURE", "DATE"];
    if kind == AuthorizationKind::Wage {
        labels.push("SOCIAL SECURITY NO.");
    }
    for (row, label) in labels.iter().enumerate() {
        layout.text(margin, y + row as f32 * ROW_STEP, *label, FontStyle::Bold, LABEL_SIZE);
    }

    match (signature, image) {
        (Some(signature), Some(index)) => {
            layout.image(
                index,
                value_x,
                y - SIGNATURE_HEIGHT / 2.0,
                SIGNATURE_WIDTH,
                SIGNATURE_HEIGHT,
            );
            let date = signature.captured_at().unwrap_or(PLACEHOLDER);
            layout.text(value_x, y + ROW_STEP, date, FontStyle::Regular, LABEL_SIZE);
            if kind == AuthorizationKind::Wage {
                let ssn = claim.personal.social_security_number.trim();
                let ssn = if ssn.is_empty() { PLACEHOLDER } else { ssn };
                layout.text(value_x, y + 2.0 * ROW_STEP, ssn, FontStyle::Regular, LABEL_SIZE);
            }
        }
        _ => {
            // blank lines to sign on paper
            for row in 0..labels.len() {
                let line_y = y + row as f32 * ROW_STEP + 1.0;
                layout.rule(value_x, value_x + SIGNATURE_WIDTH + 20.0, line_y);
            }
        }
    }
    layout.advance(2.0 * ROW_STEP);
}
