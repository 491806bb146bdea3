use crate::fonts::{FontMetrics, FontStyle};
use crate::model::Claim;

use super::layout::{Layout, PlacedItem};
use super::wrap::wrap_text;

/// Substituted for any missing or empty value.
pub const PLACEHOLDER: &str = "N/A";

const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
/// Space a section title needs before it may be drawn.
const TITLE_SPACE: f32 = 20.0;
const TITLE_ADVANCE: f32 = 10.0;
const SECTION_GAP: f32 = 10.0;
const LABEL_WIDTH: f32 = 80.0;
const VALUE_INDENT: f32 = LABEL_WIDTH + 10.0;
const ITEM_LINE_HEIGHT: f32 = 7.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionKind {
    ClaimInformation,
    InsuranceInformation,
    PersonalInformation,
    AccidentInformation,
    VehicleInformation,
    InjuryInformation,
    EmploymentInformation,
    WorkersCompensation,
    /// Zero-based position in `Employment::employers`.
    EmployerDetails(usize),
    OtherExpenses,
    WitnessInformation,
}

impl SectionKind {
    pub fn title(&self) -> String {
        match self {
            SectionKind::ClaimInformation => "Claim Information".into(),
            SectionKind::InsuranceInformation => "Insurance Information".into(),
            SectionKind::PersonalInformation => "Personal Information".into(),
            SectionKind::AccidentInformation => "Accident Information".into(),
            SectionKind::VehicleInformation => "Vehicle Information".into(),
            SectionKind::InjuryInformation => "Injury Information".into(),
            SectionKind::EmploymentInformation => "Employment Information".into(),
            SectionKind::WorkersCompensation => "Workers Compensation".into(),
            SectionKind::EmployerDetails(i) => format!("Employer {} Details", i + 1),
            SectionKind::OtherExpenses => "Other Expenses".into(),
            SectionKind::WitnessInformation => "Witness Information".into(),
        }
    }
}

/// Gate flags, read once per render.
struct Gates {
    injured: bool,
    employment: bool,
    workers_comp: bool,
    employers: usize,
    other_expenses: bool,
    witness: bool,
}

impl Gates {
    fn read(claim: &Claim) -> Self {
        let employment = &claim.employment;
        Gates {
            injured: claim.injury.is_some(),
            employment: employment.was_at_work || employment.lost_wages(),
            workers_comp: employment.workers_comp.is_some(),
            employers: employment.employers.len(),
            other_expenses: claim.other_expenses.is_some(),
            witness: !claim.witness.is_empty(),
        }
    }
}

/// The data sections to draw for `claim`, in document order.
pub fn section_plan(claim: &Claim) -> Vec<SectionKind> {
    let gates = Gates::read(claim);
    let mut plan = vec![
        SectionKind::ClaimInformation,
        SectionKind::InsuranceInformation,
        SectionKind::PersonalInformation,
        SectionKind::AccidentInformation,
        SectionKind::VehicleInformation,
    ];
    if gates.injured {
        plan.push(SectionKind::InjuryInformation);
    }
    if gates.employment {
        plan.push(SectionKind::EmploymentInformation);
        if gates.workers_comp {
            plan.push(SectionKind::WorkersCompensation);
        }
        plan.extend((0..gates.employers).map(SectionKind::EmployerDetails));
    }
    if gates.other_expenses {
        plan.push(SectionKind::OtherExpenses);
    }
    if gates.witness {
        plan.push(SectionKind::WitnessInformation);
    }
    plan
}

type Item = (&'static str, Option<String>);

fn text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn money(amount: &Option<String>) -> Option<String> {
    amount.as_deref().and_then(text).map(|a| format!("${a}"))
}

fn yes_no(flag: bool) -> Option<String> {
    Some(if flag { "Yes" } else { "No" }.to_string())
}

fn section_items(kind: &SectionKind, claim: &Claim) -> Vec<Item> {
    match kind {
        SectionKind::ClaimInformation => vec![
            ("Claim ID:", text(&claim.id)),
            ("Date:", text(&claim.date)),
            ("Status:", text(&claim.status.to_string())),
            ("Type:", text(&claim.claim_type)),
            ("Description:", text(&claim.description)),
            ("File Number:", text(&claim.file_number)),
        ],
        SectionKind::InsuranceInformation => {
            let ins = &claim.insurance;
            vec![
                ("Insurance Company:", text(&ins.company)),
                ("Policy Number:", text(&ins.policy_number)),
                ("Claim Number:", text(&ins.claim_number)),
                ("Adjuster Name:", text(&ins.adjuster_name)),
                ("Adjuster Phone:", text(&ins.adjuster_phone)),
                ("Medical Insurance:", text(&ins.medical_insurance)),
                ("Medical Insurance ID:", text(&ins.medical_insurance_id)),
                ("Medical Bills Amount:", money(&ins.medical_bills_amount)),
                ("More Medical Expenses Expected:", yes_no(ins.more_medical_expenses)),
            ]
        }
        SectionKind::PersonalInformation => {
            let p = &claim.personal;
            vec![
                ("Client Name:", text(&p.client_name)),
                ("Date of Birth:", text(&p.date_of_birth)),
                ("Social Security Number:", text(&p.social_security_number)),
                ("Home Phone:", text(&p.phone_home)),
                ("Business Phone:", text(&p.phone_business)),
                ("Address:", text(&p.address)),
                ("Permanent Address:", text(&p.permanent_address)),
                ("Florida Residence Duration:", text(&p.florida_residence_duration)),
            ]
        }
        SectionKind::AccidentInformation => vec![
            ("Date of Accident:", text(&claim.accident.date)),
            ("Time of Accident:", text(&claim.accident.time)),
            ("Location:", text(&claim.accident.location)),
            ("Description:", text(&claim.description)),
            ("Was at Work:", yes_no(claim.employment.was_at_work)),
            ("Was Injured:", yes_no(claim.injury.is_some())),
        ],
        SectionKind::VehicleInformation => vec![
            ("Your Vehicle:", claim.vehicle.summary()),
            ("License Plate:", text(&claim.vehicle.license_plate)),
            ("Other Vehicle:", claim.other_vehicle.summary()),
            ("Other Vehicle License Plate:", text(&claim.other_vehicle.license_plate)),
        ],
        SectionKind::InjuryInformation => {
            let Some(injury) = &claim.injury else {
                return Vec::new();
            };
            let treatment = injury.treatment.as_ref();
            vec![
                ("Injury Description:", injury.description.clone()),
                ("Treated by Doctor:", yes_no(treatment.is_some())),
                ("Doctor's Name:", treatment.and_then(|t| t.doctor_name.clone())),
                ("Doctor's Address:", treatment.and_then(|t| t.doctor_address.clone())),
                ("Hospital Name:", treatment.and_then(|t| t.hospital_name.clone())),
                ("Hospital Address:", treatment.and_then(|t| t.hospital_address.clone())),
            ]
        }
        SectionKind::EmploymentInformation => {
            let wage_loss = claim.employment.wage_loss.as_ref();
            vec![
                ("Lost Wages:", yes_no(wage_loss.is_some())),
                ("Wage Loss Amount:", wage_loss.and_then(|w| money(&w.amount))),
                ("Average Weekly Wage:", wage_loss.and_then(|w| money(&w.average_weekly_wage))),
                ("Disability Start Date:", wage_loss.and_then(|w| w.disability_start_date.clone())),
                ("Return to Work Date:", wage_loss.and_then(|w| w.return_to_work_date.clone())),
            ]
        }
        SectionKind::WorkersCompensation => {
            let Some(wc) = &claim.employment.workers_comp else {
                return Vec::new();
            };
            vec![
                ("Workers Comp Eligible:", yes_no(true)),
                ("Workers Comp Amount:", money(&wc.amount)),
                ("Workers Comp Period:", wc.period.clone()),
            ]
        }
        SectionKind::EmployerDetails(i) => {
            let Some(employer) = claim.employment.employers.get(*i) else {
                return Vec::new();
            };
            vec![
                ("Name:", employer.name.clone()),
                ("Address:", employer.address.clone()),
                ("Occupation:", employer.occupation.clone()),
                ("From Date:", employer.from_date.clone()),
                ("To Date:", employer.to_date.clone()),
            ]
        }
        SectionKind::OtherExpenses => {
            let description = claim
                .other_expenses
                .as_ref()
                .and_then(|o| o.description.clone())
                .unwrap_or_else(|| "No description provided".to_string());
            vec![("Description:", Some(description))]
        }
        SectionKind::WitnessInformation => {
            let w = &claim.witness;
            vec![
                ("Name:", w.name.clone()),
                ("Phone:", w.phone.clone()),
                ("Address:", w.address.clone()),
                ("Statement:", w.statement.clone()),
            ]
        }
    }
}

/// Draws a titled list of label/value items. Breaks may fall between
/// items, never inside one.
pub(crate) fn add_section(layout: &mut Layout<'_>, title: &str, items: &[Item]) {
    layout.check_new_page(TITLE_SPACE);

    let margin = layout.geometry().margin;
    let value_width = layout.geometry().content_width() - VALUE_INDENT;
    let metrics = FontMetrics::new(FontStyle::Regular, BODY_SIZE);

    layout.mark_section(title);
    layout.text(margin, layout.y(), title, FontStyle::Bold, TITLE_SIZE);
    layout.advance(TITLE_ADVANCE);

    for (label, value) in items {
        let value = value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER);
        let mut lines = wrap_text(value, value_width, &metrics);
        if lines.is_empty() {
            lines.push(PLACEHOLDER.to_string());
        }
        let height = ITEM_LINE_HEIGHT * lines.len() as f32;

        layout.check_new_page(height);

        let top = layout.y();
        layout.text(margin, top, *label, FontStyle::Bold, BODY_SIZE);
        for (i, line) in lines.iter().enumerate() {
            let y = top + i as f32 * ITEM_LINE_HEIGHT;
            layout.text(margin + VALUE_INDENT, y, line.as_str(), FontStyle::Regular, BODY_SIZE);
        }
        layout.advance(height);

        layout.place_item(PlacedItem {
            section: title.to_string(),
            label: label.to_string(),
            lines,
            top,
            bottom: layout.y(),
        });
    }

    layout.advance(SECTION_GAP);
}

pub(crate) fn render_sections(layout: &mut Layout<'_>, claim: &Claim) {
    for kind in section_plan(claim) {
        let items = section_items(&kind, claim);
        add_section(layout, &kind.title(), &items);
    }
}
