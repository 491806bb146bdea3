mod common;

use nofault_pdf::{
    Employer, OtherExpenses, SectionKind, Treatment, WageLoss, WorkersComp, layout_claim,
    section_plan,
};

fn employer(name: &str) -> Employer {
    Employer {
        name: Some(name.to_string()),
        address: Some("1 Business Park, Miami, FL".to_string()),
        occupation: Some("Clerk".to_string()),
        from_date: Some("2019-01-01".to_string()),
        to_date: Some("Present".to_string()),
    }
}

#[test]
fn bare_claim_renders_only_the_fixed_sections() {
    let claim = common::bare_claim();
    assert_eq!(
        section_plan(&claim),
        vec![
            SectionKind::ClaimInformation,
            SectionKind::InsuranceInformation,
            SectionKind::PersonalInformation,
            SectionKind::AccidentInformation,
            SectionKind::VehicleInformation,
        ]
    );

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(
        doc.section_titles(),
        vec![
            "Claim Information",
            "Insurance Information",
            "Personal Information",
            "Accident Information",
            "Vehicle Information",
            "Medical Authorization",
            "Wage Authorization",
        ]
    );
}

#[test]
fn each_employer_gets_a_numbered_section_in_order() {
    let mut claim = common::bare_claim();
    claim.employment.wage_loss = Some(WageLoss::default());
    claim.employment.employers = vec![employer("First Corp"), employer("Second LLC")];

    let doc = layout_claim(&claim, &common::options()).unwrap();
    let employer_titles: Vec<&str> = doc
        .section_titles()
        .into_iter()
        .filter(|t| t.starts_with("Employer "))
        .collect();
    assert_eq!(employer_titles, vec!["Employer 1 Details", "Employer 2 Details"]);
    assert_eq!(common::item_value(&doc, "Employer 1 Details", "Name:"), "First Corp");
    assert_eq!(common::item_value(&doc, "Employer 2 Details", "Name:"), "Second LLC");
}

#[test]
fn employers_need_the_employment_section() {
    let mut claim = common::bare_claim();
    claim.employment.employers = vec![employer("Hidden Inc")];
    claim.employment.workers_comp = Some(WorkersComp::default());

    let plan = section_plan(&claim);
    assert!(!plan.contains(&SectionKind::EmploymentInformation));
    assert!(!plan.contains(&SectionKind::WorkersCompensation));
    assert!(!plan.iter().any(|k| matches!(k, SectionKind::EmployerDetails(_))));
}

#[test]
fn workers_comp_follows_employment() {
    let mut claim = common::bare_claim();
    claim.employment.was_at_work = true;
    claim.employment.workers_comp = Some(WorkersComp {
        amount: Some("400".to_string()),
        period: None,
    });
    claim.employment.employers = vec![employer("Only Co")];

    let plan = section_plan(&claim);
    let employment = plan
        .iter()
        .position(|k| *k == SectionKind::EmploymentInformation)
        .unwrap();
    assert_eq!(plan[employment + 1], SectionKind::WorkersCompensation);
    assert_eq!(plan[employment + 2], SectionKind::EmployerDetails(0));

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Workers Compensation", "Workers Comp Eligible:"), "Yes");
    assert_eq!(common::item_value(&doc, "Workers Compensation", "Workers Comp Amount:"), "$400");
    assert_eq!(common::item_value(&doc, "Workers Compensation", "Workers Comp Period:"), "N/A");
}

#[test]
fn any_witness_field_adds_the_witness_section() {
    let mut claim = common::bare_claim();
    claim.witness.phone = Some("555-0199".to_string());

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert!(doc.section_titles().contains(&"Witness Information"));
    assert_eq!(common::item_value(&doc, "Witness Information", "Phone:"), "555-0199");
    assert_eq!(common::item_value(&doc, "Witness Information", "Name:"), "N/A");
    assert_eq!(common::item_value(&doc, "Witness Information", "Statement:"), "N/A");
}

#[test]
fn other_expenses_without_description() {
    let mut claim = common::bare_claim();
    claim.other_expenses = Some(OtherExpenses { description: None });

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(
        common::item_value(&doc, "Other Expenses", "Description:"),
        "No description provided"
    );
}

#[test]
fn missing_values_render_placeholder() {
    let mut claim = common::bare_claim();
    claim.file_number = String::new();
    claim.personal.phone_business = "   ".to_string();
    claim.insurance.medical_bills_amount = None;
    claim.vehicle = Default::default();

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Claim Information", "File Number:"), "N/A");
    assert_eq!(common::item_value(&doc, "Personal Information", "Business Phone:"), "N/A");
    assert_eq!(common::item_value(&doc, "Insurance Information", "Medical Bills Amount:"), "N/A");
    assert_eq!(common::item_value(&doc, "Vehicle Information", "Your Vehicle:"), "N/A");
}

#[test]
fn values_are_formatted_like_the_claim_form() {
    let claim = common::fixture("CLM001");
    let doc = layout_claim(&claim, &common::options()).unwrap();

    assert_eq!(common::item_value(&doc, "Insurance Information", "Medical Bills Amount:"), "$2500");
    assert_eq!(
        common::item_value(&doc, "Insurance Information", "More Medical Expenses Expected:"),
        "Yes"
    );
    assert_eq!(
        common::item_value(&doc, "Vehicle Information", "Your Vehicle:"),
        "2020 Toyota Camry (Silver)"
    );
    assert_eq!(common::item_value(&doc, "Accident Information", "Was at Work:"), "No");
    assert_eq!(common::item_value(&doc, "Employment Information", "Wage Loss Amount:"), "$1500");
}

#[test]
fn untreated_injury_hides_doctor_details() {
    let mut claim = common::fixture("CLM001");
    if let Some(injury) = claim.injury.as_mut() {
        injury.treatment = None;
    }
    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Injury Information", "Treated by Doctor:"), "No");
    assert_eq!(common::item_value(&doc, "Injury Information", "Doctor's Name:"), "N/A");

    claim.injury.as_mut().unwrap().treatment = Some(Treatment {
        doctor_name: Some("Dr. Ada Lane".to_string()),
        ..Treatment::default()
    });
    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Injury Information", "Doctor's Name:"), "Dr. Ada Lane");
    assert_eq!(common::item_value(&doc, "Injury Information", "Hospital Name:"), "N/A");
}

#[test]
fn wage_figures_need_lost_wages() {
    // CLM002 carries "0" and "1000" in its wage fields but lostWages is false
    let claim = common::fixture("CLM002");
    assert!(claim.employment.wage_loss.is_none());

    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Employment Information", "Lost Wages:"), "No");
    for label in [
        "Wage Loss Amount:",
        "Average Weekly Wage:",
        "Disability Start Date:",
        "Return to Work Date:",
    ] {
        assert_eq!(common::item_value(&doc, "Employment Information", label), "N/A", "{label}");
    }

    let mut claim = claim;
    claim.employment.wage_loss = Some(WageLoss {
        average_weekly_wage: Some("1000".to_string()),
        ..WageLoss::default()
    });
    let doc = layout_claim(&claim, &common::options()).unwrap();
    assert_eq!(common::item_value(&doc, "Employment Information", "Lost Wages:"), "Yes");
    assert_eq!(common::item_value(&doc, "Employment Information", "Average Weekly Wage:"), "$1000");
    assert_eq!(common::item_value(&doc, "Employment Information", "Wage Loss Amount:"), "N/A");
}
