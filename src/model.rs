use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::signature::{Signature, SignatureImage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    InProgress,
    Finished,
    Other(String),
}

impl From<String> for ClaimStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "In Progress" => ClaimStatus::InProgress,
            "Finished" => ClaimStatus::Finished,
            _ => ClaimStatus::Other(s),
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::InProgress => f.write_str("In Progress"),
            ClaimStatus::Finished => f.write_str("Finished"),
            ClaimStatus::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insurance {
    pub company: String,
    pub policy_number: String,
    pub claim_number: String,
    pub adjuster_name: String,
    pub adjuster_phone: String,
    pub medical_insurance: String,
    pub medical_insurance_id: String,
    pub medical_bills_amount: Option<String>,
    pub more_medical_expenses: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Personal {
    pub client_name: String,
    pub date_of_birth: String,
    pub social_security_number: String,
    pub phone_home: String,
    pub phone_business: String,
    pub address: String,
    pub permanent_address: String,
    pub florida_residence_duration: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accident {
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vehicle {
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub license_plate: String,
}

impl Vehicle {
    /// "2020 Toyota Camry (Silver)", built from whichever parts are present.
    pub fn summary(&self) -> Option<String> {
        let name: Vec<&str> = [&self.year, &self.make, &self.model]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        let color = self.color.trim();
        match (name.is_empty(), color.is_empty()) {
            (true, true) => None,
            (true, false) => Some(format!("({color})")),
            (false, true) => Some(name.join(" ")),
            (false, false) => Some(format!("{} ({color})", name.join(" "))),
        }
    }
}

/// Doctor and hospital details; only present when the claimant was treated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Treatment {
    pub doctor_name: Option<String>,
    pub doctor_address: Option<String>,
    pub hospital_type: Option<String>,
    pub hospital_name: Option<String>,
    pub hospital_address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Injury {
    pub description: Option<String>,
    pub treatment: Option<Treatment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkersComp {
    pub amount: Option<String>,
    pub period: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employer {
    pub name: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl Employer {
    fn normalized(self) -> Self {
        Employer {
            name: non_empty(self.name),
            address: non_empty(self.address),
            occupation: non_empty(self.occupation),
            from_date: non_empty(self.from_date),
            to_date: non_empty(self.to_date),
        }
    }
}

/// Wage-loss figures; only present when the claimant lost wages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WageLoss {
    pub amount: Option<String>,
    pub average_weekly_wage: Option<String>,
    pub disability_start_date: Option<String>,
    pub return_to_work_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Employment {
    pub was_at_work: bool,
    pub wage_loss: Option<WageLoss>,
    pub workers_comp: Option<WorkersComp>,
    pub employers: Vec<Employer>,
}

impl Employment {
    pub fn lost_wages(&self) -> bool {
        self.wage_loss.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OtherExpenses {
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Witness {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub statement: Option<String>,
}

impl Witness {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.statement.is_none()
    }
}

/// One of the two authorization blocks (medical, wage).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Authorization {
    pub consent: bool,
    signature: Option<Signature>,
}

impl Authorization {
    pub fn new(consent: bool, signature: Option<Signature>) -> Self {
        Authorization { consent, signature }
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Re-signing replaces the previous signature wholesale.
    pub fn sign(&mut self, signature: Signature) {
        self.signature = Some(signature);
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "ClaimRecord")]
pub struct Claim {
    pub id: String,
    pub date: String,
    pub status: ClaimStatus,
    pub claim_type: String,
    pub description: String,
    pub file_number: String,
    pub insurance: Insurance,
    pub personal: Personal,
    pub accident: Accident,
    pub vehicle: Vehicle,
    pub other_vehicle: Vehicle,
    pub injury: Option<Injury>,
    pub employment: Employment,
    pub other_expenses: Option<OtherExpenses>,
    pub medical_authorization: Authorization,
    pub wage_authorization: Authorization,
    pub witness: Witness,
}

impl Claim {
    pub fn from_json(json: &str) -> Result<Claim, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidClaim(e.to_string()))
    }

    /// Download name of the exported document, `claim-{id}.pdf`.
    pub fn file_name(&self) -> String {
        let safe: String = self
            .id
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                c => c,
            })
            .collect();
        format!("claim-{safe}.pdf")
    }
}

/// Parse a claims API payload: either one claim object or an array of them.
pub fn parse_claims(json: &str) -> Result<Vec<Claim>, Error> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::InvalidClaim(e.to_string()))?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map_err(|e| Error::InvalidClaim(format!("claim #{}: {e}", i + 1)))
            })
            .collect(),
        value => serde_json::from_value(value)
            .map(|claim| vec![claim])
            .map_err(|e| Error::InvalidClaim(e.to_string())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn signature(data: Option<String>, date: Option<String>) -> Result<Option<Signature>, Error> {
    match non_empty(data) {
        Some(url) => {
            let image = SignatureImage::from_data_url(&url)?;
            Ok(Some(Signature::new(image, non_empty(date))))
        }
        None => Ok(None),
    }
}

/// Wire shape of a claim as served by the claims API (camelCase keys).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRecord {
    id: String,
    date: String,
    status: String,
    #[serde(rename = "type")]
    claim_type: String,
    description: String,
    client_name: String,
    insurance_company: String,
    policy_number: String,
    claim_number: String,
    adjuster_name: String,
    adjuster_phone: String,
    date_of_accident: String,
    file_number: String,
    medical_insurance: String,
    medical_insurance_id: String,
    phone_home: String,
    phone_business: String,
    address: String,
    date_of_birth: String,
    social_security_number: String,
    permanent_address: String,
    florida_residence_duration: String,
    accident_time: String,
    accident_location: String,
    vehicle_year: String,
    vehicle_make: String,
    vehicle_model: String,
    vehicle_color: String,
    vehicle_license_plate: String,
    other_vehicle_year: String,
    other_vehicle_make: String,
    other_vehicle_model: String,
    other_vehicle_color: String,
    other_vehicle_license_plate: String,
    was_injured: bool,
    #[serde(default)]
    injury_description: Option<String>,
    was_treated_by_doctor: bool,
    #[serde(default)]
    doctor_name: Option<String>,
    #[serde(default)]
    doctor_address: Option<String>,
    #[serde(default)]
    hospital_type: Option<String>,
    #[serde(default)]
    hospital_name: Option<String>,
    #[serde(default)]
    hospital_address: Option<String>,
    #[serde(default)]
    medical_bills_amount: Option<String>,
    will_have_more_medical_expenses: bool,
    was_at_work: bool,
    lost_wages: bool,
    #[serde(default)]
    wage_loss_amount: Option<String>,
    #[serde(default)]
    average_weekly_wage: Option<String>,
    #[serde(default)]
    disability_start_date: Option<String>,
    #[serde(default)]
    return_to_work_date: Option<String>,
    workers_comp_eligible: bool,
    #[serde(default)]
    workers_comp_amount: Option<String>,
    #[serde(default)]
    workers_comp_period: Option<String>,
    #[serde(default)]
    employers: Vec<Employer>,
    other_expenses: bool,
    #[serde(default)]
    other_expenses_description: Option<String>,
    medical_authorization: bool,
    wage_authorization: bool,
    #[serde(default)]
    medical_signature: Option<String>,
    #[serde(default)]
    medical_signature_date: Option<String>,
    #[serde(default)]
    wage_signature: Option<String>,
    #[serde(default)]
    wage_signature_date: Option<String>,
    #[serde(default)]
    witness_name: Option<String>,
    #[serde(default)]
    witness_phone: Option<String>,
    #[serde(default)]
    witness_address: Option<String>,
    #[serde(default)]
    witness_statement: Option<String>,
}

impl TryFrom<ClaimRecord> for Claim {
    type Error = Error;

    fn try_from(r: ClaimRecord) -> Result<Self, Self::Error> {
        if r.id.trim().is_empty() {
            return Err(Error::InvalidClaim("claim id is empty".into()));
        }

        let treatment = r.was_treated_by_doctor.then(|| Treatment {
            doctor_name: non_empty(r.doctor_name),
            doctor_address: non_empty(r.doctor_address),
            hospital_type: non_empty(r.hospital_type),
            hospital_name: non_empty(r.hospital_name),
            hospital_address: non_empty(r.hospital_address),
        });
        let injury = r.was_injured.then(|| Injury {
            description: non_empty(r.injury_description),
            treatment,
        });

        let wage_loss = r.lost_wages.then(|| WageLoss {
            amount: non_empty(r.wage_loss_amount),
            average_weekly_wage: non_empty(r.average_weekly_wage),
            disability_start_date: non_empty(r.disability_start_date),
            return_to_work_date: non_empty(r.return_to_work_date),
        });

        let workers_comp = r.workers_comp_eligible.then(|| WorkersComp {
            amount: non_empty(r.workers_comp_amount),
            period: non_empty(r.workers_comp_period),
        });

        let other_expenses = r.other_expenses.then(|| OtherExpenses {
            description: non_empty(r.other_expenses_description),
        });

        let medical_signature = signature(r.medical_signature, r.medical_signature_date)?;
        let wage_signature = signature(r.wage_signature, r.wage_signature_date)?;

        Ok(Claim {
            id: r.id,
            date: r.date,
            status: ClaimStatus::from(r.status),
            claim_type: r.claim_type,
            description: r.description,
            file_number: r.file_number,
            insurance: Insurance {
                company: r.insurance_company,
                policy_number: r.policy_number,
                claim_number: r.claim_number,
                adjuster_name: r.adjuster_name,
                adjuster_phone: r.adjuster_phone,
                medical_insurance: r.medical_insurance,
                medical_insurance_id: r.medical_insurance_id,
                medical_bills_amount: non_empty(r.medical_bills_amount),
                more_medical_expenses: r.will_have_more_medical_expenses,
            },
            personal: Personal {
                client_name: r.client_name,
                date_of_birth: r.date_of_birth,
                social_security_number: r.social_security_number,
                phone_home: r.phone_home,
                phone_business: r.phone_business,
                address: r.address,
                permanent_address: r.permanent_address,
                florida_residence_duration: r.florida_residence_duration,
            },
            accident: Accident {
                date: r.date_of_accident,
                time: r.accident_time,
                location: r.accident_location,
            },
            vehicle: Vehicle {
                year: r.vehicle_year,
                make: r.vehicle_make,
                model: r.vehicle_model,
                color: r.vehicle_color,
                license_plate: r.vehicle_license_plate,
            },
            other_vehicle: Vehicle {
                year: r.other_vehicle_year,
                make: r.other_vehicle_make,
                model: r.other_vehicle_model,
                color: r.other_vehicle_color,
                license_plate: r.other_vehicle_license_plate,
            },
            injury,
            employment: Employment {
                was_at_work: r.was_at_work,
                wage_loss,
                workers_comp,
                employers: r.employers.into_iter().map(Employer::normalized).collect(),
            },
            other_expenses,
            medical_authorization: Authorization::new(r.medical_authorization, medical_signature),
            wage_authorization: Authorization::new(r.wage_authorization, wage_signature),
            witness: Witness {
                name: non_empty(r.witness_name),
                phone: non_empty(r.witness_phone),
                address: non_empty(r.witness_address),
                statement: non_empty(r.witness_statement),
            },
        })
    }
}
