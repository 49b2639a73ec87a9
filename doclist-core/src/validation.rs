use crate::models::Doctor;
use crate::sorting::{parse_experience, parse_fee};

/// Check a loaded doctor for fields the listing can only partly use.
/// These never reject the record; they are reported so the feed can be fixed.
pub fn validate_doctor(doctor: &Doctor) -> Vec<String> {
    let mut warnings = Vec::new();
    let doctor_ref = format!("Doctor '{}'", doctor.id);

    match doctor.name.as_deref() {
        None => warnings.push(format!("{}: has no name and will not match searches", doctor_ref)),
        Some(name) if name.trim().is_empty() => {
            warnings.push(format!("{}: name is blank", doctor_ref))
        }
        Some(_) => {}
    }

    if parse_fee(&doctor.fees).is_none() {
        warnings.push(format!(
            "{}: fee '{}' is not a number and sorts as lowest",
            doctor_ref, doctor.fees
        ));
    }

    if parse_experience(&doctor.experience).is_none() {
        warnings.push(format!(
            "{}: experience '{}' has no leading number and sorts as lowest",
            doctor_ref, doctor.experience
        ));
    }

    for name in doctor.specialty_names() {
        if name.trim().is_empty() {
            warnings.push(format!("{}: has a blank specialty name", doctor_ref));
        } else if name.contains(',') {
            warnings.push(format!(
                "{}: specialty '{}' contains a comma and cannot be shared in a link",
                doctor_ref, name
            ));
        }
    }

    warnings
}
