use super::super::domain::{LeadTemperature, SessionProfile};

/// Follow-up suggestion derived from the temperature bucket and the profile.
///
/// The email-presence check only matters inside the high-intent branch;
/// every temperature maps to exactly one non-empty message.
pub(crate) fn recommend_follow_up(temperature: LeadTemperature, profile: &SessionProfile) -> String {
    match temperature {
        LeadTemperature::Qualified | LeadTemperature::Hot => match known_email(profile) {
            Some(email) => format!(
                "High-intent lead: schedule a personalized call with {email} within 24 hours."
            ),
            None => "High-intent session without contact details; prioritize email capture and \
                     offer to schedule a demo."
                .to_string(),
        },
        LeadTemperature::Warm => {
            "Moderate engagement; enroll in the nurture email sequence and retarget with relevant \
             content."
                .to_string()
        }
        LeadTemperature::Cold => {
            "Low engagement so far; revisit targeting and lead with shorter introductory content."
                .to_string()
        }
    }
}

fn known_email(profile: &SessionProfile) -> Option<&str> {
    profile
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
}
