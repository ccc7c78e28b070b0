use intake_types::{InputKind, IntakeDefinition, Question};

/// The partner inquiry questionnaire: contact details, collaboration
/// interests (multi-select), and open-ended fit questions.
pub fn partner_inquiry() -> IntakeDefinition {
    let questions = vec![
        Question::new("full_name", "What is your full name?", InputKind::Text)
            .with_placeholder("Full name")
            .with_section("Contact")
            .with_export_name("Full Name"),
        Question::new("email", "What is your email address?", InputKind::Email)
            .with_placeholder("you@example.com")
            .with_section("Contact")
            .with_export_name("Email"),
        Question::new("phone", "What is your phone number?", InputKind::Text)
            .with_placeholder("+91 ...")
            .with_section("Contact")
            .with_export_name("Phone"),
        Question::new("city", "Which city are you based in?", InputKind::Text)
            .with_placeholder("City")
            .with_section("Contact")
            .with_export_name("City"),
        Question::new("linkedin", "Your LinkedIn profile?", InputKind::Text)
            .with_placeholder("https://linkedin.com/in/...")
            .with_section("Contact")
            .with_export_name("LinkedIn"),
        Question::new(
            "profession",
            "What best describes your profession?",
            InputKind::select([
                "Self Employed",
                "Business Owner",
                "Corporate Professional",
                "Researcher / Academic",
                "Student",
                "Retired",
                "Others",
            ]),
        )
        .with_section("Background")
        .with_export_name("Profession"),
        Question::new(
            "collaboration_types",
            "What kind of collaboration are you interested in?",
            InputKind::multi_select([
                "Technology Partnership",
                "Research Collaboration",
                "Industry / Corporate Partnership",
                "Manufacturing / Supply Chain",
                "Government / Policy Engagement",
                "Mentorship",
                "Media / Outreach",
                "Other",
            ]),
        )
        .with_section("Collaboration")
        .with_export_name("Collaboration Types"),
        Question::new(
            "domains",
            "Which domains are you interested in?",
            InputKind::multi_select([
                "Space & Aerospace",
                "AgriTech",
                "Climate & Sustainability",
                "AI / ML",
                "Robotics & Automation",
                "IoT & Smart Systems",
                "Biotechnology",
                "Advanced Manufacturing",
                "Smart Cities & Mobility",
                "Education & Research",
                "Other",
            ]),
        )
        .with_section("Collaboration")
        .with_export_name("Domains"),
        Question::new(
            "has_collaborated",
            "Have you collaborated with startups or incubators before?",
            InputKind::select(["Yes", "No"]),
        )
        .with_section("Experience")
        .with_export_name("Has Collaborated"),
        Question::new(
            "previous_collaborations",
            "Tell us about your previous collaborations.",
            InputKind::Multiline,
        )
        .with_placeholder("Programs, startups, outcomes... (optional)")
        .with_section("Experience")
        .with_export_name("Previous Collaborations")
        .optional(),
        Question::new(
            "value_proposition",
            "What value can you bring to our startups?",
            InputKind::Multiline,
        )
        .with_placeholder("Networks, expertise, infrastructure...")
        .with_section("Fit")
        .with_export_name("Value Proposition"),
        Question::new(
            "interested_in_mentoring",
            "Would you be interested in mentoring?",
            InputKind::select(["Yes", "No", "Maybe later"]),
        )
        .with_section("Fit")
        .with_export_name("Interested In Mentoring"),
    ];

    IntakeDefinition::new("Partner Inquiry", questions)
        .with_completion_message(
            "Thank you! We've received your partnership inquiry. Our team will review your submission and reach out if there's a fit.",
        )
        .with_subject("Partner Inquiry from ", "full_name")
        .with_from_field("full_name")
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_types::InputKind;

    #[test]
    fn multi_selects_carry_choice_sets() {
        let definition = partner_inquiry();
        let domains = definition.question_by_id(&"domains".into()).unwrap();
        let InputKind::MultiSelect { options } = domains.kind() else {
            panic!("domains should be a multi-select");
        };
        assert!(options.iter().any(|o| o == "AgriTech"));
    }

    #[test]
    fn previous_collaborations_is_optional() {
        let definition = partner_inquiry();
        let q = definition
            .question_by_id(&"previous_collaborations".into())
            .unwrap();
        assert!(!q.is_required());
    }
}
