use intake_types::{InputKind, IntakeDefinition, Question};

/// The startup application wizard: sixteen questions walked one at a time,
/// grouped into sections for the progress display.
pub fn startup_application() -> IntakeDefinition {
    let questions = vec![
        // Founders & Company
        Question::new("founder_name", "What is your name?", InputKind::Text)
            .with_placeholder("Full name")
            .with_section("Founders & Company")
            .with_export_name("Founder Name"),
        Question::new("email", "What is your email address?", InputKind::Email)
            .with_placeholder("you@example.com")
            .with_section("Founders & Company")
            .with_export_name("Email"),
        Question::new("company_name", "What is your company name?", InputKind::Text)
            .with_placeholder("Company name")
            .with_section("Founders & Company")
            .with_export_name("Company Name"),
        Question::new("country", "Where is your company based?", InputKind::Text)
            .with_placeholder("Country / Region")
            .with_section("Founders & Company")
            .with_export_name("Country"),
        Question::new("website", "Do you have a website?", InputKind::Text)
            .with_placeholder("https://yourcompany.com (optional)")
            .with_section("Founders & Company")
            .with_export_name("Website")
            .optional(),
        // Problem & Solution
        Question::new(
            "problem",
            "In one sentence, what problem are you solving?",
            InputKind::Text,
        )
        .with_placeholder("Describe the core problem...")
        .with_max_length(200)
        .with_section("Problem & Solution")
        .with_export_name("Problem"),
        Question::new(
            "solution",
            "How are you solving it differently from existing solutions?",
            InputKind::Multiline,
        )
        .with_placeholder("Explain your unique approach...")
        .with_section("Problem & Solution")
        .with_export_name("Solution"),
        // Market
        Question::new("customer", "Who is your primary customer?", InputKind::Text)
            .with_placeholder("Describe your target customer")
            .with_section("Market")
            .with_export_name("Primary Customer"),
        Question::new(
            "market_size",
            "What is the size of the market you are targeting?",
            InputKind::Text,
        )
        .with_placeholder("TAM/SAM/SOM or approximate value")
        .with_section("Market")
        .with_export_name("Market Size"),
        // Technology & Defensibility
        Question::new(
            "technology",
            "What is your core technology or innovation?",
            InputKind::Multiline,
        )
        .with_placeholder("Describe your technology...")
        .with_section("Technology & Defensibility")
        .with_export_name("Core Technology"),
        Question::new("defensibility", "What makes this defensible?", InputKind::Multiline)
            .with_placeholder("IP, data, execution, partnerships, etc.")
            .with_section("Technology & Defensibility")
            .with_export_name("Defensibility"),
        // Traction & Status
        Question::new(
            "stage",
            "What is your current stage?",
            InputKind::select(["Idea", "Prototype", "MVP", "Early Revenue", "Scaling"]),
        )
        .with_placeholder("Select your stage")
        .with_section("Traction & Status")
        .with_export_name("Current Stage"),
        Question::new(
            "traction",
            "Any traction or validation so far?",
            InputKind::Multiline,
        )
        .with_placeholder("Pilots, users, revenue, grants, LOIs...")
        .with_section("Traction & Status")
        .with_export_name("Traction"),
        // Funding
        Question::new(
            "funding_amount",
            "How much capital are you raising now?",
            InputKind::Text,
        )
        .with_placeholder("e.g., \u{20b9}50 Lakhs, $500K")
        .with_section("Funding")
        .with_export_name("Funding Amount"),
        Question::new(
            "use_of_funds",
            "What will you use the funds for?",
            InputKind::Multiline,
        )
        .with_placeholder("Top 2-3 items only")
        .with_section("Funding")
        .with_export_name("Use of Funds"),
        // Closing
        Question::new(
            "why_invest",
            "Why should we invest in you?",
            InputKind::Multiline,
        )
        .with_placeholder("Your conviction as a founder...")
        .with_section("Closing")
        .with_export_name("Why Invest"),
    ];

    IntakeDefinition::new("Startup Application", questions)
        .with_completion_message(
            "Application received. Our team will review your application and reach out if there's a fit.",
        )
        .with_subject("New Application: ", "company_name")
        .with_from_field("founder_name")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_questions_in_six_sections() {
        let definition = startup_application();
        assert_eq!(definition.len(), 16);

        let mut sections: Vec<&str> = definition.questions().iter().map(|q| q.section()).collect();
        sections.dedup();
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn website_is_the_only_optional_question() {
        let definition = startup_application();
        let optional: Vec<_> = definition
            .questions()
            .iter()
            .filter(|q| !q.is_required())
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(optional, vec!["website"]);
    }

    #[test]
    fn problem_question_is_length_capped() {
        let definition = startup_application();
        let problem = definition.question_by_id(&"problem".into()).unwrap();
        assert_eq!(problem.max_length(), Some(200));
    }
}
