//! Resolution rules
//!
//! Hard-coded keyword rules applied to the parties' arguments and their
//! retrieved references. This is a keyword match, not legal reasoning.

pub const ETHICAL_RECOMMENDATIONS: [&str; 3] = [
    "- Mediation is recommended to facilitate a fair discussion.",
    "- Both parties should consider negotiation and compromise to avoid legal battles.",
    "- Transparency and open communication can prevent misunderstandings and lead to a fair outcome.",
];

const NO_RULE_MATCHED: &str =
    "No strong legal justification found. Ethical dispute resolution is recommended.";

/// Suggest a resolution from the arguments and retrieved references.
pub fn suggest_resolution(
    claimant_argument: &str,
    claimant_refs: &[String],
    respondent_argument: &str,
    respondent_refs: &[String],
) -> String {
    let mut resolution = String::new();

    if claimant_argument.to_lowercase().contains("coercion")
        && claimant_refs
            .iter()
            .any(|r| r.to_lowercase().contains("contract"))
    {
        resolution.push_str(
            "\n- If coercion is proven, the contract is void. The claimant has a strong case.",
        );
    }

    if respondent_argument.to_lowercase().contains("eviction")
        && respondent_refs.iter().any(|r| r.contains("Rent Control Act"))
    {
        resolution.push_str(
            "\n- If a legal notice was served, the eviction is valid. Otherwise, the claimant can challenge it.",
        );
    }

    if resolution.is_empty() {
        resolution = NO_RULE_MATCHED.to_string();
    }
    resolution
}
