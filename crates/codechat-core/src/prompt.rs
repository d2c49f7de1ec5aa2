use crate::intent::Intent;

/// Render the instruction text sent to the model for one turn.
///
/// The raw input is embedded verbatim. No escaping is applied, even when the
/// input itself contains instruction-like text.
pub fn build_prompt(intent: Intent, raw: &str) -> String {
    match intent {
        Intent::CodeAnalysis => format!(
            "Analyze the following code:\n\
             {raw}\n\
             \n\
             - Identify coding errors.\n\
             - Suggest improvements to the code.\n\
             - Evaluate security vulnerabilities if any.\n\
             - Provide tips to improve performance.\n"
        ),
        Intent::CodeGeneration => format!(
            "Convert the following description into code:\n\
             {raw}\n\
             \n\
             - Ensure the code works correctly.\n\
             - Add comments where necessary.\n"
        ),
        Intent::GeneralChat => raw.to_string(),
    }
}
