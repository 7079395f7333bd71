use crate::models::ProductBrief;

pub const IDEA_SYSTEM: &str = include_str!("../data/prompts/idea_system.txt");
pub const IDEA_USER: &str = include_str!("../data/prompts/idea_user.txt");
pub const IMAGE_PROMPT: &str = include_str!("../data/prompts/image_prompt.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is a single pass over the template, so values are inserted
/// verbatim even when they themselves contain `{{...}}`. Unknown placeholders
/// are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

/// User prompt asking for `count` ideas about `brief`.
pub fn idea_prompt(brief: &ProductBrief, count: usize) -> String {
    let count = count.to_string();
    render(
        IDEA_USER,
        &[
            ("count", &count),
            ("product_name", &brief.product_name),
            ("core_problem", &brief.core_problem),
            ("primary_benefit", &brief.primary_benefit),
            ("visual_elements", &brief.visual_elements),
            ("target_audience", &brief.target_audience),
            ("unique_mechanism", &brief.unique_mechanism),
            ("emotional_benefit", &brief.emotional_benefit),
            ("brand_personality", &brief.brand_personality),
            ("headline", &brief.headline),
        ],
    )
}

pub fn image_prompt(idea: &str) -> String {
    render(IMAGE_PROMPT, &[("idea", idea)])
}
