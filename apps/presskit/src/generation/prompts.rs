// All LLM prompt templates for press kit generation.
// Placeholders are `{name}` tokens filled in one pass by `llm_client::prompts::fill_template`.

/// Press release prompt.
/// Replace: {company_name}, {topic}, {product}, {achievements}, {brand_attributes},
///          {target_media}, {tone}, {style}, {supplementary}, {revision_notes}
pub const PRESS_RELEASE_PROMPT_TEMPLATE: &str = r#"Generate a press release for {company_name} about {topic}.

Company Information:
- Name: {company_name}
- Product/Service: {product}
- Achievements: {achievements}
- Brand Attributes: {brand_attributes}

Target Media: {target_media}
Desired Tone: {tone}
Style: {style}

Include any relevant supplementary data:
{supplementary}{revision_notes}"#;

/// Appended to the press release prompt when the operator asked for changes.
/// Replace: {request}
pub const REVISION_NOTES_TEMPLATE: &str = r#"

The previous drafts were rejected. Apply these requested modifications:
{request}"#;

/// Company overview prompt.
/// Replace: {company_name}, {product}, {achievements}, {brand_attributes}
pub const COMPANY_OVERVIEW_PROMPT_TEMPLATE: &str = r#"Write a comprehensive company overview for {company_name}.

Include information about:
- Their flagship product/service: {product}
- Major achievements: {achievements}
- Brand attributes: {brand_attributes}

Make it professional and informative, suitable for a press kit."#;

/// PR message prompt.
/// Replace: {company_name}, {topic}, {target_media}, {tone}
pub const PR_MESSAGE_PROMPT_TEMPLATE: &str = r#"Write a concise PR message for {company_name} regarding {topic}.

The message should be suitable for {target_media} and use a {tone} tone.

Keep it brief but impactful."#;

/// Media email prompt.
/// Replace: {company_name}, {topic}, {target_media}, {tone}
pub const EMAIL_DRAFT_PROMPT_TEMPLATE: &str = r#"Write an email draft that could be sent to media contacts about {topic} for {company_name}.

Target: {target_media}
Tone: {tone}

Include a brief introduction, the key points about the announcement, and contact information placeholder."#;
