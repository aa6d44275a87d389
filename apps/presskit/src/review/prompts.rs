/// Quality review prompt. The reply format block is what `parser` reads back.
/// Replace: {press_release}, {company_overview}, {pr_message}, {email_draft}
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the following press kit components and provide scores (0-10) and detailed feedback on:
1. Content Consistency
2. Writing Style and Tone
3. Layout and Structure
4. SEO Optimization

Also provide overall feedback and suggestions for improvement.

PRESS RELEASE:
{press_release}

COMPANY OVERVIEW:
{company_overview}

PR MESSAGE:
{pr_message}

EMAIL DRAFT:
{email_draft}

Format your response as follows:

Content Consistency: [SCORE]/10
[FEEDBACK]

Writing Style and Tone: [SCORE]/10
[FEEDBACK]

Layout and Structure: [SCORE]/10
[FEEDBACK]

SEO Optimization: [SCORE]/10
[FEEDBACK]

Overall Feedback:
[COMPREHENSIVE FEEDBACK AND SUGGESTIONS]"#;
