// All prompt constants for the assistant's tasks. Templates use
// `{placeholder}` markers that `composer` replaces before sending.

/// System persona for the chat task. `{profile}` is the full rendered
/// profile context.
pub const CHAT_SYSTEM_TEMPLATE: &str = r#"You are Kyle, the personal job-application assistant for the candidate described below. You help with applications, interview preparation, company research, and career strategy across the games and publishing industries.

Voice: warm, direct, practical. Keep answers short and concrete, and suggest a next step when one exists. Ground every factual claim about the candidate in the profile — never invent employers, dates, or numbers.

CANDIDATE PROFILE:
{profile}"#;

/// System prompt for the single-turn research and analysis tasks.
pub const RESEARCH_SYSTEM: &str = "You are a research assistant helping one candidate prepare \
    job applications. Be specific and factual; when something is uncertain, \
    say so rather than guessing.";

/// Single-turn company briefing. `{company}` is the target company name.
pub const COMPANY_RESEARCH_TEMPLATE: &str = r#"Research the company "{company}" for a job application and write a briefing with exactly these six sections, in this order:

1. BUSINESS SUMMARY — what the company does and its main products or titles
2. INDUSTRY & SIZE — sector, scale, headquarters and notable locations
3. CULTURE — working culture, stated values, what employees tend to say
4. RECENT NEWS — notable announcements, releases, or changes from the last year
5. SELLING POINTS — why this company is attractive to a candidate
6. APPLICATION TIPS — what this company likely screens for and how to stand out"#;

/// System prompt for job-fit analysis — enforces JSON-only output.
pub const FIT_ANALYSIS_SYSTEM: &str = "You are an expert job-fit analyst for a single candidate. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job-fit analysis prompt. Replace `{profile}`, `{company}`, `{role}`,
/// and `{job_description}` before sending.
pub const FIT_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Assess how well the candidate below fits the advertised role.

CANDIDATE PROFILE:
{profile}

TARGET: {role} at {company}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "fit_score": 7,
  "fit_summary": "One paragraph on overall fit",
  "matching_skills": ["skills from the profile that the role asks for"],
  "skill_gaps": ["requirements the profile does not cover"],
  "red_flags": ["reasons to be cautious about this application"],
  "recommendations": ["concrete steps to strengthen the application"],
  "cv_version": "localisation",
  "keywords_to_include": ["terms from the job description to mirror"],
  "opening_hook": "A first sentence for the cover letter, tailored to this role"
}

Rules:
- "fit_score" is an integer from 1 (no fit) to 10 (ideal fit)
- "cv_version" is exactly one of "localisation", "language", "product" — pick the framing that best matches the role
- Every entry in "matching_skills" must actually appear in the profile"#;

/// Stage-1 URL analysis: a six-section narrative comparing linked content
/// against the current profile. Replace `{url}` and `{profile}`.
pub const URL_ANALYSIS_TEMPLATE: &str = r#"Analyse the job-relevant content at this URL: {url}

Compare it against the candidate's current profile and write a narrative analysis with exactly these six sections, in this order:

1. CONTENT SUMMARY — what the page is about
2. RELEVANCE — how it relates to the candidate's target roles
3. SKILLS DEMONSTRATED — skills or experience the content evidences
4. ALIGNMENT — where it reinforces what the profile already shows
5. NEW GROUND — what it shows that the profile does not yet mention
6. SUGGESTED USE — how to use this content in future applications

CANDIDATE PROFILE:
{profile}"#;

/// Stage-2 reduction of a URL analysis to newly identified skills.
/// `{analysis}` is the stage-1 narrative.
pub const SKILL_EXTRACTION_TEMPLATE: &str = r#"From the analysis below, list the skills that are NOT already covered by the candidate's profile.

Return ONLY a JSON array of short skill names, for example:
["Unity localisation pipelines", "Subtitle QA"]

Return [] if the analysis surfaces nothing new.

ANALYSIS:
{analysis}"#;

/// System prompt for cover-letter generation.
pub const LETTER_SYSTEM: &str = "You are an expert cover-letter writer for a single candidate. \
    Write in British English, first person, warm and professional. \
    Use only facts from the provided profile — never invent employers, dates, or numbers.";

/// Cover-letter prompt. Replace `{role}`, `{company}`, `{date}`,
/// `{profile}`, and `{context}` (optional sections, possibly empty).
pub const LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter for the {role} position at {company}, dated {date}.

CANDIDATE PROFILE:
{profile}
{context}
Format rules:
- Start with the candidate's name, location, email and phone as a header block, then the date
- Open with "I am writing to apply for the {role} position at {company}." followed by one hook sentence tailored to the company's industry
- Two or three body paragraphs drawing the most relevant experience from the profile
- Close with one line stating the candidate's availability and salary expectation from the profile, then "Warm regards," and the candidate's name
- Aim for roughly 350 words
- Plain text only, no markdown"#;

/// System prompt for CV generation.
pub const CV_SYSTEM: &str = "You are an expert CV writer for a single candidate. \
    Produce ATS-friendly plain text in British English. \
    Use only facts from the provided profile — never invent employers, dates, or numbers.";

/// CV prompt. Replace `{target}`, `{style_headline}`, `{style_summary}`,
/// `{profile}`, and `{context}` (optional sections, possibly empty).
pub const CV_PROMPT_TEMPLATE: &str = r#"Write a complete plain-text CV for the candidate below, targeting {target}.

FRAMING — {style_headline}:
{style_summary}

CANDIDATE PROFILE:
{profile}
{context}
Format rules:
- Sections in this exact order: name and contact header, PROFESSIONAL SUMMARY, SKILLS, PROFESSIONAL EXPERIENCE, EDUCATION & CERTIFICATIONS, PUBLICATIONS, GAMING BACKGROUND
- Omit a section entirely when the profile has nothing for it
- Experience in reverse-chronological order with three or four bullet points per role
- End with one line stating availability and salary expectation from the profile
- Plain text only, no markdown tables"#;

// CV style descriptors — one headline/summary pair per CV framing.

pub const CV_STYLE_LOCALISATION_HEADLINE: &str = "Localisation & Project Management Professional";
pub const CV_STYLE_LOCALISATION_SUMMARY: &str = "Position the candidate as a project-management \
    and localisation professional: delivering complex publishing projects on time and on budget, \
    coordinating cross-functional teams, managing international co-productions, translation \
    oversight, and editorial quality control.";

pub const CV_STYLE_LANGUAGE_HEADLINE: &str = "Product Language Manager";
pub const CV_STYLE_LANGUAGE_SUMMARY: &str = "Position the candidate as a linguistic and editorial \
    professional: style-guide development, editorial standards, translation QA, cultural \
    adaptation for DACH markets, and bilingual work across English and German.";

pub const CV_STYLE_PRODUCT_HEADLINE: &str = "Product Manager";
pub const CV_STYLE_PRODUCT_SUMMARY: &str = "Position the candidate as a product-management \
    professional: digital content strategy, market and user research, data-driven decisions, \
    and delivering user-focused digital products.";
