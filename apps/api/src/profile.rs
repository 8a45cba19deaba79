//! Profile context — the static biographical and professional facts that
//! ground every generative call.
//!
//! The profile file is owned by its human; the core only reads it. It is
//! loaded once at startup, rendered once into a plain-text grounding block,
//! and passed by reference into prompt composition. No process-wide
//! mutable state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contact and availability facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub available_from: String,
    pub salary_expectation: String,
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub headline: String,
    pub about_me: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub focus: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub title: String,
    pub publisher: String,
    pub year: String,
}

/// The raw profile document as stored on disk.
///
/// Every field defaults so a partial profile still loads; absent sections
/// are simply omitted from the rendered grounding block. `BTreeMap` keeps
/// category ordering deterministic, which keeps rendering deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    pub profile: Contact,
    pub professional_identity: Identity,
    pub skills: BTreeMap<String, Vec<String>>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub books: Vec<Book>,
    pub gaming_background: String,
}

/// Immutable profile context: the document plus its one-time rendering into
/// the text block embedded in prompts.
#[derive(Debug, Clone)]
pub struct ProfileContext {
    document: ProfileDocument,
    grounding: String,
}

impl ProfileContext {
    /// Reads and renders the profile file. Called once at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile file {}", path.display()))?;
        let document: ProfileDocument = serde_json::from_str(&raw)
            .with_context(|| format!("profile file {} is not valid JSON", path.display()))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: ProfileDocument) -> Self {
        let grounding = render_grounding(&document);
        Self {
            document,
            grounding,
        }
    }

    /// The rendered text block embedded in prompts.
    pub fn grounding(&self) -> &str {
        &self.grounding
    }

    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }
}

/// Renders the document into labeled sections. Empty sections are omitted;
/// the grounding block never contains a header with nothing under it.
fn render_grounding(doc: &ProfileDocument) -> String {
    let mut sections: Vec<String> = Vec::new();

    let c = &doc.profile;
    let mut contact = String::new();
    push_line(&mut contact, "Name", &c.name);
    push_line(&mut contact, "Email", &c.email);
    push_line(&mut contact, "Phone", &c.phone);
    push_line(&mut contact, "Location", &c.location);
    push_line(&mut contact, "Available from", &c.available_from);
    push_line(&mut contact, "Salary expectation", &c.salary_expectation);
    for (label, url) in &c.links {
        contact.push_str(&format!("{label}: {url}\n"));
    }
    push_section(&mut sections, "CONTACT", contact);

    let mut identity = String::new();
    push_line(&mut identity, "Headline", &doc.professional_identity.headline);
    push_line(&mut identity, "About", &doc.professional_identity.about_me);
    push_section(&mut sections, "PROFESSIONAL IDENTITY", identity);

    let mut skills = String::new();
    for (category, items) in &doc.skills {
        if !items.is_empty() {
            skills.push_str(&format!("{category}: {}\n", items.join(", ")));
        }
    }
    push_section(&mut sections, "SKILLS", skills);

    let mut experience = String::new();
    for exp in &doc.experience {
        experience.push_str(&format!(
            "{} | {} | {} | {}\n",
            exp.title, exp.company, exp.location, exp.dates
        ));
        for highlight in &exp.highlights {
            experience.push_str(&format!("- {highlight}\n"));
        }
    }
    push_section(&mut sections, "EXPERIENCE", experience);

    let mut education = String::new();
    for edu in &doc.education {
        education.push_str(&format!(
            "{} | {} | {}\n",
            edu.degree, edu.institution, edu.dates
        ));
        if !edu.focus.trim().is_empty() {
            education.push_str(&format!("  Focus: {}\n", edu.focus));
        }
    }
    push_section(&mut sections, "EDUCATION", education);

    let mut books = String::new();
    for book in &doc.books {
        books.push_str(&format!(
            "{} ({}, {})\n",
            book.title, book.publisher, book.year
        ));
    }
    push_section(&mut sections, "PUBLICATIONS", books);

    let mut gaming = String::new();
    push_line(&mut gaming, "Background", &doc.gaming_background);
    push_section(&mut sections, "GAMING", gaming);

    sections.join("\n")
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if !value.trim().is_empty() {
        out.push_str(&format!("{label}: {value}\n"));
    }
}

fn push_section(sections: &mut Vec<String>, header: &str, body: String) {
    if !body.trim().is_empty() {
        sections.push(format!("{header}\n{body}"));
    }
}
