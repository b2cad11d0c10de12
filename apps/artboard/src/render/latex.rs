//! LaTeX-look template: centered header, ruled section headings, serif type.
//!
//! Each section renderer returns `None` when the section is hidden or has
//! nothing to show, so the page simply omits it.

use tracing::debug;

use crate::render::icons::brand_icon;
use crate::render::markup::{Element, Node};
use crate::render::sanitize::{is_empty_string, safe_href, sanitize};
use crate::render::{RenderContext, Template};
use crate::schema::basics::Url;
use crate::schema::sections::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Profile, Project,
    Publication, Reference, Section, Skill, Volunteer,
};
use crate::schema::{Columns, ResumeData, SectionKey};

const FONT_STYLE: &str = "font-family: Charter, serif;";

pub struct Latex;

impl Template for Latex {
    fn name(&self) -> &'static str {
        "latex"
    }

    fn render(&self, resume: &ResumeData, columns: &Columns, ctx: &RenderContext) -> String {
        let main = render_column(&columns.main, resume, ctx);

        let mut page = Element::new("div")
            .class("p-8")
            .attr("style", FONT_STYLE)
            .child(header(resume))
            .child(main);

        if !columns.sidebar.is_empty() {
            page = page.child(render_column(&columns.sidebar, resume, ctx));
        }

        debug!(
            "Rendered latex page: {} main keys, {} sidebar keys",
            columns.main.len(),
            columns.sidebar.len()
        );

        page.render()
    }
}

fn render_column(keys: &[String], resume: &ResumeData, ctx: &RenderContext) -> Element {
    Element::new("div")
        .class("space-y-0")
        .children(
            keys.iter()
                .filter_map(|key| render_section(key, resume, ctx))
                .map(Node::from),
        )
}

/// Dispatches a layout key to its section renderer.
pub fn render_section(key: &str, resume: &ResumeData, ctx: &RenderContext) -> Option<Element> {
    let sections = &resume.sections;
    match SectionKey::parse(key) {
        SectionKey::Summary => summary(resume),
        SectionKey::Experience => experience(&sections.experience),
        SectionKey::Education => education(&sections.education),
        SectionKey::Skills => skills(&sections.skills),
        SectionKey::Projects => projects(&sections.projects),
        SectionKey::Certifications => certifications(&sections.certifications),
        SectionKey::Awards => awards(&sections.awards),
        SectionKey::Publications => publications(&sections.publications),
        SectionKey::Languages => languages(&sections.languages),
        SectionKey::Interests => interests(&sections.interests),
        SectionKey::Volunteer => volunteer(&sections.volunteer),
        SectionKey::References => references(&sections.references),
        SectionKey::Profiles => profiles(&sections.profiles, ctx),
        SectionKey::Custom(id) => match sections.custom.get(&id) {
            Some(section) => custom(section),
            None => {
                debug!("Layout key '{key}' references no custom section, skipping");
                None
            }
        },
        SectionKey::Unknown => {
            debug!("Unknown layout key '{key}', skipping");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn header(resume: &ResumeData) -> Element {
    let basics = &resume.basics;
    let mut contacts: Vec<Element> = Vec::new();

    if !basics.email.is_empty() {
        contacts.push(external_link(
            format!("mailto:{}", basics.email),
            &basics.email,
        ));
    }
    let website = safe_href(&basics.url.href);
    if !website.is_empty() {
        contacts.push(external_link(website.to_string(), basics.url.display()));
    }
    if !basics.phone.is_empty() {
        contacts.push(external_link(
            format!("tel:{}", basics.phone),
            &basics.phone,
        ));
    }
    if let Some(linkedin) = resume.sections.profile_for_network("linkedin") {
        contacts.push(external_link(
            safe_href(&linkedin.url.href).to_string(),
            linkedin.url.display(),
        ));
    }

    let mut line = Element::new("div").class("text-sm");
    for (i, contact) in contacts.into_iter().enumerate() {
        if i > 0 {
            line = line.child(Element::new("span").class("mx-2").text("|"));
        }
        line = line.child(contact);
    }

    Element::new("div")
        .class("text-center mb-6")
        .child(
            Element::new("div")
                .class("text-3xl font-bold mb-2")
                .text(basics.name.as_str()),
        )
        .child(line)
}

fn external_link(href: String, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noreferrer")
        .text(label)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

/// Heading followed by a horizontal rule, used by the primary sections.
fn ruled_section(id: &str, name: &str) -> Element {
    Element::new("section")
        .attr("id", id)
        .class("mb-6")
        .child(Element::new("h2").class("text-lg font-bold mb-1").text(name))
        .child(Element::new("hr").class("border-black mb-3"))
}

/// Heading with a bottom border, used by the secondary sections.
fn underlined_section(id: &str, name: &str) -> Element {
    Element::new("section").attr("id", id).class("mb-4").child(
        Element::new("h2")
            .class("text-lg font-bold border-b border-black pb-1 mb-2")
            .text(name),
    )
}

fn list(class: &str, rows: impl Iterator<Item = Element>) -> Element {
    Element::new("div").class(class).children(rows.map(Node::from))
}

fn div(class: &str, text: &str) -> Element {
    Element::new("div").class(class).text(text)
}

fn bold(text: &str) -> Element {
    div("font-bold text-sm", text)
}

fn rich_text(html: &str, class: &str) -> Element {
    Element::new("div")
        .class(class)
        .child(Node::Raw(sanitize(html)))
}

fn rich_text_opt(html: &str, class: &str) -> Option<Element> {
    (!is_empty_string(html)).then(|| rich_text(html, class))
}

fn text_opt(text: &str, class: &str) -> Option<Element> {
    (!text.is_empty()).then(|| div(class, text))
}

fn keywords_opt(keywords: &[String], class: &str) -> Option<Element> {
    (!keywords.is_empty()).then(|| div(class, &keywords.join(", ")))
}

/// Left block with details, right-aligned date.
fn split_row(left: Element, right: Option<Element>) -> Element {
    Element::new("div")
        .class("flex justify-between items-start")
        .child(left)
        .child_opt(right)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn summary(resume: &ResumeData) -> Option<Element> {
    let section = &resume.sections.summary;
    if !section.visible.is_shown() || is_empty_string(&section.content) {
        return None;
    }

    Some(
        ruled_section(&section.id, &section.name).child(rich_text(
            &section.content,
            "wysiwyg text-sm leading-relaxed",
        )),
    )
}

fn experience(section: &Section<Experience>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&format!("{}, {}", item.company, item.position)))
            .child_opt(text_opt(&item.location, "text-sm"));

        Element::new("div")
            .class("space-y-2")
            .child(split_row(details, Some(div("text-sm text-right", &item.date))))
            .child_opt(rich_text_opt(
                &item.summary,
                "wysiwyg text-sm leading-relaxed ml-4",
            ))
    });

    Some(ruled_section(&section.id, &section.name).child(list("space-y-4", rows)))
}

fn education(section: &Section<Education>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&item.institution))
            .child(div(
                "text-sm",
                &format!("{} in {}", item.study_type, item.area),
            ));
        split_row(details, Some(div("text-sm text-right", &item.date)))
    });

    Some(ruled_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn skills(section: &Section<Skill>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("space-y-1")
            .child(bold(&item.name))
            .child_opt(keywords_opt(&item.keywords, "text-sm"))
    });

    Some(ruled_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn projects(section: &Section<Project>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&item.name))
            .child(div("text-sm", &item.description));

        Element::new("div")
            .class("space-y-1")
            .child(split_row(
                details,
                text_opt(&item.date, "text-xs text-gray-600"),
            ))
            .child_opt(rich_text_opt(&item.summary, "wysiwyg text-xs leading-relaxed"))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-3", rows)))
}

fn certifications(section: &Section<Certification>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&item.name))
            .child(div("text-sm", &item.issuer));
        split_row(details, Some(div("text-xs text-gray-600", &item.date)))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn awards(section: &Section<Award>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&item.title))
            .child(div("text-sm", &item.awarder));
        split_row(details, Some(div("text-xs text-gray-600", &item.date)))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn publications(section: &Section<Publication>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("space-y-1")
            .child(bold(&item.name))
            .child(div("text-sm", &item.publisher))
            .child(div("text-xs text-gray-600", &item.date))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn languages(section: &Section<Language>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("flex justify-between items-center")
            .child(bold(&item.name))
            .child(div("text-xs text-gray-600", &item.description))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-1", rows)))
}

fn interests(section: &Section<Interest>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("space-y-1")
            .child(bold(&item.name))
            .child_opt(keywords_opt(&item.keywords, "text-xs text-gray-600"))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-1", rows)))
}

fn volunteer(section: &Section<Volunteer>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        let details = Element::new("div")
            .class("flex-1")
            .child(bold(&item.position))
            .child(div("text-sm", &item.organization))
            .child(div("text-xs text-gray-600", &item.location));

        Element::new("div")
            .class("space-y-1")
            .child(split_row(
                details,
                Some(div("text-xs text-gray-600 text-right", &item.date)),
            ))
            .child_opt(rich_text_opt(&item.summary, "wysiwyg text-xs leading-relaxed"))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-3", rows)))
}

fn references(section: &Section<Reference>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("space-y-1")
            .child(bold(&item.name))
            .child(div("text-sm", &item.description))
            .child_opt(rich_text_opt(&item.summary, "wysiwyg text-xs leading-relaxed"))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

fn profiles(
    section: &Section<Profile>,
    ctx: &RenderContext,
) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("flex items-center space-x-2")
            .child_opt(brand_icon(&item.icon, ctx))
            .child(profile_link(&item.url, &format!("{}: {}", item.network, item.username)))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-1", rows)))
}

fn profile_link(url: &Url, label: &str) -> Element {
    Element::new("a")
        .attr("href", safe_href(&url.href))
        .attr("target", "_blank")
        .attr("rel", "noreferrer")
        .class("text-sm hover:underline")
        .text(label)
}

fn custom(section: &Section<CustomItem>) -> Option<Element> {
    if !section.is_renderable() {
        return None;
    }

    let rows = section.shown_items().map(|item| {
        Element::new("div")
            .class("space-y-1")
            .child(bold(&item.name))
            .child_opt(text_opt(&item.description, "text-sm"))
            .child_opt(rich_text_opt(&item.summary, "wysiwyg text-xs leading-relaxed"))
    });

    Some(underlined_section(&section.id, &section.name).child(list("space-y-2", rows)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::sections::Visible;
    use serde_json::json;

    fn make_ctx() -> RenderContext {
        RenderContext::default()
    }

    fn make_resume() -> ResumeData {
        serde_json::from_value(json!({
            "basics": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+44 20 0000",
                "url": { "label": "", "href": "https://ada.dev" }
            },
            "sections": {
                "summary": { "id": "summary", "name": "Summary", "content": "<p>Mathematician.</p>" },
                "experience": {
                    "id": "experience",
                    "name": "Experience",
                    "items": [{
                        "id": "e1",
                        "company": "Analytical Engines",
                        "position": "Programmer",
                        "location": "London",
                        "date": "1842 - 1843",
                        "summary": "<p>Wrote the <strong>first</strong> program.</p>"
                    }]
                },
                "education": {
                    "id": "education",
                    "name": "Education",
                    "items": [{ "institution": "Home", "studyType": "Tutoring", "area": "Mathematics", "date": "1830" }]
                },
                "skills": {
                    "id": "skills",
                    "name": "Skills",
                    "items": [{ "name": "Mathematics", "keywords": ["Calculus", "Algebra"] }]
                },
                "profiles": {
                    "id": "profiles",
                    "name": "Profiles",
                    "items": [
                        { "network": "GitHub", "username": "ada", "icon": "github", "url": { "href": "https://github.com/ada" } },
                        { "network": "LinkedIn", "username": "ada-l", "icon": "linkedin", "url": { "label": "in/ada-l", "href": "https://linkedin.com/in/ada-l" } }
                    ]
                },
                "custom": {
                    "talks": {
                        "id": "talks",
                        "name": "Talks",
                        "items": [{ "name": "Notes on the Engine", "description": "Royal Society" }]
                    }
                }
            }
        }))
        .unwrap()
    }

    fn render(resume: &ResumeData, main: &[&str], sidebar: &[&str]) -> String {
        let columns = Columns::new(
            main.iter().map(|s| s.to_string()).collect(),
            sidebar.iter().map(|s| s.to_string()).collect(),
        );
        Latex.render(resume, &columns, &make_ctx())
    }

    fn section_html(key: &str, resume: &ResumeData) -> Option<String> {
        render_section(key, resume, &make_ctx()).map(|el| el.render())
    }

    // ── page structure ──────────────────────────────────────────────────────

    #[test]
    fn test_page_wrapper_and_font() {
        let html = render(&make_resume(), &["summary"], &[]);
        assert!(html.starts_with(r#"<div class="p-8" style="font-family: Charter, serif;">"#));
        assert!(html.contains(r#"<div class="text-3xl font-bold mb-2">Ada Lovelace</div>"#));
    }

    #[test]
    fn test_sections_follow_column_order() {
        let html = render(&make_resume(), &["skills", "experience", "summary"], &[]);
        let skills = html.find(r#"id="skills""#).unwrap();
        let experience = html.find(r#"id="experience""#).unwrap();
        let summary = html.find(r#"id="summary""#).unwrap();
        assert!(skills < experience && experience < summary);
    }

    #[test]
    fn test_empty_sidebar_omits_second_column() {
        let html = render(&make_resume(), &["summary"], &[]);
        assert_eq!(html.matches(r#"<div class="space-y-0">"#).count(), 1);

        let with_sidebar = render(&make_resume(), &["summary"], &["skills"]);
        assert_eq!(with_sidebar.matches(r#"<div class="space-y-0">"#).count(), 2);
        let main_end = with_sidebar.find(r#"id="summary""#).unwrap();
        let sidebar = with_sidebar.find(r#"id="skills""#).unwrap();
        assert!(main_end < sidebar);
    }

    #[test]
    fn test_unknown_keys_render_nothing() {
        let resume = make_resume();
        assert!(section_html("hobbies", &resume).is_none());
        assert!(section_html("custom.missing", &resume).is_none());
        assert!(section_html("custom.", &resume).is_none());

        let html = render(&resume, &["hobbies"], &[]);
        assert!(html.ends_with(r#"<div class="space-y-0"></div></div>"#));
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_header_contact_order_and_separators() {
        let html = render(&make_resume(), &[], &[]);
        let expected = concat!(
            r#"<div class="text-sm">"#,
            r#"<a href="mailto:ada@example.com" target="_blank" rel="noreferrer">ada@example.com</a>"#,
            r#"<span class="mx-2">|</span>"#,
            r#"<a href="https://ada.dev" target="_blank" rel="noreferrer">https://ada.dev</a>"#,
            r#"<span class="mx-2">|</span>"#,
            r#"<a href="tel:+44 20 0000" target="_blank" rel="noreferrer">+44 20 0000</a>"#,
            r#"<span class="mx-2">|</span>"#,
            r#"<a href="https://linkedin.com/in/ada-l" target="_blank" rel="noreferrer">in/ada-l</a>"#,
            r#"</div>"#
        );
        assert!(html.contains(expected), "header was: {html}");
    }

    #[test]
    fn test_header_skips_absent_fields_without_dangling_separators() {
        let mut resume = make_resume();
        resume.basics.email.clear();
        resume.basics.url.href.clear();
        resume.sections.profiles.items.clear();

        let html = render(&resume, &[], &[]);
        assert!(html.contains(
            r#"<div class="text-sm"><a href="tel:+44 20 0000" target="_blank" rel="noreferrer">+44 20 0000</a></div>"#
        ));
        assert!(!html.contains("mx-2"));
    }

    #[test]
    fn test_header_empty_contact_line() {
        let resume = ResumeData::default();
        let html = render(&resume, &[], &[]);
        assert!(html.contains(r#"<div class="text-sm"></div>"#));
    }

    #[test]
    fn test_header_linkedin_match_is_case_insensitive() {
        let mut resume = ResumeData::default();
        resume.sections.profiles.items.push(Profile {
            network: "LINKEDIN".to_string(),
            url: Url::new("https://linkedin.com/in/x"),
            ..Default::default()
        });
        let html = render(&resume, &[], &[]);
        assert!(html.contains(r#">https://linkedin.com/in/x</a>"#));
        assert!(!html.contains("mx-2"));
    }

    #[test]
    fn test_header_escapes_name() {
        let mut resume = ResumeData::default();
        resume.basics.name = "<b>Ada</b>".to_string();
        let html = render(&resume, &[], &[]);
        assert!(html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
    }

    #[test]
    fn test_header_drops_unsafe_website_href() {
        let mut resume = ResumeData::default();
        resume.basics.url = Url::new("javascript:alert(1)");
        let html = render(&resume, &[], &[]);
        assert!(!html.contains("javascript:alert"));
    }

    #[test]
    fn test_header_unsafe_linkedin_href_keeps_label() {
        let mut resume = ResumeData::default();
        resume.sections.profiles.items.push(Profile {
            network: "LinkedIn".to_string(),
            url: Url {
                label: "in/ada".to_string(),
                href: "javascript:alert(1)".to_string(),
            },
            ..Default::default()
        });
        let html = render(&resume, &[], &[]);
        assert!(html.contains(r#"<a href="" target="_blank" rel="noreferrer">in/ada</a>"#));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_header_skips_hidden_linkedin_profile() {
        let mut resume = make_resume();
        for profile in resume.sections.profiles.items.iter_mut() {
            profile.visible = Visible(false);
        }
        let html = render(&resume, &[], &[]);
        assert!(!html.contains("linkedin.com"));
        assert!(!html.contains("in/ada-l"));
        assert_eq!(html.matches(r#"<span class="mx-2">|</span>"#).count(), 2);
    }

    // ── visibility rules ────────────────────────────────────────────────────

    #[test]
    fn test_hidden_section_omitted() {
        let mut resume = make_resume();
        resume.sections.experience.visible = Visible(false);
        assert!(section_html("experience", &resume).is_none());
    }

    #[test]
    fn test_empty_section_omitted() {
        let mut resume = make_resume();
        resume.sections.skills.items.clear();
        assert!(section_html("skills", &resume).is_none());
        assert!(section_html("awards", &resume).is_none());
    }

    #[test]
    fn test_summary_omitted_when_content_empty() {
        let mut resume = make_resume();
        resume.sections.summary.content = "<p></p>".to_string();
        assert!(section_html("summary", &resume).is_none());
        resume.sections.summary.content = "  ".to_string();
        assert!(section_html("summary", &resume).is_none());
    }

    #[test]
    fn test_hidden_items_skipped() {
        let mut resume = make_resume();
        resume.sections.skills.items.push(Skill {
            name: "Secret Skill".to_string(),
            visible: Visible(false),
            ..Default::default()
        });
        let html = section_html("skills", &resume).unwrap();
        assert!(html.contains("Mathematics"));
        assert!(!html.contains("Secret Skill"));
    }

    #[test]
    fn test_section_with_only_hidden_items_omitted() {
        let mut resume = make_resume();
        for skill in resume.sections.skills.items.iter_mut() {
            skill.visible = Visible(false);
        }
        assert!(section_html("skills", &resume).is_none());

        let html = render(&resume, &["skills"], &[]);
        assert!(!html.contains(r#"id="skills""#));
    }

    #[test]
    fn test_profiles_section_omitted_when_all_hidden() {
        let mut resume = make_resume();
        for profile in resume.sections.profiles.items.iter_mut() {
            profile.visible = Visible(false);
        }
        assert!(section_html("profiles", &resume).is_none());
    }

    #[test]
    fn test_profile_with_unsafe_href_keeps_label() {
        let mut resume = ResumeData::default();
        resume.sections.profiles.items.push(Profile {
            network: "GitHub".to_string(),
            username: "ada".to_string(),
            url: Url::new("javascript:alert(1)"),
            ..Default::default()
        });
        let html = section_html("profiles", &resume).unwrap();
        assert!(html.contains(
            r#"<a href="" target="_blank" rel="noreferrer" class="text-sm hover:underline">GitHub: ada</a>"#
        ));
        assert!(!html.contains("javascript:"));
    }

    // ── per-section content ─────────────────────────────────────────────────

    #[test]
    fn test_summary_section_ruled_and_sanitized() {
        let mut resume = make_resume();
        resume.sections.summary.content = "<p>Hi</p><script>x()</script>".to_string();
        let html = section_html("summary", &resume).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<section id="summary" class="mb-6">"#,
                r#"<h2 class="text-lg font-bold mb-1">Summary</h2>"#,
                r#"<hr class="border-black mb-3">"#,
                r#"<div class="wysiwyg text-sm leading-relaxed"><p>Hi</p></div>"#,
                r#"</section>"#
            )
        );
    }

    #[test]
    fn test_experience_item_layout() {
        let html = section_html("experience", &make_resume()).unwrap();
        assert!(html.contains(r#"<div class="font-bold text-sm">Analytical Engines, Programmer</div>"#));
        assert!(html.contains(r#"<div class="text-sm">London</div>"#));
        assert!(html.contains(r#"<div class="text-sm text-right">1842 - 1843</div>"#));
        assert!(html.contains(
            r#"<div class="wysiwyg text-sm leading-relaxed ml-4"><p>Wrote the <strong>first</strong> program.</p></div>"#
        ));
    }

    #[test]
    fn test_experience_optional_fields_omitted() {
        let mut resume = ResumeData::default();
        resume.sections.experience.items.push(Experience {
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            ..Default::default()
        });
        let html = section_html("experience", &resume).unwrap();
        assert!(!html.contains("wysiwyg"));
        assert!(!html.contains(r#"<div class="text-sm"></div>"#));
    }

    #[test]
    fn test_education_study_type_in_area() {
        let html = section_html("education", &make_resume()).unwrap();
        assert!(html.contains(r#"<div class="font-bold text-sm">Home</div>"#));
        assert!(html.contains(r#"<div class="text-sm">Tutoring in Mathematics</div>"#));
    }

    #[test]
    fn test_skills_keywords_joined() {
        let html = section_html("skills", &make_resume()).unwrap();
        assert!(html.contains(r#"<div class="text-sm">Calculus, Algebra</div>"#));
        assert!(html.contains(r#"<hr class="border-black mb-3">"#));
    }

    #[test]
    fn test_secondary_sections_use_underlined_heading() {
        let html = section_html("profiles", &make_resume()).unwrap();
        assert!(html.starts_with(r#"<section id="profiles" class="mb-4">"#));
        assert!(html.contains(r#"<h2 class="text-lg font-bold border-b border-black pb-1 mb-2">Profiles</h2>"#));
        assert!(!html.contains("<hr"));
    }

    #[test]
    fn test_profiles_icon_and_label() {
        let html = section_html("profiles", &make_resume()).unwrap();
        assert!(html.contains(r#"<img class="size-4" alt="github" src="https://cdn.simpleicons.org/github">"#));
        assert!(html.contains(
            r#"<a href="https://github.com/ada" target="_blank" rel="noreferrer" class="text-sm hover:underline">GitHub: ada</a>"#
        ));
        assert!(html.contains(r#"src="/support-logos/linkedin.svg""#));
    }

    #[test]
    fn test_custom_section_dispatch() {
        let html = section_html("custom.talks", &make_resume()).unwrap();
        assert!(html.starts_with(r#"<section id="talks" class="mb-4">"#));
        assert!(html.contains(r#"<div class="font-bold text-sm">Notes on the Engine</div>"#));
        assert!(html.contains(r#"<div class="text-sm">Royal Society</div>"#));
    }

    #[test]
    fn test_custom_section_hidden() {
        let mut resume = make_resume();
        if let Some(section) = resume.sections.custom.get_mut("talks") {
            section.visible = Visible(false);
        }
        assert!(section_html("custom.talks", &resume).is_none());
    }

    #[test]
    fn test_remaining_sections_render_their_fields() {
        let resume: ResumeData = serde_json::from_value(json!({
            "sections": {
                "projects": { "id": "projects", "name": "Projects", "items": [{ "name": "Engine", "description": "Difference", "date": "1822" }] },
                "certifications": { "id": "certifications", "name": "Certifications", "items": [{ "name": "Cert", "issuer": "Society", "date": "1840" }] },
                "awards": { "id": "awards", "name": "Awards", "items": [{ "title": "Medal", "awarder": "Crown", "date": "1841" }] },
                "publications": { "id": "publications", "name": "Publications", "items": [{ "name": "Notes", "publisher": "Taylor", "date": "1843" }] },
                "languages": { "id": "languages", "name": "Languages", "items": [{ "name": "French", "description": "Fluent" }] },
                "interests": { "id": "interests", "name": "Interests", "items": [{ "name": "Poetry", "keywords": ["Byron"] }] },
                "volunteer": { "id": "volunteer", "name": "Volunteering", "items": [{ "position": "Tutor", "organization": "School", "location": "Surrey", "date": "1835" }] },
                "references": { "id": "references", "name": "References", "items": [{ "name": "C. Babbage", "description": "Colleague", "summary": "<p>Brilliant.</p>" }] }
            }
        }))
        .unwrap();

        let projects = section_html("projects", &resume).unwrap();
        assert!(projects.contains(r#"<div class="text-xs text-gray-600">1822</div>"#));
        assert!(projects.contains(r#"<div class="text-sm">Difference</div>"#));

        let certifications = section_html("certifications", &resume).unwrap();
        assert!(certifications.contains(r#"<div class="text-sm">Society</div>"#));

        let awards = section_html("awards", &resume).unwrap();
        assert!(awards.contains(r#"<div class="font-bold text-sm">Medal</div>"#));
        assert!(awards.contains(r#"<div class="text-sm">Crown</div>"#));

        let publications = section_html("publications", &resume).unwrap();
        assert!(publications.contains(r#"<div class="text-xs text-gray-600">1843</div>"#));

        let languages = section_html("languages", &resume).unwrap();
        assert!(languages.contains(r#"<div class="flex justify-between items-center">"#));
        assert!(languages.contains(r#"<div class="text-xs text-gray-600">Fluent</div>"#));

        let interests = section_html("interests", &resume).unwrap();
        assert!(interests.contains(r#"<div class="text-xs text-gray-600">Byron</div>"#));

        let volunteer = section_html("volunteer", &resume).unwrap();
        assert!(volunteer.contains(r#"<div class="font-bold text-sm">Tutor</div>"#));
        assert!(volunteer.contains(r#"<div class="text-xs text-gray-600 text-right">1835</div>"#));

        let references = section_html("references", &resume).unwrap();
        assert!(references.contains(r#"<div class="wysiwyg text-xs leading-relaxed"><p>Brilliant.</p></div>"#));
    }

    #[test]
    fn test_project_without_date_has_no_date_cell() {
        let resume: ResumeData = serde_json::from_value(json!({
            "sections": { "projects": { "id": "projects", "name": "Projects", "items": [{ "name": "Engine" }] } }
        }))
        .unwrap();
        let html = section_html("projects", &resume).unwrap();
        assert!(!html.contains("text-gray-600"));
    }
}
