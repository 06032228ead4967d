use super::catalog::{Adjacent, Catalog, ExtendedSection, ProjectRecord, Research};
use super::lightbox::Lightbox;
use super::route::Route;
use super::scroll::Section;
use super::text::{
    escape_html, is_design_doc, is_embedded_video, link_label, placeholder_url, resolve_asset,
    rich_text,
};
use std::fmt::Write as _;

const ARROW_OUT: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none"><path d="M7 17L17 7M17 7H7M17 7V17" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const DOC_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" stroke="currentColor" stroke-width="2"/><path d="M14 2v6h6M16 13H8M16 17H8M10 9H8" stroke="currentColor" stroke-width="2"/></svg>"#;
const CHECK_ICON: &str = r##"<svg width="20" height="20" viewBox="0 0 24 24" fill="none"><path d="M20 6L9 17L4 12" stroke="#ff7849" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Static copy for the home page sections.
#[derive(Clone, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub about: &'static [&'static str],
    pub tools: &'static [(&'static str, &'static str)],
    pub email: &'static str,
    pub contacts: &'static [(&'static str, &'static str)],
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Hemant Sharma",
            tagline: "Biologist turned game designer, bringing life to play",
            role: "a Game System Designer specializing in creating engaging gameplay mechanics and systems that drive player interaction and immersion.",
            about: &[
                "I focus on designing robust game systems, from combat mechanics to progression loops, ensuring every element contributes to a cohesive player experience. My approach combines analytical thinking with creative problem-solving to build systems that are both fun and balanced.",
                "With expertise in level design, game balancing, and player psychology, I craft experiences that keep players engaged through well-designed feedback loops and meaningful choices.",
            ],
            tools: &[
                ("Unity", "Engine"),
                ("Blender", "3D"),
                ("Photoshop", "Adobe"),
                ("Figma", "Design"),
                ("Unreal", "Engine"),
                ("AI", "Tech"),
            ],
            email: "hello@example.com",
            contacts: &[("LinkedIn", "https://www.linkedin.com/")],
        }
    }
}

/// `<img>` that swaps to a placeholder on load failure.
fn image(out: &mut String, src: &str, alt: &str, class: &str, placeholder: &str) {
    _ = write!(
        out,
        r#"<img src="{}" alt="{}"{} loading="lazy" onerror="this.onerror=null;this.src='{}'">"#,
        escape_html(src),
        escape_html(alt),
        if class.is_empty() {
            String::new()
        } else {
            format!(r#" class="{class}""#)
        },
        escape_html(placeholder),
    );
}

pub fn sidebar(base: &str, active: Section, home: bool) -> String {
    let mut out = String::from(r#"<nav class="sidebar"><ul class="sidebar-nav">"#);
    for section in Section::ALL {
        let id = section.anchor_id();
        let href = if home {
            format!("#{id}")
        } else {
            format!("{base}#{id}")
        };
        _ = write!(
            out,
            r#"<li><a href="{}" class="sidebar-link{}" data-section="{id}">{}</a></li>"#,
            escape_html(&href),
            if section == active { " active" } else { "" },
            section.label(),
        );
    }
    out.push_str("</ul></nav>");
    out
}

fn project_card(out: &mut String, base: &str, record: &ProjectRecord) {
    _ = write!(
        out,
        r#"<div class="project-card project-floating" data-project-id="{}"><div class="project-image">"#,
        escape_html(&record.id)
    );
    image(
        out,
        &resolve_asset(base, &record.thumbnail),
        &record.title,
        "",
        &placeholder_url(400, 300, &record.title),
    );
    _ = write!(
        out,
        r#"<div class="project-overlay"></div></div><div class="project-info-always"><h3 class="project-title">{}</h3><div class="project-meta-row"><span class="project-category">{}</span><span class="project-year">{}</span></div></div>"#,
        escape_html(&record.title),
        escape_html(&record.category),
        escape_html(&record.year),
    );
    _ = write!(
        out,
        r#"<div class="project-details-hidden"><p class="project-description">{}</p><div class="project-tools"><span class="tools-label">Tools:</span><div class="tools-list">"#,
        escape_html(&record.description)
    );
    for tool in &record.tools {
        _ = write!(out, r#"<span class="tool-tag">{}</span>"#, escape_html(tool));
    }
    _ = write!(
        out,
        r#"</div></div><div class="project-cta"><span class="view-project-text">Click again to view full details</span>{ARROW_OUT}</div></div></div>"#
    );
}

pub fn home_page(catalog: &Catalog, base: &str, profile: &Profile) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&sidebar(base, Section::Home, true));
    out.push_str(r#"<main class="main-content">"#);

    _ = write!(
        out,
        r##"<section id="home" class="hero"><div class="hero-content"><h1 class="hero-title"><span class="small-text">Hi, I am </span><br><span class="name-text">{}</span></h1><p class="hero-subtitle">{}</p><a class="cta-button" href="#projects" data-scroll-to="projects"><span>View My Work</span></a></div><div class="scroll-indicator"><span>Scroll to explore</span><div class="scroll-line"></div></div></section>"##,
        escape_html(profile.name),
        escape_html(profile.tagline),
    );

    _ = write!(
        out,
        r#"<section id="projects" class="projects"><div class="section-header"><h2 class="section-title">Latest Projects</h2><p class="section-subtitle">Hover to highlight, Click to explore</p></div><div class="projects-grid" style="perspective:1000px;perspective-origin:50% 50%">"#
    );
    for record in catalog.records() {
        project_card(&mut out, base, record);
    }
    _ = write!(
        out,
        r#"</div><a class="view-all-link" href="{}">View all projects</a></section>"#,
        escape_html(&Route::AllProjects.path(base))
    );

    _ = write!(
        out,
        r#"<section id="about" class="about"><div class="about-content"><div class="about-text"><h2 class="section-title">About Me</h2><p class="about-intro">I'm <strong>{}</strong>, {}</p>"#,
        escape_html(profile.name),
        escape_html(profile.role)
    );
    for para in profile.about {
        _ = write!(out, r#"<p class="about-description">{}</p>"#, escape_html(para));
    }
    out.push_str(r#"</div><div class="about-profile"><div class="profile-image-container"><div class="profile-image-wrapper">"#);
    image(
        &mut out,
        &resolve_asset(base, "ME1.png"),
        "Profile",
        "profile-image",
        &placeholder_url(300, 300, "Your Photo"),
    );
    out.push_str(r#"<div class="profile-glow"></div></div></div><div class="tools-proficiency"><h3 class="tools-title">Tools &amp; Technologies</h3><div class="tools-grid">"#);
    for (name, category) in profile.tools {
        _ = write!(
            out,
            r#"<div class="tool-badge" data-category="{0}"><span class="tool-name">{1}</span><span class="tool-category">{0}</span></div>"#,
            escape_html(category),
            escape_html(name)
        );
    }
    out.push_str("</div></div></div></div></section>");

    _ = write!(
        out,
        r#"<section id="contact" class="contact"><h2 class="section-title">Get In Touch</h2><a class="contact-email" href="mailto:{0}">{0}</a><div class="contact-links">"#,
        escape_html(profile.email)
    );
    for (label, url) in profile.contacts {
        _ = write!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            escape_html(label)
        );
    }
    out.push_str("</div></section></main>");
    out
}

pub fn all_projects_page(catalog: &Catalog, base: &str) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&sidebar(base, Section::Projects, false));
    _ = write!(
        out,
        r#"<main class="all-projects"><a href="{}" class="back-button">Back to Portfolio</a><h1 class="section-title">All Projects</h1><div class="all-projects-grid">"#,
        escape_html(&Route::Home.path(base))
    );
    for record in catalog.listed() {
        _ = write!(
            out,
            r#"<a class="all-project-item" href="{}">"#,
            escape_html(&Route::Project(record.id.clone()).path(base))
        );
        image(
            &mut out,
            &resolve_asset(base, &record.thumbnail),
            &record.title,
            "",
            &placeholder_url(400, 300, &record.title),
        );
        _ = write!(
            out,
            r#"<h3 class="project-title">{}</h3><p class="project-short">{}</p><span class="project-category">{}</span></a>"#,
            escape_html(&record.title),
            escape_html(&record.short_description),
            escape_html(&record.category),
        );
    }
    out.push_str("</div></main>");
    out
}

fn list_block(out: &mut String, title: &str, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    _ = write!(
        out,
        r#"<div class="content-block text-block"><h2 class="block-title">{title}</h2><ul class="styled-list {class}">"#
    );
    for item in items {
        _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul></div>");
}

fn research_block(out: &mut String, research: &Research) {
    if research.is_empty() {
        return;
    }
    out.push_str(r#"<div class="content-block research-block"><h2 class="block-title">Research &amp; Insights</h2>"#);
    if !research.key_metrics.is_empty() {
        out.push_str(r#"<div class="stats-grid" style="--columns:3">"#);
        for m in &research.key_metrics {
            let style = m
                .color
                .as_deref()
                .map(|c| format!(r#" style="color:{}""#, escape_html(c)))
                .unwrap_or_default();
            _ = write!(
                out,
                r#"<div class="stat-card"><span class="stat-value"{style}>{}</span><span class="stat-label">{}</span><span class="stat-description">{}</span></div>"#,
                escape_html(&m.value),
                escape_html(&m.label),
                escape_html(&m.description),
            );
        }
        out.push_str("</div>");
    }
    if !research.findings.is_empty() {
        out.push_str(r#"<div class="progress-bars"><h3 class="chart-title">Key Findings from Field Research</h3>"#);
        for f in &research.findings {
            let width = if f.value.is_finite() {
                f.value.clamp(0.0, 100.0)
            } else {
                0.0
            };
            let color = f.color.as_deref().unwrap_or("#ff7849");
            _ = write!(
                out,
                r#"<div class="progress-item"><div class="progress-header"><span class="progress-label">{}</span><span class="progress-value">{}{}</span></div><div class="progress-track"><div class="progress-fill" style="width:{width}%;background:{}"></div></div></div>"#,
                escape_html(&f.label),
                f.value,
                escape_html(&f.unit),
                escape_html(color),
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

fn extended_section(out: &mut String, base: &str, project_id: &str, section: &ExtendedSection) {
    let kind = if section.content.is_empty() {
        "image-banner-block"
    } else {
        "mixed-block"
    };
    _ = write!(
        out,
        r#"<div class="content-block {kind}"><h2 class="block-title">{}</h2>"#,
        escape_html(&section.title)
    );
    if !section.content.is_empty() {
        _ = write!(out, r#"<div class="text-content">{}</div>"#, rich_text(&section.content));
    }
    if let Some(img) = section.image.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(r#"<div class="block-image">"#);
        image(
            out,
            &resolve_asset(base, &format!("images/projects/{project_id}/{img}")),
            &section.title,
            "",
            &placeholder_url(800, 450, &section.title),
        );
        out.push_str("</div>");
    }
    if !section.images.is_empty() {
        out.push_str(r#"<div class="block-image-strip">"#);
        for (i, img) in section.images.iter().enumerate() {
            image(
                out,
                &resolve_asset(base, img),
                &format!("{} {}", section.title, i + 1),
                "",
                &placeholder_url(800, 450, &section.title),
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

fn nav_project(out: &mut String, base: &str, record: &ProjectRecord, previous: bool) {
    let (class, label) = if previous {
        ("prev-project", "Previous Project")
    } else {
        ("next-project", "Next Project")
    };
    _ = write!(
        out,
        r#"<a href="{}" class="nav-project {class}">"#,
        escape_html(&Route::Project(record.id.clone()).path(base))
    );
    let mut thumb = String::new();
    image(
        &mut thumb,
        &resolve_asset(base, &record.thumbnail),
        &record.title,
        "nav-thumbnail",
        &placeholder_url(400, 300, &record.title),
    );
    let content = format!(
        r#"<div class="nav-content"><span class="nav-label">{label}</span><span class="nav-title">{}</span></div>"#,
        escape_html(&record.title)
    );
    if previous {
        out.push_str(&thumb);
        out.push_str(&content);
    } else {
        out.push_str(&content);
        out.push_str(&thumb);
    }
    out.push_str("</a>");
}

pub fn detail_page(record: &ProjectRecord, adjacent: Option<Adjacent<'_>>, base: &str) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&sidebar(base, Section::Projects, false));
    _ = write!(
        out,
        r#"<a href="{}" class="back-button">Back to Portfolio</a><div class="project-detail"><div class="project-content-scroll{}">"#,
        escape_html(&Route::Home.path(base)),
        if record.has_overview() {
            ""
        } else {
            " image-only-layout"
        },
    );

    _ = write!(
        out,
        r#"<div class="project-hero-content"><div class="project-meta"><span class="project-category">{}</span><span class="project-year">{}</span></div><h1 class="project-title-large">{}</h1><p class="project-tagline">{}</p><div class="project-tools-list">"#,
        escape_html(&record.category),
        escape_html(&record.year),
        escape_html(&record.title),
        escape_html(&record.description),
    );
    for tool in &record.tools {
        _ = write!(out, r#"<span class="tool-badge">{}</span>"#, escape_html(tool));
    }
    out.push_str("</div></div>");

    if let Some(url) = record.video_url.as_deref().filter(|u| !u.is_empty()) {
        let url = resolve_asset(base, url);
        out.push_str(r#"<div class="content-block video-block"><h2 class="block-title">Gameplay Video</h2><div class="video-container">"#);
        if is_embedded_video(&url) {
            _ = write!(
                out,
                r#"<iframe src="{}" title="{} Video" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen referrerpolicy="strict-origin-when-cross-origin"></iframe>"#,
                escape_html(&url),
                escape_html(&record.title)
            );
        } else {
            _ = write!(
                out,
                r#"<video controls preload="metadata" style="width:100%;height:100%;object-fit:contain"><source src="{}" type="video/mp4">Your browser does not support the video tag.</video>"#,
                escape_html(&url)
            );
        }
        out.push_str("</div></div>");
    }

    let platform = record.platform.join(", ");
    let info: Vec<(&str, &str)> = [
        ("Role", record.role.as_str()),
        ("Duration", record.duration.as_str()),
        ("Team Size", record.team_size.as_str()),
        ("Platform", platform.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect();
    if !info.is_empty() {
        out.push_str(r#"<div class="content-block info-cards-block"><div class="info-cards-inline">"#);
        for (label, value) in info {
            _ = write!(
                out,
                r#"<div class="info-card-inline"><span class="info-label">{label}</span><span class="info-value">{}</span></div>"#,
                escape_html(value)
            );
        }
        out.push_str("</div></div>");
    }

    if record.has_overview() {
        _ = write!(
            out,
            r#"<div class="content-block text-block"><h2 class="block-title">Overview</h2><p class="text-content">{}</p></div>"#,
            escape_html(&record.overview)
        );
    }

    if !record.links.is_empty() {
        out.push_str(r#"<div class="content-block links-block"><div class="links-inline">"#);
        for link in &record.links {
            let doc = is_design_doc(&link.name);
            _ = write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}{}{}</a>"#,
                escape_html(&resolve_asset(base, &link.url)),
                if doc {
                    "link-button gdd-button"
                } else {
                    "link-button"
                },
                if doc { DOC_ICON } else { "" },
                escape_html(&link_label(&link.name)),
                if doc { "" } else { ARROW_OUT },
            );
        }
        out.push_str("</div></div>");
    }

    if let Some(research) = &record.research {
        research_block(&mut out, research);
    }

    for section in &record.extended_sections {
        extended_section(&mut out, base, &record.id, section);
    }

    if !record.features.is_empty() {
        out.push_str(r#"<div class="content-block features-block"><h2 class="block-title">Key Features</h2><div class="features-list">"#);
        for feature in &record.features {
            _ = write!(
                out,
                r#"<div class="feature-item">{CHECK_ICON}<span>{}</span></div>"#,
                escape_html(feature)
            );
        }
        out.push_str("</div></div>");
    }

    list_block(&mut out, "Challenges", "challenges-list", &record.challenges);
    list_block(&mut out, "Solutions", "solutions-list", &record.solutions);

    if !record.gallery.is_empty() {
        let zoomable = record.has_overview();
        out.push_str(r#"<div class="content-block gallery-block">"#);
        if zoomable {
            out.push_str(r#"<h2 class="block-title">Gallery</h2>"#);
        }
        for (i, src) in record.gallery.iter().enumerate() {
            if zoomable {
                _ = write!(
                    out,
                    r#"<div class="gallery-image-block zoomable" data-gallery-index="{i}">"#
                );
            } else {
                out.push_str(r#"<div class="gallery-image-block">"#);
            }
            image(
                &mut out,
                &resolve_asset(base, src),
                &format!("{} Screenshot {}", record.title, i + 1),
                "",
                &placeholder_url(800, 450, &format!("Screenshot {}", i + 1)),
            );
            if zoomable {
                out.push_str(r#"<div class="image-caption">Click to enlarge</div>"#);
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    if let Some(adj) = adjacent {
        out.push_str(r#"<section class="project-navigation">"#);
        nav_project(&mut out, base, adj.previous, true);
        nav_project(&mut out, base, adj.next, false);
        out.push_str("</section>");
    }
    out.push_str(r#"<div class="lightbox-root"></div></div>"#);
    out
}

/// Lightbox overlay for the viewer's current image; empty while closed.
pub fn lightbox(base: &str, gallery: &[String], viewer: &Lightbox) -> String {
    let Some(src) = viewer.current().and_then(|i| gallery.get(i)) else {
        return String::new();
    };
    let mut out = String::from(
        r#"<div class="lightbox" data-lightbox="close"><div class="lightbox-content"><button class="lightbox-close" data-lightbox="close">&times;</button>"#,
    );
    if viewer.has_previous() {
        out.push_str(r#"<button class="lightbox-prev" data-lightbox="prev">&lsaquo;</button>"#);
    }
    if viewer.has_next() {
        out.push_str(r#"<button class="lightbox-next" data-lightbox="next">&rsaquo;</button>"#);
    }
    _ = write!(
        out,
        r#"<img src="{}" alt="Full size"><div class="lightbox-counter">{}</div></div></div>"#,
        escape_html(&resolve_asset(base, src)),
        viewer.counter().unwrap_or_default(),
    );
    out
}
