use crate::render::markup::Element;
use crate::render::RenderContext;

const SIMPLE_ICONS_CDN: &str = "https://cdn.simpleicons.org";

/// Resolves a brand slug to an image URL. LinkedIn is served from the bundled
/// support logos since Simple Icons no longer ships it.
pub fn brand_icon_src(slug: &str, ctx: &RenderContext) -> Option<String> {
    match slug.trim() {
        "" => None,
        "linkedin" => Some(format!(
            "{}/support-logos/linkedin.svg",
            ctx.asset_base_url.trim_end_matches('/')
        )),
        other => Some(format!("{SIMPLE_ICONS_CDN}/{other}")),
    }
}

pub fn brand_icon(slug: &str, ctx: &RenderContext) -> Option<Element> {
    let src = brand_icon_src(slug, ctx)?;
    let alt = if slug.trim() == "linkedin" {
        "LinkedIn"
    } else {
        slug.trim()
    };

    Some(
        Element::new("img")
            .class("size-4")
            .attr("alt", alt)
            .attr("src", src),
    )
}
