//! The single-page site renderer.
//!
//! A pure function of the content document and the transient view flags.
//! Styling is an embedded stylesheet; the only script is the scroll
//! listener that applies the same nav threshold live in the browser.

use crate::{
    app::{SCROLL_THRESHOLD_PX, UiState},
    content::document::{ContentDocument, Product},
    editor::AdminState,
    render::{admin::write_admin_overlay, html::{esc, write_action_button}},
};
use chrono::{Datelike, Local};

/// Stylesheet embedded at compile time.
const STYLESHEET: &str = include_str!("../embed/site.css");

/// Crown mark used by the brand in the nav, equation card, and footer.
const CROWN: &str = "&#9819;";

/// Render the whole page. The admin overlay is included only while open.
pub fn render_page(doc: &ContentDocument, ui: &UiState, admin: &AdminState) -> String {
    let mut out = String::with_capacity(32 * 1024);

    write_head(&mut out, doc);
    out.push_str("<body>\n");
    write_nav(&mut out, doc, ui);
    write_hero(&mut out, doc);
    write_mission(&mut out, doc);
    write_features(&mut out, doc);
    write_shop(&mut out, doc);
    write_newsletter(&mut out, doc);
    write_footer(&mut out, doc);

    if ui.admin_open {
        write_admin_overlay(&mut out, doc, admin);
    }

    write_scroll_script(&mut out);
    out.push_str("</body>\n</html>\n");
    out
}

fn write_head(out: &mut String, doc: &ContentDocument) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!(
        "<title>{} {}</title>\n",
        esc(&doc.logo_title),
        esc(&doc.logo_subtitle)
    ));
    out.push_str("<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n");
}

/// Region links shown in the nav. Labels are fixed; the footer's
/// quick-links block is the editable variant.
const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("mission", "Who We Are"),
    ("shop", "Shop"),
    ("contact", "Contact"),
];

fn write_nav(out: &mut String, doc: &ContentDocument, ui: &UiState) {
    let nav_class = if ui.scrolled { "nav scrolled" } else { "nav" };
    out.push_str(&format!("<nav id=\"site-nav\" class=\"{nav_class}\">\n"));
    out.push_str("<div class=\"nav-inner\">\n");

    out.push_str(&format!(
        "<div class=\"brand\"><span class=\"crown\">{CROWN}</span><span class=\"brand-text\"><span class=\"brand-title\">{}</span><span class=\"brand-subtitle\">{}</span></span></div>\n",
        esc(&doc.logo_title),
        esc(&doc.logo_subtitle)
    ));

    out.push_str("<div class=\"nav-links\">");
    for (anchor, label) in NAV_LINKS {
        out.push_str(&format!("<a href=\"#{anchor}\">{label}</a>"));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"nav-actions\">");
    write_action_button(out, "/admin/open", "icon-button", "&#9881;");
    out.push_str("<span class=\"cart\">&#128717;");
    if ui.cart_count > 0 {
        out.push_str(&format!("<span class=\"cart-count\">{}</span>", ui.cart_count));
    }
    out.push_str("</span>");
    let menu_glyph = if ui.menu_open { "&#10005;" } else { "&#9776;" };
    write_action_button(out, "/menu/toggle", "icon-button menu-button", menu_glyph);
    out.push_str("</div>\n</div>\n");

    if ui.menu_open {
        out.push_str("<div class=\"mobile-menu\">\n");
        for (anchor, label) in NAV_LINKS {
            out.push_str(&format!("<a href=\"/go/{anchor}\">{label}</a>\n"));
        }
        write_action_button(out, "/admin/open", "menu-edit", "&#9881; Edit Site");
        out.push_str("</div>\n");
    }

    out.push_str("</nav>\n");
}

fn write_hero(out: &mut String, doc: &ContentDocument) {
    out.push_str("<section id=\"home\" class=\"hero\">\n");
    out.push_str(&format!(
        "<img class=\"hero-bg\" src=\"{}\" alt=\"Pouring Coffee\">\n",
        esc(&doc.images.hero_background)
    ));
    out.push_str("<div class=\"hero-content\">\n");
    out.push_str(&format!(
        "<span class=\"hero-tagline\">{}</span>\n",
        esc(&doc.hero_tagline)
    ));
    out.push_str(&format!(
        "<h1>{}<br>{}</h1>\n",
        esc(&doc.hero_headline1),
        esc(&doc.hero_headline2)
    ));
    out.push_str(&format!("<p class=\"hero-subtext\">{}</p>\n", esc(&doc.hero_subtext)));
    out.push_str(&format!(
        "<div class=\"hero-ctas\"><a class=\"cta primary\" href=\"#shop\">{} &#8250;</a><a class=\"cta secondary\" href=\"#mission\">{}</a></div>\n",
        esc(&doc.hero_cta_primary),
        esc(&doc.hero_cta_secondary)
    ));
    out.push_str("</div>\n</section>\n");
}

fn write_mission(out: &mut String, doc: &ContentDocument) {
    out.push_str("<section id=\"mission\" class=\"mission\">\n");
    out.push_str(&format!("<h2>{}</h2>\n<div class=\"divider\"></div>\n", esc(&doc.mission_title)));
    out.push_str(&format!(
        "<p class=\"mission-paragraph\">{}</p>\n",
        esc(&doc.mission_paragraph)
    ));

    // The coffee + mission = brand equation.
    out.push_str("<div class=\"equation\">\n");
    out.push_str(&format!(
        "<div class=\"equation-card\"><img src=\"{}\" alt=\"Coffee Beans\"><h3>{}</h3></div>\n",
        esc(&doc.images.equation_coffee),
        esc(&doc.equation_coffee)
    ));
    out.push_str("<span class=\"equation-op\">+</span>\n");
    out.push_str(&format!(
        "<div class=\"equation-card\"><img src=\"{}\" alt=\"Bible\"><h3>{}</h3></div>\n",
        esc(&doc.images.equation_mission),
        esc(&doc.equation_mission)
    ));
    out.push_str("<span class=\"equation-op\">=</span>\n");
    out.push_str(&format!(
        "<div class=\"equation-card result\"><span class=\"crown\">{CROWN}</span><h3>{}<br><span class=\"result-sub\">{}</span></h3></div>\n",
        esc(&doc.equation_result),
        esc(&doc.equation_result_sub)
    ));
    out.push_str("</div>\n</section>\n");
}

fn write_features(out: &mut String, doc: &ContentDocument) {
    let features = [
        ("&#9749;", &doc.feature1_title, &doc.feature1_desc),
        ("&#10084;", &doc.feature2_title, &doc.feature2_desc),
        ("&#127758;", &doc.feature3_title, &doc.feature3_desc),
    ];

    out.push_str("<section class=\"features\">\n");
    for (glyph, title, desc) in features {
        out.push_str(&format!(
            "<div class=\"feature\"><span class=\"feature-icon\">{glyph}</span><h4>{}</h4><p>{}</p></div>\n",
            esc(title),
            esc(desc)
        ));
    }
    out.push_str("</section>\n");
}

fn write_shop(out: &mut String, doc: &ContentDocument) {
    out.push_str("<section id=\"shop\" class=\"shop\">\n");
    out.push_str(&format!(
        "<span class=\"shop-tagline\">{}</span>\n<h2>{}</h2>\n<div class=\"divider\"></div>\n",
        esc(&doc.shop_tagline),
        esc(&doc.shop_title)
    ));

    out.push_str("<div class=\"product-grid\">\n");
    for product in &doc.products {
        write_product_card(out, product);
    }
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<button class=\"view-all\">{}</button>\n",
        esc(&doc.shop_view_all)
    ));
    out.push_str("</section>\n");
}

fn write_product_card(out: &mut String, product: &Product) {
    out.push_str("<div class=\"product-card\">\n");
    out.push_str(&format!(
        "<div class=\"product-image\"><img src=\"{}\" alt=\"{}\"><span class=\"roast-badge\">{}</span></div>\n",
        esc(&product.image),
        esc(&product.name),
        esc(&product.roast)
    ));
    out.push_str(&format!("<h3>{}</h3>\n", esc(&product.name)));
    out.push_str(&format!("<p class=\"product-desc\">{}</p>\n", esc(&product.description)));
    out.push_str(&format!("<p class=\"product-price\">${:.2}</p>\n", product.price));
    write_action_button(out, "/cart/add", "product-buy", "Select Options &#128717;");
    out.push_str("</div>\n");
}

fn write_newsletter(out: &mut String, doc: &ContentDocument) {
    out.push_str("<section class=\"newsletter\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", esc(&doc.newsletter_title)));
    out.push_str(&format!("<p>{}</p>\n", esc(&doc.newsletter_subtext)));
    // The form suppresses its own submission; nothing is ever sent.
    out.push_str(&format!(
        "<form class=\"newsletter-form\" onsubmit=\"event.preventDefault()\"><input type=\"email\" placeholder=\"{}\" required><button type=\"submit\">{}</button></form>\n",
        esc(&doc.newsletter_placeholder),
        esc(&doc.newsletter_button)
    ));
    out.push_str("</section>\n");
}

fn write_footer(out: &mut String, doc: &ContentDocument) {
    out.push_str("<footer id=\"contact\" class=\"footer\">\n");
    out.push_str(&format!(
        "<img class=\"footer-bg\" src=\"{}\" alt=\"Coffee Beans Background\">\n",
        esc(&doc.images.footer_background)
    ));
    out.push_str("<div class=\"footer-inner\">\n<div class=\"footer-grid\">\n");

    out.push_str(&format!(
        "<div class=\"footer-brand\"><div class=\"brand\"><span class=\"crown\">{CROWN}</span><span class=\"brand-text\"><span class=\"brand-title\">{}</span><span class=\"brand-subtitle\">{}</span></span></div><p>{}</p></div>\n",
        esc(&doc.footer_brand_title),
        esc(&doc.footer_brand_subtitle),
        esc(&doc.footer_about)
    ));

    out.push_str(&format!(
        "<div class=\"footer-links\"><h4>{}</h4><ul><li><a href=\"#home\">{}</a></li><li><a href=\"#mission\">{}</a></li><li><a href=\"#mission\">{}</a></li><li><a href=\"#shop\">{}</a></li></ul></div>\n",
        esc(&doc.footer_quick_links_title),
        esc(&doc.footer_link_home),
        esc(&doc.footer_link_about),
        esc(&doc.footer_link_support),
        esc(&doc.footer_link_shop)
    ));

    out.push_str(&format!(
        "<div class=\"footer-contact\"><h4>{}</h4><ul><li>&#9993; <a href=\"mailto:{}\">{}</a></li><li><span class=\"instagram\">&#9635;</span> {}</li></ul></div>\n",
        esc(&doc.footer_contact_title),
        esc(&doc.footer_email),
        esc(&doc.footer_email),
        esc(&doc.footer_instagram_text)
    ));

    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"footer-bottom\"><p>&copy; {} {}</p><p>{}</p></div>\n",
        Local::now().year(),
        esc(&doc.footer_copyright),
        esc(&doc.footer_tagline)
    ));
    out.push_str("</div>\n</footer>\n");
}

fn write_scroll_script(out: &mut String) {
    out.push_str(&format!(
        "<script>\n\
         const nav = document.getElementById('site-nav');\n\
         const onScroll = () => nav.classList.toggle('scrolled', window.scrollY > {SCROLL_THRESHOLD_PX});\n\
         window.addEventListener('scroll', onScroll);\n\
         onScroll();\n\
         </script>\n"
    ));
}
