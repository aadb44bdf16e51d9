//! The admin editor overlay.
//!
//! An exhaustive form over the content document, generated from the editor
//! field table. Each input is its own small form that submits on change,
//! so every edit round-trips through the store and the page re-renders
//! from the authoritative document.

use crate::{
    content::document::{ContentDocument, ImageSlot},
    editor::{AdminState, ProductField, Section, Tab, fields_in},
    render::html::{esc, write_action_button, write_hidden},
};

/// Append the full overlay: scrim, panel, and (when armed) the reset
/// confirmation dialog.
pub fn write_admin_overlay(out: &mut String, doc: &ContentDocument, admin: &AdminState) {
    out.push_str("<div class=\"admin-overlay\">\n");

    // Dimmed full-screen scrim; clicking it closes the panel.
    out.push_str(
        "<form class=\"admin-scrim\" method=\"post\" action=\"/admin/close\">\
         <button type=\"submit\" aria-label=\"Close editor\"></button></form>\n",
    );

    out.push_str("<aside class=\"admin-panel\">\n");
    write_panel_header(out);
    write_tabs(out, admin);

    // The panel body is its own scroll region.
    out.push_str("<div class=\"admin-body\">\n");
    match admin.tab {
        Tab::Text => write_text_tab(out, doc, admin),
        Tab::Images => write_images_tab(out, doc),
    }
    out.push_str("</div>\n</aside>\n");

    if admin.confirm_reset {
        write_reset_confirm(out);
    }

    out.push_str("</div>\n");
}

fn write_panel_header(out: &mut String) {
    out.push_str("<header class=\"admin-header\"><h2>Edit Site Content</h2><div class=\"admin-header-actions\">");
    write_action_button(out, "/admin/reset", "icon-button", "&#8634;");
    write_action_button(out, "/admin/close", "icon-button", "&#10005;");
    out.push_str("</div></header>\n");
}

fn write_tabs(out: &mut String, admin: &AdminState) {
    out.push_str("<div class=\"admin-tabs\">");
    for (tab, label) in [(Tab::Text, "Text"), (Tab::Images, "Images")] {
        let class = if admin.tab == tab { "tab active" } else { "tab" };
        out.push_str("<form method=\"post\" action=\"/admin/tab\">");
        write_hidden(out, "tab", tab.key());
        out.push_str(&format!("<button class=\"{class}\" type=\"submit\">{label}</button></form>"));
    }
    out.push_str("</div>\n");
}

// ============================================================================
// Text tab
// ============================================================================

fn write_text_tab(out: &mut String, doc: &ContentDocument, admin: &AdminState) {
    for section in Section::ALL {
        let expanded = admin.expanded == Some(section);
        write_section_header(out, section, expanded);
        if !expanded {
            continue;
        }

        out.push_str("<div class=\"section-body\">\n");
        if section == Section::Products {
            write_product_fields(out, doc);
        } else {
            for field in fields_in(section) {
                write_text_field(out, field.key, field.label, (field.get)(doc), field.multiline);
            }
        }
        out.push_str("</div>\n");
    }
}

fn write_section_header(out: &mut String, section: Section, expanded: bool) {
    let marker = if expanded { "&minus;" } else { "+" };
    out.push_str("<form method=\"post\" action=\"/admin/section\">");
    write_hidden(out, "id", section.key());
    out.push_str(&format!(
        "<button class=\"section-header\" type=\"submit\">{} <span>{marker}</span></button></form>\n",
        section.label()
    ));
}

/// One scalar field form, posting `key` + `value` on change.
fn write_text_field(out: &mut String, key: &str, label: &str, value: &str, multiline: bool) {
    out.push_str("<form class=\"field\" method=\"post\" action=\"/admin/field\">");
    write_hidden(out, "key", key);
    out.push_str(&format!("<label>{}</label>", esc(label)));
    if multiline {
        out.push_str(&format!(
            "<textarea name=\"value\" rows=\"3\" onchange=\"this.form.submit()\">{}</textarea>",
            esc(value)
        ));
    } else {
        out.push_str(&format!(
            "<input type=\"text\" name=\"value\" value=\"{}\" onchange=\"this.form.submit()\">",
            esc(value)
        ));
    }
    out.push_str("</form>\n");
}

fn write_product_fields(out: &mut String, doc: &ContentDocument) {
    for (index, product) in doc.products.iter().enumerate() {
        out.push_str(&format!(
            "<div class=\"product-editor\"><h5>Product {}</h5>\n",
            index + 1
        ));
        let fields = [
            (ProductField::Name, "Name", product.name.clone(), false),
            (ProductField::Roast, "Roast", product.roast.clone(), false),
            (ProductField::Price, "Price", product.price.to_string(), false),
            (ProductField::Description, "Description", product.description.clone(), true),
        ];
        for (field, label, value, multiline) in fields {
            write_product_field(out, index, field, label, &value, multiline);
        }
        out.push_str("</div>\n");
    }
}

fn write_product_field(
    out: &mut String,
    index: usize,
    field: ProductField,
    label: &str,
    value: &str,
    multiline: bool,
) {
    out.push_str("<form class=\"field\" method=\"post\" action=\"/admin/product\">");
    write_hidden(out, "index", &index.to_string());
    write_hidden(out, "field", field.key());
    out.push_str(&format!("<label>{}</label>", esc(label)));
    if multiline {
        out.push_str(&format!(
            "<textarea name=\"value\" rows=\"3\" onchange=\"this.form.submit()\">{}</textarea>",
            esc(value)
        ));
    } else {
        out.push_str(&format!(
            "<input type=\"text\" name=\"value\" value=\"{}\" onchange=\"this.form.submit()\">",
            esc(value)
        ));
    }
    out.push_str("</form>\n");
}

// ============================================================================
// Images tab
// ============================================================================

fn write_images_tab(out: &mut String, doc: &ContentDocument) {
    for slot in ImageSlot::ALL {
        write_image_field(out, slot, doc.images.get(slot));
    }

    out.push_str("<h4 class=\"images-subhead\">Product Images</h4>\n");
    for (index, product) in doc.products.iter().enumerate() {
        out.push_str("<form class=\"field\" method=\"post\" action=\"/admin/product\">");
        write_hidden(out, "index", &index.to_string());
        write_hidden(out, "field", ProductField::Image.key());
        out.push_str(&format!(
            "<label>Product {}: {}</label>",
            index + 1,
            esc(&product.name)
        ));
        out.push_str(&format!(
            "<input type=\"text\" name=\"value\" value=\"{}\" placeholder=\"Image URL\" onchange=\"this.form.submit()\">",
            esc(&product.image)
        ));
        write_image_preview(out, &product.image);
        out.push_str("</form>\n");
    }
}

fn write_image_field(out: &mut String, slot: ImageSlot, value: &str) {
    out.push_str("<form class=\"field\" method=\"post\" action=\"/admin/image\">");
    write_hidden(out, "slot", slot.key());
    out.push_str(&format!("<label>{}</label>", esc(slot.label())));
    out.push_str(&format!(
        "<input type=\"text\" name=\"value\" value=\"{}\" placeholder=\"Image URL\" onchange=\"this.form.submit()\">",
        esc(value)
    ));
    write_image_preview(out, value);
    out.push_str("</form>\n");
}

fn write_image_preview(out: &mut String, url: &str) {
    if !url.is_empty() {
        out.push_str(&format!(
            "<img class=\"image-preview\" src=\"{}\" alt=\"Preview\" onerror=\"this.style.display='none'\">",
            esc(url)
        ));
    }
}

// ============================================================================
// Reset confirmation
// ============================================================================

fn write_reset_confirm(out: &mut String) {
    out.push_str("<div class=\"confirm-dialog\">\n<div class=\"confirm-box\">\n");
    out.push_str("<p>Reset all content to defaults? This cannot be undone.</p>\n");
    out.push_str("<div class=\"confirm-actions\">");
    write_action_button(out, "/admin/reset/confirm", "danger", "Reset");
    write_action_button(out, "/admin/reset/cancel", "plain", "Cancel");
    out.push_str("</div>\n</div>\n</div>\n");
}
