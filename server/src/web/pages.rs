//! Server-rendered HTML for the gallery and map views.
//!
//! Pages are assembled as plain strings around embedded skeleton fragments so
//! the binary serves the whole UI without filesystem lookups. Rendering is a
//! pure function of the view, the shared tables, and the current selection;
//! the card grid and the marker set are rebuilt in full on every request.

use crate::web::view::View;
use mineralcore::catalog::{Catalog, DescriptionTable, ImageRecord};

pub const SITE_TITLE: &str = "Mars Mineral Image Finder";
pub const EMPTY_NOTICE: &str = "No images found for this mineral.";

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Renders the full HTML document for one request.
pub fn render_page(
    view: View,
    catalog: &Catalog,
    descriptions: &DescriptionTable,
    selection: Option<&str>,
) -> String {
    let selected = selected_mineral(catalog, selection);
    match view {
        View::Home => gallery_page(catalog, descriptions, selected),
        View::Map => map_page(catalog, selected),
    }
}

/// The active selection: the query value when present, else the first mineral
/// column of the table.
pub fn selected_mineral<'a>(catalog: &'a Catalog, selection: Option<&'a str>) -> &'a str {
    selection
        .or_else(|| catalog.minerals().first().map(String::as_str))
        .unwrap_or("")
}

fn gallery_page(catalog: &Catalog, descriptions: &DescriptionTable, selected: &str) -> String {
    let matches = catalog.filter_by_mineral(selected);
    let content = if matches.is_empty() {
        empty_notice()
    } else {
        card_grid(&matches, selected, descriptions.describe(selected))
    };
    let body = format!(
        "{dropdown}\n<div style=\"margin: 20px\">\n{content}\n</div>",
        dropdown = dropdown_card(catalog.minerals(), selected, "/"),
    );
    page_shell("", &body)
}

fn map_page(catalog: &Catalog, selected: &str) -> String {
    let matches = catalog.filter_by_mineral(selected);
    let head_extra = format!(
        "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\"/>\n\
         <style>#map {{ height: 70vh; margin: 20px; }}</style>"
    );
    let content = if matches.is_empty() {
        format!("<div style=\"margin: 20px\">\n{}\n</div>", empty_notice())
    } else {
        format!(
            "<div id=\"map\"></div>\n\
             <script src=\"{LEAFLET_JS}\"></script>\n\
             <script>\n{script}</script>",
            script = marker_script(&matches),
        )
    };
    let body = format!(
        "{dropdown}\n{content}",
        dropdown = dropdown_card(catalog.minerals(), selected, "/map"),
    );
    page_shell(&head_extra, &body)
}

fn page_shell(head_extra: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>{SITE_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\"/>\n\
         {head_extra}\n\
         </head>\n\
         <body>\n\
         {navbar}\n\
         <div class=\"container-fluid\">\n{body}\n</div>\n\
         </body>\n\
         </html>\n",
        navbar = navbar(),
    )
}

fn navbar() -> String {
    format!(
        "<nav class=\"navbar navbar-dark bg-primary sticky-top mb-4\">\n\
         <div class=\"container\">\n\
         <a class=\"navbar-brand\" href=\"/\">\
         <img src=\"/assets/mars-logo.png\" height=\"40\" alt=\"\"/> {SITE_TITLE}</a>\n\
         <ul class=\"nav\">\n\
         <li class=\"nav-item\"><a class=\"nav-link text-white\" href=\"/\">Home</a></li>\n\
         <li class=\"nav-item\"><a class=\"nav-link text-white\" href=\"/map\">Map</a></li>\n\
         </ul>\n\
         </div>\n\
         </nav>"
    )
}

/// The "Choose a Mineral" card. Submits a GET back to the hosting view so the
/// selection stays in the URL and nothing is kept server-side.
fn dropdown_card(minerals: &[String], selected: &str, action: &str) -> String {
    let mut options = String::new();
    for mineral in minerals {
        let escaped = escape_html(mineral);
        let marker = if mineral == selected { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{escaped}\"{marker}>{escaped}</option>\n"
        ));
    }
    format!(
        "<div class=\"card\" style=\"margin: 20px\">\n\
         <div class=\"card-header\">Choose a Mineral</div>\n\
         <div class=\"card-body\">\n\
         <form method=\"get\" action=\"{action}\">\n\
         <select class=\"form-select\" name=\"mineral\" onchange=\"this.form.submit()\">\n\
         {options}\
         </select>\n\
         </form>\n\
         </div>\n\
         </div>"
    )
}

fn empty_notice() -> String {
    format!("<div class=\"alert alert-warning\" role=\"alert\">{EMPTY_NOTICE}</div>")
}

fn card_grid(records: &[&ImageRecord], selected: &str, description: &str) -> String {
    let mut cards = String::new();
    for record in records {
        cards.push_str(&image_card(record, selected, description));
        cards.push('\n');
    }
    // col-md-4 gives three cards per row on medium and larger viewports.
    format!("<div class=\"row mb-4\">\n{cards}</div>")
}

fn image_card(record: &ImageRecord, selected: &str, description: &str) -> String {
    format!(
        "<div class=\"col-md-4\">\n\
         <div class=\"card mb-3 h-100\">\n\
         <div class=\"card-header\">ID: {id} - Region: {region}</div>\n\
         <img src=\"/assets/images/{filename}\" class=\"card-img-top\" \
         style=\"height: 200px; object-fit: contain; width: 100%\" alt=\"{id}\"/>\n\
         <div class=\"card-body\">\n\
         <p class=\"card-text\">Mineral: {mineral}</p>\n\
         <p class=\"card-text\">{description}</p>\n\
         </div>\n\
         </div>\n\
         </div>",
        id = escape_html(&record.id),
        region = escape_html(&record.region),
        filename = escape_html(&record.filename),
        mineral = escape_html(selected),
        description = escape_html(description),
    )
}

fn marker_script(records: &[&ImageRecord]) -> String {
    let mut script = String::from(
        "const map = L.map('map');\n\
         L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', { maxZoom: 12 }).addTo(map);\n\
         const bounds = [];\n",
    );
    for record in records {
        script.push_str(&format!(
            "L.marker([{lat}, {lon}]).addTo(map).bindPopup('{popup}');\n\
             bounds.push([{lat}, {lon}]);\n",
            lat = record.latitude,
            lon = record.longitude,
            popup = marker_popup(record),
        ));
    }
    script.push_str("map.fitBounds(bounds, { maxZoom: 8, padding: [40, 40] });\n");
    script
}

fn marker_popup(record: &ImageRecord) -> String {
    format!(
        "<b>ID: {id}</b><br/>{region}<br/>\
         <img src=\"/assets/images/{filename}\" width=\"200\" alt=\"{id}\"/>",
        id = escape_html(&record.id),
        region = escape_html(&record.region),
        filename = escape_html(&record.filename),
    )
}

/// Minimal HTML/attribute escaping for table-sourced text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
