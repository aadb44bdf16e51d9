//! Local HTTP server hosting the site and the content editor.
//!
//! Built on `tiny_http`:
//!
//! - `GET /` renders the page from the current application state
//! - every user action is a POST that mutates state and redirects back
//! - port conflicts retry upward automatically
//! - graceful shutdown on Ctrl+C
//!
//! Requests are handled one at a time in the accept loop; every state
//! transition completes synchronously inside its request, so the app
//! needs no locking.

use crate::{
    app::App,
    config::AppConfig,
    content::{ContentStore, ImageSlot},
    editor::{EditError, ProductField, Section, Tab},
    log,
    render::render_page,
    storage::FileStorage,
};
use anyhow::{Context, Result};
use std::{
    io::Read,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Request bodies are tiny urlencoded forms; anything bigger is bogus.
const MAX_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the site server.
///
/// Loads the content document once through the file-backed store, binds
/// to the configured interface and port, and blocks handling requests
/// until Ctrl+C.
pub fn serve_site(config: &AppConfig) -> Result<()> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("invalid interface `{}`", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    let store = ContentStore::new(Box::new(FileStorage::new(&config.storage.path)));
    let mut app = App::new(store);

    log!("serve"; "http://{addr}");

    // Handle requests in main thread (blocks until Ctrl+C)
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(&mut app, request) {
            log!("serve"; "request error: {err}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(err) => last_error = Some(err),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Dispatch a single request against the application state.
fn handle_request(app: &mut App, mut request: Request) -> Result<()> {
    let method = request.method().clone();
    let url = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    // Strip query string before routing
    let path = url.split('?').next().unwrap_or(&url).to_string();

    match (method, path.as_str()) {
        (Method::Get, "/" | "") => {
            respond_html(request, render_page(&app.content, &app.ui, &app.admin))
        }

        // Mobile navigation: closes the menu, then jumps to the region.
        (Method::Get, path) if path.starts_with("/go/") => {
            app.navigate();
            let anchor = path.trim_start_matches("/go/");
            if anchor.chars().all(|c| c.is_ascii_alphanumeric()) {
                respond_redirect(request, &format!("/#{anchor}"))
            } else {
                respond_redirect(request, "/")
            }
        }

        (Method::Post, "/cart/add") => {
            app.add_to_cart();
            respond_redirect(request, "/#shop")
        }
        (Method::Post, "/menu/toggle") => {
            app.toggle_menu();
            respond_redirect(request, "/")
        }
        (Method::Post, "/admin/open") => {
            app.open_admin();
            respond_redirect(request, "/")
        }
        (Method::Post, "/admin/close") => {
            app.close_admin();
            respond_redirect(request, "/")
        }

        (Method::Post, "/admin/tab") => {
            let form = read_form(&mut request)?;
            match form.get("tab").and_then(Tab::from_key) {
                Some(tab) => {
                    app.select_tab(tab);
                    respond_redirect(request, "/")
                }
                None => respond_bad_request(request, "unknown tab"),
            }
        }
        (Method::Post, "/admin/section") => {
            let form = read_form(&mut request)?;
            match form.get("id").and_then(Section::from_key) {
                Some(section) => {
                    app.toggle_section(section);
                    respond_redirect(request, "/")
                }
                None => respond_bad_request(request, "unknown section"),
            }
        }

        (Method::Post, "/admin/field") => {
            let form = read_form(&mut request)?;
            let (Some(key), Some(value)) = (form.get("key"), form.get("value")) else {
                return respond_bad_request(request, "missing key or value");
            };
            match app.update_field(key, value) {
                Ok(()) => respond_redirect(request, "/"),
                Err(err) => respond_bad_request(request, &err.to_string()),
            }
        }
        (Method::Post, "/admin/product") => {
            let form = read_form(&mut request)?;
            let index = form.get("index").and_then(|i| i.parse::<usize>().ok());
            let (Some(index), Some(raw_field), Some(value)) =
                (index, form.get("field"), form.get("value"))
            else {
                return respond_bad_request(request, "missing index, field, or value");
            };
            let Some(field) = ProductField::from_key(raw_field) else {
                let err = EditError::UnknownProductField(raw_field.to_string());
                return respond_bad_request(request, &err.to_string());
            };
            match app.update_product(index, field, value) {
                Ok(()) => respond_redirect(request, "/"),
                Err(err) => respond_bad_request(request, &err.to_string()),
            }
        }
        (Method::Post, "/admin/image") => {
            let form = read_form(&mut request)?;
            let (Some(raw_slot), Some(value)) = (form.get("slot"), form.get("value")) else {
                return respond_bad_request(request, "missing slot or value");
            };
            let Some(slot) = ImageSlot::from_key(raw_slot) else {
                let err = EditError::UnknownSlot(raw_slot.to_string());
                return respond_bad_request(request, &err.to_string());
            };
            app.update_image(slot, value);
            respond_redirect(request, "/")
        }

        (Method::Post, "/admin/reset") => {
            app.request_reset();
            respond_redirect(request, "/")
        }
        (Method::Post, "/admin/reset/confirm") => {
            app.confirm_reset();
            respond_redirect(request, "/")
        }
        (Method::Post, "/admin/reset/cancel") => {
            app.cancel_reset();
            respond_redirect(request, "/")
        }

        _ => respond_not_found(request),
    }
}

// ============================================================================
// Form Decoding
// ============================================================================

/// Decoded `application/x-www-form-urlencoded` body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn read_form(request: &mut Request) -> Result<FormData> {
    let mut body = String::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES as u64)
        .read_to_string(&mut body)
        .context("Failed to read request body")?;
    Ok(parse_form(&body))
}

/// Parse an urlencoded form body into name/value pairs.
///
/// `+` encodes a space in form bodies; literal plus arrives as `%2B`.
pub fn parse_form(body: &str) -> FormData {
    let pairs = body
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name), decode_component(value))
        })
        .collect();
    FormData { pairs }
}

fn decode_component(s: &str) -> String {
    let s = s.replace('+', " ");
    urlencoding::decode(&s)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(s)
}

// ============================================================================
// Response Helpers
// ============================================================================

/// Serve HTML content.
fn respond_html(request: Request, content: String) -> Result<()> {
    let response = Response::from_string(content)
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap());
    request.respond(response)?;
    Ok(())
}

/// 303 See Other back to the page (POST-redirect-GET).
fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let response = Response::empty(StatusCode(303))
        .with_header(Header::from_bytes("Location", location).unwrap());
    request.respond(response)?;
    Ok(())
}

/// 400 Bad Request with a plain-text reason.
fn respond_bad_request(request: Request, message: &str) -> Result<()> {
    let response = Response::from_string(format!("400 Bad Request: {message}"))
        .with_status_code(StatusCode(400))
        .with_header(Header::from_bytes("Content-Type", "text/plain").unwrap());
    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn respond_not_found(request: Request) -> Result<()> {
    let response = Response::from_string("404 Not Found")
        .with_status_code(StatusCode(404))
        .with_header(Header::from_bytes("Content-Type", "text/plain").unwrap());
    request.respond(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_basic() {
        let form = parse_form("key=heroTagline&value=New%20Tagline");
        assert_eq!(form.get("key"), Some("heroTagline"));
        assert_eq!(form.get("value"), Some("New Tagline"));
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_parse_form_plus_is_space() {
        let form = parse_form("value=Quality+Coffee.");
        assert_eq!(form.get("value"), Some("Quality Coffee."));
    }

    #[test]
    fn test_parse_form_encoded_plus_survives() {
        let form = parse_form("value=a%2Bb");
        assert_eq!(form.get("value"), Some("a+b"));
    }

    #[test]
    fn test_parse_form_empty_and_flag_pairs() {
        let form = parse_form("");
        assert_eq!(form, FormData::default());

        let form = parse_form("flag&key=v");
        assert_eq!(form.get("flag"), Some(""));
        assert_eq!(form.get("key"), Some("v"));
    }

    #[test]
    fn test_parse_form_first_value_wins() {
        let form = parse_form("key=a&key=b");
        assert_eq!(form.get("key"), Some("a"));
    }

    #[test]
    fn test_parse_form_ampersand_in_value() {
        let form = parse_form("value=beans%20%26%20bibles");
        assert_eq!(form.get("value"), Some("beans & bibles"));
    }
}
