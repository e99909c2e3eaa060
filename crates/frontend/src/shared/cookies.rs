use wasm_bindgen::JsCast;

/// Read a cookie value from `document.cookie`
pub fn get_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document: web_sys::HtmlDocument = document.dyn_into().ok()?;
    let cookies = html_document.cookie().ok()?;
    parse_cookie(&cookies, name)
}

/// Find `name` in a `k1=v1; k2=v2` cookie string and percent-decode its value
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        let value = value.trim();
        Some(
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}
