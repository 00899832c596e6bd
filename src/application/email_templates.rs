use crate::use_cases::waitlist::WelcomeTemplate;

pub const WELCOME_SUBJECT: &str = "Welcome to Our Waitlist!";

const WELCOME_HTML: &str = include_str!("../../templates/waitlist_welcome.html");
const FULL_NAME_PLACEHOLDER: &str = "{{fullName}}";

/// Welcome email backed by the bundled HTML template.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticWelcomeTemplate;

impl WelcomeTemplate for StaticWelcomeTemplate {
    fn render(&self, full_name: &str) -> String {
        WELCOME_HTML.replace(FULL_NAME_PLACEHOLDER, &escape_html(full_name))
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
