//! Terminal rendering of [`ViewState`].

use console::Style;

use super::ViewState;
use crate::lookup::{CompanyInfo, LookupStatus};

/// Render a view state as terminal text.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Enter a company name to search.".to_string(),
        ViewState::Loading { query } => format!("Searching for {}...", query),
        ViewState::Result(info) => render_card(info),
        ViewState::Error { message } => {
            format!("{} {}", Style::new().red().bold().apply_to("error:"), message)
        }
    }
}

fn render_card(info: &CompanyInfo) -> String {
    let (title, body) = if info.is_muted() {
        (Style::new().dim().bold(), Style::new().dim())
    } else {
        (Style::new().bold(), Style::new())
    };

    let badge = match info.status {
        LookupStatus::Found => String::new(),
        LookupStatus::NotFound => format!(" {}", Style::new().yellow().apply_to("[not found]")),
        LookupStatus::Error => format!(" {}", Style::new().red().apply_to("[error]")),
    };

    format!(
        "{}{}\n{}\n\n{}",
        title.apply_to(&info.name),
        badge,
        body.apply_to(format!("logo: {}", info.logo)),
        body.apply_to(&info.description),
    )
}
