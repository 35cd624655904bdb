use crate::core::portfolio::{PaginationControls, SectionModel, TabButton, TabContent};
use std::fmt;

const LOADING_LINE: &str = "Loading certificates...";

/// Draw the section as plain text, one card per block.
pub fn render_section(section: &SectionModel<'_>) -> String {
    SectionText(section).to_string()
}

struct SectionText<'s, 'a>(&'s SectionModel<'a>);

impl fmt::Display for SectionText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self.0;
        writeln!(f, "{}", section.title)?;
        writeln!(f, "{}", section.subtitle)?;
        writeln!(f)?;
        writeln!(f, "{}", render_tabs(&section.tabs))?;
        writeln!(f)?;

        match &section.content {
            TabContent::Loading => writeln!(f, "{}", LOADING_LINE)?,
            TabContent::Empty { message } => writeln!(f, "{}", message)?,
            TabContent::ProjectGrid { cards } => {
                for card in cards {
                    writeln!(f, "* {}", card.title)?;
                    writeln!(f, "  {}", card.description)?;
                    writeln!(f, "  image: {}", card.image)?;
                    writeln!(f, "  {}: {}", card.call_to_action, card.link)?;
                }
            }
            TabContent::CertificateGrid { cards, pagination } => {
                for card in cards {
                    writeln!(f, "* {}", card.title)?;
                    writeln!(f, "  image: {}", card.image)?;
                    writeln!(f, "  {}: {}", card.call_to_action, card.link)?;
                }
                if let Some(controls) = pagination {
                    writeln!(f)?;
                    writeln!(f, "{}", render_pagination(controls))?;
                }
            }
        }
        Ok(())
    }
}

pub fn render_tabs(tabs: &[TabButton]) -> String {
    tabs.iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `< Previous  1 [2] 3  Next >`, with disabled ends wrapped in parentheses.
pub fn render_pagination(controls: &PaginationControls) -> String {
    let previous = if controls.previous_enabled {
        "< Previous"
    } else {
        "(< Previous)"
    };
    let next = if controls.next_enabled {
        "Next >"
    } else {
        "(Next >)"
    };

    let pages = controls
        .pages
        .iter()
        .map(|p| {
            if p.active {
                format!("[{}]", p.number)
            } else {
                p.number.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}  {}  {}", previous, pages, next)
}
