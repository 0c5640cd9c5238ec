//! Fixed informational pages: About, Privacy Policy, Terms of Service, Cookie Policy.

use super::helpers::{bullet_section, empty_line};
use super::styles::Palette;
use crate::state::Screen;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

struct StaticPage {
    title: &'static str,
    intro: &'static str,
    sections: &'static [(&'static str, &'static [&'static str])],
}

const ABOUT: StaticPage = StaticPage {
    title: "About Global Scholarships",
    intro: "We collect scholarship opportunities from universities, governments and \
            foundations around the world and keep them in one searchable catalog.",
    sections: &[(
        "What we offer",
        &[
            "Up-to-date information on scholarships and grants",
            "Educational news and updates",
            "Guidance on application processes",
            "Resources for international students",
        ],
    )],
};

const PRIVACY: StaticPage = StaticPage {
    title: "Privacy Policy",
    intro: "This policy explains what information we collect and how it is used.",
    sections: &[
        (
            "How we use information",
            &[
                "Communicate about application status and results",
                "Send scholarship opportunities and updates",
                "Improve our scholarship matching",
            ],
        ),
        (
            "How we protect it",
            &[
                "Encryption of all sensitive data",
                "Regular security audits and updates",
                "Limited access to personal information",
            ],
        ),
        (
            "Your rights",
            &[
                "Access your personal information",
                "Correct inaccurate data",
                "Request deletion of your data",
                "Opt-out of communications",
            ],
        ),
    ],
};

const TERMS: StaticPage = StaticPage {
    title: "Terms of Service",
    intro: "By using Global Scholarships you agree to the following terms.",
    sections: &[
        (
            "Your responsibilities",
            &[
                "Provide accurate and complete information",
                "Meet all eligibility requirements",
                "Comply with application deadlines",
            ],
        ),
        (
            "Our role",
            &[
                "Scholarship details come from the awarding organisations",
                "We do not guarantee scholarship awards",
                "Providers may modify or cancel scholarships",
            ],
        ),
    ],
};

const COOKIES: StaticPage = StaticPage {
    title: "Cookie Policy",
    intro: "The website uses cookies to keep the service working and to understand how \
            it is used.",
    sections: &[
        (
            "Essential cookies",
            &["User authentication", "Security features"],
        ),
        (
            "Functional cookies",
            &["Language settings", "Display preferences"],
        ),
        (
            "Analytics cookies",
            &["Feature usage statistics", "Platform performance metrics"],
        ),
    ],
};

fn page_for(screen: Screen) -> Option<&'static StaticPage> {
    match screen {
        Screen::About => Some(&ABOUT),
        Screen::Privacy => Some(&PRIVACY),
        Screen::Terms => Some(&TERMS),
        Screen::Cookies => Some(&COOKIES),
        _ => None,
    }
}

/// Render one of the fixed pages. Other screens render nothing.
pub fn render(frame: &mut Frame, area: Rect, screen: Screen, scroll: u16, palette: Palette) {
    let Some(page) = page_for(screen) else {
        return;
    };

    let mut lines = vec![
        Line::styled(page.title, palette.heading),
        empty_line(),
        Line::styled(page.intro, palette.text),
        empty_line(),
    ];
    for (heading, items) in page.sections {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        lines.extend(bullet_section(heading, &items, palette.heading, palette.text));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
