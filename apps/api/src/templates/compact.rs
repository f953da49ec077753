//! Compact — small sans type, tight spacing, single-line item headers.
//! Built to keep a dense resume on one page.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Sans, 9.0)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Sans, 9.5)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Muted,
            thickness_pt: 0.5,
        },
    ]
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    if !info.name.is_empty() || !info.title.is_empty() {
        blocks.push(Block::KeyLine {
            left: info.name.clone(),
            right: info.title.clone(),
            left_style: TextStyle::new(FontFamily::Sans, 18.0).bold(),
            right_style: TextStyle::new(FontFamily::Sans, 10.0).color(Color::Muted),
        });
    }
    if let Some(contact) = contact_line(info, " | ") {
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
        ));
    }
    blocks.push(Block::spacer(8.0));

    if !data.summary.is_empty() {
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(8.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: format!("{} \u{2014} {}, {}", exp.job_title, exp.company, exp.location),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 9.5).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            });
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(4.0));
        }
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 9.5),
                right_style: TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            });
        }
        blocks.push(Block::spacer(6.0));
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Skills"));
        blocks.push(Block::text(data.skills.join(", "), body()));
        blocks.push(Block::spacer(6.0));
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Projects"));
        for project in &data.projects {
            blocks.push(Block::KeyLine {
                left: project.name.clone(),
                right: project.link.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 9.5).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            });
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(3.0));
        }
    }

    blocks
}
