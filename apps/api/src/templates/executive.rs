//! Executive — serif, leadership framing. Field selection: no projects
//! section; skills appear as core competencies.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Align, Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Serif, 10.5)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Serif, 11.5)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Black,
            thickness_pt: 0.75,
        },
    ]
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Serif, 26.0)
                .bold()
                .align(Align::Center),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Serif, 13.0)
                .italic()
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    if let Some(contact) = contact_line(info, " \u{2022} ") {
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Serif, 9.0)
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    blocks.push(Block::Rule {
        color: Color::Black,
        thickness_pt: 1.0,
    });
    blocks.push(Block::spacer(12.0));

    if !data.summary.is_empty() {
        blocks.extend(section_title("Executive Summary"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(12.0));
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Core Competencies"));
        blocks.push(Block::text(
            data.skills.join("  \u{2022}  "),
            body().align(Align::Center),
        ));
        blocks.push(Block::spacer(12.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Leadership Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: exp.company.clone(),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Serif, 12.0).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.5),
            });
            blocks.push(Block::text(
                format!("{}, {}", exp.job_title, exp.location),
                TextStyle::new(FontFamily::Serif, 10.5).italic(),
            ));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(10.0));
        }
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.5),
            });
            blocks.push(Block::spacer(5.0));
        }
    }

    blocks
}
