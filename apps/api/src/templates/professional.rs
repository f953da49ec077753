//! Professional — traditional serif layout, heavy top rule, strict order.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Serif, 10.0)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Serif, 11.0).bold(),
        ),
        Block::Rule {
            color: Color::Black,
            thickness_pt: 0.5,
        },
    ]
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Serif, 24.0).bold(),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Serif, 12.0).color(Color::Muted),
        ));
    }
    if let Some(contact) = contact_line(info, " | ") {
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Serif, 9.0),
        ));
    }
    blocks.push(Block::Rule {
        color: Color::Black,
        thickness_pt: 1.5,
    });
    blocks.push(Block::spacer(10.0));

    if !data.summary.is_empty() {
        blocks.extend(section_title("Professional Summary"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: exp.company.clone(),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Serif, 11.0).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0),
            });
            blocks.push(Block::KeyLine {
                left: exp.job_title.clone(),
                right: exp.location.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.0).italic(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0).color(Color::Muted),
            });
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(8.0));
        }
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: edu.school.clone(),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0),
            });
            blocks.push(Block::text(
                format!("{}, {}", edu.degree, edu.location),
                body(),
            ));
            blocks.push(Block::spacer(6.0));
        }
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Skills"));
        blocks.push(Block::text(data.skills.join(" | "), body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Projects"));
        for project in &data.projects {
            let heading = if project.link.trim().is_empty() {
                project.name.clone()
            } else {
                format!("{} ({})", project.name, project.link)
            };
            blocks.push(Block::text(
                heading,
                TextStyle::new(FontFamily::Serif, 10.5).bold(),
            ));
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(6.0));
        }
    }

    blocks
}
