//! Technical — monospace accents, skills up front, projects before experience.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Sans, 10.0)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            format!("// {}", title.to_lowercase()),
            TextStyle::new(FontFamily::Mono, 10.0)
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

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Mono, 20.0)
                .bold()
                .color(Color::Accent),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Sans, 11.0).color(Color::Muted),
        ));
    }
    if let Some(contact) = contact_line(info, "  ") {
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Mono, 8.0).color(Color::Muted),
        ));
    }
    blocks.push(Block::spacer(14.0));

    if !data.skills.is_empty() {
        blocks.extend(section_title("Skills"));
        blocks.push(Block::text(
            data.skills.join(", "),
            TextStyle::new(FontFamily::Mono, 9.0),
        ));
        blocks.push(Block::spacer(10.0));
    }

    if !data.summary.is_empty() {
        blocks.extend(section_title("Summary"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Projects"));
        for project in &data.projects {
            blocks.push(Block::text(
                &project.name,
                TextStyle::new(FontFamily::Sans, 10.5).bold(),
            ));
            if !project.link.trim().is_empty() {
                blocks.push(Block::text(
                    &project.link,
                    TextStyle::new(FontFamily::Mono, 8.5).color(Color::Accent),
                ));
            }
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(7.0));
        }
        blocks.push(Block::spacer(3.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: format!("{} @ {}", exp.job_title, exp.company),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Mono, 8.0).color(Color::Muted),
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
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.0),
                right_style: TextStyle::new(FontFamily::Mono, 8.0).color(Color::Muted),
            });
            blocks.push(Block::spacer(4.0));
        }
    }

    blocks
}
