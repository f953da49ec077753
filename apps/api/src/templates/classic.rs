//! Classic — centered serif header, ruled uppercase section titles. The
//! default template.

use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Align, Block, Color, TextStyle};
use crate::layout::FontFamily;

const BODY: f32 = 10.0;

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Serif, BODY)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Serif, 11.0)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Muted,
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
                .color(Color::Accent)
                .align(Align::Center),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Serif, 13.0)
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    if let Some(contact) = contact_line(info, "  \u{2022}  ") {
        blocks.push(Block::spacer(4.0));
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Serif, 9.0)
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    blocks.push(Block::spacer(14.0));

    if !data.summary.is_empty() {
        blocks.extend(section_title("Summary"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: exp.job_title.clone(),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Serif, 11.0).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0).color(Color::Muted),
            });
            blocks.push(Block::text(
                format!("{} \u{2022} {}", exp.company, exp.location),
                body().italic(),
            ));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(8.0));
        }
        blocks.push(Block::spacer(2.0));
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: edu.degree.clone(),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0).color(Color::Muted),
            });
            blocks.push(Block::text(
                format!("{} \u{2022} {}", edu.school, edu.location),
                body(),
            ));
            blocks.push(Block::spacer(6.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Skills"));
        blocks.push(Block::text(data.skills.join(", "), body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Projects"));
        for project in &data.projects {
            blocks.push(Block::KeyLine {
                left: project.name.clone(),
                right: project.link.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.0).color(Color::Muted),
            });
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(6.0));
        }
    }

    blocks
}
