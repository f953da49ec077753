//! Minimalist — sans-serif, black and muted only, no rules, wide spacing.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Sans, 10.0)
}

fn section_title(title: &str) -> Block {
    Block::text(
        title.to_uppercase(),
        TextStyle::new(FontFamily::Sans, 9.5).bold(),
    )
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Sans, 20.0).bold(),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Sans, 11.0).color(Color::Muted),
        ));
    }
    if let Some(contact) = contact_line(info, "   ") {
        blocks.push(Block::spacer(3.0));
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
        ));
    }
    blocks.push(Block::spacer(20.0));

    if !data.summary.is_empty() {
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(16.0));
    }

    if !data.experience.is_empty() {
        blocks.push(section_title("Experience"));
        blocks.push(Block::spacer(6.0));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", exp.job_title, exp.company),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::text(
                &exp.location,
                TextStyle::new(FontFamily::Sans, 9.0).color(Color::Muted),
            ));
            blocks.push(Block::spacer(2.0));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(10.0));
        }
        blocks.push(Block::spacer(6.0));
    }

    if !data.education.is_empty() {
        blocks.push(section_title("Education"));
        blocks.push(Block::spacer(6.0));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.0),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::spacer(4.0));
        }
        blocks.push(Block::spacer(12.0));
    }

    if !data.skills.is_empty() {
        blocks.push(section_title("Skills"));
        blocks.push(Block::spacer(6.0));
        blocks.push(Block::text(
            data.skills.join(", "),
            body().color(Color::Muted),
        ));
        blocks.push(Block::spacer(16.0));
    }

    if !data.projects.is_empty() {
        blocks.push(section_title("Projects"));
        blocks.push(Block::spacer(6.0));
        for project in &data.projects {
            blocks.push(Block::text(
                &project.name,
                TextStyle::new(FontFamily::Sans, 10.0).bold(),
            ));
            blocks.push(Block::text(&project.description, body().color(Color::Muted)));
            blocks.push(Block::spacer(8.0));
        }
    }

    blocks
}
