//! Academic — CV framing: education first, experience as appointments,
//! projects as publications and projects.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_line;
use crate::templates::ir::{Align, Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Serif, 10.0)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(title, TextStyle::new(FontFamily::Serif, 11.5).bold()),
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
            TextStyle::new(FontFamily::Serif, 22.0)
                .bold()
                .align(Align::Center),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Serif, 11.0)
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    if let Some(contact) = contact_line(info, " \u{00b7} ") {
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Serif, 9.0)
                .color(Color::Muted)
                .align(Align::Center),
        ));
    }
    blocks.push(Block::spacer(16.0));

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: edu.degree.clone(),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.5),
            });
            blocks.push(Block::text(
                format!("{}, {}", edu.school, edu.location),
                body().italic(),
            ));
            blocks.push(Block::spacer(6.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.summary.is_empty() {
        blocks.extend(section_title("Research Statement"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(10.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Appointments"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", exp.job_title, exp.company),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Serif, 10.5).bold(),
                right_style: TextStyle::new(FontFamily::Serif, 9.5),
            });
            blocks.push(Block::text(&exp.location, body().italic()));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(8.0));
        }
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Publications & Projects"));
        for project in &data.projects {
            blocks.push(Block::text(
                &project.name,
                TextStyle::new(FontFamily::Serif, 10.5).bold(),
            ));
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(6.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Research Skills"));
        blocks.push(Block::text(data.skills.join("; "), body()));
    }

    blocks
}
