//! Modern — sans-serif, split header with right-aligned contact column,
//! centered italic summary and a skill chip row up top.

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_parts;
use crate::templates::ir::{Align, Block, Color, TextStyle};

fn body() -> TextStyle {
    TextStyle::new(FontFamily::Sans, 10.0)
}

fn section_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Sans, 10.0)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Accent,
            thickness_pt: 1.2,
        },
    ]
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    let mut left = Vec::new();
    if !info.name.is_empty() {
        left.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Sans, 22.0)
                .bold()
                .color(Color::Accent),
        ));
    }
    if !info.title.is_empty() {
        left.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Sans, 12.0).color(Color::Muted),
        ));
    }
    let right: Vec<Block> = contact_parts(info)
        .into_iter()
        .map(|part| {
            Block::text(
                part,
                TextStyle::new(FontFamily::Sans, 8.5)
                    .color(Color::Muted)
                    .align(Align::Right),
            )
        })
        .collect();
    if !left.is_empty() || !right.is_empty() {
        blocks.push(Block::Columns {
            left,
            right,
            left_frac: 0.6,
            gutter_pt: 12.0,
        });
        blocks.push(Block::spacer(16.0));
    }

    if !data.summary.is_empty() {
        blocks.push(Block::text(
            &data.summary,
            body().italic().align(Align::Center),
        ));
        blocks.push(Block::spacer(10.0));
    }

    if !data.skills.is_empty() {
        blocks.push(Block::text(
            data.skills.join("  \u{00b7}  "),
            TextStyle::new(FontFamily::Sans, 9.5)
                .color(Color::Accent)
                .align(Align::Center),
        ));
        blocks.push(Block::spacer(14.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        blocks.push(Block::spacer(4.0));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: exp.job_title.clone(),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 11.0)
                    .bold()
                    .color(Color::Accent),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::text(
                format!("{} \u{2022} {}", exp.company, exp.location),
                TextStyle::new(FontFamily::Sans, 10.0).bold(),
            ));
            blocks.push(Block::spacer(2.0));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(8.0));
        }
    }

    if !data.projects.is_empty() {
        blocks.extend(section_title("Projects"));
        blocks.push(Block::spacer(4.0));
        for project in &data.projects {
            blocks.push(Block::KeyLine {
                left: project.name.clone(),
                right: project.link.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.5)
                    .bold()
                    .color(Color::Accent),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(6.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        blocks.push(Block::spacer(4.0));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.0).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::text(
                &edu.location,
                TextStyle::new(FontFamily::Sans, 9.0).color(Color::Muted),
            ));
            blocks.push(Block::spacer(5.0));
        }
    }

    blocks
}
