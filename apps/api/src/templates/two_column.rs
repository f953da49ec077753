//! Two Column — narrow sidebar (contact, skills, education) beside the main
//! column (summary, experience, projects).

use crate::layout::FontFamily;
use crate::models::resume::{description_bullets, ResumeData};
use crate::templates::contact_parts;
use crate::templates::ir::{Block, Color, TextStyle};

fn sidebar_title(title: &str) -> Block {
    Block::text(
        title.to_uppercase(),
        TextStyle::new(FontFamily::Sans, 9.0)
            .bold()
            .color(Color::Accent),
    )
}

fn main_title(title: &str) -> [Block; 2] {
    [
        Block::text(
            title.to_uppercase(),
            TextStyle::new(FontFamily::Sans, 10.5)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Accent,
            thickness_pt: 1.0,
        },
    ]
}

fn sidebar(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;

    let parts = contact_parts(info);
    if !parts.is_empty() {
        blocks.push(sidebar_title("Contact"));
        blocks.push(Block::spacer(3.0));
        for part in parts {
            blocks.push(Block::text(
                part,
                TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            ));
        }
        blocks.push(Block::spacer(12.0));
    }

    if !data.skills.is_empty() {
        blocks.push(sidebar_title("Skills"));
        blocks.push(Block::spacer(3.0));
        for skill in &data.skills {
            blocks.push(Block::text(skill, TextStyle::new(FontFamily::Sans, 8.5)));
        }
        blocks.push(Block::spacer(12.0));
    }

    if !data.education.is_empty() {
        blocks.push(sidebar_title("Education"));
        blocks.push(Block::spacer(3.0));
        for edu in &data.education {
            blocks.push(Block::text(
                &edu.degree,
                TextStyle::new(FontFamily::Sans, 8.5).bold(),
            ));
            blocks.push(Block::text(
                format!("{}, {}", edu.school, edu.graduation_year),
                TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            ));
            blocks.push(Block::spacer(5.0));
        }
    }

    blocks
}

fn main_column(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &data.personal_info;
    let body = TextStyle::new(FontFamily::Sans, 9.5);

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Sans, 22.0)
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
    blocks.push(Block::spacer(12.0));

    if !data.summary.is_empty() {
        blocks.push(Block::text(&data.summary, body));
        blocks.push(Block::spacer(12.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(main_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: exp.job_title.clone(),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 10.0).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            });
            blocks.push(Block::text(
                format!("{} \u{2022} {}", exp.company, exp.location),
                TextStyle::new(FontFamily::Sans, 9.0).italic().color(Color::Muted),
            ));
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body,
            });
            blocks.push(Block::spacer(7.0));
        }
    }

    if !data.projects.is_empty() {
        blocks.extend(main_title("Projects"));
        for project in &data.projects {
            blocks.push(Block::KeyLine {
                left: project.name.clone(),
                right: project.link.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.0).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.0).color(Color::Muted),
            });
            blocks.push(Block::text(&project.description, body));
            blocks.push(Block::spacer(6.0));
        }
    }

    blocks
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    vec![Block::Columns {
        left: sidebar(data),
        right: main_column(data),
        left_frac: 0.3,
        gutter_pt: 20.0,
    }]
}
