//! Creative — accent band header, oversized name, projects before experience.

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
            title.to_uppercase(),
            TextStyle::new(FontFamily::Sans, 11.0)
                .bold()
                .color(Color::Accent),
        ),
        Block::Rule {
            color: Color::Accent,
            thickness_pt: 1.5,
        },
    ]
}

pub fn render(data: &ResumeData) -> Vec<Block> {
    let mut blocks = vec![
        Block::Band {
            height_pt: 6.0,
            color: Color::Accent,
        },
        Block::spacer(14.0),
    ];
    let info = &data.personal_info;

    if !info.name.is_empty() {
        blocks.push(Block::text(
            &info.name,
            TextStyle::new(FontFamily::Sans, 28.0)
                .bold()
                .color(Color::Accent),
        ));
    }
    if !info.title.is_empty() {
        blocks.push(Block::text(
            &info.title,
            TextStyle::new(FontFamily::Sans, 13.0),
        ));
    }
    if let Some(contact) = contact_line(info, " / ") {
        blocks.push(Block::spacer(3.0));
        blocks.push(Block::text(
            contact,
            TextStyle::new(FontFamily::Sans, 9.0).color(Color::Muted),
        ));
    }
    blocks.push(Block::spacer(16.0));

    if !data.summary.is_empty() {
        blocks.extend(section_title("About"));
        blocks.push(Block::text(&data.summary, body()));
        blocks.push(Block::spacer(12.0));
    }

    // Portfolio first: a creative resume leads with the work.
    if !data.projects.is_empty() {
        blocks.extend(section_title("Selected Work"));
        for project in &data.projects {
            blocks.push(Block::KeyLine {
                left: project.name.clone(),
                right: project.link.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 11.0).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Accent),
            });
            blocks.push(Block::text(&project.description, body()));
            blocks.push(Block::spacer(8.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.experience.is_empty() {
        blocks.extend(section_title("Experience"));
        for exp in &data.experience {
            blocks.push(Block::KeyLine {
                left: format!("{} \u{2014} {}", exp.job_title, exp.company),
                right: format!("{} - {}", exp.start_date, exp.end_date),
                left_style: TextStyle::new(FontFamily::Sans, 11.0).bold(),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::Bullets {
                items: description_bullets(&exp.description),
                style: body(),
            });
            blocks.push(Block::spacer(8.0));
        }
        blocks.push(Block::spacer(4.0));
    }

    if !data.skills.is_empty() {
        blocks.extend(section_title("Toolkit"));
        blocks.push(Block::text(data.skills.join(" / "), body()));
        blocks.push(Block::spacer(12.0));
    }

    if !data.education.is_empty() {
        blocks.extend(section_title("Education"));
        for edu in &data.education {
            blocks.push(Block::KeyLine {
                left: format!("{}, {}", edu.degree, edu.school),
                right: edu.graduation_year.clone(),
                left_style: TextStyle::new(FontFamily::Sans, 10.0),
                right_style: TextStyle::new(FontFamily::Sans, 8.5).color(Color::Muted),
            });
            blocks.push(Block::spacer(4.0));
        }
    }

    blocks
}
