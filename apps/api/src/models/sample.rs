//! Built-in sample resume used to seed the document store, so the preview and
//! export pipeline have realistic content before the user types anything.

use uuid::Uuid;

use crate::models::resume::{
    DocumentSettings, Education, Experience, PersonalInfo, Project, ResumeData,
};

pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            name: "Amelia Vance".to_string(),
            title: "Senior Product Designer".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "amelia.vance@example.com".to_string(),
            linkedin: "linkedin.com/in/ameliavance".to_string(),
            github: "github.com/ameliavance".to_string(),
        },
        summary: "A seasoned product designer with over a decade of experience in \
            user-centered design, specializing in creating intuitive and beautiful \
            interfaces for complex web applications. Proven ability to lead design \
            teams and collaborate effectively with cross-functional stakeholders to \
            deliver products that meet both user needs and business goals."
            .to_string(),
        experience: vec![
            Experience {
                id: Uuid::new_v4(),
                job_title: "Senior Product Designer".to_string(),
                company: "Innovate Corp".to_string(),
                location: "San Francisco, CA".to_string(),
                start_date: "Jun 2018".to_string(),
                end_date: "Present".to_string(),
                description: "- Led the redesign of the flagship SaaS platform, resulting in a \
                    20% increase in user engagement and a 15% reduction in support tickets.\n\
                    - Mentored a team of 3 junior designers, fostering a culture of \
                    collaboration and continuous improvement.\n\
                    - Established and maintained a comprehensive design system, ensuring brand \
                    consistency across all products."
                    .to_string(),
            },
            Experience {
                id: Uuid::new_v4(),
                job_title: "UX/UI Designer".to_string(),
                company: "Creative Solutions".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "Jul 2014".to_string(),
                end_date: "May 2018".to_string(),
                description: "- Designed and shipped multiple features for a suite of mobile \
                    productivity apps.\n\
                    - Conducted user research, including interviews and usability testing, to \
                    inform design decisions.\n\
                    - Created wireframes, prototypes, and high-fidelity mockups for various \
                    projects."
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: Uuid::new_v4(),
            degree: "Bachelor of Fine Arts in Graphic Design".to_string(),
            school: "Rhode Island School of Design".to_string(),
            location: "Providence, RI".to_string(),
            graduation_year: "2014".to_string(),
        }],
        skills: vec![
            "User-Centered Design".to_string(),
            "UI/UX Design".to_string(),
            "Prototyping & Wireframing".to_string(),
            "Figma & Sketch".to_string(),
            "Design Systems".to_string(),
            "User Research".to_string(),
            "Agile Methodologies".to_string(),
            "HTML & CSS".to_string(),
        ],
        projects: vec![
            Project {
                id: Uuid::new_v4(),
                name: "Portfolio Website".to_string(),
                link: "ameliavance.design".to_string(),
                description: "Personal portfolio showcasing a curated selection of my design \
                    work. Built with React and Framer Motion."
                    .to_string(),
            },
            Project {
                id: Uuid::new_v4(),
                name: "Sidekick Mobile App".to_string(),
                link: "github.com/ameliavance/sidekick".to_string(),
                description: "A concept for a personal task management app focused on \
                    simplicity and mindfulness."
                    .to_string(),
            },
        ],
        settings: DocumentSettings::default(),
    }
}
