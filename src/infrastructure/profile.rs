use crate::domain::models::{Education, Hobby, Place, User, Work};

/// Profile data for the site owner. Built once in `main` and shared read-only.
pub fn site_owner() -> User {
    User {
        name: "Arianna Richardson".to_string(),
        pic: "/static/img/me.svg".to_string(),
        about: "Hello! My name is Arianna and I am from Bowie, MD! I enjoy coding and \
                creating digital media..."
            .to_string(),
        education: Education {
            school: "University of Maryland, Baltimore County".to_string(),
            grad: "Graduated 2025".to_string(),
            major: "Information Systems".to_string(),
        },
        work: vec![
            work(
                "Undergraduate Researcher",
                "Designed UI dashboards using Unreal Engine.",
            ),
            work(
                "Platform Engineer Intern",
                "12-week internship at Disney Experiences.",
            ),
            work("Google CSSI", "Virtual program teaching JavaScript."),
            work(
                "Communications Intern",
                "Redesigned school website, edited media, etc.",
            ),
        ],
        hobbies: vec![Hobby {
            hobby: "Digital Art".to_string(),
            img: "/static/img/digital-art.svg".to_string(),
        }],
        places: vec![place("Bowie", "USA"), place("Baltimore", "USA")],
    }
}

fn work(title: &str, description: &str) -> Work {
    Work {
        title: title.to_string(),
        company: String::new(),
        description: vec![description.to_string()],
    }
}

fn place(city: &str, country: &str) -> Place {
    Place {
        city: city.to_string(),
        country: country.to_string(),
    }
}
