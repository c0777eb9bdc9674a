use serde::{Deserialize, Serialize};

/// The site owner rendered into the static pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub pic: String,
    pub about: String,
    pub education: Education,
    pub work: Vec<Work>,
    pub hobbies: Vec<Hobby>,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub grad: String,
    pub major: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    pub company: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub hobby: String,
    pub img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub country: String,
}
