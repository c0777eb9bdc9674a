use crate::domain::models::User;

const NAV: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/hobbies", "Hobbies"),
    ("/places", "Places"),
    ("/timeline", "Timeline"),
];

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a class="nav-link" href="{href}">{label}</a>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<header class="nav-bar"><nav>{nav}</nav></header>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn index(user: &User) -> String {
    let work: String = user
        .work
        .iter()
        .map(|job| {
            let company = if job.company.is_empty() {
                String::new()
            } else {
                format!(r#"<span class="company">{}</span>"#, escape(&job.company))
            };
            let bullets: String = job
                .description
                .iter()
                .map(|line| format!("<li>{}</li>", escape(line)))
                .collect();
            format!(
                r#"<article class="job"><h3>{}</h3>{company}<ul>{bullets}</ul></article>"#,
                escape(&job.title)
            )
        })
        .collect();

    let body = format!(
        r#"<section class="profile">
<img class="profile-pic" src="{pic}" alt="{name}">
<h2>{name}</h2>
<p>{about}</p>
</section>
<section class="education">
<h2>Education</h2>
<p><strong>{school}</strong></p>
<p>{major}, {grad}</p>
</section>
<section class="work">
<h2>Work Experience</h2>
{work}
</section>"#,
        pic = escape(&user.pic),
        name = escape(&user.name),
        about = escape(&user.about),
        school = escape(&user.education.school),
        major = escape(&user.education.major),
        grad = escape(&user.education.grad),
    );

    layout("MLH Fellow", &body)
}

pub fn hobbies(user: &User) -> String {
    let items: String = user
        .hobbies
        .iter()
        .map(|hobby| {
            format!(
                r#"<figure class="hobby"><img src="{img}" alt="{name}"><figcaption>{name}</figcaption></figure>"#,
                img = escape(&hobby.img),
                name = escape(&hobby.hobby),
            )
        })
        .collect();

    layout("Hobbies", &format!(r#"<section class="hobbies">{items}</section>"#))
}

pub fn places(user: &User) -> String {
    let items: String = user
        .places
        .iter()
        .map(|place| {
            format!(
                "<li>{}, {}</li>",
                escape(&place.city),
                escape(&place.country)
            )
        })
        .collect();

    layout("Places", &format!(r#"<ul class="places">{items}</ul>"#))
}

pub fn timeline() -> String {
    layout("Timeline", TIMELINE_BODY)
}

// Posts are rendered client-side with textContent, never innerHTML.
const TIMELINE_BODY: &str = r#"<form id="timeline-form">
<label>Name <input name="name" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Message <textarea name="content" required></textarea></label>
<button type="submit">Post</button>
<p id="timeline-error" class="error"></p>
</form>
<section id="timeline-posts"></section>
<script>
const list = document.getElementById("timeline-posts");
const form = document.getElementById("timeline-form");
const errorBox = document.getElementById("timeline-error");

function renderPost(post) {
  const article = document.createElement("article");
  const heading = document.createElement("h3");
  heading.textContent = post.name + " <" + post.email + ">";
  const stamp = document.createElement("time");
  stamp.textContent = new Date(post.created_at).toLocaleString();
  const body = document.createElement("p");
  body.textContent = post.content;
  article.append(heading, stamp, body);
  return article;
}

async function loadPosts() {
  const response = await fetch("/api/timeline_post");
  const data = await response.json();
  list.replaceChildren(...data.timeline_posts.map(renderPost));
}

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  errorBox.textContent = "";
  const response = await fetch("/api/timeline_post", {
    method: "POST",
    body: new URLSearchParams(new FormData(form)),
  });
  if (response.ok) {
    form.reset();
    await loadPosts();
  } else {
    const data = await response.json().catch(() => ({ error: "Something went wrong" }));
    errorBox.textContent = data.error;
  }
});

loadPosts();
</script>"#;
