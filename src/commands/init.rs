//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

const CONFIG: &str = r#"# Content loader configuration

# Page
page: index.html
output: public/index.html

# Content
## Content paths are resolved against content_dir, or appended to
## content_url when it is set.
content_dir: .
# content_url: https://cdn.example.com/site/
# request_timeout_secs: 10
content_files:
  - content/site-settings.md
  - content/hero-slides.md
  - content/about.md
  - content/team.md
  - content/services.md
  - content/projects.md
  - content/testimonials.md
  - content/blog.md
  - content/contact.md
  - content/footer.md
  - content/navigation.md

# Contact
whatsapp_greeting: "Merhaba...Sitenizden Yazıyorum"
"#;

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Site</title>
<meta name="title" content="">
<meta name="description" content="">
<meta name="keywords" content="">
</head>
<body>
<nav class="main-menu"><ul>
<li><a href="#home">Home</a></li><li><a href="#about-sec">About</a></li><li><a href="#service-sec">Services</a></li><li><a href="#contact-sec">Contact</a></li>
</ul></nav>
<div id="heroSlide1"><div class="swiper-wrapper"></div></div>
<section id="about-sec">
<h2 class="sec-title"></h2><p class="sec-text"></p>
<div class="about-profile"><div class="avatar"><img src="" alt="profile"></div><h3 class="about-profile-name"></h3><span class="desig"></span></div>
<div class="signature"><img src="" alt="signature"></div>
</section>
<section id="team-sec"><h2 class="sec-title"></h2><p class="sec-text"></p>
<div id="teamSlider1"><div class="swiper-wrapper"></div></div></section>
<section id="service-sec"><h2 class="sec-title"></h2><p class="sec-text"></p>
<div class="service-card"><div class="icon"><img src="" alt="icon"></div><h3 class="box-title"><a href="#"></a></h3><p class="box-text"></p></div>
<div class="service-card"><div class="icon"><img src="" alt="icon"></div><h3 class="box-title"><a href="#"></a></h3><p class="box-text"></p></div>
</section>
<section class="project-sec">
<div class="property-card-wrap"><div class="property-thumb"><img src="" alt="project"></div><h3 class="property-card-title"><a href="#"></a></h3><span class="property-card-subtitle"></span><p class="property-card-text"></p><span class="property-card-number"></span></div>
</section>
<section class="testi-sec-1"><h2 class="sec-title"></h2>
<div id="testiSlider1"><div class="swiper-wrapper"></div></div></section>
<section id="blog-sec"><h2 class="sec-title"></h2>
<div class="blog-grid"><div class="blog-img"><img src="" alt="post"></div><span class="blog-date"></span><h3 class="box-title"><a href="#"></a></h3><p class="blog-text"></p></div>
</section>
<section id="contact-sec"><h2 class="sec-title"></h2><p class="sec-text"></p>
<div class="th-widget-contact">
<div class="info-box_text"><div class="details"><p></p></div></div>
<div class="info-box_text"><div class="details"><a href="#"></a></div></div>
<div class="info-box_text"><div class="details"><a href="#"></a></div></div>
<div class="info-box_text"><div class="details"><a href="#"></a></div></div>
</div>
<div class="contact-map"><iframe src="" loading="lazy"></iframe></div>
</section>
<footer>
<div class="footer-widget"><p class="about-text"></p>
<div class="th-social"><a href="https://www.facebook.com/"><i class="fab fa-facebook-f"></i></a><a href="https://www.instagram.com/"><i class="fab fa-instagram"></i></a></div></div>
<div class="footer-links"><ul><li><a href="#"></a></li><li><a href="#"></a></li></ul></div>
<p class="copyright-text"></p>
</footer>
</body>
</html>
"##;

/// Sample content files, by path relative to the site
const CONTENT: [(&str, &str); 11] = [
    (
        "content/site-settings.md",
        r#"---
title: Acme Construction
description: Quality homes and renovations
keywords: ["construction", "renovation", "architecture"]
---
"#,
    ),
    (
        "content/hero-slides.md",
        r##"---
slides: [{"background_image": "assets/img/hero/hero_bg_1_1.jpg", "subtitle": "ACME", "title": "We Build Your Dreams", "description": "Homes designed around the way you live.", "button1_text": "Our Projects", "button1_link": "#projects", "button2_text": "Contact Us", "button2_link": "#contact-sec"}]
---
"##,
    ),
    (
        "content/about.md",
        r#"---
title: About Us
description: A family company building since 1990.
profile_name: Jane Doe
profile_title: Founder
profile_image: assets/img/normal/about_profile.jpg
signature_image: assets/img/normal/signature.png
---
"#,
    ),
    (
        "content/team.md",
        r#"---
title: Our Team
description: The people behind every project.
members: [{"name": "Jane Doe", "position": "Architect", "image": "assets/img/team/team_1_1.jpg", "phone": "+905550000000", "social_links": {"instagram": "https://www.instagram.com/", "linkedin": "https://www.linkedin.com/"}}]
---
"#,
    ),
    (
        "content/services.md",
        r#"---
title: Our Services
description: From the first sketch to the last brick.
service_cards: [{"title": "Architecture", "description": "Plans and permits.", "icon": "assets/img/icon/service_1_1.svg"}, {"title": "Renovation", "description": "New life for old homes.", "icon": "assets/img/icon/service_1_2.svg"}]
---
"#,
    ),
    (
        "content/projects.md",
        r#"---
title: Recent Projects
project_items: [{"title": "Sea View Villa", "subtitle": "Residential", "description": "Four bedrooms on the coast.", "number": "01", "image": "assets/img/project/project_1_1.jpg"}]
---
"#,
    ),
    (
        "content/testimonials.md",
        r#"---
title: What Our Clients Say
testimonials: [{"rating": 5, "quote": "On time and on budget.", "name": "John Smith", "position": "Home Owner", "image": "assets/img/testimonial/testi_1_1.jpg"}]
---
"#,
    ),
    (
        "content/blog.md",
        r#"---
title: Latest News
posts: [{"title": "Choosing the right materials", "excerpt": "What lasts and what does not.", "image": "assets/img/blog/blog_1_1.jpg", "date": "2024-03-05"}]
---
"#,
    ),
    (
        "content/contact.md",
        r#"---
title: Contact Us
description: Tell us about your project.
address: 1 Main Street, Springfield
phone: +905550000000
whatsapp: 905550000000
email: info@example.com
map_embed: https://maps.google.com/maps?q=Springfield&output=embed
---
"#,
    ),
    (
        "content/footer.md",
        r##"---
description: Quality homes and renovations since 1990.
copyright: Copyright &copy; 2024 <a href="index.html">Acme</a>. All Rights Reserved.
footer_links: [{"text": "About", "link": "#about-sec"}, {"text": "Contact", "link": "#contact-sec"}]
---
"##,
    ),
    (
        "content/navigation.md",
        r##"---
menu_items: [{"text": "Home", "link": "#home"}, {"text": "About", "link": "#about-sec"}, {"text": "Services", "link": "#service-sec"}, {"text": "Contact", "link": "#contact-sec"}]
---
"##,
    ),
];

/// Initialize a new site in the given directory. Existing files are kept.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content"))?;

    write_new(&target_dir.join("_config.yml"), CONFIG)?;
    write_new(&target_dir.join("index.html"), PAGE)?;
    for (path, text) in CONTENT {
        write_new(&target_dir.join(path), text)?;
    }

    Ok(())
}

fn write_new(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file {:?}", path);
        return Ok(());
    }
    fs::write(path, contents)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

/// Run the init command with an existing site
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}
