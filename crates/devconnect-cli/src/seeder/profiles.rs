//! Profile and education seeding.

use std::time::Instant;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::LastName;
use rayon::prelude::*;

use devconnect_db::{ProfileStore, Store, StoreError};
use devconnect_models::{NewEducation, ProfileFields, SocialLinks, User};

const STATUSES: &[&str] = &[
    "Developer",
    "Junior Developer",
    "Senior Developer",
    "Manager",
    "Student or Learning",
    "Instructor or Teacher",
    "Intern",
];

const SKILLS: &[&str] = &[
    "rust", "go", "python", "javascript", "typescript", "sql", "docker", "kubernetes", "react",
    "node", "aws", "linux",
];

const DEGREES: &[&str] = &["BSc", "MSc", "BEng", "PhD", "Bootcamp Certificate"];

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[(0..items.len()).fake::<usize>()]
}

/// One set of profile fields per user, in the same order.
pub fn generate_profiles(users: &[User]) -> Vec<ProfileFields> {
    users.par_iter().map(generate_profile).collect()
}

fn generate_profile(user: &User) -> ProfileFields {
    let handle = user.name.to_lowercase().replace(' ', "");
    let skill_count = (2..6).fake::<usize>();
    let mut skills: Vec<String> = (0..skill_count).map(|_| pick(SKILLS).to_string()).collect();
    skills.sort_unstable();
    skills.dedup();

    ProfileFields {
        company: Some(CompanyName().fake()),
        website: Some(format!("https://{handle}.dev")),
        location: Some(CityName().fake()),
        bio: Some(Sentence(6..14).fake()),
        status: pick(STATUSES).to_string(),
        github_username: Some(handle.clone()),
        skills,
        social: SocialLinks {
            twitter: Some(format!("https://twitter.com/{handle}")),
            linkedin: Some(format!("https://linkedin.com/in/{handle}")),
            ..Default::default()
        },
    }
}

fn generate_education() -> NewEducation {
    let start_year = (2000..2020).fake::<i32>();
    let current = (0..4).fake::<u8>() == 0;
    let from = NaiveDate::from_ymd_opt(start_year, 9, 1).unwrap_or_default();
    let to = if current {
        None
    } else {
        NaiveDate::from_ymd_opt(start_year + 4, 6, 30)
    };
    let field: Vec<String> = Words(1..3).fake();

    NewEducation {
        school: format!("{} University", LastName().fake::<String>()),
        degree: pick(DEGREES).to_string(),
        field_of_study: field.join(" "),
        from,
        to,
        current,
        description: None,
    }
}

/// Creates a profile with one education entry for each user.
pub async fn seed_profiles(store: &dyn Store, users: &[User]) -> Result<usize, StoreError> {
    let start_time = Instant::now();
    println!("🪪 Seeding {} profiles...", users.len());

    let profiles = generate_profiles(users);

    for (user, fields) in users.iter().zip(profiles) {
        let profile = store.upsert_profile(user.id, fields).await?;
        store.add_education(profile.id, generate_education()).await?;
    }

    println!(
        "   ✓ {} profiles in {:.2}s",
        users.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(users.len())
}
