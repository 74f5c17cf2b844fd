use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    AuthSession, UserAccount, UserId, UserRole, DEFAULT_AVATAR,
};
use crate::auth::application::ports::outgoing::UserProfileView;
use crate::catalog::application::domain::{
    Course, CourseLevel, Job, Pricing, Role, Stream, SubDomain,
};
use crate::tests::support::auth_helper::TEST_USER_ID;

pub fn sample_account() -> UserAccount {
    UserAccount {
        id: UserId::from(TEST_USER_ID),
        name: "Meera".to_string(),
        email: "meera@example.com".to_string(),
        role: UserRole::User,
        avatar: DEFAULT_AVATAR.to_string(),
        stream_id: None,
        created_at: fixed_time(),
    }
}

pub fn sample_session() -> AuthSession {
    AuthSession {
        token: "token-abc".to_string(),
        user: sample_account(),
    }
}

pub fn sample_profile() -> UserProfileView {
    let account = sample_account();
    UserProfileView {
        id: account.id,
        name: account.name,
        email: account.email,
        role: account.role,
        avatar: account.avatar,
        stream: None,
        skill_progress: Vec::new(),
        course_progress: Vec::new(),
        created_at: account.created_at,
    }
}

pub fn fixed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn sample_stream() -> Stream {
    Stream {
        id: fixed_id(1),
        name: "Computer Science & Engineering".to_string(),
        slug: "cse".to_string(),
        description: "Software, systems and security".to_string(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_sub_domain() -> SubDomain {
    SubDomain {
        id: fixed_id(10),
        stream_id: fixed_id(1),
        name: "CSE - Cyber Security".to_string(),
        slug: "cse-cyber-security".to_string(),
        description: None,
        recommended_certifications: vec![],
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_role() -> Role {
    Role {
        id: fixed_id(20),
        sub_domain_id: fixed_id(10),
        title: "Blockchain Developer".to_string(),
        description: None,
        skills: vec!["Blockchain".to_string(), "Solidity".to_string(), "Web3".to_string()],
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_course(skill: &str) -> Course {
    Course {
        id: Uuid::new_v4(),
        title: format!("{skill} Fundamentals"),
        slug: format!("{}-fundamentals", skill.to_lowercase()),
        skill: skill.to_string(),
        stream_id: None,
        sub_domain_id: None,
        role_id: None,
        pricing: Pricing::Free,
        provider: "Coursera".to_string(),
        duration: Some("4 weeks".to_string()),
        link: "https://example.com/course".to_string(),
        description: None,
        resource_links: vec![],
        certificate_links: vec![],
        target_companies: vec![],
        level: CourseLevel::Beginner,
        is_featured: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_job(role_id: Uuid) -> Job {
    Job {
        id: Uuid::new_v4(),
        role_id,
        title: "Smart Contract Engineer".to_string(),
        company: "Polygon".to_string(),
        salary_range: "12-18 LPA".to_string(),
        location: Some("Bengaluru".to_string()),
        link: None,
        description: None,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
