// src/mock_data.rs
//! Seed records every view session starts from.

use crate::types::*;
use crate::views::forms::{EducationForm, ExperienceForm, ProfileForm};
use crate::views::listing::FilterCatalog;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::Internship,
            remote: false,
            salary: "$25-30/hour".to_string(),
            posted_date: "2024-01-15".to_string(),
            description: "Join our engineering team to build scalable web applications using React and Node.js.".to_string(),
            requirements: strings(&["JavaScript", "React", "Node.js", "Git"]),
            applicants: 12,
            posted_by: Poster {
                name: "John Smith".to_string(),
                title: "Senior Engineering Manager".to_string(),
                company: "TechCorp".to_string(),
                email: None,
            },
        },
        Job {
            id: "2".to_string(),
            title: "Product Manager".to_string(),
            company: "StartupXYZ".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            remote: true,
            salary: "$90k-120k".to_string(),
            posted_date: "2024-01-14".to_string(),
            description: "Lead product strategy and work with cross-functional teams to deliver innovative solutions.".to_string(),
            requirements: strings(&["Product Management", "Analytics", "Agile", "Leadership"]),
            applicants: 8,
            posted_by: Poster {
                name: "Sarah Johnson".to_string(),
                title: "VP of Product".to_string(),
                company: "StartupXYZ".to_string(),
                email: None,
            },
        },
        Job {
            id: "3".to_string(),
            title: "Data Science Intern".to_string(),
            company: "DataCorp".to_string(),
            location: "New York, NY".to_string(),
            job_type: JobType::Internship,
            remote: false,
            salary: "$28-35/hour".to_string(),
            posted_date: "2024-01-13".to_string(),
            description: "Work on machine learning projects and data analysis to drive business insights.".to_string(),
            requirements: strings(&["Python", "Machine Learning", "SQL", "Statistics"]),
            applicants: 15,
            posted_by: Poster {
                name: "Dr. Emily Chen".to_string(),
                title: "Head of Data Science".to_string(),
                company: "DataCorp".to_string(),
                email: None,
            },
        },
        Job {
            id: "4".to_string(),
            title: "UX Designer".to_string(),
            company: "DesignStudio".to_string(),
            location: "Austin, TX".to_string(),
            job_type: JobType::FullTime,
            remote: true,
            salary: "$70k-90k".to_string(),
            posted_date: "2024-01-12".to_string(),
            description: "Create user-centered designs for web and mobile applications.".to_string(),
            requirements: strings(&["Figma", "User Research", "Prototyping", "Design Systems"]),
            applicants: 6,
            posted_by: Poster {
                name: "Michael Brown".to_string(),
                title: "Design Director".to_string(),
                company: "DesignStudio".to_string(),
                email: None,
            },
        },
    ]
}

/// The job detail page renders this record whatever id it was opened with.
pub fn job_detail(id: &str) -> JobDetail {
    JobDetail {
        job: Job {
            id: id.to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::Internship,
            remote: false,
            salary: "$25-30/hour".to_string(),
            posted_date: "2024-01-15".to_string(),
            description: "Join our engineering team to build scalable web applications using React and Node.js. You'll work alongside senior developers on real projects that impact millions of users.".to_string(),
            requirements: strings(&["JavaScript", "React", "Node.js", "Git", "HTML/CSS"]),
            applicants: 12,
            posted_by: Poster {
                name: "John Smith".to_string(),
                title: "Senior Engineering Manager".to_string(),
                company: "TechCorp".to_string(),
                email: Some("john.smith@techcorp.com".to_string()),
            },
        },
        application_deadline: "2024-02-15".to_string(),
        responsibilities: strings(&[
            "Develop and maintain web applications using React and Node.js",
            "Collaborate with cross-functional teams to define and implement new features",
            "Write clean, maintainable, and well-documented code",
            "Participate in code reviews and contribute to team best practices",
            "Learn and apply new technologies and frameworks",
        ]),
        qualifications: strings(&[
            "Currently pursuing a degree in Computer Science or related field",
            "Strong foundation in JavaScript, HTML, and CSS",
            "Experience with React or similar frontend frameworks",
            "Familiarity with version control systems (Git)",
            "Strong problem-solving skills and attention to detail",
        ]),
        benefits: strings(&[
            "Competitive hourly compensation",
            "Mentorship from senior engineers",
            "Flexible working hours",
            "Professional development opportunities",
            "Potential for full-time offer",
        ]),
    }
}

pub fn job_filter_catalog() -> FilterCatalog {
    FilterCatalog::new()
        .with_category("Job Type", &["Full-time", "Part-time", "Internship", "Contract"])
        .with_category(
            "Location",
            &["Remote", "San Francisco, CA", "New York, NY", "Austin, TX", "Seattle, WA"],
        )
        .with_category(
            "Company",
            &["TechCorp", "StartupXYZ", "DataCorp", "DesignStudio", "InnovateLab"],
        )
        .with_category(
            "Required Skills",
            &["JavaScript", "React", "Python", "Machine Learning", "Product Management", "UX Design"],
        )
}

#[allow(clippy::too_many_arguments)]
fn alumnus(
    id: &str,
    name: &str,
    title: &str,
    company: &str,
    location: &str,
    university: &str,
    graduation_year: &str,
    major: &str,
    skills: &[&str],
    bio: &str,
    connections: u32,
    mutual_connections: u32,
    connection_status: ConnectionStatus,
) -> Alumni {
    Alumni {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        university: university.to_string(),
        graduation_year: graduation_year.to_string(),
        major: major.to_string(),
        skills: strings(skills),
        bio: bio.to_string(),
        connections,
        mutual_connections,
        profile_image: None,
        connection_status,
    }
}

pub fn alumni() -> Vec<Alumni> {
    vec![
        alumnus(
            "1",
            "Sarah Johnson",
            "Senior Software Engineer",
            "Google",
            "Mountain View, CA",
            "Stanford University",
            "2019",
            "Computer Science",
            &["JavaScript", "React", "Python", "Machine Learning"],
            "Passionate about building scalable systems and mentoring junior developers.",
            156,
            8,
            ConnectionStatus::None,
        ),
        alumnus(
            "2",
            "Michael Chen",
            "Product Manager",
            "Meta",
            "Menlo Park, CA",
            "UC Berkeley",
            "2020",
            "Business Administration",
            &["Product Strategy", "Analytics", "User Research", "Agile"],
            "Leading product initiatives that impact billions of users worldwide.",
            203,
            12,
            ConnectionStatus::Connected,
        ),
        alumnus(
            "3",
            "Emily Rodriguez",
            "UX Designer",
            "Airbnb",
            "San Francisco, CA",
            "Stanford University",
            "2021",
            "Design",
            &["Figma", "User Research", "Prototyping", "Design Systems"],
            "Creating delightful user experiences through research-driven design.",
            89,
            5,
            ConnectionStatus::Pending,
        ),
        alumnus(
            "4",
            "David Kim",
            "Data Scientist",
            "Netflix",
            "Los Gatos, CA",
            "MIT",
            "2018",
            "Computer Science",
            &["Python", "Machine Learning", "SQL", "Statistics"],
            "Using data to drive content recommendations and business decisions.",
            134,
            3,
            ConnectionStatus::None,
        ),
        alumnus(
            "5",
            "Lisa Wang",
            "Marketing Director",
            "Spotify",
            "New York, NY",
            "NYU",
            "2017",
            "Marketing",
            &["Digital Marketing", "Brand Strategy", "Analytics", "Growth"],
            "Building brand awareness and driving user acquisition through innovative campaigns.",
            267,
            15,
            ConnectionStatus::None,
        ),
    ]
}

/// The alumni profile page renders this record whatever id it was opened with.
pub fn alumni_profile(id: &str) -> AlumniProfile {
    AlumniProfile {
        alumni: alumnus(
            id,
            "Sarah Johnson",
            "Senior Software Engineer",
            "Google",
            "Mountain View, CA",
            "Stanford University",
            "2019",
            "Computer Science",
            &["JavaScript", "React", "Python", "Machine Learning", "Node.js", "AWS", "Docker", "Kubernetes"],
            "Passionate about building scalable systems and mentoring junior developers. I love working on challenging problems that impact millions of users.",
            156,
            8,
            ConnectionStatus::None,
        ),
        experience: vec![
            ExperienceEntry {
                title: "Senior Software Engineer".to_string(),
                company: "Google".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Leading development of scalable microservices architecture serving millions of users daily.".to_string(),
            },
            ExperienceEntry {
                title: "Software Engineer".to_string(),
                company: "Facebook".to_string(),
                duration: "2019 - 2021".to_string(),
                description: "Developed and maintained React-based web applications for the main Facebook platform.".to_string(),
            },
            ExperienceEntry {
                title: "Software Engineering Intern".to_string(),
                company: "Microsoft".to_string(),
                duration: "Summer 2018".to_string(),
                description: "Built internal tools using .NET and Azure cloud services.".to_string(),
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Master of Science in Computer Science".to_string(),
                school: "Stanford University".to_string(),
                year: "2017-2019".to_string(),
                details: "Focus on Machine Learning and Distributed Systems".to_string(),
            },
            EducationEntry {
                degree: "Bachelor of Science in Computer Science".to_string(),
                school: "UC Berkeley".to_string(),
                year: "2013-2017".to_string(),
                details: "Magna Cum Laude, Phi Beta Kappa".to_string(),
            },
        ],
        achievements: strings(&[
            "Google Cloud Certified Professional",
            "Published 3 papers on distributed systems",
            "Mentored 15+ junior engineers",
            "Led team of 8 engineers on critical infrastructure project",
        ]),
        interests: strings(&["Machine Learning", "Open Source", "Mentoring", "Rock Climbing", "Photography"]),
    }
}

pub fn alumni_filter_catalog() -> FilterCatalog {
    FilterCatalog::new()
        .with_category(
            "University",
            &["Stanford University", "UC Berkeley", "MIT", "NYU", "Harvard University"],
        )
        .with_category(
            "Company",
            &["Google", "Meta", "Apple", "Netflix", "Spotify", "Airbnb", "Microsoft"],
        )
        .with_category(
            "Location",
            &["San Francisco, CA", "Mountain View, CA", "New York, NY", "Seattle, WA", "Austin, TX"],
        )
        .with_category(
            "Skills",
            &["JavaScript", "React", "Python", "Machine Learning", "Product Management", "UX Design", "Analytics"],
        )
        .with_category(
            "Major",
            &["Computer Science", "Business Administration", "Design", "Marketing", "Engineering"],
        )
}

pub fn connection_requests() -> Vec<ConnectionRequest> {
    vec![
        ConnectionRequest {
            id: "1".to_string(),
            name: "Alex Thompson".to_string(),
            title: "Software Engineer".to_string(),
            company: "Apple".to_string(),
            university: "Stanford University".to_string(),
            graduation_year: "2022".to_string(),
            message: "Hi! I'd love to connect and learn about your experience in the tech industry.".to_string(),
            request_date: "2024-01-16".to_string(),
        },
        ConnectionRequest {
            id: "2".to_string(),
            name: "Jessica Brown".to_string(),
            title: "Product Designer".to_string(),
            company: "Adobe".to_string(),
            university: "UC Berkeley".to_string(),
            graduation_year: "2023".to_string(),
            message: "Hello! I'm interested in transitioning to product design and would appreciate your insights.".to_string(),
            request_date: "2024-01-15".to_string(),
        },
    ]
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            title: "Senior Software Engineer".to_string(),
            company: "Google".to_string(),
            industry: "Technology".to_string(),
            experience: "8 years".to_string(),
            skills: strings(&["React", "Node.js", "System Design", "Leadership"]),
            rating: 4.9,
            sessions: 45,
            bio: "Passionate about helping students transition into tech careers. Specialized in full-stack development and technical leadership.".to_string(),
            availability: Availability::Available,
        },
        Mentor {
            id: "2".to_string(),
            name: "Michael Rodriguez".to_string(),
            title: "Product Manager".to_string(),
            company: "Meta".to_string(),
            industry: "Technology".to_string(),
            experience: "6 years".to_string(),
            skills: strings(&["Product Strategy", "Data Analysis", "User Research", "Agile"]),
            rating: 4.8,
            sessions: 32,
            bio: "Former startup founder turned PM. Love helping students understand product thinking and career pivots.".to_string(),
            availability: Availability::Limited,
        },
        Mentor {
            id: "3".to_string(),
            name: "Dr. Emily Watson".to_string(),
            title: "Investment Banking VP".to_string(),
            company: "Goldman Sachs".to_string(),
            industry: "Finance".to_string(),
            experience: "12 years".to_string(),
            skills: strings(&["Financial Modeling", "M&A", "Client Relations", "Team Management"]),
            rating: 4.7,
            sessions: 28,
            bio: "Helping students break into finance and navigate the demanding but rewarding world of investment banking.".to_string(),
            availability: Availability::Available,
        },
    ]
}

pub const MENTOR_INDUSTRIES: [&str; 5] = ["all", "technology", "finance", "consulting", "healthcare"];

pub fn mentorship_requests() -> Vec<MentorshipRequest> {
    vec![
        MentorshipRequest {
            id: "1".to_string(),
            mentor_name: "Sarah Chen".to_string(),
            student_name: "Alex Johnson".to_string(),
            topic: "Career transition to tech".to_string(),
            status: RequestStatus::Pending,
            request_date: "2024-01-15".to_string(),
            scheduled_date: None,
            message: Some("Hi Sarah, I'm looking to transition from marketing to software engineering...".to_string()),
        },
        MentorshipRequest {
            id: "2".to_string(),
            mentor_name: "Michael Rodriguez".to_string(),
            student_name: "Lisa Park".to_string(),
            topic: "Product management career path".to_string(),
            status: RequestStatus::Accepted,
            request_date: "2024-01-12".to_string(),
            scheduled_date: Some("2024-01-20".to_string()),
            message: None,
        },
    ]
}

pub fn mentees() -> Vec<Mentee> {
    vec![
        Mentee {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            university: "MIT".to_string(),
            major: "Computer Science".to_string(),
            year: "Junior".to_string(),
            interests: strings(&["Web Development", "AI/ML", "Startups"]),
            sessions: 3,
            next_session: "2024-01-18".to_string(),
            progress: "Excellent".to_string(),
        },
        Mentee {
            id: "2".to_string(),
            name: "Maria Garcia".to_string(),
            university: "Stanford".to_string(),
            major: "Business".to_string(),
            year: "Senior".to_string(),
            interests: strings(&["Product Management", "Tech Strategy", "Entrepreneurship"]),
            sessions: 5,
            next_session: "2024-01-22".to_string(),
            progress: "Good".to_string(),
        },
    ]
}

pub fn seminars() -> Vec<Seminar> {
    vec![
        Seminar {
            id: "1".to_string(),
            title: "Tech Careers 2025".to_string(),
            host: "Sarah Chen".to_string(),
            company: "Google".to_string(),
            date: "2025-09-10".to_string(),
            description: "Explore the latest trends and opportunities in technology careers.".to_string(),
            slots: 50,
            registered: 32,
        },
        Seminar {
            id: "2".to_string(),
            title: "Finance for Graduates".to_string(),
            host: "Dr. Emily Watson".to_string(),
            company: "Goldman Sachs".to_string(),
            date: "2025-09-15".to_string(),
            description: "A seminar for students and graduates interested in finance careers.".to_string(),
            slots: 40,
            registered: 28,
        },
    ]
}

pub fn platform_users() -> Vec<PlatformUser> {
    let user = |id: &str,
                name: &str,
                email: &str,
                user_type: UserType,
                university: &str,
                join_date: &str,
                status: AccountStatus,
                connections: u32| PlatformUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        user_type,
        university: university.to_string(),
        join_date: join_date.to_string(),
        status,
        connections,
    };

    vec![
        user("1", "Sarah Johnson", "sarah.johnson@university.edu", UserType::Student, "MIT", "2024-01-15", AccountStatus::Active, 23),
        user("2", "Michael Chen", "m.chen@techcorp.com", UserType::Alumni, "Stanford", "2023-11-20", AccountStatus::Active, 156),
        user("3", "TechCorp Inc.", "hr@techcorp.com", UserType::Employer, "N/A", "2024-02-01", AccountStatus::Active, 45),
        user("4", "John Doe", "john.doe@university.edu", UserType::Student, "Harvard", "2024-01-10", AccountStatus::Suspended, 8),
    ]
}

pub fn stat_cards() -> Vec<StatCard> {
    [
        ("Total Users", "2,847", "+12.5%", "Active platform users"),
        ("Students", "1,923", "+8.2%", "Currently enrolled students"),
        ("Alumni", "824", "+15.3%", "Graduated alumni members"),
        ("Active Jobs", "156", "+23.1%", "Open job postings"),
        ("Companies", "89", "+6.7%", "Registered employers"),
        ("Connections", "4,521", "+18.9%", "Total network connections"),
    ]
    .into_iter()
    .map(|(title, value, change, description)| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn platform_growth() -> Vec<GrowthPoint> {
    [
        ("Jan", 1200, 45, 890),
        ("Feb", 1350, 52, 1120),
        ("Mar", 1580, 68, 1450),
        ("Apr", 1820, 78, 1780),
        ("May", 2100, 95, 2340),
        ("Jun", 2450, 112, 2890),
        ("Jul", 2847, 156, 4521),
    ]
    .into_iter()
    .map(|(month, users, jobs, connections)| GrowthPoint {
        month: month.to_string(),
        users,
        jobs,
        connections,
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEvent> {
    [
        (
            ActivityKind::UserRegistered,
            "Sarah Johnson",
            Some(UserType::Student),
            "registered as a new student",
            "2 minutes ago",
        ),
        (
            ActivityKind::JobPosted,
            "TechCorp Inc.",
            Some(UserType::Employer),
            "posted a new Software Engineer position",
            "15 minutes ago",
        ),
        (
            ActivityKind::ReportSubmitted,
            "Anonymous",
            None,
            "reported inappropriate content",
            "1 hour ago",
        ),
        (
            ActivityKind::JobApproved,
            "Admin",
            Some(UserType::Admin),
            "approved Marketing Intern position",
            "2 hours ago",
        ),
        (
            ActivityKind::UserRegistered,
            "Michael Chen",
            Some(UserType::Alumni),
            "registered as an alumni member",
            "3 hours ago",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (kind, user, user_type, action, time))| ActivityEvent {
        id: (i + 1).to_string(),
        kind,
        user: user.to_string(),
        user_type,
        action: action.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn career_recommendations() -> Vec<CareerRecommendation> {
    vec![
        CareerRecommendation {
            id: "1".to_string(),
            title: "Software Engineer".to_string(),
            company: "Google".to_string(),
            location: "Mountain View, CA".to_string(),
            match_score: 92,
            salary: "$120k - $180k".to_string(),
            skills: strings(&["React", "Node.js", "Python", "System Design"]),
            description: "Join our team building next-generation web applications used by millions of users worldwide.".to_string(),
            reasons: strings(&["Strong match with your JavaScript skills", "Alumni connections at Google", "High growth potential"]),
        },
        CareerRecommendation {
            id: "2".to_string(),
            title: "Product Manager".to_string(),
            company: "Meta".to_string(),
            location: "Menlo Park, CA".to_string(),
            match_score: 87,
            salary: "$130k - $200k".to_string(),
            skills: strings(&["Product Strategy", "Data Analysis", "User Research", "Leadership"]),
            description: "Lead product development for our social media platforms and drive user engagement initiatives.".to_string(),
            reasons: strings(&["Your business background is valuable", "Strong alumni network", "Leadership experience"]),
        },
        CareerRecommendation {
            id: "3".to_string(),
            title: "Data Scientist".to_string(),
            company: "Netflix".to_string(),
            location: "Los Gatos, CA".to_string(),
            match_score: 84,
            salary: "$110k - $160k".to_string(),
            skills: strings(&["Python", "Machine Learning", "Statistics", "SQL"]),
            description: "Use data to improve content recommendations and user experience across our platform.".to_string(),
            reasons: strings(&["Math background aligns well", "Growing field", "Remote work options"]),
        },
    ]
}

pub fn skill_gaps() -> Vec<SkillGap> {
    [
        ("System Design", 60, 85, "High"),
        ("Leadership", 45, 75, "Medium"),
        ("Machine Learning", 30, 70, "High"),
        ("Public Speaking", 40, 65, "Low"),
    ]
    .into_iter()
    .map(|(skill, current, target, priority)| SkillGap {
        skill: skill.to_string(),
        current,
        target,
        priority: priority.to_string(),
    })
    .collect()
}

pub fn career_paths() -> Vec<CareerPath> {
    [
        ("Junior Developer", "0-2", &["HTML/CSS", "JavaScript", "Git", "Basic Algorithms"][..], "$60k - $80k", "Mid-level Developer"),
        ("Mid-level Developer", "2-5", &["React/Vue", "Node.js", "Databases", "Testing"][..], "$80k - $120k", "Senior Developer"),
        ("Senior Developer", "5-8", &["System Design", "Mentoring", "Architecture", "Leadership"][..], "$120k - $180k", "Tech Lead / Manager"),
        ("Tech Lead", "8+", &["Team Leadership", "Strategic Planning", "Cross-team Collaboration"][..], "$150k - $250k", "Engineering Manager"),
    ]
    .into_iter()
    .map(|(role, years, skills, salary, next)| CareerPath {
        role: role.to_string(),
        years: years.to_string(),
        skills: strings(skills),
        salary: salary.to_string(),
        next: next.to_string(),
    })
    .collect()
}

pub fn industry_trends() -> Vec<IndustryTrend> {
    [
        ("Technology", "+15%", "Very High", "$125k", &["AI/ML", "Cloud Computing", "Cybersecurity", "Mobile Development"][..]),
        ("Finance", "+8%", "High", "$110k", &["Financial Modeling", "Risk Analysis", "Blockchain", "Quantitative Analysis"][..]),
        ("Healthcare", "+12%", "High", "$95k", &["Healthcare IT", "Data Analysis", "Regulatory Compliance", "Telemedicine"][..]),
    ]
    .into_iter()
    .map(|(industry, growth, demand, avg_salary, top_skills)| IndustryTrend {
        industry: industry.to_string(),
        growth: growth.to_string(),
        demand: demand.to_string(),
        avg_salary: avg_salary.to_string(),
        top_skills: strings(top_skills),
    })
    .collect()
}

/// Profile form as it opens for the signed-in user
pub fn profile_form(user: &CurrentUser) -> ProfileForm {
    ProfileForm {
        bio: "Passionate computer science student with interests in full-stack development and AI. Looking to connect with alumni in the tech industry.".to_string(),
        location: "San Francisco, CA".to_string(),
        website: String::new(),
        linkedin: String::new(),
        github: String::new(),
        skills: strings(&["JavaScript", "React", "Node.js", "Python", "Machine Learning"]),
        experience: vec![ExperienceForm {
            title: "Software Engineering Intern".to_string(),
            company: "TechCorp".to_string(),
            start_date: "2023-06".to_string(),
            end_date: "2023-08".to_string(),
            current: false,
            description: "Developed web applications using React and Node.js. Collaborated with senior developers on feature implementation and bug fixes.".to_string(),
        }],
        education: vec![EducationForm {
            degree: "Bachelor of Science in Computer Science".to_string(),
            school: if user.university.is_empty() {
                "University".to_string()
            } else {
                user.university.clone()
            },
            start_year: "2021".to_string(),
            end_year: "2025".to_string(),
            current: true,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(jobs().len(), 4);
        assert_eq!(jobs().iter().filter(|j| j.job_type == JobType::Internship).count(), 2);
        assert_eq!(alumni().len(), 5);
        assert_eq!(connection_requests().len(), 2);
        assert_eq!(mentors().len(), 3);
        assert_eq!(seminars().len(), 2);
        assert_eq!(stat_cards().len(), 6);
    }

    #[test]
    fn test_connection_statuses_are_seeded_independently() {
        let statuses: Vec<ConnectionStatus> =
            alumni().iter().map(|a| a.connection_status).collect();
        assert_eq!(
            statuses,
            vec![
                ConnectionStatus::None,
                ConnectionStatus::Connected,
                ConnectionStatus::Pending,
                ConnectionStatus::None,
                ConnectionStatus::None,
            ]
        );
    }

    #[test]
    fn test_detail_records_echo_the_requested_id() {
        assert_eq!(job_detail("99").job.id, "99");
        assert_eq!(job_detail("99").job.title, "Software Engineering Intern");
        assert_eq!(alumni_profile("abc").alumni.id, "abc");
        assert_eq!(alumni_profile("abc").alumni.name, "Sarah Johnson");
    }

    #[test]
    fn test_profile_form_uses_user_university() {
        let form = profile_form(&CurrentUser::default());
        assert_eq!(form.education[0].school, "Stanford University");
        assert_eq!(form.skills.len(), 5);
    }
}
