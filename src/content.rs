//! Static page content.

pub const OWNER: &str = "Amrendra Ram Tripathi";
pub const EMAIL: &str = "amrendraramtripathibtech23-27@liet.in";
pub const CV_PATH: &str = "/uploads/Amrendra_CV.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Id of the section element, without the leading `#`.
    pub id: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        id: "home",
    },
    NavItem {
        label: "About",
        id: "about",
    },
    NavItem {
        label: "Skills",
        id: "skills",
    },
    NavItem {
        label: "Projects",
        id: "projects",
    },
    NavItem {
        label: "Achievements",
        id: "achievements",
    },
    NavItem {
        label: "Contact",
        id: "contact",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon / extra icon class
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        href: "https://github.com/amrendratripathi",
        icon: "devicon-github-plain",
    },
    Link {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/amrendra-tripathi-67b906279",
        icon: "devicon-linkedin-plain",
    },
    Link {
        label: "CodeChef",
        href: "https://www.codechef.com/users/amrendra_tr06",
        icon: "extra-codechef",
    },
    Link {
        label: "LeetCode",
        href: "https://leetcode.com/amrendra06",
        icon: "extra-leetcode",
    },
    Link {
        label: "HackerRank",
        href: "https://www.hackerrank.com/amrendra_tr06",
        icon: "extra-hackerrank",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🎓",
        title: "Education",
        description: "BTech 3rd Year at LLOYD Institute of Engineering and Technology",
    },
    Highlight {
        icon: "❤️",
        title: "Passion",
        description: "Technology & Artificial Intelligence enthusiast",
    },
    Highlight {
        icon: "🏆",
        title: "Achievement",
        description: "National Level Hackathon Winner - ₹50k Prize",
    },
    Highlight {
        icon: "🧮",
        title: "Interest",
        description: "Mathematics enthusiast and problem solver",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: "⌨️",
        title: "Programming Languages",
        skills: &["C", "C++", "Java", "Python"],
    },
    SkillCategory {
        icon: "🧠",
        title: "Core Interests",
        skills: &[
            "Artificial Intelligence",
            "Machine Learning",
            "Data Structures",
            "Algorithms",
        ],
    },
    SkillCategory {
        icon: "🏆",
        title: "Competitive Programming",
        skills: &[
            "Problem Solving",
            "Algorithm Design",
            "Time Complexity",
            "Space Optimization",
        ],
    },
    SkillCategory {
        icon: "⚡",
        title: "Mathematics",
        skills: &[
            "Discrete Mathematics",
            "Statistics",
            "Linear Algebra",
            "Calculus",
        ],
    },
];

pub const TECH_STACK: &[&str] = &[
    "C++",
    "Java",
    "Python",
    "Data Structures",
    "Algorithms",
    "AI/ML",
    "Mathematics",
    "Problem Solving",
    "Competitive Programming",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SRKSS Trust Website",
        description: "A website for SRKSS Trust, a non-profit organization dedicated to social welfare and community development, showcasing its mission, initiatives and impact on the community.",
        features: &[
            "Responsive design for all devices",
            "Trust information and mission display",
            "Event and activity showcase",
            "Contact and donation integration",
        ],
        technologies: &["React", "TypeScript", "Tailwind CSS", "Vite"],
        link: Some("https://srkss.app"),
        image: "/uploads/srkks.png",
    },
    Project {
        title: "Brimstone Orpin",
        description: "An e-commerce storefront for a premium beauty brand with product catalogs, detailed product pages and a streamlined checkout.",
        features: &[
            "Product catalog and filtering",
            "Shopping cart functionality",
            "Product detail pages",
            "Responsive mobile design",
        ],
        technologies: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
        link: Some("https://brimstone-orpin.vercel.app"),
        image: "/uploads/brimstone.png",
    },
    Project {
        title: "Civic Seva Admin Dashboard",
        description: "An admin dashboard for tracking, prioritizing and resolving civic issues reported within a community.",
        features: &[
            "Real-time issue tracking",
            "Admin authentication and authorization",
            "Issue categorization and prioritization",
            "Analytics and reporting dashboard",
        ],
        technologies: &["React", "TypeScript", "Node.js", "MongoDB", "Express"],
        link: Some("https://civic-seva.vercel.app"),
        image: "/uploads/civic-seva.png",
    },
    Project {
        title: "TeamPulse",
        description: "A team management platform for leads and managers: activity tracking, task assignment and performance analytics.",
        features: &[
            "Real-time activity monitoring",
            "Task assignment and tracking",
            "Performance analytics dashboard",
            "Time tracking and reporting",
        ],
        technologies: &["React", "TypeScript", "Node.js", "PostgreSQL", "WebSockets"],
        link: Some("https://teampulse-chi.vercel.app"),
        image: "/uploads/teampulse.png",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub badges: &'static [&'static str],
    pub featured: bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🏆",
        title: "National Level Hackathon Winner",
        organization: "Galgotia University",
        description: "Achieved first place in a highly competitive national level hackathon at Galgotia University, earning the top prize of ₹50,000.",
        year: "2024",
        badges: &["First Prize", "₹50,000 Reward", "National Level"],
        featured: true,
    },
    Achievement {
        icon: "👥",
        title: "Organized HackIndia Hackathon",
        organization: "Hexclan Coding Club",
        description: "Organized the national-level HackIndia hackathon at my college together with the Hexclan coding club, with over 200 teams participating.",
        year: "2025",
        badges: &["Organizer", "National Level", "200+ teams"],
        featured: true,
    },
    Achievement {
        icon: "🥇",
        title: "Competitive Programming",
        organization: "Various Platforms",
        description: "Active participant in coding competitions and algorithmic challenges",
        year: "2022-2024",
        badges: &[],
        featured: false,
    },
    Achievement {
        icon: "🎯",
        title: "Academic Excellence",
        organization: "LLOYD Institute of Engineering",
        description: "Consistent academic performance in BTech Computer Science program",
        year: "2022-Present",
        badges: &[],
        featured: false,
    },
    Achievement {
        icon: "⭐",
        title: "Mathematics Olympiad",
        organization: "School Level",
        description: "Recognition for mathematical problem-solving abilities",
        year: "2020-2021",
        badges: &[],
        featured: false,
    },
];

/// Scroll stack options for the projects section. Fields left out keep
/// their defaults.
pub const PROJECT_STACK: &str = r#"{
    "use_external_scroll_source": true,
    "item_distance": 120,
    "item_stack_distance": 40,
    "stack_position": "20%",
    "scale_end_position": "10%",
    "base_scale": 0.9,
    "blur_amount": 0.6
}"#;

pub const HACKATHON_SLIDES: &[&str] = &[
    "/uploads/hackathon1.jpg",
    "/uploads/hackathon2.jpg",
    "/uploads/hackathon3.jpg",
];

#[derive(Debug, Clone, Copy)]
pub struct ContactEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub action: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactEntry] = &[
    ContactEntry {
        icon: "📧",
        label: "Email",
        value: EMAIL,
        action: Some("mailto:amrendraramtripathibtech23-27@liet.in"),
    },
    ContactEntry {
        icon: "📞",
        label: "Phone",
        value: "+91 9693748320",
        action: Some("tel:+919693748320"),
    },
    ContactEntry {
        icon: "📍",
        label: "Location",
        value: "Greater Noida, UP, India",
        action: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_ids_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            assert!(!a.id.starts_with('#'));
            assert!(NAV_ITEMS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_project_stack_options_parse() {
        let config =
            crate::stack::StackConfig::from_json(PROJECT_STACK).expect("options should parse");
        assert!(config.use_external_scroll_source);
        assert_eq!(config.stack_position, crate::stack::Length::Percent(20.0));
        assert_eq!(config.base_scale, 0.9);
        // untouched fields keep their defaults
        assert!(config.smooth_scroll);
        assert_eq!(config.idle_delay_ms, 150.0);
    }

    #[test]
    fn test_featured_achievements_come_first() {
        let first_regular = ACHIEVEMENTS
            .iter()
            .position(|a| !a.featured)
            .expect("there should be regular achievements");
        assert!(ACHIEVEMENTS[first_regular..].iter().all(|a| !a.featured));
    }
}
