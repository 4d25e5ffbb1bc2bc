//! Suggestion catalogs for onboarding pickers
//!
//! Static category lists the onboarding pages offer as suggestions. Purely
//! informational; staged records are free-form and are not validated against
//! these lists.

/// A named group of suggested picker items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// Skill suggestions, grouped by category
pub fn skill_categories() -> &'static [CatalogCategory] {
    SKILL_CATEGORIES
}

/// Interest suggestions, grouped by category
pub fn interest_categories() -> &'static [CatalogCategory] {
    INTEREST_CATEGORIES
}

static SKILL_CATEGORIES: &[CatalogCategory] = &[
    CatalogCategory {
        name: "Programming Languages",
        items: &[
            "Python", "C", "C++", "Java", "JavaScript", "TypeScript", "Go", "Rust", "Kotlin",
            "Swift",
        ],
    },
    CatalogCategory {
        name: "Web Development",
        items: &[
            "HTML",
            "CSS",
            "Tailwind CSS",
            "Bootstrap",
            "React",
            "Next.js",
            "Node.js",
            "Express.js",
            "Vue.js",
            "Angular",
            "REST API Development",
            "Full Stack Development",
        ],
    },
    CatalogCategory {
        name: "Backend Frameworks",
        items: &["Django", "FastAPI", "Flask", "Spring Boot", "Laravel"],
    },
    CatalogCategory {
        name: "Mobile Development",
        items: &["Flutter", "React Native", "Android Studio", "iOS Development"],
    },
    CatalogCategory {
        name: "Databases",
        items: &["MySQL", "PostgreSQL", "MongoDB", "SQLite", "Firebase", "Redis"],
    },
    CatalogCategory {
        name: "Data Science & Machine Learning",
        items: &[
            "Machine Learning",
            "Deep Learning",
            "Data Analysis",
            "Pandas",
            "NumPy",
            "Scikit-learn",
            "TensorFlow",
            "PyTorch",
            "Computer Vision",
            "Natural Language Processing (NLP)",
        ],
    },
    CatalogCategory {
        name: "Cloud & DevOps",
        items: &[
            "AWS",
            "Google Cloud Platform (GCP)",
            "Microsoft Azure",
            "Docker",
            "Kubernetes",
            "Git",
            "GitHub",
            "CI/CD",
            "Linux System Administration",
        ],
    },
    CatalogCategory {
        name: "Cybersecurity & Networking",
        items: &[
            "Network Security",
            "Ethical Hacking",
            "Penetration Testing",
            "Cryptography",
            "Cloud Security",
            "Network Management",
        ],
    },
    CatalogCategory {
        name: "Software Engineering & Tools",
        items: &[
            "Agile Methodology",
            "Scrum",
            "Software Testing",
            "Debugging",
            "System Design",
            "UI/UX Design",
            "Figma",
            "Adobe XD",
        ],
    },
    CatalogCategory {
        name: "Artificial Intelligence",
        items: &[
            "Artificial Intelligence",
            "Reinforcement Learning",
            "Recommendation Systems",
            "Chatbot Development",
        ],
    },
    CatalogCategory {
        name: "Hardware & Embedded Systems",
        items: &[
            "Internet of Things (IoT)",
            "Embedded C",
            "Arduino Programming",
            "Raspberry Pi",
            "Microcontrollers",
        ],
    },
    CatalogCategory {
        name: "Soft Skills",
        items: &[
            "Communication Skills",
            "Leadership",
            "Time Management",
            "Analytical Thinking",
            "Teamwork",
            "Project Management",
            "Problem Solving",
            "Adaptability",
        ],
    },
];

static INTEREST_CATEGORIES: &[CatalogCategory] = &[
    CatalogCategory {
        name: "Artificial Intelligence & Data Science",
        items: &[
            "Artificial Intelligence",
            "Machine Learning",
            "Deep Learning",
            "Data Science",
            "Data Visualization",
            "Predictive Analytics",
            "Computer Vision",
            "Natural Language Processing (NLP)",
        ],
    },
    CatalogCategory {
        name: "Software & Web Development",
        items: &[
            "Frontend Development",
            "Backend Development",
            "Full Stack Development",
            "Web Applications",
            "Progressive Web Apps (PWAs)",
            "UI/UX Design",
            "Software Architecture",
        ],
    },
    CatalogCategory {
        name: "Mobile Development",
        items: &[
            "Android App Development",
            "iOS App Development",
            "Cross-Platform Apps",
            "Flutter Projects",
            "React Native Projects",
        ],
    },
    CatalogCategory {
        name: "Cybersecurity & Networks",
        items: &[
            "Ethical Hacking",
            "Network Security",
            "Data Privacy",
            "Cryptography",
            "Cyber Forensics",
        ],
    },
    CatalogCategory {
        name: "Cloud & DevOps",
        items: &[
            "Cloud Infrastructure (AWS/GCP/Azure)",
            "DevOps Automation",
            "Kubernetes Management",
            "Continuous Deployment",
            "CI/CD Pipelines",
        ],
    },
    CatalogCategory {
        name: "Emerging Technologies",
        items: &[
            "Blockchain",
            "Internet of Things (IoT)",
            "Augmented Reality (AR)",
            "Virtual Reality (VR)",
            "Quantum Computing",
        ],
    },
    CatalogCategory {
        name: "Domain-Based Interests",
        items: &[
            "Healthcare Technology",
            "Finance & FinTech",
            "Education Technology",
            "Agriculture Automation",
            "E-Commerce Systems",
            "Smart Cities",
            "Sustainable Technology",
        ],
    },
    CatalogCategory {
        name: "Research & Academic",
        items: &[
            "AI Research Papers",
            "Data Science Competitions",
            "Open Source Contributions",
            "Hackathons",
            "Academic Writing",
            "Project-Based Learning",
        ],
    },
    CatalogCategory {
        name: "Career Development",
        items: &[
            "Internships",
            "Placements Preparation",
            "Competitive Programming",
            "Problem Solving Challenges",
            "Public Speaking",
            "Entrepreneurship",
        ],
    },
];
