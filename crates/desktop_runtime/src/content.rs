//! Static portfolio content rendered by the window panels.

use crate::apps::{AppIcon, AppId, ExperienceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub avatar_url: &'static str,
    pub wallpaper_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Affan Ahmed",
    title: "Software Engineer",
    location: "Karachi, Pakistan",
    email: "affanlodhi2004@gmail.com",
    linkedin: "https://linkedin.com/in/affan-ahmed-43878927b",
    avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=Affan&backgroundColor=b6e3f4",
    wallpaper_url: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=2070&auto=format&fit=crop",
};

/// A folder in the "My Experience" window; double-click opens `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFolder {
    pub target: AppId,
    pub name: &'static str,
    pub role: &'static str,
    pub icon: AppIcon,
}

pub const PROJECTS: [ProjectFolder; 3] = [
    ProjectFolder {
        target: AppId::RemoteFace,
        name: "RemoteFace",
        role: "Software Engineer",
        icon: AppIcon::Globe,
    },
    ProjectFolder {
        target: AppId::PowerMatix,
        name: "PowerMatix",
        role: "Software Engineer",
        icon: AppIcon::Chip,
    },
    ProjectFolder {
        target: AppId::Hexalyze,
        name: "Hexalyze Consulting",
        role: "Software Engineer",
        icon: AppIcon::Folder,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub role: &'static str,
    pub dates: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
}

const REMOTE_FACE: Experience = Experience {
    title: "RemoteFace",
    role: "Software Engineer",
    dates: "10/2024 - present",
    location: "Karachi, Pakistan",
    highlights: &[
        "Designed and developed Power Apps applications to automate business processes and improve data management efficiency.",
        "Created and maintained Node.js APIs to connect front-end applications with SharePoint lists, enabling seamless data exchange and dynamic content rendering.",
        "Worked extensively with SharePoint Online, managing lists, libraries, and REST API integrations.",
        "Built and customized WordPress websites, implementing responsive layouts, theme modifications, and custom functionalities.",
        "Responsible for developing and maintaining applications across multiple platforms with a focus on Microsoft Power Apps, WordPress, Next.js, and Node.js.",
    ],
};

const POWER_MATIX: Experience = Experience {
    title: "PowerMatix",
    role: "Software Engineer",
    dates: "07/2025 - Present",
    location: "Remote",
    highlights: &[
        "Built responsive and dynamic web and mobile applications using React.js, React Native, Next.js, Node.js, and Express.js.",
        "Developed custom solutions for SharePoint Online using SPFx, PnPjs, and SharePoint REST API.",
        "Created business applications with Power Apps and automated workflows using Power Automate.",
        "Designed and published interactive dashboards using Power BI for real-time data insights.",
        "Worked with MongoDB, PostgreSQL, and Keystone for backend and database development.",
        "Managed deployments on Vercel, Railway, Netlify, and Microsoft 365 environments.",
    ],
};

const HEXALYZE: Experience = Experience {
    title: "Hexalyze Consulting Services",
    role: "Software Engineer",
    dates: "07/2024 - 06/2025",
    location: "Karachi, Pakistan",
    highlights: &[
        "Developed and maintained modern web applications using React.js, Next.js, HTML, CSS, JavaScript, and TypeScript.",
        "Built custom SPFx web parts and extensions for SharePoint Online, utilizing PnPjs and the SharePoint REST API.",
        "Collaborated with design and backend teams to create responsive and scalable user interfaces.",
        "Integrated APIs and backend services using Node.js and Express.js.",
        "Used Git, NPM, and VS Code in an Agile development environment.",
    ],
};

pub fn experience(id: ExperienceId) -> &'static Experience {
    match id {
        ExperienceId::RemoteFace => &REMOTE_FACE,
        ExperienceId::PowerMatix => &POWER_MATIX,
        ExperienceId::Hexalyze => &HEXALYZE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resume {
    pub heading: &'static str,
    pub summary: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience_hint: &'static str,
}

pub const RESUME: Resume = Resume {
    heading: "Affan Ahmed - Software Engineer",
    summary: "Hi, I'm Affan Lodhi, a Web and React Native Developer with strong expertise in SPFx, SharePoint Online, Power Apps, and Power BI. I build scalable full-stack applications using React, Next.js, Node.js, Express, MongoDB, PostgreSQL, and Keystone. I focus on delivering modern solutions across the Microsoft 365 ecosystem and beyond.",
    degree: "Bachelor of Science in Computer Science",
    school: "DHA SUFFA UNIVERSITY",
    skills: &[
        SkillGroup {
            label: "Front-end & Web",
            items: "TypeScript, React.js, Next.js, CSS3, Tailwind CSS, Bootstrap.",
        },
        SkillGroup {
            label: "Mobile",
            items: "React Native.",
        },
        SkillGroup {
            label: "Microsoft 365",
            items: "SPFx, Power BI, Power Apps, Power Automate, SharePoint Online.",
        },
        SkillGroup {
            label: "Backend & DB",
            items: "Node.js, KeystoneJS, MongoDB, PostgreSQL.",
        },
        SkillGroup {
            label: "Tools",
            items: "Git, WordPress.",
        },
    ],
    experience_hint: "Click on the folders inside \"My Experience\" to view full details for each company.",
};

pub const GALLERY_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1555099962-4199c345e5dd?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?auto=format&fit=crop&w=800&q=80",
];

pub const WELCOME_TIPS: [&str; 3] = [
    "Double click on Desktop Icons.",
    "Drag & Resize windows.",
    "Use the Start Menu to navigate.",
];

pub const NOW_PLAYING: &str = "01. INTRO - AFFAN.MP3";
