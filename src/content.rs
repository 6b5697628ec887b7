//! Static page content.
//!
//! Everything the sections render is fixed at build time and read-only.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const FIRM_NAME: &str = "Zia & Associates";
pub const TAGLINE: &str = "Your Trusted Legal Partner";
pub const FIRM_BLURB: &str =
    "A premier law firm dedicated to providing exceptional legal services with integrity and professionalism.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Established with a vision to provide exceptional legal services, Zia & Associates has grown into a leading \
     law firm in Pakistan. We are a team of dedicated and experienced legal professionals committed to upholding \
     the principles of justice and integrity.",
    "Our firm combines deep industry knowledge with a collaborative approach to deliver innovative and practical \
     solutions for our clients. We handle a wide spectrum of legal matters, from complex corporate litigation to \
     sensitive family law cases, always striving for excellence and client satisfaction.",
];

/// Named glyphs. Rendering is left to the stylesheet (`icon--{slug}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    AcademicCap,
    Banknotes,
    BookOpen,
    Briefcase,
    BuildingLibrary,
    Close,
    CodeBracket,
    Envelope,
    Facebook,
    Gavel,
    GlobeAlt,
    MapPin,
    Menu,
    Phone,
    Scale,
    ShieldCheck,
    Users,
    WhatsApp,
}

impl Icon {
    pub fn slug(self) -> &'static str {
        match self {
            Self::AcademicCap => "academic-cap",
            Self::Banknotes => "banknotes",
            Self::BookOpen => "book-open",
            Self::Briefcase => "briefcase",
            Self::BuildingLibrary => "building-library",
            Self::Close => "close",
            Self::CodeBracket => "code-bracket",
            Self::Envelope => "envelope",
            Self::Facebook => "facebook",
            Self::Gavel => "gavel",
            Self::GlobeAlt => "globe-alt",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Phone => "phone",
            Self::Scale => "scale",
            Self::ShieldCheck => "shield-check",
            Self::Users => "users",
            Self::WhatsApp => "whatsapp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeArea {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// One "Why Choose Us" point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub icon: Icon,
    /// Built the site; rendered with a DEV badge.
    pub is_dev: bool,
    /// External profile; the card becomes a link opening in a new tab.
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub author: &'static str,
    pub excerpt: &'static str,
}

/// Firm contact details shown in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmContact {
    pub address: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub facebook: &'static str,
    pub whatsapp: &'static str,
}

impl FirmContact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Practice Areas", href: "#practice-areas" },
    NavLink { name: "Our Team", href: "#team" },
    NavLink { name: "Publications", href: "#publications" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const PRACTICE_AREAS: [PracticeArea; 9] = [
    PracticeArea {
        name: "Constitutional Law",
        description: "Handling complex constitutional issues, judicial reviews, and fundamental rights litigation \
                      before High Courts and the Supreme Court.",
        icon: Icon::BuildingLibrary,
    },
    PracticeArea {
        name: "Arbitration Law",
        description: "Expertise in domestic and international arbitration, mediation, and alternative dispute \
                      resolution for swift and effective outcomes.",
        icon: Icon::Scale,
    },
    PracticeArea {
        name: "Taxation Law",
        description: "Comprehensive advisory on direct and indirect taxation, representing clients in disputes \
                      from the Tribunal to the Supreme Court.",
        icon: Icon::Banknotes,
    },
    PracticeArea {
        name: "Labour & Employment Law",
        description: "Advising on all aspects of employment law, including contracts, disputes, terminations, and \
                      regulatory compliance for businesses.",
        icon: Icon::Users,
    },
    PracticeArea {
        name: "Banking Law",
        description: "Specializing in banking regulations, loan agreements, recovery suits, and financial dispute \
                      resolution for institutions and individuals.",
        icon: Icon::Briefcase,
    },
    PracticeArea {
        name: "Civil Law",
        description: "Resolving property disputes, contract breaches, and succession matters through meticulous \
                      litigation and strategic negotiation.",
        icon: Icon::ShieldCheck,
    },
    PracticeArea {
        name: "Criminal Law",
        description: "Defending clients in a wide range of criminal matters, including bail, trials, and appeals, \
                      with a focus on protecting rights.",
        icon: Icon::ShieldCheck,
    },
    PracticeArea {
        name: "Corporate Law",
        description: "Providing expert guidance on company formation, mergers, acquisitions, and corporate \
                      governance to ensure legal compliance.",
        icon: Icon::GlobeAlt,
    },
    PracticeArea {
        name: "Family Law",
        description: "Handling sensitive family matters including divorce, child custody, and guardianship with \
                      compassion and legal expertise.",
        icon: Icon::Users,
    },
];

pub const WHY_CHOOSE_US: [Highlight; 3] = [
    Highlight {
        title: "Decades of Experience",
        description: "Our team possesses a wealth of knowledge accumulated over years of successful practice in \
                      diverse legal fields.",
        icon: Icon::AcademicCap,
    },
    Highlight {
        title: "Client-Centric Approach",
        description: "We prioritize your needs, offering personalized strategies and maintaining open \
                      communication throughout the legal process.",
        icon: Icon::Users,
    },
    Highlight {
        title: "Proven Track Record",
        description: "Our history of landmark cases and favorable outcomes speaks for itself. We are committed to \
                      achieving the best results for our clients.",
        icon: Icon::ShieldCheck,
    },
];

pub const TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Shk-Hamza",
        title: "Website Developer & Designer",
        bio: "The creative force behind the design and development of the Zia Associates website, blending modern \
              aesthetics with a seamless user experience.",
        icon: Icon::CodeBracket,
        is_dev: true,
        link: Some("https://github.com/Shk-Hamza"),
    },
    TeamMember {
        name: "Mr. Zia Ur Rehman",
        title: "Legal Advisor",
        bio: "An Advocate of the High Court and an Ex-Member of the Faisalabad Bar Council, providing expert legal \
              counsel and strategic guidance.",
        icon: Icon::AcademicCap,
        is_dev: false,
        link: None,
    },
    TeamMember {
        name: "Ms. Raina Zia",
        title: "Managing Partner",
        bio: "As a Chartered Management Accountant and Ex-Deputy Director of the Irrigation Dept, Ms. Zia oversees \
              firm operations with financial and administrative acumen.",
        icon: Icon::Briefcase,
        is_dev: false,
        link: None,
    },
    TeamMember {
        name: "Muhammad Ahmad",
        title: "Admin Manager",
        bio: "Responsible for the smooth and efficient administrative operations of the firm, ensuring seamless \
              support for our legal team and clients.",
        icon: Icon::Users,
        is_dev: false,
        link: None,
    },
    TeamMember {
        name: "M. Abdullah",
        title: "Client Relations Officer",
        bio: "Dedicated to fostering strong client relationships, ensuring clear communication and exceptional \
              service at every stage of the legal process.",
        icon: Icon::Users,
        is_dev: false,
        link: None,
    },
];

pub const PUBLICATIONS: [Publication; 4] = [
    Publication {
        title: "The Evolving Landscape of Digital Evidence in Pakistani Courts",
        author: "Mr. Zia Ur Rehman",
        excerpt: "An analysis of the admissibility and challenges of electronic evidence under the Qanun-e-Shahadat \
                  Order, 1984, in the age of technology.",
    },
    Publication {
        title: "Corporate Governance Reforms: A Step Towards Transparency",
        author: "Ms. Raina Zia",
        excerpt: "This article explores the impact of recent SECP regulations on corporate governance practices for \
                  public and private limited companies in Pakistan.",
    },
    Publication {
        title: "Understanding Alternative Dispute Resolution (ADR) in Commercial Litigation",
        author: "Mr. Zia Ur Rehman",
        excerpt: "A practical guide to the benefits of arbitration and mediation as effective alternatives to \
                  traditional court proceedings for commercial disputes.",
    },
    Publication {
        title: "Navigating Cross-Border Contracts: Jurisdiction and Enforcement",
        author: "Ms. Raina Zia",
        excerpt: "Key legal considerations for Pakistani businesses entering into international contracts, focusing \
                  on jurisdiction clauses and enforcement of foreign judgments.",
    },
];

pub const FIRM_CONTACT: FirmContact = FirmContact {
    address: "Chamber #211, Sufi Barkat Law Chamber, District Courts, Faisalabad, Pakistan",
    phone_display: "0332-6604324",
    phone_href: "tel:+923326604324",
    email: "zia.associates@gmail.com",
    facebook: "https://m.facebook.com/61561952767311/",
    whatsapp: "https://wa.me/923326604324",
};
