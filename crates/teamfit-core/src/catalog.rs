//! Built-in team descriptors and question bank.

use std::path::Path;

use anyhow::Result;

use crate::model::{Category, CategoryInfo, QuestionBank};
use crate::parser;

/// Source of the built-in question bank.
pub const BUILTIN_BANK: &str = include_str!("../banks/cybersec.toml");

/// Parse the built-in question bank.
pub fn builtin_bank() -> Result<QuestionBank> {
    parser::parse_bank_str(BUILTIN_BANK, Path::new("<builtin>"))
}

/// Descriptor for a category.
pub fn category_info(category: Category) -> &'static CategoryInfo {
    match category {
        Category::Blue => &BLUE,
        Category::Red => &RED,
        Category::Purple => &PURPLE,
        Category::Yellow => &YELLOW,
        Category::Green => &GREEN,
        Category::Orange => &ORANGE,
        Category::White => &WHITE,
        Category::Black => &BLACK,
    }
}

static BLUE: CategoryInfo = CategoryInfo {
    name: "Blue Team",
    tagline: "Defenders who protect systems.",
    summary: "Blue Teams focus on defending organizations. They monitor systems, look for unusual \
              activity, stop hackers, and fix weaknesses. A beginner might start as a SOC analyst \
              watching alerts and learning how to respond to incidents.",
    roles: &[
        "SOC Analyst (entry-level alert monitoring)",
        "Incident Responder",
        "Threat Hunter",
        "Detection Engineer",
    ],
    core: &[
        "Watch alerts for suspicious activity",
        "Investigate and respond when something looks wrong",
        "Patch and secure systems",
        "Learn attacker methods and build defenses",
    ],
    cadence: "steady monitoring with occasional incidents",
};

static RED: CategoryInfo = CategoryInfo {
    name: "Red Team",
    tagline: "Hackers who test defenses.",
    summary: "Red Teams try to break into systems the way attackers do. This teaches organizations \
              where they're weak. Beginners might learn how to scan networks, test websites, and \
              try common attacks in a safe environment.",
    roles: &[
        "Penetration Tester",
        "Red Team Operator",
        "Exploit Developer",
    ],
    core: &[
        "Look for weaknesses in websites and networks",
        "Try to get into systems like a hacker would",
        "Write clear reports on how to fix problems",
    ],
    cadence: "project bursts & campaigns",
};

static PURPLE: CategoryInfo = CategoryInfo {
    name: "Purple Team",
    tagline: "Helpers who connect Red and Blue.",
    summary: "Purple Teams bring defenders and attackers together. They run small tests, then show \
              defenders how to block attacks. Beginners can practice both defense and offense in \
              this space.",
    roles: &["Purple Team Facilitator", "Attack Simulation Specialist"],
    core: &[
        "Plan small attack/defense exercises",
        "Help defenders learn from attacks",
        "Test if defenses actually work",
    ],
    cadence: "time-boxed exercises and workshops",
};

static YELLOW: CategoryInfo = CategoryInfo {
    name: "Yellow Team",
    tagline: "Builders who write secure code.",
    summary: "Yellow Teams are the developers and engineers. They build apps and systems safely \
              from the start. Beginners may focus on learning secure coding basics and reviewing \
              code for mistakes.",
    roles: &["Software Developer", "Security-Aware Engineer"],
    core: &[
        "Write code with security in mind",
        "Fix insecure code",
        "Understand how to design safe features",
    ],
    cadence: "sprints and code reviews",
};

static GREEN: CategoryInfo = CategoryInfo {
    name: "Green Team",
    tagline: "Builders and defenders together.",
    summary: "Green Teams mix development with defense. They make sure apps are secure while \
              running, using automation and DevOps. Beginners might learn about CI/CD pipelines \
              and adding security checks.",
    roles: &["DevSecOps Engineer", "AppSec Engineer"],
    core: &[
        "Add security checks into app pipelines",
        "Make apps log important security events",
        "Work with developers and defenders at once",
    ],
    cadence: "pipelines, releases, and platform ops",
};

static ORANGE: CategoryInfo = CategoryInfo {
    name: "Orange Team",
    tagline: "Designers who make security easy.",
    summary: "Orange Teams connect Red Teams (hackers) with developers. They help builders \
              understand attacks and design safer systems. Beginners may help write guides or do \
              basic threat modeling.",
    roles: &["Product Security Engineer", "Developer Educator"],
    core: &[
        "Show developers how attackers think",
        "Create guides for secure building",
        "Review new designs for weak points",
    ],
    cadence: "design reviews and developer training",
};

static WHITE: CategoryInfo = CategoryInfo {
    name: "White Team",
    tagline: "Rule-makers and coordinators.",
    summary: "White Teams set the rules for exercises, policies, and compliance. They make sure \
              security programs run smoothly and fairly. Beginners may learn about policies, \
              documentation, and awareness training.",
    roles: &["Risk & Compliance Analyst", "Security Program Coordinator"],
    core: &[
        "Write and explain security policies",
        "Check if rules are being followed",
        "Run security training programs",
    ],
    cadence: "policy cycles, audits, and coordination",
};

static BLACK: CategoryInfo = CategoryInfo {
    name: "Black Team",
    tagline: "Infrastructure builders.",
    summary: "Black Teams set up the systems that Red, Blue, and Purple Teams use. They build labs, \
              networks, and tools for training and real-world defense. Beginners may work on \
              setting up safe test networks.",
    roles: &["Security Infrastructure Engineer", "Lab Builder"],
    core: &[
        "Build and maintain training labs",
        "Set up security tools and systems",
        "Make sure environments are reliable and safe",
    ],
    cadence: "platform reliability, lab builds, and enabling others",
};
