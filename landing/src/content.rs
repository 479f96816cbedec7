// Static copy for the landing page sections
// Developed by the Gmash LLC web team (c)2026

pub const BRAND: &str = "Gmash LLC";

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#hero" },
    NavLink { name: "About Us", href: "#about" },
    NavLink { name: "Our Services", href: "#services" },
    NavLink { name: "The Process", href: "#process" },
    NavLink { name: "Testimonials", href: "#testimonials" },
    NavLink { name: "Contact", href: "#contact" },
];

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub highlight: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "foreclosure-prevention",
        title: "Foreclosure Prevention",
        description: "Expert legal resources and guidance to help you navigate mediation and loan modifications. We prioritize keeping you in your home whenever possible.",
        icon: "shield",
        highlight: false,
    },
    Service {
        id: "sell-and-stay",
        title: "Sell Your Home & Stay",
        description: "A unique alternative for homeowners facing equity loss. Sell your property to clear debt while remaining as a resident. Ask us for a consultation on how this works.",
        icon: "home",
        highlight: true,
    },
    Service {
        id: "fast-cash-buyout",
        title: "Direct Cash Buyout",
        description: "For those seeking a clean slate. We purchase homes as-is for competitive cash offers, covering closing costs and assisting with relocation logistics.",
        icon: "zap",
        highlight: false,
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Free Consultation",
        description: "We listen to your story, review your paperwork, and understand your goals without any pressure or judgment.",
    },
    ProcessStep {
        step: "02",
        title: "Strategic Evaluation",
        description: "Our specialists analyze your mortgage, home equity, and local market to present all viable options.",
    },
    ProcessStep {
        step: "03",
        title: "Choose Your Path",
        description: "Whether it's a loan modification, a 'Sell & Stay' lease-back, or a direct cash sale, you make the final call.",
    },
    ProcessStep {
        step: "04",
        title: "Fresh Start",
        description: "We handle all the paperwork and logistics, ensuring a smooth transition to your new financial reality.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Jenkins",
        location: "Denver, CO",
        content: "GMASH LLC was a godsend. I was weeks away from losing my childhood home. They didn't just buy it; they helped me negotiate with the bank and find a path forward I didn't think was possible.",
        avatar: "assets/consultation-3.jpg",
    },
    Testimonial {
        name: "Michael Ross",
        location: "Aurora, CO",
        content: "The 'Sell and Stay' program changed everything. I was able to clear my debts and stay in the neighborhood my kids grew up in. Professional, empathetic, and fast.",
        avatar: "assets/consultation-5.jpg",
    },
    Testimonial {
        name: "Elena Rodriguez",
        location: "Lakewood, CO",
        content: "I needed to move quickly for work but my house needed repairs I couldn't afford. GMASH bought it as-is and even provided a moving coordinator. Truly stress-free experience in a difficult time.",
        avatar: "assets/consultation-8.jpg",
    },
];

pub struct TrustStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TRUST_STATS: &[TrustStat] = &[
    TrustStat { label: "Homes Saved", value: "450+" },
    TrustStat { label: "Years of Service", value: "12" },
    TrustStat { label: "Success Rate", value: "94%" },
    TrustStat { label: "Community Rating", value: "4.9/5" },
];

pub const ABOUT_VALUES: &[&str] = &[
    "Zero fees or hidden commissions",
    "Free educational resources",
    "Legal & financial mediation",
    "Empathetic, non-judgmental approach",
];

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Call Us Directly", value: "(303) 555-0123" },
    ContactDetail { label: "Email Support", value: "help@gmash.com" },
    ContactDetail { label: "Local Office", value: "Denver, Colorado" },
];

pub const OFFICE_ADDRESS: &str = "1234 Emerald Way, Ste 200, Denver, CO 80202";
pub const SUPPORT_EMAIL: &str = "support@gmashllc.com";
pub const PHONE: &str = "(303) 555-0123";
